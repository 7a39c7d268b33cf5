use dioxus::prelude::*;
use shared_ui::components::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, PageHeader, PageTitle, Separator,
};

use crate::auth::use_auth;

/// Read-only profile of the signed-in student.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "sl-page",
            PageHeader {
                PageTitle { "Settings" }
            }
            Card {
                CardHeader {
                    CardTitle { "Profile" }
                    CardDescription { "Contact the residence office to change these details." }
                }
                CardContent {
                    div { class: "sl-profile-head",
                        Avatar {
                            if let Some(url) = user.avatar_url.clone() {
                                AvatarImage { src: url }
                            }
                            AvatarFallback { {user.initial()} }
                        }
                        div {
                            div { class: "sl-profile-name", "{user.display_name}" }
                            Badge { variant: BadgeVariant::Secondary, "{user.role}" }
                        }
                    }
                    Separator {}
                    dl { class: "sl-profile-list",
                        dt { "Username" }
                        dd { "{user.username}" }
                        dt { "Email" }
                        dd { "{user.email}" }
                    }
                }
            }
        }
    }
}
