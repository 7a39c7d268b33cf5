use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdWrench;
use dioxus_free_icons::Icon;
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageDescription, PageHeader, PageTitle, Skeleton,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Landing page of the portal with request and notification counts.
#[component]
pub fn StudentDashboard() -> Element {
    let auth = use_auth();
    let first_name = auth
        .current_user
        .read()
        .as_ref()
        .and_then(|u| u.display_name.split_whitespace().next().map(str::to_string))
        .unwrap_or_default();

    let counts = use_resource(move || async move {
        match server::api::get_student_dashboard().await {
            Ok(counts) => Some(counts),
            Err(e) => {
                tracing::error!(error = %e, "could not load dashboard counts");
                None
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "sl-page",
            PageHeader {
                PageTitle { "Welcome back, {first_name}" }
                PageDescription { "Here is what is happening with your residence." }
            }

            match &*counts.read() {
                Some(Some(c)) => rsx! {
                    div { class: "sl-stats-grid",
                        StatCard {
                            label: "Open requests",
                            value: c.open_maintenance,
                            variant: BadgeVariant::Secondary,
                        }
                        StatCard {
                            label: "Completed requests",
                            value: c.completed_maintenance,
                            variant: BadgeVariant::Default,
                        }
                        StatCard {
                            label: "Unread notifications",
                            value: c.unread_notifications,
                            variant: if c.unread_notifications > 0 { BadgeVariant::Destructive } else { BadgeVariant::Outline },
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "sl-muted", "Your summary is unavailable right now." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "sl-stats-grid",
                        for _ in 0..3 {
                            Card {
                                CardContent {
                                    Skeleton { style: "height: 3rem; width: 100%;" }
                                }
                            }
                        }
                    }
                },
            }

            Card { class: "sl-dashboard-cta",
                CardHeader {
                    CardTitle { "Something broken?" }
                    CardDescription { "File a maintenance request and track it until it is fixed." }
                }
                CardContent {
                    Link { to: Route::Maintenance {},
                        Button { variant: ButtonVariant::Outline,
                            Icon::<LdWrench> { icon: LdWrench, width: 16, height: 16 }
                            "Go to Maintenance"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: i64, variant: BadgeVariant) -> Element {
    rsx! {
        Card { class: "sl-stat-card",
            CardContent {
                div { class: "sl-stat-value", "{value}" }
                Badge { variant, "{label}" }
            }
        }
    }
}
