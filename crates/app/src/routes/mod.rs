pub mod dashboard;
pub mod maintenance;
pub mod not_found;
pub mod placeholders;
pub mod portal;
pub mod register;
pub mod settings;

use crate::auth::{use_auth, GuardState};
use crate::components::chat::ChatLauncher;
use crate::components::notifications::NotificationsMenu;
use crate::nav::{self, NavEntry, NavIcon, NavSection};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdLayoutDashboard, LdLogOut, LdMessageSquare, LdSettings, LdShield, LdUsers,
    LdWrench,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonSize, ButtonVariant, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, Spinner,
};

use dashboard::StudentDashboard;
use maintenance::Maintenance;
use not_found::NotFound;
use placeholders::{Complaints, GuestManagement, SleepoverRequests};
use portal::Portal;
use register::Register;
use settings::Settings;

pub const BRAND_NAME: &str = "My Domain Student Living";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::StudentDashboard {})]
    #[route("/portals/student")]
    Portal {},
    #[route("/portals/student/register")]
    Register {},
    #[layout(AuthGuard)]
        #[layout(StudentLayout)]
            #[route("/student")]
            StudentDashboard {},
            #[route("/student/maintenance")]
            Maintenance {},
            #[route("/student/complaints")]
            Complaints {},
            #[route("/student/guests")]
            GuestManagement {},
            #[route("/student/sleepovers")]
            SleepoverRequests {},
            #[route("/student/settings")]
            Settings {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Admits signed-in students and sends everyone else to the portal entry.
///
/// The session lookup runs through `use_server_future`, so during SSR the
/// guard suspends and the root `SuspenseBoundary` shows the spinner until the
/// lookup resolves.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let lookup =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    let lookup = lookup.read().as_ref().cloned();
    if let Some(Err(e)) = &lookup {
        tracing::warn!(error = %e, "session lookup failed");
    }
    let state = GuardState::resolve(lookup.as_ref());

    if state.redirects() {
        if auth.current_user.peek().is_some() {
            auth.clear();
        }
        navigator().push(Route::Portal {});
    }

    match state {
        GuardState::Resolving | GuardState::Anonymous => rsx! {
            Spinner { label: "Loading..." }
        },
        GuardState::WrongRole => rsx! {},
        GuardState::Student(user) => {
            if auth.current_user.peek().as_ref() != Some(&user) {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
    }
}

/// Header and side navigation around every student page.
#[component]
fn StudentLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let user = auth.current_user.read().clone();
    let signed_in_as = user.as_ref().map(|u| u.display_name.clone());

    let title = nav::label_for(&route).unwrap_or(BRAND_NAME);

    let handle_logout = move |_: MouseEvent| {
        spawn(async move {
            match server::api::logout().await {
                Ok(()) => {
                    auth.clear();
                    navigator().push(Route::Portal {});
                }
                Err(e) => tracing::error!(error = %e, "logout failed"),
            }
        });
    };

    rsx! {
        document::Title { "{title} | {BRAND_NAME}" }
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            div { class: "sl-shell",
                header { class: "sl-header",
                    SidebarTrigger {}
                    Link { to: Route::StudentDashboard {}, class: "sl-brand",
                        Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                        span { class: "sl-brand-name", "{BRAND_NAME}" }
                    }
                    div { class: "sl-header-spacer" }
                    div { class: "sl-header-actions",
                        NotificationsMenu {}
                        ChatLauncher {}
                        if let Some(user) = user {
                            Avatar {
                                if let Some(url) = user.avatar_url.clone() {
                                    AvatarImage { src: url }
                                }
                                AvatarFallback { {user.initial()} }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            aria_label: "Log out",
                            title: "Log out",
                            onclick: handle_logout,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        }
                    }
                }

                div { class: "sl-shell-body",
                    Sidebar {
                        SidebarHeader {
                            span { class: "sl-sidebar-title", "Student portal" }
                        }
                        SidebarContent {
                            NavGroup { section: NavSection::Main, current: route.clone() }
                            SidebarSeparator {}
                            NavGroup { section: NavSection::Account, current: route.clone() }
                        }
                        if let Some(name) = signed_in_as {
                            SidebarFooter {
                                span { class: "sl-muted", "Signed in as {name}" }
                            }
                        }
                    }
                    SidebarInset {
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

/// Draws one section of the navigation table.
#[component]
fn NavGroup(section: NavSection, current: Route) -> Element {
    let label = match section {
        NavSection::Main => "Student Living",
        NavSection::Account => "Account",
    };

    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "{label}" }
            SidebarMenu {
                for entry in nav::entries(section) {
                    NavLink { key: "{entry.label}", entry: entry.clone(), active: entry.route == current }
                }
            }
        }
    }
}

#[component]
fn NavLink(entry: NavEntry, active: bool) -> Element {
    rsx! {
        SidebarMenuItem { active,
            Link { to: entry.route.clone(),
                NavGlyph { icon: entry.icon }
                span { "{entry.label}" }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Wrench => rsx! { Icon::<LdWrench> { icon: LdWrench, width: 18, height: 18 } },
        NavIcon::Complaint => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}
