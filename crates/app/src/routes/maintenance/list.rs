use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::MaintenanceRequestResponse;
use shared_ui::components::{
    Badge, Button, ButtonVariant, Card, CardAction, CardContent, CardDescription, CardHeader,
    CardTitle, PageActions, PageDescription, PageHeader, PageTitle,
};

use super::form::MaintenanceForm;
use super::state::{
    self, priority_badge, priority_label, status_badge, FollowUp, FormState, ListState,
    EMPTY_TEXT, LOADING_TEXT,
};
use crate::auth::use_auth;
use crate::format_helpers::format_date_human;

/// `None` until a session is known.
type Fetched = Option<Result<Vec<MaintenanceRequestResponse>, ServerFnError>>;

fn step(mut form: Signal<FormState>, mut requests: Resource<Fetched>, event: state::FormEvent) {
    let (next, follow_up) = form.peek().on(event);
    form.set(next);
    if follow_up == FollowUp::Refetch {
        requests.restart();
    }
}

#[component]
pub fn MaintenancePage() -> Element {
    let auth = use_auth();
    let form = use_signal(FormState::default);

    let requests = use_resource(move || async move {
        if !auth.is_authenticated() {
            return None;
        }
        let result = server::api::list_my_maintenance_requests().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "could not load maintenance requests");
        }
        Some(result)
    });

    let owner = auth.current_user.read().as_ref().map(|u| u.id);
    let fetched = requests.read().clone().flatten();
    let list = match owner {
        Some(id) => ListState::from_fetch(id, fetched.as_ref()),
        None => ListState::Loading,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./maintenance.css") }

        div { class: "sl-page",
            PageHeader {
                PageTitle { "Maintenance Requests" }
                PageActions {
                    if !form().is_shown() {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| step(form, requests, state::FormEvent::Open),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "New Request"
                        }
                    }
                }
                PageDescription { "Report problems in your room or building and follow their progress." }
            }

            if form().is_shown() {
                Card { class: "sl-maintenance-form-card",
                    CardHeader {
                        CardTitle { "New Maintenance Request" }
                        CardDescription { "Describe the issue and how urgent it is." }
                    }
                    CardContent {
                        MaintenanceForm {
                            on_created: move |_| step(form, requests, state::FormEvent::Created),
                            on_cancel: move |_| step(form, requests, state::FormEvent::Cancel),
                        }
                    }
                }
            }

            match list {
                ListState::Loading => rsx! {
                    p { class: "sl-muted", "{LOADING_TEXT}" }
                },
                ListState::Empty => rsx! {
                    Card {
                        CardContent {
                            p { class: "sl-muted", "{EMPTY_TEXT}" }
                        }
                    }
                },
                ListState::Populated(rows) => rsx! {
                    div { class: "sl-maintenance-list",
                        for request in rows {
                            RequestCard { key: "{request.id}", request }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn RequestCard(request: MaintenanceRequestResponse) -> Element {
    let submitted = format_date_human(&request.created_at);

    rsx! {
        Card { class: "sl-maintenance-item",
            CardHeader {
                CardTitle { "{request.title}" }
                CardDescription { "{request.description}" }
                CardAction {
                    Badge { variant: status_badge(&request.status), "{request.status}" }
                    Badge { variant: priority_badge(&request.priority), {priority_label(&request.priority)} }
                }
            }
            CardContent {
                p { class: "sl-maintenance-date", "Submitted {submitted}" }
            }
        }
    }
}
