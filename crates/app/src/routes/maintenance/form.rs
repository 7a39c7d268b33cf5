use dioxus::prelude::*;
use shared_types::{AppError, CreateMaintenanceRequest, MaintenancePriority};
use shared_ui::components::{
    Button, ButtonVariant, Form, FormActions, FormSelect, Input, Textarea,
};
use shared_ui::{use_toast, ToastOptions};
use std::collections::HashMap;

use super::state::checked_draft;
use crate::in_flight;

/// Create form for a maintenance request. The owner is bound by the server
/// from the session, so the form never sends a user id.
///
/// On failure the form stays open with field errors and a toast.
#[component]
pub fn MaintenanceForm(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut priority = use_signal(|| MaintenancePriority::default().as_str().to_string());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let draft = CreateMaintenanceRequest {
            title: title(),
            description: description(),
            priority: priority(),
        };
        let body = match checked_draft(&draft) {
            Ok(body) => body,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(HashMap::new());

        if !in_flight::claim(submitting) {
            return;
        }
        spawn(async move {
            let result = server::api::create_maintenance_request(
                body.title,
                body.description,
                body.priority,
            )
            .await;
            submitting.set(false);

            match result {
                Ok(_) => {
                    title.set(String::new());
                    description.set(String::new());
                    priority.set(MaintenancePriority::default().as_str().to_string());
                    toast.success(
                        "Maintenance request submitted".to_string(),
                        ToastOptions::new(),
                    );
                    on_created.call(());
                }
                Err(e) => {
                    let raw = e.to_string();
                    tracing::error!(error = %raw, "could not create maintenance request");
                    field_errors.set(AppError::parse_field_errors(&raw));
                    toast.error(AppError::friendly_message(&raw), ToastOptions::new());
                }
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Form { onsubmit: handle_submit,
            Input {
                label: "Title",
                value: title(),
                placeholder: "e.g. Leaking tap in kitchen",
                error: error_for("title"),
                on_input: move |e: FormEvent| title.set(e.value()),
            }
            Textarea {
                label: "Description",
                value: description(),
                placeholder: "What is wrong, where, and since when?",
                error: error_for("description"),
                on_input: move |e: FormEvent| description.set(e.value()),
            }
            FormSelect {
                label: "Priority",
                value: priority(),
                error: error_for("priority"),
                onchange: move |e: Event<FormData>| priority.set(e.value()),
                option { value: "low", "Low" }
                option { value: "medium", "Medium" }
                option { value: "high", "High" }
            }
            FormActions {
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: submitting(),
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    button_type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit Request" }
                }
            }
        }
    }
}
