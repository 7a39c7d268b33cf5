use crate::auth::use_auth;
use crate::in_flight;
use crate::routes::{Route, BRAND_NAME};
use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form, Input,
};
use std::collections::HashMap;

/// Self sign-up for students, available while `open_registration` is on.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::StudentDashboard {});
    }

    let handle_register = move |_: FormEvent| {
        if !in_flight::claim(loading) {
            return;
        }
        error_msg.set(None);
        field_errors.set(HashMap::new());

        spawn(async move {
            match server::api::register(username(), email(), password(), display_name()).await {
                Ok(user) => {
                    auth.set_user(user);
                    navigator().push(Route::StudentDashboard {});
                }
                Err(e) => {
                    let raw = e.to_string();
                    let fields = AppError::parse_field_errors(&raw);
                    if fields.is_empty() {
                        error_msg.set(Some(AppError::friendly_message(&raw)));
                    } else {
                        field_errors.set(fields);
                    }
                }
            }
            loading.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Title { "Create account | {BRAND_NAME}" }
        document::Link { rel: "stylesheet", href: asset!("./portal.css") }

        div { class: "sl-auth-page",
            Card { class: "sl-auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Set up your student portal account." }
                }
                CardContent {
                    if !flags.open_registration {
                        div { class: "sl-auth-error", role: "alert",
                            "Registration is closed. Ask the residence office for an account."
                        }
                    } else {
                        if let Some(err) = error_msg() {
                            div { class: "sl-auth-error", role: "alert", "{err}" }
                        }
                        Form { onsubmit: handle_register,
                            Input {
                                label: "Full name",
                                value: display_name(),
                                error: error_for("display_name"),
                                on_input: move |e: FormEvent| display_name.set(e.value()),
                            }
                            Input {
                                label: "Username",
                                value: username(),
                                error: error_for("username"),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: email(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                placeholder: "At least 8 characters",
                                value: password(),
                                error: error_for("password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            Button {
                                button_type: "submit",
                                class: "sl-auth-submit",
                                disabled: loading(),
                                if loading() { "Creating account..." } else { "Create Account" }
                            }
                        }
                    }
                }
                CardFooter {
                    span { class: "sl-muted", "Already registered? " }
                    Link { to: Route::Portal {}, "Sign in" }
                }
            }
        }
    }
}
