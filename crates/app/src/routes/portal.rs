use crate::auth::use_auth;
use crate::in_flight;
use crate::routes::{Route, BRAND_NAME};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::{AppError, AuthUser, FeatureFlags};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form, Input,
};
use std::collections::HashMap;

pub const WRONG_PORTAL: &str = "This portal is for student accounts.";

/// Student sign-in, the public entry of the portal.
#[component]
pub fn Portal() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let session =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    // Students who already have a session skip the form.
    let already_student = matches!(
        &*session.read(),
        Some(Ok(Some(user))) if user.is_student()
    ) || auth.current_user.read().as_ref().is_some_and(AuthUser::is_student);
    if already_student {
        navigator().push(Route::StudentDashboard {});
    }

    let handle_login = move |_: FormEvent| {
        if !in_flight::claim(loading) {
            return;
        }
        error_msg.set(None);
        field_errors.set(HashMap::new());

        spawn(async move {
            match server::api::login(email(), password()).await {
                Ok(user) if user.is_student() => {
                    auth.set_user(user);
                    navigator().push(Route::StudentDashboard {});
                }
                Ok(user) => {
                    tracing::info!(user_id = user.id, role = %user.role, "non-student turned away from student portal");
                    if let Err(e) = server::api::logout().await {
                        tracing::warn!(error = %e, "could not drop non-student session");
                    }
                    error_msg.set(Some(WRONG_PORTAL.to_string()));
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

    rsx! {
        document::Title { "Sign in | {BRAND_NAME}" }
        document::Link { rel: "stylesheet", href: asset!("./portal.css") }

        div { class: "sl-auth-page",
            div { class: "sl-auth-brand",
                Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                span { "{BRAND_NAME}" }
            }
            Card { class: "sl-auth-card",
                CardHeader {
                    CardTitle { "Student Portal" }
                    CardDescription { "Sign in with the email you registered with your residence." }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "sl-auth-error", role: "alert", "{err}" }
                    }
                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@university.edu",
                            value: email(),
                            error: field_errors().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            value: password(),
                            error: field_errors().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "sl-auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
                if flags.open_registration {
                    CardFooter {
                        span { class: "sl-muted", "New resident? " }
                        Link { to: Route::Register {}, "Create an account" }
                    }
                }
            }
        }
    }
}
