use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMessageCircle;
use dioxus_free_icons::Icon;
use shared_types::{AppError, ChatMessageResponse, SendChatMessage, CHAT_MESSAGE_MAX_CHARS};
use shared_ui::components::{
    Button, ButtonSize, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    Form, Label, Textarea,
};
use shared_ui::{use_toast, ToastOptions};
use validator::Validate;

use crate::auth::use_auth;
use crate::format_helpers::format_datetime_human;
use crate::in_flight;

/// Header button that opens the student's support thread with the
/// residence office.
#[component]
pub fn ChatLauncher() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            aria_label: "Chat with the residence office",
            title: "Chat",
            onclick: move |_| open.set(true),
            Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 18, height: 18 }
        }
        DialogRoot {
            open: open(),
            on_open_change: move |v: bool| open.set(v),
            DialogContent {
                DialogTitle { "Residence office" }
                DialogDescription { "Messages are answered during office hours." }
                if open() {
                    ChatThread {}
                }
            }
        }
    }
}

#[component]
fn ChatThread() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let my_id = auth.current_user.read().as_ref().map(|u| u.id);

    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let mut messages = use_resource(move || async move {
        match server::api::list_chat_messages().await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(error = %e, "could not load chat thread");
                Vec::new()
            }
        }
    });

    let handle_send = move |_: FormEvent| {
        let message = SendChatMessage { body: draft() };
        if message.is_blank() {
            toast.error("Message cannot be empty".to_string(), ToastOptions::new());
            return;
        }
        let message = message.trimmed();
        if let Err(e) = message.validate() {
            let error = AppError::from(e);
            let text = error.field_errors.get("body").cloned().unwrap_or(error.message);
            toast.error(text, ToastOptions::new());
            return;
        }
        let body = message.body;

        if !in_flight::claim(sending) {
            return;
        }
        spawn(async move {
            match server::api::send_chat_message(body).await {
                Ok(_) => {
                    draft.set(String::new());
                    messages.restart();
                }
                Err(e) => {
                    let raw = e.to_string();
                    tracing::error!(error = %raw, "could not send chat message");
                    toast.error(AppError::friendly_message(&raw), ToastOptions::new());
                }
            }
            sending.set(false);
        });
    };

    let thread: Vec<ChatMessageResponse> = messages.read().clone().unwrap_or_default();
    let remaining = CHAT_MESSAGE_MAX_CHARS as i64 - draft.read().chars().count() as i64;

    rsx! {
        div { class: "sl-chat-thread", role: "log",
            if thread.is_empty() {
                p { class: "sl-muted", "No messages yet. Say hello!" }
            }
            for message in thread {
                div {
                    key: "{message.id}",
                    class: "sl-chat-message",
                    "data-mine": if Some(message.sender_id) == my_id { "true" } else { "false" },
                    div { class: "sl-chat-meta",
                        span { class: "sl-chat-sender", "{message.sender_name}" }
                        span { class: "sl-chat-time", {format_datetime_human(&message.created_at)} }
                    }
                    p { class: "sl-chat-body", "{message.body}" }
                }
            }
        }
        Form { onsubmit: handle_send,
            Label { html_for: "chat-draft", "Message" }
            Textarea {
                id: "chat-draft",
                rows: 3,
                value: draft(),
                placeholder: "Type your message",
                on_input: move |e: FormEvent| draft.set(e.value()),
            }
            div { class: "sl-chat-footer",
                span {
                    class: "sl-chat-remaining",
                    "data-over": if remaining < 0 { "true" } else { "false" },
                    "{remaining} characters left"
                }
                Button { button_type: "submit", disabled: sending(),
                    if sending() { "Sending..." } else { "Send" }
                }
            }
        }
    }
}
