use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::{unread_count, NotificationResponse};
use shared_ui::components::{
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel,
    DropdownMenuSeparator, DropdownMenuTrigger,
};

use crate::format_helpers::format_datetime_human;

/// Text on the unread dot; large counts are capped.
pub fn unread_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// Bell in the header. Opening it reloads the list; choosing an entry marks
/// it read.
#[component]
pub fn NotificationsMenu() -> Element {
    let mut items = use_resource(move || async move {
        match server::api::list_notifications().await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(error = %e, "could not load notifications");
                Vec::new()
            }
        }
    });

    let list: Vec<NotificationResponse> = items.read().clone().unwrap_or_default();
    let badge = unread_label(unread_count(&list));

    let mark_read = move |id: String| {
        spawn(async move {
            match server::api::mark_notification_read(id).await {
                Ok(()) => items.restart(),
                Err(e) => tracing::warn!(error = %e, "could not mark notification read"),
            }
        });
    };

    rsx! {
        DropdownMenu {
            on_open_change: move |open: bool| {
                if open {
                    items.restart();
                }
            },
            DropdownMenuTrigger {
                span { class: "sl-sr-only", "Notifications" }
                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                if let Some(text) = badge {
                    span { class: "sl-unread-dot", "{text}" }
                }
            }
            DropdownMenuContent {
                DropdownMenuLabel { "Notifications" }
                DropdownMenuSeparator {}
                if list.is_empty() {
                    div { class: "sl-dropdown-empty", "You're all caught up." }
                }
                for (index, note) in list.into_iter().enumerate() {
                    DropdownMenuItem::<String> {
                        key: "{note.id}",
                        value: note.id.clone(),
                        index,
                        on_select: move |id: String| mark_read(id),
                        div {
                            class: "sl-notification",
                            "data-read": if note.read { "true" } else { "false" },
                            span { class: "sl-notification-title", "{note.title}" }
                            span { class: "sl-notification-body", "{note.body}" }
                            span { class: "sl-notification-time", {format_datetime_human(&note.created_at)} }
                        }
                    }
                }
            }
        }
    }
}
