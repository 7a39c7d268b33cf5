//! Portal areas whose workflows are handled by the residence office.

use dioxus::prelude::*;
use shared_ui::components::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageDescription, PageHeader,
    PageTitle,
};

#[component]
fn InfoPage(title: &'static str, summary: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "sl-page",
            PageHeader {
                PageTitle { "{title}" }
                PageDescription { "{summary}" }
            }
            Card {
                CardHeader {
                    CardTitle { "How this works" }
                    CardDescription { "Handled by the residence office" }
                }
                CardContent {
                    p { "{body}" }
                }
            }
        }
    }
}

#[component]
pub fn Complaints() -> Element {
    rsx! {
        InfoPage {
            title: "Complaints",
            summary: "Raise concerns about noise, neighbours or shared spaces.",
            body: "Use the chat button in the header to reach the residence office. Staff log each complaint and keep you updated by notification.",
        }
    }
}

#[component]
pub fn GuestManagement() -> Element {
    rsx! {
        InfoPage {
            title: "Guest Management",
            summary: "Register day visitors before they arrive.",
            body: "Visitors sign in at reception with photo ID. Message the residence office through chat to pre-register a guest.",
        }
    }
}

#[component]
pub fn SleepoverRequests() -> Element {
    rsx! {
        InfoPage {
            title: "Sleepover Requests",
            summary: "Ask for permission to host an overnight guest.",
            body: "Overnight guests need approval at least 48 hours ahead. Send the date and your guest's name through chat and you will get a notification with the decision.",
        }
    }
}
