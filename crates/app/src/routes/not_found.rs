use dioxus::prelude::*;
use shared_ui::components::{Button, ButtonVariant};

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "sl-not-found",
            div { class: "sl-not-found-code", "404" }
            h1 { "Page not found" }
            p {
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::StudentDashboard {},
                Button { variant: ButtonVariant::Outline, "Back to Dashboard" }
            }
        }
    }
}
