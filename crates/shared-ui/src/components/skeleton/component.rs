use dioxus::prelude::*;

/// Pulsing placeholder block sized by its caller.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "sl-skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Centered spinning ring with an optional caption, for whole-page waits.
#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sl-spinner-wrap", role: "status", "aria-live": "polite",
            div { class: "sl-spinner" }
            if !label.is_empty() {
                span { class: "sl-spinner-label", "{label}" }
            }
        }
    }
}
