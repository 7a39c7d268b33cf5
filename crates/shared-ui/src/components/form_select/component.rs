use dioxus::prelude::*;

/// Native `<select>` in the shared field layout.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sl-field",
            if !label.is_empty() {
                label { class: "sl-field-label", "{label}" }
            }
            select {
                class: "sl-select",
                value: value,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                p { class: "sl-field-error", "{message}" }
            }
        }
    }
}
