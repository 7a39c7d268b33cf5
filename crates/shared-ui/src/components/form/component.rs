use dioxus::prelude::*;

/// Form wrapper that stops the browser's own submission, so `onsubmit`
/// can call a server function instead.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sl-form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Row of buttons at the end of a form.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "sl-form-actions", {children} }
    }
}
