use dioxus::prelude::*;

/// Title row at the top of a page, with an optional description and
/// actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sl-page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        div { class: "sl-page-heading",
            h1 { class: "sl-page-title", {children} }
        }
    }
}

#[component]
pub fn PageDescription(children: Element) -> Element {
    rsx! {
        p { class: "sl-page-description", {children} }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "sl-page-actions", {children} }
    }
}
