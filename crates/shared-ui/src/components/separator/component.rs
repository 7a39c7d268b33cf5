use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Thin rule between groups. Decorative unless told otherwise.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "sl-separator", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}
