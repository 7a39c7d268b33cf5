use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;

/// Whether the sidebar is expanded. On narrow screens a closed sidebar is
/// hidden; on wide screens it is always shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sl-sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Navigation column. Tapping the backdrop closes it on narrow screens.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sl-sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sl-sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sl-sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sl-sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sl-sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarGroup(children: Element) -> Element {
    rsx! {
        div { class: "sl-sidebar-group", {children} }
    }
}

#[component]
pub fn SidebarGroupLabel(children: Element) -> Element {
    rsx! {
        div { class: "sl-sidebar-group-label", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sl-sidebar-menu", {children} }
    }
}

/// One navigation row. Holds a link; `active` highlights the current page.
/// Choosing an entry closes the overlay on narrow screens.
#[component]
pub fn SidebarMenuItem(#[props(default = false)] active: bool, children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li {
            class: "sl-sidebar-menu-item",
            "data-active": if active { "true" } else { "false" },
            onclick: move |_| state.set(SidebarState { open: false }),
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sl-sidebar-separator" }
    }
}

/// Button that toggles the sidebar, shown in the header on narrow screens.
#[component]
pub fn SidebarTrigger() -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sl-sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
        }
    }
}

/// Page area beside the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sl-sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}
