mod form;
mod list;
pub mod state;

use dioxus::prelude::*;

#[component]
pub fn Maintenance() -> Element {
    list::MaintenancePage()
}
