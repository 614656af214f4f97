//! Button that redraws the stats card.

use crate::dom::{find_element, spawn_refresh};
use dioxus::prelude::*;
use log::warn;

#[derive(Props, Clone, PartialEq)]
pub struct RefreshButtonProps {
    /// DOM id; the click handler finds its own element through it.
    pub id: String,
    pub label: String,
}

/// Posts a dark-mode refresh and shows `is-loading` until it settles.
#[component]
pub fn RefreshButton(props: RefreshButtonProps) -> Element {
    let id = props.id.clone();

    let on_click = move |_evt: Event<MouseData>| match find_element(&id) {
        Ok(element) => spawn_refresh(element),
        Err(e) => warn!("Refresh button not mounted: {}", e),
    };

    rsx! {
        button {
            id: "{props.id}",
            class: "button is-primary",
            r#type: "button",
            onclick: on_click,
            "{props.label}"
        }
    }
}
