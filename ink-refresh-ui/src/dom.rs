//! Click binding for buttons that live in plain (server-rendered) HTML.

use crate::{error::RefreshError, handler::refresh, transport::FetchTransport};
use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

/// Look up an element in the current document.
pub fn find_element(id: &str) -> Result<Element, RefreshError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(RefreshError::NoWindow)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| RefreshError::ElementNotFound(id.to_string()))
}

/// Start a refresh on `element` and hand the request to the browser event loop.
///
/// The marker is applied before this returns.
pub fn spawn_refresh(element: Element) {
    let pending = refresh(element, FetchTransport);
    spawn_local(async move {
        match pending.await {
            Ok(status) => debug!("Refresh answered {}", status),
            Err(e) => warn!("Refresh failed: {}", e),
        }
    });
}

/// Refresh on every click of `element`.
pub fn bind_refresh(element: &Element) -> Result<(), RefreshError> {
    let target = element.clone();
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        spawn_refresh(target.clone());
    });
    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Listener stays registered for the life of the page.
    on_click.forget();
    Ok(())
}

/// [`bind_refresh`] for the element with the given id.
pub fn bind_refresh_by_id(id: &str) -> Result<(), RefreshError> {
    let element = find_element(id)?;
    bind_refresh(&element)
}
