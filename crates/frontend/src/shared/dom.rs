//! Access to the page shell: anchor elements, navigation and alerts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

/// Catalog grid container; its presence activates the catalog controller.
pub const PRODUCTS_CONTAINER_ID: &str = "products-container";
/// Search box that lives in the catalog page shell.
pub const SEARCH_INPUT_ID: &str = "search-products";
/// Detail container; its presence activates the detail controller.
pub const PRODUCT_DETAILS_ID: &str = "product-details";

/// Find a container by id and clear whatever the page shell put inside.
pub fn take_container(id: &str) -> Option<HtmlElement> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let container = element.dyn_into::<HtmlElement>().ok()?;
    container.set_inner_html("");
    Some(container)
}

pub fn find_input(id: &str) -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Full page navigation (not a client-side route change).
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Navigation to {} failed: {:?}", path, e);
    }
}

/// Blocking browser alert.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Alert failed: {:?}", e);
        }
    }
}

/// Call `on_change` with the input's current value on every `input` event.
///
/// The listener stays attached for the life of the page.
pub fn on_input_value(input: HtmlInputElement, on_change: impl Fn(String) + 'static) {
    let target = input.clone();
    let listener = Closure::wrap(Box::new(move |_: Event| {
        on_change(target.value());
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) =
        input.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
    {
        log::error!("Failed to attach search listener: {:?}", e);
    }
    listener.forget();
}
