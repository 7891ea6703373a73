use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::list::ProductCatalog;
use crate::shared::dom;
use leptos::prelude::*;

/// Mount every controller whose anchor element is present in the page.
///
/// Mounted views live as long as the page; navigation tears them down.
pub fn mount_controllers() {
    if let Some(container) = dom::take_container(dom::PRODUCTS_CONTAINER_ID) {
        let search_input = dom::find_input(dom::SEARCH_INPUT_ID);
        if search_input.is_none() {
            log::warn!("#{} not found, catalog search disabled", dom::SEARCH_INPUT_ID);
        }
        log::debug!("Activating catalog controller");
        leptos::mount::mount_to(container, move || {
            view! { <ProductCatalog search_input=search_input /> }
        })
        .forget();
    }

    if let Some(container) = dom::take_container(dom::PRODUCT_DETAILS_ID) {
        let pathname = dom::current_pathname();
        log::debug!("Activating detail controller for {}", pathname);
        leptos::mount::mount_to(container, move || {
            view! { <ProductDetailsPage pathname=pathname /> }
        })
        .forget();
    }
}
