mod model;
mod view;
pub mod view_model;

use crate::shared::int_parse::LooseInt;
use leptos::prelude::*;
pub use view::ProductDetails;

/// Detail page controller: resolves the product from the current path.
#[component]
pub fn ProductDetailsPage(pathname: String) -> impl IntoView {
    let product_ref: LooseInt = view_model::product_ref_from_path(&pathname);
    log::debug!("Product details for {}", product_ref);

    view! {
        <ProductDetails product_ref=product_ref />
    }
}
