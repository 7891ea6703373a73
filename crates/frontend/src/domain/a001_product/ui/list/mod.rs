mod model;
pub mod state;

use crate::shared::dom::{navigate_to, on_input_value};
use leptos::prelude::*;
use state::{create_state, CatalogLoad, CatalogView, ProductCard};
use web_sys::HtmlInputElement;

/// Catalog grid with live search.
///
/// `search_input` is the page shell's search box; without it the full
/// catalog is shown and never filtered.
#[component]
pub fn ProductCatalog(search_input: Option<HtmlInputElement>) -> impl IntoView {
    let state = create_state();

    if let Some(input) = search_input {
        on_input_value(input, move |term| state.update(|s| s.search = term));
    }

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_products().await {
            Ok(products) => {
                log::debug!("Loaded {} products", products.len());
                state.update(|s| s.load = CatalogLoad::Loaded(products));
            }
            Err(e) => {
                log::error!("Failed to fetch products: {}", e);
                state.update(|s| s.load = CatalogLoad::Failed);
            }
        }
    });

    view! {
        {move || match state.with(|s| s.view()) {
            CatalogView::Pending => view! { <></> }.into_any(),
            CatalogView::Message(text) => view! { <p>{text}</p> }.into_any(),
            CatalogView::Cards(cards) => cards
                .into_iter()
                .map(|card| view! { <ProductCardView card=card /> })
                .collect_view()
                .into_any(),
        }}
    }
}

#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    let ProductCard {
        name,
        image_url,
        summary,
        price,
        href,
        ..
    } = card;
    let alt = name.clone();

    view! {
        <div class="product-card" on:click=move |_| navigate_to(&href)>
            <img src=image_url alt=alt class="product-img" />
            <div class="product-info">
                <h3 class="product-title">{name}</h3>
                <p class="product-desc">{summary}</p>
                <div class="product-price">{price}</div>
            </div>
        </div>
    }
}
