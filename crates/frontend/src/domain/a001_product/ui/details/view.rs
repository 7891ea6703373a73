use super::view_model::{DetailState, ProductDetailsViewModel, DEFAULT_QUANTITY, PRODUCT_FEATURES};
use crate::shared::int_parse::LooseInt;
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::Product;
use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(product_ref: LooseInt) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load(product_ref);

    view! {
        {move || match vm.state.get() {
            DetailState::Pending => view! { <></> }.into_any(),
            DetailState::Message(text) => view! { <p>{text}</p> }.into_any(),
            DetailState::Loaded(product) => view! { <ProductView product=product vm=vm /> }.into_any(),
        }}
    }
}

#[component]
fn ProductView(product: Product, vm: ProductDetailsViewModel) -> impl IntoView {
    let Product {
        name,
        description,
        price,
        image_url,
        ..
    } = product;
    let alt = name.clone();
    let quantity_ref = NodeRef::<Input>::new();

    let on_add = move |_| {
        // Значение читаем в момент клика, как его видит пользователь
        let raw = quantity_ref.get().map(|el| el.value()).unwrap_or_default();
        vm.add_to_cart(&raw);
    };

    view! {
        <div>
            <img src=image_url alt=alt class="product-details-img" />
        </div>
        <div class="product-details-info">
            <h1>{name}</h1>
            <div class="product-details-price">{format_price(price)}</div>
            <p class="product-details-desc">{description}</p>

            <div class="add-to-cart">
                <input
                    node_ref=quantity_ref
                    type="number"
                    class="quantity"
                    value=DEFAULT_QUANTITY.to_string()
                    min="1"
                />
                <button class="btn btn-primary" on:click=on_add>"Add to Cart"</button>
            </div>

            <div style="margin-top: 2rem;">
                <h3>"Product Features"</h3>
                <ul style="margin-left: 1.5rem;">
                    {PRODUCT_FEATURES.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
