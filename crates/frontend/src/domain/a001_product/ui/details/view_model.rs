use super::model;
use crate::shared::dom::show_alert;
use crate::shared::fetch_error::FetchError;
use crate::shared::int_parse::LooseInt;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "Product not found.";
pub const STATUS_ERROR_MESSAGE: &str = "Error loading product details.";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading product details. Please try again later.";

pub const DEFAULT_QUANTITY: i64 = 1;

pub const PRODUCT_FEATURES: [&str; 4] = [
    "High-quality materials",
    "1-year warranty",
    "Free shipping on orders over $50",
    "30-day money back guarantee",
];

/// Product reference from the trailing segment of a `/products/{id}` path.
pub fn product_ref_from_path(pathname: &str) -> LooseInt {
    let last = pathname.rsplit('/').next().unwrap_or_default();
    LooseInt::parse(last)
}

/// Text of the add-to-cart confirmation for the raw quantity input value.
pub fn add_to_cart_message(raw_quantity: &str, product_name: &str) -> String {
    format!(
        "Added {} {}(s) to cart!",
        LooseInt::parse(raw_quantity),
        product_name
    )
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Pending,
    Message(&'static str),
    Loaded(Product),
}

impl DetailState {
    pub fn from_result(result: Result<Product, FetchError>) -> Self {
        match result {
            Ok(product) => DetailState::Loaded(product),
            Err(e) if e.is_not_found() => DetailState::Message(NOT_FOUND_MESSAGE),
            Err(e) if e.is_http_status() => DetailState::Message(STATUS_ERROR_MESSAGE),
            Err(_) => DetailState::Message(LOAD_ERROR_MESSAGE),
        }
    }
}

/// ViewModel for the product detail page
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub state: RwSignal<DetailState>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DetailState::Pending),
        }
    }

    /// Fetch the product once and move to its final state
    pub fn load(&self, product_ref: LooseInt) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_by_id(product_ref).await;
            match &result {
                Err(e) if e.is_http_status() => {
                    log::warn!("Product {} not loaded: {}", product_ref, e)
                }
                Err(e) => log::error!("Failed to fetch product details: {}", e),
                Ok(_) => {}
            }
            state.set(DetailState::from_result(result));
        });
    }

    /// Show the confirmation for the quantity currently in the input.
    /// Nothing is stored or sent.
    pub fn add_to_cart(&self, raw_quantity: &str) {
        let Some(name) = self.state.with_untracked(|s| match s {
            DetailState::Loaded(p) => Some(p.name.clone()),
            _ => None,
        }) else {
            return;
        };
        show_alert(&add_to_cart_message(raw_quantity, &name));
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;

    fn charger() -> Product {
        Product {
            id: ProductId::new(3),
            name: "Wireless Charger".to_string(),
            description: "Fast charging for all your devices.".to_string(),
            price: 39.9,
            image_url: "charger.png".to_string(),
        }
    }

    #[test]
    fn test_product_ref_from_path() {
        assert_eq!(product_ref_from_path("/products/3"), LooseInt::Value(3));
        assert_eq!(product_ref_from_path("/products/abc"), LooseInt::NaN);
        assert_eq!(product_ref_from_path("/products/"), LooseInt::NaN);
        assert_eq!(product_ref_from_path("/products/12x"), LooseInt::Value(12));
        assert_eq!(product_ref_from_path(""), LooseInt::NaN);
    }

    #[test]
    fn test_state_from_404() {
        let state = DetailState::from_result(Err(FetchError::Status(404)));
        assert_eq!(state, DetailState::Message("Product not found."));
    }

    #[test]
    fn test_state_from_other_failures() {
        assert_eq!(
            DetailState::from_result(Err(FetchError::Status(500))),
            DetailState::Message(STATUS_ERROR_MESSAGE)
        );
        assert_eq!(
            DetailState::from_result(Err(FetchError::Network("offline".into()))),
            DetailState::Message(LOAD_ERROR_MESSAGE)
        );
        assert_eq!(
            DetailState::from_result(Err(FetchError::Parse("eof".into()))),
            DetailState::Message(LOAD_ERROR_MESSAGE)
        );
        assert!(LOAD_ERROR_MESSAGE.starts_with(STATUS_ERROR_MESSAGE));
    }

    #[test]
    fn test_state_from_success() {
        assert_eq!(
            DetailState::from_result(Ok(charger())),
            DetailState::Loaded(charger())
        );
    }

    #[test]
    fn test_add_to_cart_message() {
        assert_eq!(
            add_to_cart_message("1", "Wireless Charger"),
            "Added 1 Wireless Charger(s) to cart!"
        );
        assert_eq!(
            add_to_cart_message("5", "Wireless Charger"),
            "Added 5 Wireless Charger(s) to cart!"
        );
        assert_eq!(
            add_to_cart_message("12", "Smart Watch"),
            "Added 12 Smart Watch(s) to cart!"
        );
        assert_eq!(
            add_to_cart_message("", "Smart Watch"),
            "Added NaN Smart Watch(s) to cart!"
        );
    }
}
