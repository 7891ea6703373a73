use crate::domain::a001_product::product_page_path;
use crate::shared::list_utils::{contains_ci, filter_list, truncate_with_ellipsis, Searchable};
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::{Product, ProductId};
use leptos::prelude::*;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading products. Please try again later.";
pub const NO_RESULTS_MESSAGE: &str = "No products found matching your search.";

/// Description length shown on a catalog card before the ellipsis.
pub const CARD_DESCRIPTION_CHARS: usize = 80;

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.description, filter)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogLoad {
    Pending,
    Loaded(Vec<Product>),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogListState {
    // Снимок каталога, полученный при загрузке страницы
    pub load: CatalogLoad,

    // Фильтры
    pub search: String,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            load: CatalogLoad::Pending,
            search: String::new(),
        }
    }
}

impl CatalogListState {
    /// Products matching the current search, in fetch order.
    pub fn visible_products(&self) -> Vec<Product> {
        match &self.load {
            CatalogLoad::Loaded(products) => filter_list(products, &self.search),
            CatalogLoad::Pending | CatalogLoad::Failed => Vec::new(),
        }
    }

    pub fn view(&self) -> CatalogView {
        match &self.load {
            CatalogLoad::Pending => CatalogView::Pending,
            CatalogLoad::Failed => CatalogView::Message(LOAD_ERROR_MESSAGE),
            CatalogLoad::Loaded(_) => CatalogView::from_products(&self.visible_products()),
        }
    }
}

/// What the catalog container shows.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogView {
    Pending,
    Message(&'static str),
    Cards(Vec<ProductCard>),
}

impl CatalogView {
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return CatalogView::Message(NO_RESULTS_MESSAGE);
        }
        CatalogView::Cards(products.iter().map(ProductCard::from_product).collect())
    }
}

/// View-model of one catalog card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub summary: String,
    pub price: String,
    pub href: String,
}

impl ProductCard {
    fn from_product(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            image_url: p.image_url.clone(),
            summary: truncate_with_ellipsis(&p.description, CARD_DESCRIPTION_CHARS),
            price: format_price(p.price),
            href: product_page_path(p.id),
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
