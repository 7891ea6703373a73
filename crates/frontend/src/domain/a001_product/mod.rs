pub mod ui;

/// Path of the server-rendered detail page for a product.
pub fn product_page_path(id: contracts::domain::a001_product::ProductId) -> String {
    format!("/products/{}", id)
}
