use crate::shared::api_utils::get_json;
use crate::shared::fetch_error::FetchError;
use contracts::domain::a001_product::Product;

/// Загрузить весь каталог товаров
pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
    get_json::<Vec<Product>>("/api/products").await
}
