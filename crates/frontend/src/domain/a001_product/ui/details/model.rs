use crate::shared::api_utils::get_json;
use crate::shared::fetch_error::FetchError;
use crate::shared::int_parse::LooseInt;
use contracts::domain::a001_product::Product;

/// API path for one product. A non-numeric reference is sent as `NaN`;
/// rejecting it is the backend's job.
pub fn product_api_path(product_ref: LooseInt) -> String {
    format!("/api/products/{}", product_ref)
}

/// Загрузить товар по идентификатору
pub async fn fetch_by_id(product_ref: LooseInt) -> Result<Product, FetchError> {
    get_json::<Product>(&product_api_path(product_ref)).await
}
