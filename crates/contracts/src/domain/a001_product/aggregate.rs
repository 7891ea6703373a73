use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Product
// ============================================================================

/// Product as served by `GET /api/products` and `GET /api/products/{id}`.
///
/// Read-only on the client. Fields the backend sends beyond these
/// (category, stock, timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    // Документ товара на бэкенде хранит ссылку под именем `image`
    #[serde(alias = "image", default)]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let json = r#"{
            "id": 3,
            "name": "Wireless Charger",
            "description": "Fast charging for all your devices.",
            "price": 39.99,
            "imageUrl": "https://via.placeholder.com/800x600?text=Wireless+Charger"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.name, "Wireless Charger");
        assert_eq!(product.price, 39.99);
        assert_eq!(
            product.image_url,
            "https://via.placeholder.com/800x600?text=Wireless+Charger"
        );
    }

    #[test]
    fn test_image_alias_and_extra_fields() {
        let json = r#"{
            "id": 7,
            "name": "Canon EOS R6",
            "price": 2499.99,
            "image": "https://example.com/canon-r6.jpg",
            "description": "Professional mirrorless camera",
            "category": "Electronics",
            "stock": 15
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url, "https://example.com/canon-r6.jpg");
        assert_eq!(product.description, "Professional mirrorless camera");
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let product = Product {
            id: ProductId::new(1),
            name: "Smart Watch".to_string(),
            description: String::new(),
            price: 149.99,
            image_url: "watch.png".to_string(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["imageUrl"], "watch.png");
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
