use serde::{Deserialize, Serialize};

/// A product as returned by the store API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Not present on create responses.
    #[serde(default)]
    pub rating: Rating,
}

/// Aggregate rating attached to a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_the_store_wire_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }"#;
        let product: Product = serde_json::from_str(json).expect("wire shape decodes");
        assert_eq!(product.id, 1);
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn rating_defaults_when_absent() {
        let json = r#"{"id": 21, "title": "Lamp", "price": 19.5}"#;
        let product: Product = serde_json::from_str(json).expect("partial shape decodes");
        assert_eq!(product.rating, Rating::default());
        assert!(product.description.is_empty());
    }
}
