//! Tests for catalog payload deserialization

use crate::app::services::product_catalog::client::{CatalogProduct, CatalogResponse};

#[test]
fn test_deserialize_catalog_payload() {
    let payload = r#"{
        "products": [
            {"id": 1, "title": "Essence Mascara", "category": "beauty",
             "brand": "Essence", "rating": 4.94, "price": 9.99},
            {"id": 2, "title": "Eyeshadow Palette", "category": "beauty",
             "rating": 3.28}
        ],
        "total": 2,
        "skip": 0,
        "limit": 100
    }"#;

    let response: CatalogResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(response.products.len(), 2);
    assert_eq!(response.products[0].id, 1);
    assert_eq!(response.products[0].brand.as_deref(), Some("Essence"));
    assert_eq!(response.products[1].brand, None);
    assert_eq!(response.products[1].category, "beauty");
}

#[test]
fn test_deserialize_single_product_ignores_extra_fields() {
    let payload = r#"{"id": 7, "title": "Lamp", "category": "furniture",
                      "brand": "Lumina", "rating": 4.1,
                      "stock": 12, "tags": ["home"]}"#;

    let product: CatalogProduct = serde_json::from_str(payload).unwrap();

    assert_eq!(product.id, 7);
    assert_eq!(product.rating, 4.1);
}

#[test]
fn test_deserialize_empty_catalog() {
    let response: CatalogResponse = serde_json::from_str(r#"{"products": []}"#).unwrap();
    assert!(response.products.is_empty());
}
