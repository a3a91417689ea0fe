//! Tests for product metadata lookups and enrichment

pub mod client_tests;

use crate::app::models::{Enrichment, Transaction};
use crate::app::services::product_catalog::client::CatalogProduct;

/// Valid transaction for the given product id
pub fn transaction_for_product(product_id: &str) -> Transaction {
    Transaction {
        transaction_id: "T001".to_string(),
        date: "2024-01-15".to_string(),
        product_id: product_id.to_string(),
        product_name: "Widget".to_string(),
        quantity: 1,
        unit_price: 10.0,
        customer_id: "C001".to_string(),
        region: "North".to_string(),
        enrichment: Enrichment::default(),
    }
}

/// Small catalog with ids 1, 2 and 42
pub fn sample_catalog() -> Vec<CatalogProduct> {
    vec![
        CatalogProduct {
            id: 1,
            title: "Essence Mascara".to_string(),
            category: "beauty".to_string(),
            brand: Some("Essence".to_string()),
            rating: 4.94,
        },
        CatalogProduct {
            id: 2,
            title: "Eyeshadow Palette".to_string(),
            category: "beauty".to_string(),
            brand: None,
            rating: 3.28,
        },
        CatalogProduct {
            id: 42,
            title: "Desk Lamp".to_string(),
            category: "furniture".to_string(),
            brand: Some("Lumina".to_string()),
            rating: 4.1,
        },
    ]
}
