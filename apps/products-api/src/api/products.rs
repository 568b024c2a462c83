//! Products API routes

use axum::Router;
use domain_products::{handlers, Currency, InMemoryProductRepository, Product};
use uuid::Uuid;

/// Create the products router over a freshly seeded in-memory store
pub fn router() -> Router {
    let repository = InMemoryProductRepository::with_products(sample_products());
    handlers::router(repository)
}

/// Sample catalog the store starts with
fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: Uuid::now_v7(),
            name: "Laptop Pro X".to_string(),
            description: "Powerful laptop for professional workloads.".to_string(),
            price: 1200.0,
            currency: Currency::Eur,
        },
        Product {
            id: Uuid::now_v7(),
            name: "Gaming Maus XYZ".to_string(),
            description: "Ergonomic gaming mouse with customizable buttons.".to_string(),
            price: 65.99,
            currency: Currency::Eur,
        },
        Product {
            id: Uuid::now_v7(),
            name: "UHD Monitor 27 Zoll".to_string(),
            description: "4K monitor with high color fidelity.".to_string(),
            price: 350.0,
            currency: Currency::Usd,
        },
        Product {
            id: Uuid::now_v7(),
            name: "Smartphone Z10".to_string(),
            description: "Latest smartphone with an advanced camera.".to_string(),
            price: 899.99,
            currency: Currency::Gbp,
        },
    ]
}
