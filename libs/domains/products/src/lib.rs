//! Products Domain
//!
//! This module provides a complete domain implementation for managing
//! products with an in-memory store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, input validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! Validation is a transport concern and lives in the handlers; the
//! repository is a pure data-store abstraction reusable by non-HTTP
//! callers and swappable for a persistent backend.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository};
//!
//! let repository = InMemoryProductRepository::new();
//! let router = handlers::router(repository);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{CreateProduct, Currency, Product, ProductFilter, UpdateProduct};
pub use repository::ProductRepository;
