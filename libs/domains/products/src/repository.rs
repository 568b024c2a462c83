use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product storage
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends; the router only
/// depends on this contract. Absence is an outcome (`None` / `false`),
/// not an error, and no validation happens here — that is the HTTP
/// layer's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, generating a fresh unique id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID; `None` when no product has that id
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List every product, in insertion order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// List products matching all provided filters
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Merge the given fields onto an existing product; `None` when the
    /// id is unknown
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by ID; `true` iff a product was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
