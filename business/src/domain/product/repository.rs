use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{NewProduct, Product};

/// Read side of the product store, plus the entry point for writes.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Opens a unit of work. Nothing it records is visible to others until
    /// [`ProductUnitOfWork::flush`] succeeds.
    async fn begin(&self) -> Result<Box<dyn ProductUnitOfWork>, RepositoryError>;
}

/// A single atomic batch of writes.
///
/// Dropping it without calling `flush` discards every pending change.
#[async_trait]
pub trait ProductUnitOfWork: Send {
    /// Looks a product up and locks it until the unit of work ends.
    async fn find(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Inserts a product and returns it with its assigned id.
    async fn persist(&mut self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&mut self, product: &Product) -> Result<(), RepositoryError>;
    async fn remove(&mut self, id: ProductId) -> Result<(), RepositoryError>;
    /// Commits. Calling it twice is a `Persistence` error.
    async fn flush(&mut self) -> Result<(), RepositoryError>;
}
