use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    /// Case-insensitive substring match on the product name.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Overwrites every column of the row identified by `product.id`.
    async fn replace(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError>;
}
