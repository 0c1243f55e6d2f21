use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::ProductOption;

#[async_trait]
pub trait ProductOptionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductOption>, RepositoryError>;
    async fn get_by_product_id(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductOption>, RepositoryError>;
    async fn find_by_product_id_and_id(
        &self,
        product_id: Uuid,
        id: Uuid,
    ) -> Result<Option<ProductOption>, RepositoryError>;
    async fn add(&self, option: &ProductOption) -> Result<(), RepositoryError>;
    async fn replace(&self, option: &ProductOption) -> Result<(), RepositoryError>;
    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Removes every option of the product in one statement, returning how many went.
    async fn remove_by_product_id(&self, product_id: Uuid) -> Result<u64, RepositoryError>;
}
