use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::delete::{
    DeleteProductOptionParams, DeleteProductOptionUseCase,
};

pub struct DeleteProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductOptionUseCase for DeleteProductOptionUseCaseImpl {
    async fn execute(&self, params: DeleteProductOptionParams) -> Result<(), ProductOptionError> {
        self.logger
            .info(&format!("Deleting product option: {}", params.id));

        if self.repository.find_by_id(params.id).await?.is_none() {
            return Err(ProductOptionError::NotFound);
        }

        self.repository
            .remove(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductOptionError::NotFound,
                other => ProductOptionError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product option deleted: {}", params.id));
        Ok(())
    }
}
