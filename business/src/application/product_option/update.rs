use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::update::{
    UpdateProductOptionParams, UpdateProductOptionUseCase,
};

pub struct UpdateProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductOptionUseCase for UpdateProductOptionUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateProductOptionParams,
    ) -> Result<ProductOption, ProductOptionError> {
        self.logger
            .info(&format!("Updating product option: {}", params.id));

        if self.repository.find_by_id(params.id).await?.is_none() {
            return Err(ProductOptionError::NotFound);
        }

        // Full replacement, product_id included
        let updated = ProductOption::from_repository(
            params.id,
            params.product_id,
            params.name,
            params.description,
        );

        self.repository
            .replace(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductOptionError::NotFound,
                other => ProductOptionError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product option updated: {}", updated.id));
        Ok(updated)
    }
}
