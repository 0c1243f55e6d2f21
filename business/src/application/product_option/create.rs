use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::{NewProductOptionProps, ProductOption};
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::create::{
    CreateProductOptionParams, CreateProductOptionUseCase,
};

pub struct CreateProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductOptionUseCase for CreateProductOptionUseCaseImpl {
    async fn execute(
        &self,
        params: CreateProductOptionParams,
    ) -> Result<ProductOption, ProductOptionError> {
        self.logger.info(&format!(
            "Creating option {} for product {}",
            params.name, params.product_id
        ));

        if self.repository.find_by_id(params.id).await?.is_some() {
            self.logger
                .warn(&format!("Duplicate product option id: {}", params.id));
            return Err(ProductOptionError::DuplicateId);
        }

        let option = ProductOption::new(NewProductOptionProps {
            id: params.id,
            product_id: params.product_id,
            name: params.name,
            description: params.description,
        });

        self.repository
            .add(&option)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductOptionError::DuplicateId,
                other => ProductOptionError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product option created with id: {}", option.id));
        Ok(option)
    }
}
