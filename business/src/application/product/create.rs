use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        if self.repository.find_by_id(params.id).await?.is_some() {
            self.logger
                .warn(&format!("Duplicate product id: {}", params.id));
            return Err(ProductError::DuplicateId);
        }

        let product = Product::new(NewProductProps {
            id: params.id,
            name: params.name,
            description: params.description,
            price: params.price,
            delivery_price: params.delivery_price,
        });

        // The primary key still guards against a create racing the check above
        self.repository
            .add(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::DuplicateId,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
