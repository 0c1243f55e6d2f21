use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .find_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        let updated_product = Product::from_repository(
            existing.id,
            params.name,
            params.description,
            params.price,
            params.delivery_price,
        );

        self.repository
            .replace(&updated_product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn replace(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn remove(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: Uuid, name: &str) -> Product {
        Product::from_repository(
            id,
            name.to_string(),
            Some("Old description".to_string()),
            BigDecimal::from(10),
            BigDecimal::from(2),
        )
    }

    #[tokio::test]
    async fn should_replace_every_field_when_product_exists() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(make_product(id, "Foo"))));
        mock_repo
            .expect_replace()
            .withf(move |p| {
                p.id == product_id
                    && p.name == "Bar"
                    && p.description.is_none()
                    && p.price == BigDecimal::from(20)
                    && p.delivery_price == BigDecimal::from(5)
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: product_id,
                name: "Bar".to_string(),
                description: None,
                price: BigDecimal::from(20),
                delivery_price: BigDecimal::from(5),
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Bar");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_replace().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                name: "Bar".to_string(),
                description: None,
                price: BigDecimal::from(20),
                delivery_price: BigDecimal::from(5),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_vanishes_before_replace() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(make_product(id, "Foo"))));
        mock_repo
            .expect_replace()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                name: "Bar".to_string(),
                description: None,
                price: BigDecimal::from(20),
                delivery_price: BigDecimal::from(5),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
