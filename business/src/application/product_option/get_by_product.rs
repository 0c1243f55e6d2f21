use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::get_by_product::{
    GetProductOptionsParams, GetProductOptionsUseCase,
};

pub struct GetProductOptionsUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductOptionsUseCase for GetProductOptionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductOptionsParams,
    ) -> Result<Vec<ProductOption>, ProductOptionError> {
        self.logger.info(&format!(
            "Fetching options of product: {}",
            params.product_id
        ));
        let options = self
            .repository
            .get_by_product_id(params.product_id)
            .await?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductOptionRepo {}

        #[async_trait]
        impl ProductOptionRepository for ProductOptionRepo {
            async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductOption>, RepositoryError>;
            async fn get_by_product_id(&self, product_id: Uuid) -> Result<Vec<ProductOption>, RepositoryError>;
            async fn find_by_product_id_and_id(&self, product_id: Uuid, id: Uuid) -> Result<Option<ProductOption>, RepositoryError>;
            async fn add(&self, option: &ProductOption) -> Result<(), RepositoryError>;
            async fn replace(&self, option: &ProductOption) -> Result<(), RepositoryError>;
            async fn remove(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn remove_by_product_id(&self, product_id: Uuid) -> Result<u64, RepositoryError>;
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

    #[tokio::test]
    async fn should_return_options_of_the_product() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductOptionRepo::new();
        mock_repo
            .expect_get_by_product_id()
            .withf(move |id| *id == product_id)
            .returning(move |id| {
                Ok(vec![
                    ProductOption::from_repository(Uuid::new_v4(), id, "White".to_string(), None),
                    ProductOption::from_repository(Uuid::new_v4(), id, "Black".to_string(), None),
                ])
            });

        let use_case = GetProductOptionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let options = use_case
            .execute(GetProductOptionsParams { product_id })
            .await
            .unwrap();

        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.product_id == product_id));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_product_has_no_options() {
        let mut mock_repo = MockProductOptionRepo::new();
        mock_repo.expect_get_by_product_id().returning(|_| Ok(vec![]));

        let use_case = GetProductOptionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let options = use_case
            .execute(GetProductOptionsParams {
                product_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_database_failure() {
        let mut mock_repo = MockProductOptionRepo::new();
        mock_repo
            .expect_get_by_product_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductOptionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductOptionsParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductOptionError::Repository(_)));
    }
}
