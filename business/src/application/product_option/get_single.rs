use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::get_single::{
    GetProductOptionParams, GetProductOptionUseCase,
};

pub struct GetProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductOptionUseCase for GetProductOptionUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductOptionParams,
    ) -> Result<Option<ProductOption>, ProductOptionError> {
        self.logger.info(&format!(
            "Fetching option {} of product {}",
            params.id, params.product_id
        ));
        let option = self
            .repository
            .find_by_product_id_and_id(params.product_id, params.id)
            .await?;
        Ok(option)
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
    async fn should_return_option_matching_product_and_id() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let mut mock_repo = MockProductOptionRepo::new();
        mock_repo
            .expect_find_by_product_id_and_id()
            .withf(move |pid, id| *pid == product_id && *id == option_id)
            .returning(|pid, id| {
                Ok(Some(ProductOption::from_repository(
                    id,
                    pid,
                    "ProductOption3".to_string(),
                    None,
                )))
            });

        let use_case = GetProductOptionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let option = use_case
            .execute(GetProductOptionParams {
                product_id,
                id: option_id,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(option.id, option_id);
        assert_eq!(option.product_id, product_id);
    }

    #[tokio::test]
    async fn should_return_none_when_combination_missing() {
        let mut mock_repo = MockProductOptionRepo::new();
        mock_repo
            .expect_find_by_product_id_and_id()
            .returning(|_, _| Ok(None));

        let use_case = GetProductOptionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductOptionParams {
                product_id: Uuid::new_v4(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_propagate_database_failure() {
        let mut mock_repo = MockProductOptionRepo::new();
        mock_repo
            .expect_find_by_product_id_and_id()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = GetProductOptionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductOptionParams {
                product_id: Uuid::new_v4(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductOptionError::Repository(_)));
    }
}
