use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::delete_by_product::{
    DeleteProductOptionsByProductParams, DeleteProductOptionsByProductUseCase,
};

pub struct DeleteProductOptionsByProductUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductOptionsByProductUseCase for DeleteProductOptionsByProductUseCaseImpl {
    async fn execute(
        &self,
        params: DeleteProductOptionsByProductParams,
    ) -> Result<u64, ProductOptionError> {
        self.logger.info(&format!(
            "Deleting all options of product: {}",
            params.product_id
        ));

        let removed = self
            .repository
            .remove_by_product_id(params.product_id)
            .await?;

        self.logger.info(&format!(
            "Removed {} options of product {}",
            removed, params.product_id
        ));
        Ok(removed)
    }
}
