use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;

pub struct GetProductOptionsParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetProductOptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductOptionsParams,
    ) -> Result<Vec<ProductOption>, ProductOptionError>;
}
