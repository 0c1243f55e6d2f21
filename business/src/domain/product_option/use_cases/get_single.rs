use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;

pub struct GetProductOptionParams {
    pub product_id: Uuid,
    pub id: Uuid,
}

#[async_trait]
pub trait GetProductOptionUseCase: Send + Sync {
    /// `Ok(None)` unless an option matches both the id and the product.
    async fn execute(
        &self,
        params: GetProductOptionParams,
    ) -> Result<Option<ProductOption>, ProductOptionError>;
}
