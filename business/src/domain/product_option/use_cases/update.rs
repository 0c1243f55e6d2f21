use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;

pub struct UpdateProductOptionParams {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateProductOptionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateProductOptionParams,
    ) -> Result<ProductOption, ProductOptionError>;
}
