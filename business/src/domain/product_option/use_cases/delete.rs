use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;

pub struct DeleteProductOptionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductOptionUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductOptionParams) -> Result<(), ProductOptionError>;
}
