use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;

pub struct DeleteProductOptionsByProductParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait DeleteProductOptionsByProductUseCase: Send + Sync {
    /// Returns how many options were removed; zero is not an error.
    async fn execute(
        &self,
        params: DeleteProductOptionsByProductParams,
    ) -> Result<u64, ProductOptionError>;
}
