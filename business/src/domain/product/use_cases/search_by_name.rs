use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SearchProductsByNameParams {
    pub name: String,
}

#[async_trait]
pub trait SearchProductsByNameUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsByNameParams)
    -> Result<Vec<Product>, ProductError>;
}
