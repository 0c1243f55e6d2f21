use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search_by_name::{
    SearchProductsByNameParams, SearchProductsByNameUseCase,
};

pub struct SearchProductsByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsByNameUseCase for SearchProductsByNameUseCaseImpl {
    async fn execute(
        &self,
        params: SearchProductsByNameParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Searching products by name: {}", params.name));
        let products = self.repository.search_by_name(&params.name).await?;
        self.logger
            .info(&format!("Found {} matching products", products.len()));
        Ok(products)
    }
}
