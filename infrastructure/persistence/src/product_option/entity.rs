use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product_option::model::ProductOption;

#[derive(Debug, FromRow)]
pub struct ProductOptionEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl ProductOptionEntity {
    pub fn into_domain(self) -> ProductOption {
        ProductOption::from_repository(self.id, self.product_id, self.name, self.description)
    }

    pub fn from_domain(option: &ProductOption) -> Self {
        Self {
            id: option.id,
            product_id: option.product_id,
            name: option.name.clone(),
            description: option.description.clone(),
        }
    }
}
