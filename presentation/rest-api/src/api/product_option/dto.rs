use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product_option::model::ProductOption;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "PascalCase")]
pub struct ProductOptionDto {
    /// Option identifier. Omitted or empty on create means "assign one".
    #[oai(default)]
    pub id: Uuid,
    /// Owning product; must match the product in the path
    #[oai(default)]
    pub product_id: Uuid,
    #[oai(default)]
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "PascalCase")]
pub struct ProductOptionsDto {
    pub items: Vec<ProductOptionDto>,
}

impl From<ProductOption> for ProductOptionDto {
    fn from(option: ProductOption) -> Self {
        Self {
            id: option.id,
            product_id: option.product_id,
            name: option.name,
            description: option.description,
        }
    }
}

impl From<Vec<ProductOption>> for ProductOptionsDto {
    fn from(options: Vec<ProductOption>) -> Self {
        Self {
            items: options.into_iter().map(|o| o.into()).collect(),
        }
    }
}
