use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

use business::domain::product::model::Product;

use crate::api::error::ErrorResponse;

/// Wire shape of a product, shared by requests and responses.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "PascalCase")]
pub struct ProductDto {
    /// Product identifier. Omitted or empty on create means "assign one".
    #[oai(default)]
    pub id: Uuid,
    /// Product name
    #[oai(default)]
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    #[oai(default)]
    pub price: f64,
    /// Delivery price
    #[oai(default)]
    pub delivery_price: f64,
}

/// List envelope for products.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "PascalCase")]
pub struct ProductsDto {
    pub items: Vec<ProductDto>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: decimal_to_json(&product.price),
            delivery_price: decimal_to_json(&product.delivery_price),
        }
    }
}

impl From<Vec<Product>> for ProductsDto {
    fn from(products: Vec<Product>) -> Self {
        Self {
            items: products.into_iter().map(|p| p.into()).collect(),
        }
    }
}

fn decimal_to_json(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Goes through the shortest decimal rendering so `10.1` stays `10.1`
/// instead of its binary expansion.
pub fn decimal_from_json(value: f64) -> Result<BigDecimal, Json<ErrorResponse>> {
    if !value.is_finite() {
        return Err(ErrorResponse::validation("product.invalid_price"));
    }
    BigDecimal::from_str(&value.to_string())
        .map_err(|_| ErrorResponse::validation("product.invalid_price"))
}
