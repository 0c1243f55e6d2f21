use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search_by_name::{
    SearchProductsByNameParams, SearchProductsByNameUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product_option::use_cases::delete_by_product::{
    DeleteProductOptionsByProductParams, DeleteProductOptionsByProductUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::product::dto::{ProductDto, ProductsDto, decimal_from_json};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    search_by_name_use_case: Arc<dyn SearchProductsByNameUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    delete_options_use_case: Arc<dyn DeleteProductOptionsByProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        search_by_name_use_case: Arc<dyn SearchProductsByNameUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        delete_options_use_case: Arc<dyn DeleteProductOptionsByProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            search_by_name_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            delete_options_use_case,
        }
    }
}

/// Product management API
///
/// Create, update and delete answer 204 with no body. Any domain failure on
/// those paths (unknown id, duplicate id) is reported as 400.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// An empty or missing `Id` gets a fresh identifier.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductDto>) -> CreateProductResponse {
        let body = body.0;
        let price = match decimal_from_json(body.price) {
            Ok(price) => price,
            Err(json) => return CreateProductResponse::BadRequest(json),
        };
        let delivery_price = match decimal_from_json(body.delivery_price) {
            Ok(price) => price,
            Err(json) => return CreateProductResponse::BadRequest(json),
        };

        let params = CreateProductParams {
            id: body.id,
            name: body.name,
            description: body.description,
            price,
            delivery_price,
        };

        match self.create_use_case.execute(params).await {
            Ok(_) => CreateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    500 => CreateProductResponse::InternalError(json),
                    _ => CreateProductResponse::BadRequest(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns every product, or only those whose name contains `name`
    /// (case-insensitive) when the query parameter is present.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self, name: Query<Option<String>>) -> GetProductsResponse {
        let result = match name.0 {
            Some(name) => {
                self.search_by_name_use_case
                    .execute(SearchProductsByNameParams { name })
                    .await
            }
            None => self.get_all_use_case.execute().await,
        };

        match result {
            Ok(products) => GetProductsResponse::Ok(Json(products.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, id: Path<String>) -> GetProductResponse {
        let uuid = match parse_id(&id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return GetProductResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(Some(product)) => GetProductResponse::Ok(Json(product.into())),
            Ok(None) => GetProductResponse::NotFound(Json(ErrorResponse {
                name: "NotFound".to_string(),
                message: "product.not_found".to_string(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductResponse::InternalError(json)
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of the stored product. The body `Id` must equal
    /// the path id.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductDto>,
    ) -> UpdateProductResponse {
        let uuid = match parse_id(&id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let body = body.0;
        if body.id != uuid {
            return UpdateProductResponse::BadRequest(ErrorResponse::validation(
                "product.id_mismatch",
            ));
        }

        let price = match decimal_from_json(body.price) {
            Ok(price) => price,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };
        let delivery_price = match decimal_from_json(body.delivery_price) {
            Ok(price) => price,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id: uuid,
            name: body.name,
            description: body.description,
            price,
            delivery_price,
        };

        match self.update_use_case.execute(params).await {
            Ok(_) => UpdateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    500 => UpdateProductResponse::InternalError(json),
                    _ => UpdateProductResponse::BadRequest(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product, then every option that belongs to it.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let uuid = match parse_id(&id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        if let Err(err) = self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                500 => DeleteProductResponse::InternalError(json),
                _ => DeleteProductResponse::BadRequest(json),
            };
        }

        match self
            .delete_options_use_case
            .execute(DeleteProductOptionsByProductParams { product_id: uuid })
            .await
        {
            Ok(_) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductsDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
