use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product_option::use_cases::create::{
    CreateProductOptionParams, CreateProductOptionUseCase,
};
use business::domain::product_option::use_cases::delete::{
    DeleteProductOptionParams, DeleteProductOptionUseCase,
};
use business::domain::product_option::use_cases::get_by_product::{
    GetProductOptionsParams, GetProductOptionsUseCase,
};
use business::domain::product_option::use_cases::get_single::{
    GetProductOptionParams, GetProductOptionUseCase,
};
use business::domain::product_option::use_cases::update::{
    UpdateProductOptionParams, UpdateProductOptionUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::product_option::dto::{ProductOptionDto, ProductOptionsDto};
use crate::api::tags::ApiTags;

pub struct ProductOptionApi {
    create_use_case: Arc<dyn CreateProductOptionUseCase>,
    get_by_product_use_case: Arc<dyn GetProductOptionsUseCase>,
    get_single_use_case: Arc<dyn GetProductOptionUseCase>,
    update_use_case: Arc<dyn UpdateProductOptionUseCase>,
    delete_use_case: Arc<dyn DeleteProductOptionUseCase>,
}

impl ProductOptionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductOptionUseCase>,
        get_by_product_use_case: Arc<dyn GetProductOptionsUseCase>,
        get_single_use_case: Arc<dyn GetProductOptionUseCase>,
        update_use_case: Arc<dyn UpdateProductOptionUseCase>,
        delete_use_case: Arc<dyn DeleteProductOptionUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_product_use_case,
            get_single_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_ids(product_id: &str, id: &str) -> Result<(Uuid, Uuid), Json<ErrorResponse>> {
    let product_id = parse_id(product_id, "product.invalid_id")?;
    let id = parse_id(id, "product_option.invalid_id")?;
    Ok((product_id, id))
}

/// Product option management API
#[OpenApi]
impl ProductOptionApi {
    /// Create an option for a product
    ///
    /// The body `ProductId` must equal the product in the path. The product
    /// itself is not required to exist.
    #[oai(
        path = "/products/:product_id/options",
        method = "post",
        tag = "ApiTags::ProductOptions"
    )]
    async fn create_option(
        &self,
        product_id: Path<String>,
        body: Json<ProductOptionDto>,
    ) -> CreateProductOptionResponse {
        let product_id = match parse_id(&product_id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return CreateProductOptionResponse::BadRequest(json),
        };

        let body = body.0;
        if body.product_id != product_id {
            return CreateProductOptionResponse::BadRequest(ErrorResponse::validation(
                "product_option.product_id_mismatch",
            ));
        }

        let params = CreateProductOptionParams {
            id: body.id,
            product_id,
            name: body.name,
            description: body.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(_) => CreateProductOptionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    500 => CreateProductOptionResponse::InternalError(json),
                    _ => CreateProductOptionResponse::BadRequest(json),
                }
            }
        }
    }

    /// List the options of a product
    ///
    /// An unknown product yields an empty list.
    #[oai(
        path = "/products/:product_id/options",
        method = "get",
        tag = "ApiTags::ProductOptions"
    )]
    async fn get_options(&self, product_id: Path<String>) -> GetProductOptionsResponse {
        let product_id = match parse_id(&product_id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return GetProductOptionsResponse::BadRequest(json),
        };

        match self
            .get_by_product_use_case
            .execute(GetProductOptionsParams { product_id })
            .await
        {
            Ok(options) => GetProductOptionsResponse::Ok(Json(options.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductOptionsResponse::InternalError(json)
            }
        }
    }

    /// Get a single option of a product
    #[oai(
        path = "/products/:product_id/options/:id",
        method = "get",
        tag = "ApiTags::ProductOptions"
    )]
    async fn get_option(
        &self,
        product_id: Path<String>,
        id: Path<String>,
    ) -> GetProductOptionResponse {
        let (product_id, id) = match parse_ids(&product_id.0, &id.0) {
            Ok(ids) => ids,
            Err(json) => return GetProductOptionResponse::BadRequest(json),
        };

        match self
            .get_single_use_case
            .execute(GetProductOptionParams { product_id, id })
            .await
        {
            Ok(Some(option)) => GetProductOptionResponse::Ok(Json(option.into())),
            Ok(None) => GetProductOptionResponse::NotFound(Json(ErrorResponse {
                name: "NotFound".to_string(),
                message: "product_option.not_found".to_string(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductOptionResponse::InternalError(json)
            }
        }
    }

    /// Update an option
    ///
    /// Both body `Id` and body `ProductId` must match the path.
    #[oai(
        path = "/products/:product_id/options/:id",
        method = "put",
        tag = "ApiTags::ProductOptions"
    )]
    async fn update_option(
        &self,
        product_id: Path<String>,
        id: Path<String>,
        body: Json<ProductOptionDto>,
    ) -> UpdateProductOptionResponse {
        let (product_id, id) = match parse_ids(&product_id.0, &id.0) {
            Ok(ids) => ids,
            Err(json) => return UpdateProductOptionResponse::BadRequest(json),
        };

        let body = body.0;
        if body.id != id {
            return UpdateProductOptionResponse::BadRequest(ErrorResponse::validation(
                "product_option.id_mismatch",
            ));
        }
        if body.product_id != product_id {
            return UpdateProductOptionResponse::BadRequest(ErrorResponse::validation(
                "product_option.product_id_mismatch",
            ));
        }

        let params = UpdateProductOptionParams {
            id,
            product_id,
            name: body.name,
            description: body.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(_) => UpdateProductOptionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    500 => UpdateProductOptionResponse::InternalError(json),
                    _ => UpdateProductOptionResponse::BadRequest(json),
                }
            }
        }
    }

    /// Delete an option
    ///
    /// The option is looked up by its own id. The product in the path is only
    /// validated as an identifier.
    #[oai(
        path = "/products/:product_id/options/:id",
        method = "delete",
        tag = "ApiTags::ProductOptions"
    )]
    async fn delete_option(
        &self,
        product_id: Path<String>,
        id: Path<String>,
    ) -> DeleteProductOptionResponse {
        let (_product_id, id) = match parse_ids(&product_id.0, &id.0) {
            Ok(ids) => ids,
            Err(json) => return DeleteProductOptionResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductOptionParams { id })
            .await
        {
            Ok(_) => DeleteProductOptionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    500 => DeleteProductOptionResponse::InternalError(json),
                    _ => DeleteProductOptionResponse::NotFound(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductOptionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductOptionsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductOptionsDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductOptionResponse {
    #[oai(status = 200)]
    Ok(Json<ProductOptionDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductOptionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductOptionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
