use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::Path,
    payload::{Html, Json},
};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductPayload, ProductResponse, ViolationResponse};
use crate::api::product::error_mapper::{into_violations_response, invalid_id_error};
use crate::api::tags::ApiTags;

const VIEW_PAGE: &str = include_str!("view.html");

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalogue API
///
/// Endpoints for listing, reading, creating, updating and deleting products.
#[OpenApi]
impl ProductApi {
    /// Products page
    ///
    /// Static HTML page that renders the product list in the browser.
    #[oai(path = "/api/products/view", method = "get", tag = "ApiTags::Products")]
    async fn view(&self) -> Html<String> {
        Html(VIEW_PAGE.to_string())
    }

    /// List all products
    ///
    /// Returns every stored product ordered by id. An empty store yields `[]`.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> ListProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, id: Path<String>) -> GetProductResponse {
        let Ok(id) = id.0.parse::<ProductId>() else {
            return GetProductResponse::BadRequest(invalid_id_error());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Answers 201 with an empty body, or 400 with the list of rejected fields.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductPayload>) -> CreateProductResponse {
        let params = CreateProductParams {
            draft: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(_) => CreateProductResponse::Created,
            Err(ProductError::Validation(violations)) => {
                CreateProductResponse::BadRequest(into_violations_response(violations))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// Update a product
    ///
    /// Replaces name and price. The payload is validated before the product
    /// is looked up, so an invalid body on an unknown id still answers 400.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductPayload>,
    ) -> UpdateProductResponse {
        let Ok(id) = id.0.parse::<ProductId>() else {
            return UpdateProductResponse::BadRequest(Json(vec![ViolationResponse {
                property_path: "id".to_string(),
                message: "product.invalid_id".to_string(),
            }]));
        };

        let params = UpdateProductParams {
            id,
            draft: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(_) => UpdateProductResponse::NoContent,
            Err(ProductError::Validation(violations)) => {
                UpdateProductResponse::BadRequest(into_violations_response(violations))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(id) = id.0.parse::<ProductId>() else {
            return DeleteProductResponse::BadRequest(invalid_id_error());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<Vec<ViolationResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<Vec<ViolationResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
