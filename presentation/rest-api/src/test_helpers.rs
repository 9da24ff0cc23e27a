use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::validation::Violation;
use business::domain::shared::value_objects::ProductId;

use crate::api::product::routes::ProductApi;

mock! {
    pub CreateUseCase {}

    #[async_trait]
    impl CreateProductUseCase for CreateUseCase {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetAllUseCase {}

    #[async_trait]
    impl GetAllProductsUseCase for GetAllUseCase {
        async fn execute(&self) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub GetByIdUseCase {}

    #[async_trait]
    impl GetProductByIdUseCase for GetByIdUseCase {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub UpdateUseCase {}

    #[async_trait]
    impl UpdateProductUseCase for UpdateUseCase {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub DeleteUseCase {}

    #[async_trait]
    impl DeleteProductUseCase for DeleteUseCase {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
    }
}

/// One mock per product use case; set expectations, then build the API.
#[derive(Default)]
pub struct Mocks {
    pub create: MockCreateUseCase,
    pub get_all: MockGetAllUseCase,
    pub get_by_id: MockGetByIdUseCase,
    pub update: MockUpdateUseCase,
    pub delete: MockDeleteUseCase,
}

impl Mocks {
    pub fn into_api(self) -> ProductApi {
        ProductApi::new(
            Arc::new(self.create),
            Arc::new(self.get_all),
            Arc::new(self.get_by_id),
            Arc::new(self.update),
            Arc::new(self.delete),
        )
    }
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product::from_repository(ProductId::new(id), name.to_string(), price)
}

pub fn violation(property_path: &str, message: &str) -> Violation {
    Violation {
        property_path: property_path.to_string(),
        message: message.to_string(),
    }
}
