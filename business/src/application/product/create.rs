use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let new_product = params.draft.validate().map_err(|violations| {
            self.logger.warn(&format!(
                "Rejected product payload with {} violation(s)",
                violations.len()
            ));
            ProductError::Validation(violations)
        })?;

        self.logger
            .info(&format!("Creating product: {}", new_product.name()));

        let mut unit_of_work = self.repository.begin().await?;
        let product = unit_of_work.persist(&new_product).await?;
        unit_of_work.flush().await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
