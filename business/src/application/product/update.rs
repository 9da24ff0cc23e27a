use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Payload is checked before the record is looked up.
        let fields = params.draft.validate().map_err(|violations| {
            self.logger.warn(&format!(
                "Rejected update of product {} with {} violation(s)",
                params.id,
                violations.len()
            ));
            ProductError::Validation(violations)
        })?;

        let mut unit_of_work = self.repository.begin().await?;
        let mut product = unit_of_work
            .find(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        product.apply(fields);
        unit_of_work.update(&product).await?;
        unit_of_work.flush().await?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
