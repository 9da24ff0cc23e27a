use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let mut unit_of_work = self.repository.begin().await?;

        // Verify product exists before deleting
        let product = unit_of_work
            .find(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        unit_of_work.remove(product.id).await?;
        unit_of_work.flush().await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
