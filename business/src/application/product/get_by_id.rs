use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.repository
            .find(params.id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{MockProductRepo, mock_logger, sample_product};

    #[tokio::test]
    async fn should_return_product_when_found() {
        let mut repo = MockProductRepo::new();
        repo.expect_find()
            .withf(|id| *id == ProductId::new(5))
            .returning(|_| Ok(Some(sample_product(5))));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(5),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Arabica coffee");
        assert_eq!(product.price, 14.9);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_find().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(99),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
