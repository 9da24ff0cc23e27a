use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::{ProductRepository, ProductUnitOfWork};
use crate::domain::product::validation::ProductDraft;
use crate::domain::shared::value_objects::ProductId;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
        async fn begin(&self) -> Result<Box<dyn ProductUnitOfWork>, RepositoryError>;
    }
}

mock! {
    pub UnitOfWork {}

    #[async_trait]
    impl ProductUnitOfWork for UnitOfWork {
        async fn find(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
        async fn persist(&mut self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&mut self, product: &Product) -> Result<(), RepositoryError>;
        async fn remove(&mut self, id: ProductId) -> Result<(), RepositoryError>;
        async fn flush(&mut self) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Repository whose `begin` hands out the given unit of work exactly once.
pub fn repo_with_unit_of_work(unit_of_work: MockUnitOfWork) -> MockProductRepo {
    let mut repo = MockProductRepo::new();
    repo.expect_begin()
        .times(1)
        .return_once(move || Ok(Box::new(unit_of_work)));
    repo
}

pub fn sample_product(id: i64) -> Product {
    Product::from_repository(ProductId::new(id), "Arabica coffee".to_string(), 14.9)
}

pub fn draft(name: Option<&str>, price: Option<f64>) -> ProductDraft {
    ProductDraft {
        name: name.map(str::to_string),
        price,
    }
}
