use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::{ProductRepository, ProductUnitOfWork};
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use super::unit_of_work::ProductUnitOfWorkPostgres;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "product query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        sqlx::query_as::<_, ProductEntity>("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(|e| e.into_domain())
            .transpose()
    }

    async fn begin(&self) -> Result<Box<dyn ProductUnitOfWork>, RepositoryError> {
        let transaction = self.pool.begin().await.map_err(database_error)?;
        Ok(Box::new(ProductUnitOfWorkPostgres::new(transaction)))
    }
}
