use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductUnitOfWork;
use business::domain::shared::value_objects::ProductId;

use super::entity::{ProductEntity, price_to_column};
use super::repository::database_error;

/// Unit of work backed by one Postgres transaction.
///
/// `flush` commits; dropping it before that rolls the transaction back.
pub struct ProductUnitOfWorkPostgres {
    transaction: Option<Transaction<'static, Postgres>>,
}

impl ProductUnitOfWorkPostgres {
    pub fn new(transaction: Transaction<'static, Postgres>) -> Self {
        Self {
            transaction: Some(transaction),
        }
    }

    fn connection(&mut self) -> Result<&mut PgConnection, RepositoryError> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            tracing::warn!("unit of work used after flush");
            RepositoryError::Persistence
        })
    }
}

#[async_trait]
impl ProductUnitOfWork for ProductUnitOfWorkPostgres {
    async fn find(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let conn = self.connection()?;
        sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(id.value())
        .fetch_optional(conn)
        .await
        .map_err(database_error)?
        .map(|e| e.into_domain())
        .transpose()
    }

    async fn persist(&mut self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let price = price_to_column(product.price())?;
        let conn = self.connection()?;
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(product.name())
        .bind(price)
        .fetch_one(conn)
        .await
        .map_err(database_error)?;

        entity.into_domain()
    }

    async fn update(&mut self, product: &Product) -> Result<(), RepositoryError> {
        let price = price_to_column(product.price)?;
        let conn = self.connection()?;
        let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(product.id.value())
            .bind(&product.name)
            .bind(price)
            .execute(conn)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove(&mut self, id: ProductId) -> Result<(), RepositoryError> {
        let conn = self.connection()?;
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(conn)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), RepositoryError> {
        let transaction = self.transaction.take().ok_or_else(|| {
            tracing::warn!("unit of work flushed twice");
            RepositoryError::Persistence
        })?;

        transaction.commit().await.map_err(database_error)
    }
}
