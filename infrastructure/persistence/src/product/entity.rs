use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or_else(|| {
            tracing::error!(id = self.id, price = %self.price, "stored price is not representable");
            RepositoryError::Persistence
        })?;

        Ok(Product::from_repository(
            ProductId::new(self.id),
            self.name,
            price,
        ))
    }
}

/// Converts a domain price into the value bound to the `NUMERIC` column.
pub(crate) fn price_to_column(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price).ok_or_else(|| {
        tracing::error!(price, "price cannot be stored as a decimal");
        RepositoryError::Persistence
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_map_entity_into_domain() {
        let entity = ProductEntity {
            id: 11,
            name: "Green tea".to_string(),
            price: BigDecimal::from_str("4.50").unwrap(),
        };

        let product = entity.into_domain().unwrap();

        assert_eq!(product.id, ProductId::new(11));
        assert_eq!(product.name, "Green tea");
        assert_eq!(product.price, 4.5);
    }

    #[test]
    fn should_convert_price_to_decimal() {
        let decimal = price_to_column(9.99).unwrap();

        assert_eq!(decimal.to_f64(), Some(9.99));
    }

    #[test]
    fn should_reject_nan_price() {
        assert!(matches!(
            price_to_column(f64::NAN),
            Err(RepositoryError::Persistence)
        ));
    }
}
