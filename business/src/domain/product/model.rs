use crate::domain::shared::value_objects::ProductId;

/// A sellable item as stored in the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Validated product fields that have not been persisted yet.
///
/// Only obtainable through [`ProductDraft::validate`](super::validation::ProductDraft::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: f64,
}

impl NewProduct {
    pub(crate) fn new(name: String, price: f64) -> Self {
        Self { name, price }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: f64) -> Self {
        Self { id, name, price }
    }

    /// Replaces the mutable fields. The id is left untouched.
    pub fn apply(&mut self, fields: NewProduct) {
        self.name = fields.name;
        self.price = fields.price;
    }
}
