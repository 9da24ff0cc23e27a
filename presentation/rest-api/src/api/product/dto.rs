use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::validation::{ProductDraft, Violation};

/// Body of create and update requests.
///
/// Both fields are optional here so that a missing field is reported as a
/// validation error instead of a malformed body.
#[derive(Debug, Clone, Object)]
pub struct ProductPayload {
    /// Product name (required, not blank, at most 255 characters)
    pub name: Option<String>,
    /// Unit price (required, zero or positive)
    pub price: Option<f64>,
}

impl From<ProductPayload> for ProductDraft {
    fn from(payload: ProductPayload) -> Self {
        Self {
            name: payload.name,
            price: payload.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
        }
    }
}

/// One rejected field.
#[derive(Debug, Clone, Object)]
pub struct ViolationResponse {
    /// Offending field
    pub property_path: String,
    /// Code-style reason, e.g. `product.name_blank`
    pub message: String,
}

impl From<Violation> for ViolationResponse {
    fn from(violation: Violation) -> Self {
        Self {
            property_path: violation.property_path,
            message: violation.message,
        }
    }
}
