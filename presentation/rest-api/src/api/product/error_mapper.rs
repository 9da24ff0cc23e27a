use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;
use business::domain::product::validation::Violation;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ViolationResponse;

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.validation_failed",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(e) => {
                tracing::error!(error = %e, "product request failed in repository");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

pub fn into_violations_response(violations: Vec<Violation>) -> Json<Vec<ViolationResponse>> {
    Json(violations.into_iter().map(Into::into).collect())
}

pub fn invalid_id_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.invalid_id"))
}
