use super::validation::Violation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation_failed")]
    Validation(Vec<Violation>),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
