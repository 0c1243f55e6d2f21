#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.duplicate_id")]
    DuplicateId,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
