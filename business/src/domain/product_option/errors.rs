#[derive(Debug, thiserror::Error)]
pub enum ProductOptionError {
    #[error("product_option.not_found")]
    NotFound,
    #[error("product_option.duplicate_id")]
    DuplicateId,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
