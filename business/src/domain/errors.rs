/// Persistence gateway failures surfaced to the domain layer.
/// Messages are code-style identifiers so clients can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A replace or remove addressed a row that no longer exists.
    #[error("repository.not_found")]
    NotFound,
    /// The store rejected an insert on its primary key.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
