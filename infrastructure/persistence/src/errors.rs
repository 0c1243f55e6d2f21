use business::domain::errors::RepositoryError;

/// Maps a failed read, update or delete. Driver details are logged, not returned.
pub(crate) fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "database statement failed");
    RepositoryError::DatabaseError
}

/// Maps a failed insert, keeping primary key collisions distinguishable.
pub(crate) fn insert_error(err: sqlx::Error) -> RepositoryError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => RepositoryError::Duplicated,
        _ => database_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_driver_failure_to_database_error() {
        let result = insert_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(result, RepositoryError::DatabaseError));
    }

    #[test]
    fn should_map_missing_row_to_database_error() {
        let result = database_error(sqlx::Error::RowNotFound);

        assert!(matches!(result, RepositoryError::DatabaseError));
    }
}
