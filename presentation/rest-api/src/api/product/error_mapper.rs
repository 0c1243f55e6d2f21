use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Canonical status per failure. Endpoints narrow it to the codes they
/// document, so only the 500 split is relied upon there.
impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::DuplicateId => (StatusCode::CONFLICT, "Conflict"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_duplicate_to_conflict() {
        let (status, Json(body)) = ProductError::DuplicateId.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.message, "product.duplicate_id");
    }

    #[test]
    fn should_hide_store_details_behind_internal_error() {
        let (status, Json(body)) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.name, "InternalError");
        assert_eq!(body.message, "repository.persistence");
    }
}
