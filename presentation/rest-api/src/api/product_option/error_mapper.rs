use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product_option::errors::ProductOptionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductOptionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductOptionError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductOptionError::DuplicateId => (StatusCode::CONFLICT, "Conflict"),
            ProductOptionError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
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
    fn should_map_missing_option_to_not_found() {
        let (status, Json(body)) = ProductOptionError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "product_option.not_found");
    }

    #[test]
    fn should_map_duplicate_to_conflict() {
        let (status, Json(body)) = ProductOptionError::DuplicateId.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.message, "product_option.duplicate_id");
    }

    #[test]
    fn should_hide_store_details_behind_internal_error() {
        let (status, Json(body)) =
            ProductOptionError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.name, "InternalError");
        assert_eq!(body.message, "repository.persistence");
    }
}
