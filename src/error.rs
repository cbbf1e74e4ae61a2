use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;
use crate::utils::validation::FieldErrors;

/// Errors a handler can answer with. The `Display` text is the `message`
/// sent to the caller, so it never carries storage detail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Email or employee_id already exists")]
    Conflict,

    #[error("Employee not found")]
    NotFound,

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Converts a store failure, logging database detail. `internal` is the
    /// generic message returned for database errors.
    pub fn from_store(err: StoreError, internal: &'static str) -> Self {
        match err {
            StoreError::Duplicate => ApiError::Conflict,
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Database(e) => {
                error!(error = %e, "{internal}");
                ApiError::Internal(internal)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // duplicates are reported as a bad request, not 409
            ApiError::BadRequest(_) | ApiError::Validation(_) | ApiError::Conflict => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => json!({
                "message": self.to_string(),
                "errors": errors,
            }),
            _ => json!({ "message": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn database_errors_hide_their_detail() {
        let err = ApiError::from_store(
            StoreError::Database(sqlx::Error::Protocol("secret table layout".into())),
            "Failed to insert data",
        );
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "message": "Failed to insert data" }));
    }

    #[test]
    fn duplicate_maps_to_bad_request() {
        let err = ApiError::from_store(StoreError::Duplicate, "unused");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Email or employee_id already exists");
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        let err = ApiError::from_store(StoreError::NotFound, "unused");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
