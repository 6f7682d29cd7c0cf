use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::forms::FieldErrors;

/// Error type returned by every handler and form check.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more submitted fields broke a rule.
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Database(_)
            | AppError::PasswordHash(_)
            | AppError::Token(_)
            | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::Validation(errors) => builder.json(json!({
                "message": "Validation failed",
                "errors": errors,
            })),
            AppError::NotFound(msg) | AppError::Unauthorized(msg) | AppError::Forbidden(msg) => {
                builder.json(json!({ "message": msg }))
            }
            internal => {
                tracing::error!(error = %internal, "Request failed");
                builder.json(json!({
                    "message": "Something went wrong, Contact with system admin"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldErrorKind, FieldErrors};
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn validation_errors_are_field_keyed() {
        let errors = FieldErrors::single("email", FieldErrorKind::Duplicate, "Email is already in use.");
        let (status, body) = body_json(errors.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"]["email"][0]["kind"], "duplicate");
        assert_eq!(body["errors"]["email"][0]["message"], "Email is already in use.");
    }

    #[actix_web::test]
    async fn database_details_are_not_leaked() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("pool"));
    }

    #[actix_web::test]
    async fn not_found_keeps_message() {
        let (status, body) = body_json(AppError::NotFound("Employee not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Employee not found");
    }
}
