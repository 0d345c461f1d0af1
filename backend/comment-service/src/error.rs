/// Error types for Comment Service
///
/// Errors are converted to appropriate HTTP responses for API clients:
/// validation failures answer 400 with the serialized list of violations,
/// missing records answer 404, ownership failures answer 401, and anything
/// unexpected is logged server-side and answered with an opaque 500.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;

/// Result type for comment-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body failed field validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requester does not own the resource
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "errors": errors,
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                }))
            }
            AppError::NotFound(msg) => HttpResponse::NotFound().json(serde_json::json!({
                "error": msg,
                "status": StatusCode::NOT_FOUND.as_u16(),
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": msg,
                "status": StatusCode::UNAUTHORIZED.as_u16(),
            })),
            // Opaque to the caller; full detail stays in the server log.
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!("{}", self);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Content is required"))]
        content: String,
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn validation_response_contains_invoked_error_list() {
        let errors = Probe {
            content: String::new(),
        }
        .validate()
        .unwrap_err();

        let resp = AppError::Validation(errors).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        // The payload must carry the materialized violations, not a stub.
        assert!(json["errors"]["content"][0]["message"]
            .as_str()
            .unwrap()
            .contains("Content is required"));
        assert_eq!(json["status"], 400);
    }

    #[actix_web::test]
    async fn not_found_response_is_structured() {
        let resp = AppError::NotFound("Comment not found".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Comment not found");
        assert_eq!(json["status"], 404);
    }

    #[actix_web::test]
    async fn server_errors_are_opaque_plain_text() {
        let resp = AppError::Internal("pool exhausted".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text, "Server error");
        assert!(!text.contains("pool exhausted"));
    }
}
