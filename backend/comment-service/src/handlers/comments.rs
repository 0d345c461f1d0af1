/// Comment handlers - HTTP endpoints for comment operations
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Request body for creating a comment
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(min = 1, message = "Post ID is required"))]
    pub post_id: String,
}

/// Request body for updating a comment
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

/// Create a new comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    // A post_id that is not a UUID cannot reference any post.
    let post_id = Uuid::parse_str(&req.post_id)
        .map_err(|_| AppError::NotFound("Post not found".to_string()))?;

    let service = CommentService::new(pool.get_ref().clone());
    let comment = service
        .create_comment(user_id.0, post_id, &req.content)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Replace a comment's content (owner only)
pub async fn update_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new(pool.get_ref().clone());
    let comment = service
        .update_comment(*comment_id, user_id.0, &req.content)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_fails_validation() {
        let req = CreateCommentRequest {
            content: String::new(),
            post_id: Uuid::new_v4().to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn empty_post_id_fails_validation() {
        let req = CreateCommentRequest {
            content: "hello".to_string(),
            post_id: String::new(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("post_id"));
    }

    #[test]
    fn both_fields_missing_aggregates_violations() {
        let req = CreateCommentRequest {
            content: String::new(),
            post_id: String::new(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("content"));
        assert!(fields.contains_key("post_id"));
    }

    #[test]
    fn populated_request_passes_validation() {
        let req = CreateCommentRequest {
            content: "hello".to_string(),
            post_id: Uuid::new_v4().to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
