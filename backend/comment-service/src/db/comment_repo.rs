use crate::error::Result;
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for comment operations
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a comment by id
    pub async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Persist a new comment
    pub async fn insert(
        &self,
        comment_id: Uuid,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, user_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(comment_id)
        .bind(post_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Replace a comment's content
    pub async fn update_content(&self, comment_id: Uuid, content: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, post_id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(comment_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }
}
