use crate::error::Result;
use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for post operations
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a post by id
    pub async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, caption, comment_ids, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Prepend a comment reference to the post's comment sequence,
    /// keeping `comment_ids` ordered most-recent-first.
    pub async fn prepend_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET comment_ids = array_prepend($2, comment_ids), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
