/// Comment service - comment creation and content updates
use crate::db::{CommentRepository, PostRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    users: UserRepository,
    posts: PostRepository,
    comments: CommentRepository,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            comments: CommentRepository::new(pool),
        }
    }

    /// Create a comment owned by `user_id` and attached to `post_id`.
    ///
    /// The post row is updated before the comment is inserted. The two
    /// writes are separate statements with no transaction; a failure in
    /// between leaves a dangling reference and surfaces as a 500.
    pub async fn create_comment(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        if self.users.find_profile(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let post = match self.posts.find_by_id(post_id).await? {
            Some(post) => post,
            None => return Err(AppError::NotFound("Post not found".to_string())),
        };

        let comment_id = Uuid::new_v4();
        self.posts.prepend_comment(post.id, comment_id).await?;
        let comment = self
            .comments
            .insert(comment_id, post.id, user_id, content)
            .await?;

        Ok(comment)
    }

    /// Replace a comment's content if and only if `user_id` owns it.
    pub async fn update_comment(
        &self,
        comment_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let comment = match self.comments.find_by_id(comment_id).await? {
            Some(comment) => comment,
            None => return Err(AppError::NotFound("Comment not found".to_string())),
        };

        if comment.user_id != user_id {
            return Err(AppError::Unauthorized("User not authorized".to_string()));
        }

        self.comments.update_content(comment.id, content).await
    }
}
