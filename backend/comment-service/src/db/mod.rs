/// Database access layer
///
/// Repository implementations over `PgPool` for users, posts, and comments.
pub mod comment_repo;
pub mod post_repo;
pub mod user_repo;

pub use comment_repo::CommentRepository;
pub use post_repo::PostRepository;
pub use user_repo::UserRepository;
