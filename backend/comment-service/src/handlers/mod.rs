/// HTTP handlers for comment endpoints
pub mod comments;

pub use comments::{create_comment, update_comment};
