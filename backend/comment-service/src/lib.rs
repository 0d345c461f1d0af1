/// Comment Service Library
///
/// Handles comment endpoints for the social platform: creating a comment
/// against a post and updating a comment's content, with ownership-based
/// authorization.
///
/// # Modules
///
/// - `handlers`: Comment HTTP request handlers
/// - `models`: Data structures for users, posts, comments
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: HTTP middleware for authentication
/// - `auth`: JWT validation helpers
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
