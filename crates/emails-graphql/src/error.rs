//! API error type and its GraphQL error extensions.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// `extensions.code` for input that failed validation.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
/// `extensions.code` for an update/remove target that does not exist.
pub const NOT_FOUND: &str = "NOT_FOUND";
/// `extensions.code` for backend failures.
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// An error returned by a resolver.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// The `extensions.code` reported to GraphQL clients.
  pub fn code(&self) -> &'static str {
    match self {
      ApiError::BadRequest(_) => BAD_USER_INPUT,
      ApiError::NotFound(_) => NOT_FOUND,
      ApiError::Store(_) => INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<emails_core::Error> for ApiError {
  fn from(e: emails_core::Error) -> Self {
    match e {
      e @ emails_core::Error::Validation { .. } => ApiError::BadRequest(e.to_string()),
      emails_core::Error::NotFound(email) => {
        ApiError::NotFound(format!("email {email} not found"))
      }
      emails_core::Error::Store(e) => ApiError::Store(e),
    }
  }
}

impl ErrorExtensions for ApiError {
  fn extend(&self) -> async_graphql::Error {
    let code = self.code();
    async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
  }
}
