//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use daynote_core::JournalError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Only `message` reaches the client; the underlying cause is logged.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("{message}: {source}")]
  Internal {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

pub const ENTRY_REQUIRED: &str = "Entry is required";
pub const SAVE_FAILED: &str = "Failed to save entry";
pub const FETCH_FAILED: &str = "Failed to fetch entries";

impl ApiError {
  /// Map a [`JournalError`], using `message` for the server-error case.
  pub fn from_journal<E>(err: JournalError<E>, message: &'static str) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    match err {
      JournalError::EntryRequired => ApiError::BadRequest(ENTRY_REQUIRED.into()),
      JournalError::Store(e) => ApiError::Internal { message, source: Box::new(e) },
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Internal { message, source } => {
        tracing::error!(error = %source, "{message}");
        (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
