//! Error type for `daynote-analysis`.
//!
//! These never cross the [`Analyzer`](daynote_core::Analyzer) boundary; they
//! exist so the failure can be logged before the fallback is returned.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("upstream returned {status}: {body}")]
  Status {
    status: reqwest::StatusCode,
    body:   String,
  },

  #[error("upstream response has no candidate text")]
  MissingText,

  #[error("analysis fragment is not valid json: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("invalid configuration: {0}")]
  Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
