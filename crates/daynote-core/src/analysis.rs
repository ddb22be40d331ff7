//! The `(summary, mood)` pair derived from an entry, and the [`Analyzer`]
//! abstraction that produces it.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Summary and mood derived from one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
  pub summary: String,
  pub mood:    String,
}

impl Analysis {
  pub const NOT_FOUND_SUMMARY: &'static str = "No summary";
  pub const NOT_FOUND_MOOD: &'static str = "Unknown";
  pub const FAILED_SUMMARY: &'static str = "Error generating summary";
  pub const FAILED_MOOD: &'static str = "Error";

  pub fn new(summary: impl Into<String>, mood: impl Into<String>) -> Self {
    Self { summary: summary.into(), mood: mood.into() }
  }

  /// Sentinel used when the model answered without any JSON object.
  pub fn not_found() -> Self {
    Self::new(Self::NOT_FOUND_SUMMARY, Self::NOT_FOUND_MOOD)
  }

  /// Sentinel used when the request or the decoding failed.
  pub fn failed() -> Self {
    Self::new(Self::FAILED_SUMMARY, Self::FAILED_MOOD)
  }
}

/// Turns raw entry text into an [`Analysis`].
///
/// Infallible by signature: implementations absorb every failure and return
/// one of the sentinel pairs instead, so callers always have something to
/// persist.
pub trait Analyzer: Send + Sync {
  fn analyze<'a>(
    &'a self,
    entry: &'a str,
  ) -> impl Future<Output = Analysis> + Send + 'a;
}
