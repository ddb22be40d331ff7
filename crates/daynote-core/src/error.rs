//! Error types for `daynote-core`.

use thiserror::Error;

/// Failure of a [`Journal`](crate::Journal) operation.
///
/// Analysis failures never appear here; they are absorbed by the analyzer.
#[derive(Debug, Error)]
pub enum JournalError<E> {
  #[error("entry is required")]
  EntryRequired,

  #[error("store error: {0}")]
  Store(#[source] E),
}
