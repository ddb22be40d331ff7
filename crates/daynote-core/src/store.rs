//! The `JournalStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `daynote-store-sqlite`). Higher layers depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::entry::{JournalEntry, NewEntry};

/// Abstraction over a DayNote storage backend.
///
/// Writes are append-only. All methods return `Send` futures so the trait
/// can be used from multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait JournalStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new entry. The store assigns `id` and `created_at`.
  fn insert(
    &self,
    input: NewEntry,
  ) -> impl Future<Output = Result<JournalEntry, Self::Error>> + Send + '_;

  /// All entries, newest `created_at` first. Entries sharing a timestamp
  /// come back in reverse insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<JournalEntry>, Self::Error>> + Send + '_;
}
