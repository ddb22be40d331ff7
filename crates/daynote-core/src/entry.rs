//! Journal entry types.
//!
//! An entry is immutable once stored: there is no update or delete path
//! anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted journal entry, as returned by the store and the HTTP API.
///
/// Serialises with camelCase keys (`id`, `entry`, `summary`, `mood`,
/// `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
  /// Assigned by the store on insert.
  pub id:         Uuid,
  /// The author's text, verbatim.
  pub entry:      String,
  pub summary:    String,
  /// Open vocabulary: any string the analyzer produced.
  pub mood:       String,
  /// Wall-clock time of insertion; assigned by the store.
  pub created_at: DateTime<Utc>,
}

/// Input to [`JournalStore::insert`](crate::store::JournalStore::insert).
///
/// Everything except the store-assigned identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
  pub entry:   String,
  pub summary: String,
  pub mood:    String,
}

impl NewEntry {
  pub fn new(entry: impl Into<String>, analysis: crate::Analysis) -> Self {
    Self {
      entry:   entry.into(),
      summary: analysis.summary,
      mood:    analysis.mood,
    }
  }
}
