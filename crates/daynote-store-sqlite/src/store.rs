//! [`SqliteStore`] — the SQLite implementation of [`JournalStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use daynote_core::{JournalEntry, JournalStore, NewEntry};
use uuid::Uuid;

use crate::{
  encode::{encode_dt, encode_uuid, RawEntry},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A DayNote journal backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── JournalStore impl ───────────────────────────────────────────────────────

impl JournalStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewEntry) -> Result<JournalEntry> {
    // Stored with microsecond precision; truncate up front so the returned
    // record matches what a later `list` reads back.
    let entry = JournalEntry {
      id:         Uuid::new_v4(),
      entry:      input.entry,
      summary:    input.summary,
      mood:       input.mood,
      created_at: Utc::now().trunc_subsecs(6),
    };

    let id_str   = encode_uuid(entry.id);
    let at_str   = encode_dt(entry.created_at);
    let text     = entry.entry.clone();
    let summary  = entry.summary.clone();
    let mood     = entry.mood.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO journal_entries (entry_id, entry, summary, mood, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, text, summary, mood, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(entry)
  }

  async fn list(&self) -> Result<Vec<JournalEntry>> {
    let raws: Vec<RawEntry> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT entry_id, entry, summary, mood, created_at
           FROM journal_entries
           ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], RawEntry::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEntry::into_entry).collect()
  }
}
