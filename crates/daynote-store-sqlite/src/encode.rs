//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed number of
//! fractional digits and a `Z` suffix, so lexical order in SQL equals
//! chronological order. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use daynote_core::JournalEntry;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// A `journal_entries` row exactly as read from SQLite.
pub struct RawEntry {
  pub entry_id:   String,
  pub entry:      String,
  pub summary:    String,
  pub mood:       String,
  pub created_at: String,
}

impl RawEntry {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      entry_id:   row.get(0)?,
      entry:      row.get(1)?,
      summary:    row.get(2)?,
      mood:       row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  pub fn into_entry(self) -> Result<JournalEntry> {
    Ok(JournalEntry {
      id:         decode_uuid(&self.entry_id)?,
      entry:      self.entry,
      summary:    self.summary,
      mood:       self.mood,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
