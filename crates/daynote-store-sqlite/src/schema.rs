//! SQL schema for the DayNote SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Entries are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS journal_entries (
    entry_id    TEXT PRIMARY KEY,
    entry       TEXT NOT NULL,
    summary     TEXT NOT NULL,
    mood        TEXT NOT NULL,
    created_at  TEXT NOT NULL    -- fixed-width RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS journal_entries_created_idx
    ON journal_entries(created_at);

PRAGMA user_version = 1;
";
