//! Core types and trait definitions for DayNote.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends, the analysis adapter and the HTTP layer all depend on
//! it; it depends on nothing of theirs.

pub mod analysis;
pub mod entry;
pub mod error;
pub mod journal;
pub mod store;

pub use analysis::{Analysis, Analyzer};
pub use entry::{JournalEntry, NewEntry};
pub use error::JournalError;
pub use journal::Journal;
pub use store::JournalStore;
