//! [`Journal`] — the ingestion and listing flows.
//!
//! Holds explicit handles to a store and an analyzer so HTTP handlers (or
//! tests) receive their collaborators instead of reaching for globals.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
  analysis::Analyzer,
  entry::{JournalEntry, NewEntry},
  error::JournalError,
  store::JournalStore,
};

/// The journal service: one store, one analyzer.
///
/// Cloning is cheap; both handles are reference-counted.
pub struct Journal<S, A> {
  store:    Arc<S>,
  analyzer: Arc<A>,
}

impl<S, A> Clone for Journal<S, A> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      analyzer: Arc::clone(&self.analyzer),
    }
  }
}

impl<S, A> Journal<S, A>
where
  S: JournalStore,
  A: Analyzer,
{
  pub fn new(store: Arc<S>, analyzer: Arc<A>) -> Self {
    Self { store, analyzer }
  }

  /// Analyze `entry` and persist it together with the analysis.
  ///
  /// A missing or empty entry fails with [`JournalError::EntryRequired`]
  /// before the analyzer or the store is touched. The analyzer cannot fail,
  /// so the only other error is a store failure, in which case nothing is
  /// returned to the caller.
  pub async fn create(
    &self,
    entry: Option<String>,
  ) -> Result<JournalEntry, JournalError<S::Error>> {
    let entry = match entry {
      Some(e) if !e.is_empty() => e,
      _ => return Err(JournalError::EntryRequired),
    };

    let analysis = self.analyzer.analyze(&entry).await;
    debug!(mood = %analysis.mood, "entry analyzed");

    let stored = self
      .store
      .insert(NewEntry::new(entry, analysis))
      .await
      .map_err(JournalError::Store)?;

    info!(id = %stored.id, mood = %stored.mood, "journal entry saved");
    Ok(stored)
  }

  /// Every stored entry, newest first.
  pub async fn timeline(&self) -> Result<Vec<JournalEntry>, JournalError<S::Error>> {
    self.store.list().await.map_err(JournalError::Store)
  }
}
