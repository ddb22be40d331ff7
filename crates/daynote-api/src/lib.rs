//! JSON REST API for DayNote.
//!
//! Exposes an axum [`Router`] backed by a [`Journal`]: any
//! [`JournalStore`] paired with any [`Analyzer`]. CORS, tracing and
//! transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", daynote_api::api_router(journal))
//! ```

pub mod error;
pub mod journal;

use axum::{Router, routing::get};
use daynote_core::{Analyzer, Journal, JournalStore};

pub use error::ApiError;

/// Build the API router for `journal`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, A>(journal: Journal<S, A>) -> Router<()>
where
  S: JournalStore + 'static,
  A: Analyzer + 'static,
{
  Router::new()
    .route("/journal", get(journal::list::<S, A>).post(journal::create::<S, A>))
    .with_state(journal)
}

// ─── Router tests ─────────────────────────────────────────────────────────────
