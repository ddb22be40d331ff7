//! Handlers for `/journal`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/journal` | All entries, newest first |
//! | `POST` | `/journal` | Body: `{"entry":"..."}`; returns 201 + stored entry |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use daynote_core::{Analyzer, Journal, JournalEntry, JournalStore};
use serde::Deserialize;

use crate::error::{ApiError, ENTRY_REQUIRED, FETCH_FAILED, SAVE_FAILED};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /journal`
pub async fn list<S, A>(
  State(journal): State<Journal<S, A>>,
) -> Result<Json<Vec<JournalEntry>>, ApiError>
where
  S: JournalStore,
  A: Analyzer,
{
  let entries = journal
    .timeline()
    .await
    .map_err(|e| ApiError::from_journal(e, FETCH_FAILED))?;
  Ok(Json(entries))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub entry: Option<String>,
}

/// `POST /journal` — body: `{"entry":"..."}`
///
/// A body that is not a JSON object with a string `entry` counts as a
/// missing entry.
pub async fn create<S, A>(
  State(journal): State<Journal<S, A>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JournalStore,
  A: Analyzer,
{
  let Json(body) = body.map_err(|_| ApiError::BadRequest(ENTRY_REQUIRED.into()))?;

  let entry = journal
    .create(body.entry)
    .await
    .map_err(|e| ApiError::from_journal(e, SAVE_FAILED))?;
  Ok((StatusCode::CREATED, Json(entry)))
}
