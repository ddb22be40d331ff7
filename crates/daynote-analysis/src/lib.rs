//! Entry analysis for DayNote.
//!
//! [`GeminiAnalyzer`] sends an entry to Google's Gemini `generateContent`
//! endpoint with a fixed prompt, pulls the first JSON object out of the
//! model's free-text answer, and reads `summary`/`mood` from it.
//!
//! Failures never leave this crate through the [`Analyzer`] trait:
//!
//! | Situation | Result |
//! |-----------|--------|
//! | JSON object found and decoded | its `summary` and `mood`, verbatim |
//! | no `{...}` in the answer | `("No summary", "Unknown")` |
//! | `{...}` present but not a valid object | `("Error generating summary", "Error")` |
//! | network error, non-2xx, unexpected response shape | `("Error generating summary", "Error")` |
//!
//! [`Analyzer`]: daynote_core::Analyzer

mod gemini;
mod interpret;

pub mod error;

pub use error::{Error, Result};
pub use gemini::{GeminiAnalyzer, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use interpret::{extract_json, interpret, prompt};
