//! Async HTTP client wrapping the DayNote JSON API.

use anyhow::{Context, Result, anyhow};
use daynote_core::JournalEntry;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// Connection settings for the DayNote API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the DayNote JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    // Creating an entry waits on the server's call to the model.
    let client = Client::builder()
      .timeout(Duration::from_secs(90))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/journal`
  pub async fn list_entries(&self) -> Result<Vec<JournalEntry>> {
    let resp = self
      .client
      .get(self.url("/journal"))
      .send()
      .await
      .context("GET /journal failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /journal → {}", resp.status()));
    }
    resp.json().await.context("deserialising entries")
  }

  /// `POST /api/journal`
  pub async fn create_entry(&self, entry: &str) -> Result<JournalEntry> {
    let resp = self
      .client
      .post(self.url("/journal"))
      .json(&json!({ "entry": entry }))
      .send()
      .await
      .context("POST /journal failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST /journal → {}", resp.status()));
    }
    resp.json().await.context("deserialising created entry")
  }
}
