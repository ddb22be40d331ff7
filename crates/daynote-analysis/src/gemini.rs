//! HTTP client for the Gemini `generateContent` API.

use std::time::Duration;

use daynote_core::{Analysis, Analyzer};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result, interpret};

/// Base URL for the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-002";

/// Connection settings for [`GeminiAnalyzer`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
  pub api_key:  String,
  pub model:    String,
  pub base_url: String,
  /// Upper bound on one request, connect through body.
  pub timeout:  Duration,
}

impl GeminiConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key:  api_key.into(),
      model:    DEFAULT_MODEL.to_string(),
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
  contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
  parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
  text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
  content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
  text: Option<String>,
}

impl GenerateResponse {
  fn into_text(self) -> Option<String> {
    self
      .candidates
      .into_iter()
      .next()?
      .content
      .parts
      .into_iter()
      .next()?
      .text
  }
}

// ─── Analyzer ────────────────────────────────────────────────────────────────

/// [`Analyzer`] backed by Gemini.
///
/// One request per entry, no streaming, no retry. Cheap to clone — the inner
/// [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct GeminiAnalyzer {
  client:   reqwest::Client,
  endpoint: String,
}

impl GeminiAnalyzer {
  pub fn new(config: GeminiConfig) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(
      "x-goog-api-key",
      HeaderValue::from_str(&config.api_key)
        .map_err(|e| Error::Config(format!("invalid API key header value: {e}")))?,
    );

    let client = reqwest::Client::builder()
      .default_headers(headers)
      .timeout(config.timeout)
      .build()?;

    let endpoint = format!(
      "{}/models/{}:generateContent",
      config.base_url.trim_end_matches('/'),
      config.model,
    );

    Ok(Self { client, endpoint })
  }

  /// Send `prompt` and return the first candidate's text.
  async fn generate(&self, prompt: &str) -> Result<String> {
    let body = GenerateRequest {
      contents: vec![Content { parts: vec![Part { text: prompt }] }],
    };

    let response = self
      .client
      .post(&self.endpoint)
      .json(&body)
      .send()
      .await?;

    let status = response.status();
    debug!(status = %status, "gemini response received");

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(Error::Status { status, body });
    }

    response
      .json::<GenerateResponse>()
      .await?
      .into_text()
      .ok_or(Error::MissingText)
  }

  /// Analyze `entry`, reporting why it failed instead of falling back.
  pub async fn try_analyze(&self, entry: &str) -> Result<Analysis> {
    let text = self.generate(&interpret::prompt(entry)).await?;
    interpret::interpret(&text)
  }
}

impl Analyzer for GeminiAnalyzer {
  async fn analyze(&self, entry: &str) -> Analysis {
    match self.try_analyze(entry).await {
      Ok(analysis) => analysis,
      Err(e) => {
        warn!(error = %e, "entry analysis failed; storing fallback");
        Analysis::failed()
      }
    }
  }
}
