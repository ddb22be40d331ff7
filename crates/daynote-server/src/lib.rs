//! DayNote HTTP server.
//!
//! Loads [`ServerConfig`], wires a [`SqliteStore`] and a [`GeminiAnalyzer`]
//! into a [`Journal`], and serves the JSON API under `/api` behind a CORS
//! allow-list and request tracing.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use daynote_analysis::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiAnalyzer, GeminiConfig};
use daynote_core::{Analyzer, Journal, JournalStore};
use daynote_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

/// Prefix of the environment variables that override the config file.
pub const ENV_PREFIX: &str = "DAYNOTE";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration: defaults, then the optional TOML file, then
/// `DAYNOTE_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                  String,
  pub port:                  u16,
  /// SQLite file holding the journal. A leading `~/` is expanded.
  pub store_path:            PathBuf,
  pub gemini_api_key:        String,
  pub gemini_model:          String,
  pub gemini_base_url:       String,
  pub analysis_timeout_secs: u64,
  /// Origins allowed to call the API with credentials.
  pub allowed_origins:       Vec<String>,
}

impl ServerConfig {
  /// Load from `path` (optional on disk) and the process environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::from_sources(
      config::File::from(path).required(false),
      config::Environment::with_prefix(ENV_PREFIX),
    )
  }

  /// Layer `file` and `env` over the defaults.
  ///
  /// `allowed_origins` may be given in the environment as a comma-separated
  /// list.
  pub fn from_sources<F>(
    file: F,
    env:  config::Environment,
  ) -> Result<Self, config::ConfigError>
  where
    F: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5000_i64)?
      .set_default("store_path", "daynote.db")?
      .set_default("gemini_api_key", "")?
      .set_default("gemini_model", DEFAULT_MODEL)?
      .set_default("gemini_base_url", DEFAULT_BASE_URL)?
      .set_default("analysis_timeout_secs", 30_i64)?
      .set_default("allowed_origins", vec!["http://localhost:3000"])?
      .add_source(file)
      .add_source(
        env
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("allowed_origins"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn gemini_config(&self) -> GeminiConfig {
    GeminiConfig {
      api_key:  self.gemini_api_key.clone(),
      model:    self.gemini_model.clone(),
      base_url: self.gemini_base_url.clone(),
      timeout:  Duration::from_secs(self.analysis_timeout_secs),
    }
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Assembly ─────────────────────────────────────────────────────────────────

/// CORS policy: only `origins`, with credentials.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
  let origins = origins
    .iter()
    .map(|o| {
      HeaderValue::from_str(o.trim_end_matches('/'))
        .with_context(|| format!("invalid allowed origin {o:?}"))
    })
    .collect::<anyhow::Result<Vec<_>>>()?;

  Ok(
    CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods([Method::GET, Method::POST])
      .allow_headers([header::CONTENT_TYPE])
      .allow_credentials(true),
  )
}

/// The full application router: `/api/journal` plus CORS and tracing.
pub fn app<S, A>(journal: Journal<S, A>, config: &ServerConfig) -> anyhow::Result<Router>
where
  S: JournalStore + 'static,
  A: Analyzer + 'static,
{
  Ok(
    Router::new()
      .nest("/api", daynote_api::api_router(journal))
      .layer(cors_layer(&config.allowed_origins)?)
      .layer(TraceLayer::new_for_http()),
  )
}

/// Open the store and build the analyzer described by `config`.
pub async fn journal(
  config: &ServerConfig,
) -> anyhow::Result<Journal<SqliteStore, GeminiAnalyzer>> {
  if config.gemini_api_key.is_empty() {
    tracing::warn!(
      "no Gemini API key configured ({ENV_PREFIX}_GEMINI_API_KEY); \
       entries will be stored with the error fallback analysis"
    );
  }

  let store_path = expand_tilde(&config.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = %store_path.display(), "journal store opened");

  let analyzer = GeminiAnalyzer::new(config.gemini_config())
    .context("failed to build Gemini client")?;

  Ok(Journal::new(store.into(), analyzer.into()))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
