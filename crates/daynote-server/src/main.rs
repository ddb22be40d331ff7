//! daynote-server binary.
//!
//! Reads `daynote.toml` (or the path given with `--config`) and `DAYNOTE_*`
//! environment variables, opens the SQLite journal, and serves the JSON API.
//!
//! ```text
//! DAYNOTE_GEMINI_API_KEY=... cargo run -p daynote-server
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use daynote_server::ServerConfig;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "DayNote journal server")]
struct Cli {
  /// Path to the TOML configuration file. Missing is fine.
  #[arg(short, long, default_value = "daynote.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let journal = daynote_server::journal(&server_cfg).await?;
  let app = daynote_server::app(journal, &server_cfg)?;
  let address = server_cfg.address();

  tracing::info!(origins = ?server_cfg.allowed_origins, "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
