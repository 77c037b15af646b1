//! Log setup.
//!
//! The terminal is occupied by the game, so logs can only go to a file.

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::error::Error;
use crate::error::Result;

/// The environment variable which overrides the configured filter.
pub const FILTER_VAR: &str = "LANTERN_LOG";

/// Picks the filter directives to log with: the environment's, if it set any,
/// and otherwise the configured ones.
pub fn directives(from_env: Option<String>, configured: &str) -> String {
  match from_env {
    Some(d) if !d.trim().is_empty() => d,
    _ => configured.to_string(),
  }
}

/// Installs the global `tracing` subscriber.
///
/// Returns `false`, and installs nothing, if no log file is configured. Should
/// be called once, early.
pub fn init(settings: &LogSettings) -> Result<bool> {
  let path = match &settings.file {
    Some(path) => path,
    None => return Ok(false),
  };

  let filter = EnvFilter::try_new(directives(
    env::var(FILTER_VAR).ok(),
    &settings.filter,
  ))
  .map_err(|e| Error::Config(format!("bad log filter: {}", e)))?;

  let file = OpenOptions::new().create(true).append(true).open(path)?;
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file)),
    )
    .with(filter)
    .try_init()
    .map_err(|e| Error::Config(format!("logging already initialized: {}", e)))?;
  Ok(true)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn env_overrides_config() {
    assert_eq!(
      directives(Some("lantern=trace".into()), "lantern=info"),
      "lantern=trace"
    );
    assert_eq!(directives(None, "lantern=info"), "lantern=info");
    assert_eq!(directives(Some("  ".into()), "lantern=warn"), "lantern=warn");
  }

  #[test]
  fn no_file_no_logging() {
    assert!(!init(&LogSettings::default()).unwrap());
  }
}
