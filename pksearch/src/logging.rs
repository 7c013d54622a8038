//! Logging setup.
//!
//! While the UI is up the terminal belongs to it, so logs go to a file.
//! Headless runs log to stderr instead. Either way `RUST_LOG` picks the
//! filter.

use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context as _;
use anyhow::Result;

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "pkinfo=info,pksearch=info";

/// Returns where the UI logs to by default, if the platform has a cache
/// directory.
pub fn default_path() -> Option<PathBuf> {
  let mut path = dirs::cache_dir()?;
  path.push("pksearch");
  path.push("pksearch.log");
  Some(path)
}

fn filter() -> EnvFilter {
  EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Sends logs to the file at `path`, truncating it.
pub fn to_file(path: &Path) -> Result<()> {
  if let Some(dir) = path.parent() {
    fs::create_dir_all(dir)
      .with_context(|| format!("could not create {}", dir.display()))?;
  }
  let file = File::create(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(filter())
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(anyhow::Error::msg)
}

/// Sends logs to stderr.
pub fn to_stderr() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(filter())
    .with_writer(std::io::stderr)
    .try_init()
    .map_err(anyhow::Error::msg)
}
