//! Client configuration.
//!
//! Settings are layered: built-in defaults, then an optional JSON file, then
//! environment variables. Front-ends may apply their own overrides (such as
//! command-line flags) on top by mutating the fields directly.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::api;
use crate::api::Api;
use crate::api::Options;

/// Environment variable overriding [`Config::base_url`].
pub const BASE_URL_VAR: &str = "PKSEARCH_BASE_URL";
/// Environment variable overriding [`Config::timeout_secs`].
pub const TIMEOUT_VAR: &str = "PKSEARCH_TIMEOUT_SECS";

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// The origin serving `/api/pokemon-info` and `/api/evolution`.
  pub base_url: String,
  /// Per-request timeout, in seconds. Zero disables the timeout.
  pub timeout_secs: u64,
}

/// A configuration file. Every field is optional; absent fields keep their
/// previous value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
  base_url: Option<String>,
  timeout_secs: Option<u64>,
}

/// A [`Config`] loading error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum ConfigError {
  #[error("could not read config file {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("malformed config file {}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid value {value:?} for {var}")]
  Env { var: &'static str, value: String },
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: api::DEFAULT_BASE_URL.to_string(),
      timeout_secs: 10,
    }
  }
}

impl Config {
  /// Returns where the configuration file lives by default, if the platform
  /// has a configuration directory.
  pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("pksearch");
    path.push("config.json");
    Some(path)
  }

  /// Loads the configuration from defaults, the file at `path` (or
  /// [`Config::default_path()`]), and the process environment.
  pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    let path = path.map(Path::to_path_buf).or_else(Self::default_path);
    if let Some(path) = path {
      config.apply_file(&path)?;
    }

    config.apply_env(|var| env::var(var).ok())?;
    Ok(config)
  }

  /// Overlays the JSON file at `path`. A missing file leaves `self` as is.
  pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
    let bytes = match fs::read(path) {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        tracing::debug!(path = %path.display(), "no config file");
        return Ok(());
      }
      Err(source) => {
        return Err(ConfigError::Read {
          path: path.to_path_buf(),
          source,
        })
      }
    };

    let file: ConfigFile =
      serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
      })?;

    if let Some(base_url) = file.base_url {
      self.set_base_url(&base_url);
    }
    if let Some(timeout_secs) = file.timeout_secs {
      self.timeout_secs = timeout_secs;
    }
    Ok(())
  }

  /// Overlays environment variables, as looked up by `var`.
  pub fn apply_env(
    &mut self,
    var: impl Fn(&str) -> Option<String>,
  ) -> Result<(), ConfigError> {
    if let Some(base_url) = var(BASE_URL_VAR) {
      if !base_url.trim().is_empty() {
        self.set_base_url(&base_url);
      }
    }

    if let Some(value) = var(TIMEOUT_VAR) {
      self.timeout_secs =
        value.trim().parse().map_err(|_| ConfigError::Env {
          var: TIMEOUT_VAR,
          value,
        })?;
    }
    Ok(())
  }

  /// Sets the base URL, dropping any trailing slashes.
  pub fn set_base_url(&mut self, base_url: &str) {
    self.base_url = base_url.trim().trim_end_matches('/').to_string();
  }

  /// Returns the per-request timeout, if there is one.
  pub fn timeout(&self) -> Option<Duration> {
    match self.timeout_secs {
      0 => None,
      secs => Some(Duration::from_secs(secs)),
    }
  }

  /// Builds an [`Api`] client from these settings.
  pub fn api(&self) -> Result<Api, api::Error> {
    Api::with_options(Options {
      base_url: self.base_url.clone(),
      timeout: self.timeout(),
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;
  use std::io::Write as _;

  use super::*;

  fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
      .iter()
      .map(|&(k, v)| (k.to_string(), v.to_string()))
      .collect::<HashMap<_, _>>();
    move |var| map.get(var).cloned()
  }

  #[test]
  fn defaults_point_at_public_backend() {
    let config = Config::default();
    assert_eq!(config.base_url, "https://pokeapi-backend-jdom.onrender.com");
    assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.apply_file(&dir.path().join("nope.json")).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"base_url": "http://localhost:3000/"}}"#).unwrap();

    let mut config = Config::default();
    config.apply_file(file.path()).unwrap();
    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout_secs, 10);
  }

  #[test]
  fn malformed_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"base_url": 7}}"#).unwrap();

    let err = Config::default().apply_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"base_uri": "http://typo"}}"#).unwrap();

    let err = Config::default().apply_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
  }

  #[test]
  fn env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"base_url": "http://file", "timeout_secs": 3}}"#)
      .unwrap();

    let mut config = Config::default();
    config.apply_file(file.path()).unwrap();
    config
      .apply_env(env(&[(BASE_URL_VAR, "http://env/"), (TIMEOUT_VAR, "0")]))
      .unwrap();

    assert_eq!(config.base_url, "http://env");
    assert_eq!(config.timeout(), None);
  }

  #[test]
  fn bad_timeout_in_env_is_reported() {
    let err = Config::default()
      .apply_env(env(&[(TIMEOUT_VAR, "soon")]))
      .unwrap_err();
    assert!(matches!(err, ConfigError::Env { var: TIMEOUT_VAR, .. }));
  }
}
