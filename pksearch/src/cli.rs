//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use pkinfo::Config;

/// Search for Pokémon and browse their evolutionary lines.
#[derive(Parser, Debug)]
#[command(name = "pksearch", version, about)]
pub struct Cli {
  /// Pokémon to search for on startup.
  pub name: Option<String>,

  /// Print the result as plain text and exit, instead of starting the UI.
  #[arg(long, requires = "name")]
  pub print: bool,

  /// Backend to talk to, overriding the config file and environment.
  #[arg(long, value_name = "URL")]
  pub base_url: Option<String>,

  /// Per-request timeout in seconds; 0 disables it.
  #[arg(long, value_name = "SECS")]
  pub timeout: Option<u64>,

  /// Config file to read instead of the default one.
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Where the UI writes its log.
  #[arg(long, value_name = "PATH")]
  pub log_file: Option<PathBuf>,
}

impl Cli {
  /// Applies flags on top of `config`.
  pub fn apply(&self, config: &mut Config) {
    if let Some(base_url) = &self.base_url {
      config.set_base_url(base_url);
    }
    if let Some(timeout) = self.timeout {
      config.timeout_secs = timeout;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_override_config() {
    let cli = Cli::parse_from([
      "pksearch",
      "--base-url",
      "http://localhost:3000/",
      "--timeout",
      "0",
      "pikachu",
    ]);
    assert_eq!(cli.name.as_deref(), Some("pikachu"));

    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout(), None);
  }

  #[test]
  fn absent_flags_keep_config() {
    let cli = Cli::parse_from(["pksearch"]);
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
  }

  #[test]
  fn print_needs_a_name() {
    assert!(Cli::try_parse_from(["pksearch", "--print"]).is_err());
    assert!(Cli::try_parse_from(["pksearch", "--print", "ditto"]).is_ok());
  }
}
