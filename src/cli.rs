use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "dogview", author, version, about = "Random dog pictures in your terminal", long_about = None)]
pub struct Args {
    /// Config file path (default: <config dir>/dogview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the random-image endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Fetch a single dog, print it and exit
    #[arg(long)]
    pub once: bool,

    /// Print the --once result as JSON
    #[arg(long, requires = "once")]
    pub json: bool,
}

impl Args {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match &self.endpoint {
            Some(endpoint) => config.with_endpoint(endpoint.clone()),
            None => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive_mode() {
        let args = Args::try_parse_from(["dogview"]).unwrap();
        assert!(!args.once);
        assert!(!args.json);
        assert!(args.config.is_none());
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn json_requires_once() {
        assert!(Args::try_parse_from(["dogview", "--json"]).is_err());
        let args = Args::try_parse_from(["dogview", "--once", "--json"]).unwrap();
        assert!(args.once && args.json);
    }

    #[test]
    fn endpoint_override_replaces_file_value() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = Args::try_parse_from([
            "dogview",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--endpoint",
            "http://127.0.0.1:9/api/breeds/image/random",
        ])
        .unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(
            config.api.endpoint,
            "http://127.0.0.1:9/api/breeds/image/random"
        );
    }

    #[test]
    fn invalid_endpoint_override_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = Args::try_parse_from([
            "dogview",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--endpoint",
            "not a url",
        ])
        .unwrap();
        assert!(matches!(
            args.resolve_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
