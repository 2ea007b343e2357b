use nodejoin_config::constants::{NODEJOIN_PARAMS_FILE, NODEJOIN_TOKEN};
use nodejoin_core::{BootstrapParams, DiscoveryParams};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read params file {path}: {source}")]
    ParamsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse params file {path}: {source}")]
    ParamsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub given_token: Option<String>,
    pub params_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let given_token = env::var(NODEJOIN_TOKEN)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let params_file = env::var(NODEJOIN_PARAMS_FILE)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Config {
            given_token,
            params_file,
        }
    }

    /// Pick the discovery record to validate.
    ///
    /// Precedence: explicit token argument, explicit params file,
    /// `NODEJOIN_TOKEN`, then `NODEJOIN_PARAMS_FILE`. With none of them set the
    /// record is empty and there is nothing to validate.
    pub fn discovery_params(
        &self,
        token: Option<&str>,
        params_file: Option<&Path>,
    ) -> Result<DiscoveryParams, ConfigError> {
        if let Some(token) = token {
            return Ok(DiscoveryParams::with_given_token(token));
        }
        if let Some(path) = params_file {
            return Ok(load_params(path)?.discovery);
        }
        if let Some(token) = &self.given_token {
            return Ok(DiscoveryParams::with_given_token(token.as_str()));
        }
        if let Some(path) = &self.params_file {
            return Ok(load_params(path)?.discovery);
        }
        Ok(DiscoveryParams::default())
    }
}

/// Load bootstrap parameters from a JSON file
pub fn load_params(path: &Path) -> Result<BootstrapParams, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ParamsRead {
        path: path.to_path_buf(),
        source,
    })?;

    BootstrapParams::from_json(&contents).map_err(|source| ConfigError::ParamsParse {
        path: path.to_path_buf(),
        source,
    })
}
