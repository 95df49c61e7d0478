use serde::Deserialize;
use std::path::PathBuf;

/// Output locations, loaded from `RECS_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where recommendations are written (`RECS_OUTPUT_PATH`)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Where a catalog error is written (`RECS_ERROR_PATH`)
    #[serde(default = "default_error_path")]
    pub error_path: PathBuf,
}

const ENV_PREFIX: &str = "RECS_";

fn default_output_path() -> PathBuf {
    PathBuf::from("samples/recommendations.txt")
}

fn default_error_path() -> PathBuf {
    PathBuf::from("samples/errors.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            error_path: default_error_path(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
