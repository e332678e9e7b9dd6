//! Harness configuration.
//!
//! Loaded from an optional YAML file and `RBINDEX_TEST__*` environment
//! overrides, falling back to the values the randomized suite was tuned with.

use ::config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::HarnessError;

/// Environment variable for the configuration file path.
pub const CONFIG_ENV_VAR: &str = "RBINDEX_TEST_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "RBINDEX_TEST";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "RBINDEX_LOG";

/// Initial state of the operation generator.
pub const DEFAULT_SEED: u32 = 0xdead_beef;
/// Largest node count driven by the randomized suite.
pub const DEFAULT_MAX_NODES: usize = 31;

/// Randomized harness settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Seed of the linear congruential generator.
    pub seed: u32,
    /// Runs cover every node count from 1 up to this.
    pub max_nodes: usize,
    /// Check every invariant after each step, not only at the end.
    pub verify_each_step: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_nodes: DEFAULT_MAX_NODES,
            verify_each_step: true,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from file and environment.
    ///
    /// Sources, later overriding earlier:
    /// 1. File named by `CONFIG_ENV_VAR` (if set)
    /// 2. Environment variables with the `CONFIG_ENV_PREFIX` prefix
    pub fn load() -> Result<Self, HarnessError> {
        let mut builder = Config::builder();

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: HarnessConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, HarnessError> {
        let config: HarnessConfig = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), HarnessError> {
        if self.max_nodes == 0 {
            return Err(HarnessError::NoNodes);
        }
        Ok(())
    }
}
