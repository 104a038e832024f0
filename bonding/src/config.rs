//! Checkpoint store configuration with TOML file support.

use ckpt_types::{Address, CheckpointParams};
use ckpt_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::CheckpointError;

/// Configuration for a checkpoint store.
///
/// Can be loaded from a TOML file via [`CheckpointConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointConfig {
    /// The only address allowed to write checkpoints.
    pub writer: Address,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write horizons and the reward-factor divisor.
    #[serde(default)]
    pub params: CheckpointParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CheckpointConfig {
    pub fn new(writer: Address) -> Self {
        Self {
            writer,
            params: CheckpointParams::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, CheckpointError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CheckpointError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CheckpointError> {
        let config: Self = toml::from_str(s).map_err(|e| CheckpointError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CheckpointError> {
        toml::to_string_pretty(self).map_err(|e| CheckpointError::Config(e.to_string()))
    }

    /// Reject values the store cannot operate with.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.params.perc_divisor == 0 {
            return Err(CheckpointError::Config("perc_divisor must be non-zero".to_string()));
        }
        self.log_format()?;
        Ok(())
    }

    /// The parsed log format.
    pub fn log_format(&self) -> Result<LogFormat, CheckpointError> {
        self.log_format
            .parse()
            .map_err(|e: ckpt_utils::UnknownLogFormat| CheckpointError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), CheckpointError> {
        ckpt_utils::init_logging(self.log_format()?, &self.log_level)
            .map_err(|e| CheckpointError::Config(e.to_string()))
    }
}
