//! Engine configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with SYNQ_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values
//!
//! ```yaml
//! policy: strict
//! self_inverse: [ORACLE]
//! negate_parameter: [RTHETA]
//! pairs:
//!   QFT: IQFT
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::adjoint::{AdjointPolicy, AdjointRule, AdjointTable};

/// Environment variable overriding [`EngineConfig::policy`].
pub const POLICY_ENV: &str = "SYNQ_ADJOINT_POLICY";

/// Transformation engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// What `invert` does with gates that have no adjoint rule.
    #[serde(default)]
    pub policy: AdjointPolicy,

    /// Start from an empty table instead of the standard gate set.
    #[serde(default)]
    pub no_defaults: bool,

    /// Extra self-inverse gates.
    #[serde(default)]
    pub self_inverse: Vec<String>,

    /// Extra rotation-style gates whose adjoint negates the parameter.
    #[serde(default)]
    pub negate_parameter: Vec<String>,

    /// Extra adjoint pairs, registered in both directions.
    #[serde(default)]
    pub pairs: BTreeMap<String, String>,
}

impl EngineConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_yaml_str(&contents)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        EngineConfig::default().merge_env()
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_file {
            Self::from_file(path)?
        } else {
            EngineConfig::default()
        };

        let config = config.merge_env()?;
        config.validate()?;
        debug!(policy = ?config.policy, "Loaded engine configuration");
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that are explicitly set override the current values.
    fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(v) = std::env::var(POLICY_ENV) {
            self.policy = parse_policy(&v)?;
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = self
            .self_inverse
            .iter()
            .chain(&self.negate_parameter)
            .chain(self.pairs.keys())
            .chain(self.pairs.values());
        for name in names {
            if name.is_empty() {
                return Err(ConfigError::ValidationError(
                    "gate names in adjoint rules must not be empty".to_string(),
                ));
            }
        }

        if let Some(gate) = self
            .self_inverse
            .iter()
            .find(|gate| self.negate_parameter.contains(*gate))
        {
            return Err(ConfigError::ValidationError(format!(
                "gate {gate} is listed as both self_inverse and negate_parameter"
            )));
        }

        Ok(())
    }

    /// Build the adjoint table described by this configuration.
    pub fn adjoint_table(&self) -> Result<AdjointTable, ConfigError> {
        self.validate()?;

        let mut table = if self.no_defaults {
            AdjointTable::new()
        } else {
            AdjointTable::standard()
        };
        table.set_policy(self.policy);

        for gate in &self.self_inverse {
            table
                .insert(gate.clone(), AdjointRule::SelfInverse)
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        for gate in &self.negate_parameter {
            table
                .insert(gate.clone(), AdjointRule::NegateParameter)
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        for (a, b) in &self.pairs {
            table
                .insert_pair(a.clone(), b.clone())
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }

        Ok(table)
    }
}

fn parse_policy(value: &str) -> Result<AdjointPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(AdjointPolicy::Strict),
        "lenient" => Ok(AdjointPolicy::Lenient),
        other => Err(ConfigError::ValidationError(format!(
            "Invalid adjoint policy: {other}"
        ))),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
