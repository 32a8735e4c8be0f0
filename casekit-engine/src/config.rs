//! Configuration types for the engine

use crate::error::{EngineError, Result};

/// What the batch transformer records for a transform that panicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Store three diagnostic lines in place of the output
    Diagnostic,
    /// Leave the entry out of the results
    Omit,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            FailurePolicy::Diagnostic
        } else {
            FailurePolicy::Omit
        }
    }
}

impl std::str::FromStr for FailurePolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "diagnostic" => Ok(FailurePolicy::Diagnostic),
            "omit" => Ok(FailurePolicy::Omit),
            other => Err(EngineError::ConfigError(format!(
                "unknown failure policy '{other}' (expected 'diagnostic' or 'omit')"
            ))),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Handling of failed transforms
    pub failure_policy: FailurePolicy,
}

impl EngineConfig {
    /// Start a builder from the defaults
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Configuration that keeps failures visible in the results
    pub fn diagnostic() -> Self {
        Self {
            failure_policy: FailurePolicy::Diagnostic,
        }
    }
}

/// Builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set the failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Set the failure policy from its name
    pub fn failure_policy_name(mut self, name: &str) -> Result<Self> {
        self.config.failure_policy = name.parse()?;
        Ok(self)
    }

    /// Finish the configuration
    pub fn build(self) -> Result<EngineConfig> {
        Ok(self.config)
    }
}
