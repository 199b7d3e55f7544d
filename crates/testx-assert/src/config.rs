use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use testx_core::errors::{ErrorInfo, TestxError};

use crate::float::almost_equal;

fn config_error(code: &str, message: impl Into<String>) -> TestxError {
    TestxError::Config(ErrorInfo::new(code, message.into()))
}

/// Run configuration consulted by [`crate::skip`] and tolerance checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestConfig {
    /// Whether long-running tests should skip themselves.
    #[serde(default)]
    pub short: bool,
    /// Default tolerance used by [`TestConfig::almost_equal`].
    #[serde(default = "TestConfig::default_delta")]
    pub delta: f64,
}

impl TestConfig {
    const fn default_delta() -> f64 {
        1e-9
    }

    /// Returns the default configuration with short mode enabled.
    pub fn short_mode() -> Self {
        Self {
            short: true,
            ..Self::default()
        }
    }

    /// Decodes and validates a configuration from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, TestxError> {
        let config: Self = serde_json::from_slice(bytes)
            .map_err(|err| config_error("decode", format!("invalid test config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TestxError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            TestxError::Config(
                ErrorInfo::new("io", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Checks that the tolerance is a non-negative number.
    pub fn validate(&self) -> Result<(), TestxError> {
        if self.delta.is_nan() || self.delta < 0.0 {
            return Err(TestxError::Config(
                ErrorInfo::new("invalid-delta", "delta must be a non-negative number")
                    .with_context("delta", self.delta.to_string()),
            ));
        }
        Ok(())
    }

    /// Compares two floats using the configured [`TestConfig::delta`].
    pub fn almost_equal(&self, lhs: f64, rhs: f64) -> bool {
        almost_equal(lhs, rhs, self.delta)
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            short: false,
            delta: Self::default_delta(),
        }
    }
}
