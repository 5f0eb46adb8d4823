//! Application configuration value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DelayParseError, ScanCodeParseError};
use crate::domain::input::{Delay, ScanCode};

/// Injector backend used when none is configured.
#[cfg(windows)]
pub const DEFAULT_BACKEND: &str = "native";
#[cfg(not(windows))]
pub const DEFAULT_BACKEND: &str = "enigo";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: Option<String>,
    pub scan_code: Option<String>,
    pub click_delay: Option<String>,
    pub key_delay: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some(DEFAULT_BACKEND.to_string()),
            scan_code: Some(ScanCode::DEFAULT.to_string()),
            click_delay: Some(Delay::ZERO.to_string()),
            key_delay: Some(Delay::ZERO.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            scan_code: other.scan_code.or(self.scan_code),
            click_delay: other.click_delay.or(self.click_delay),
            key_delay: other.key_delay.or(self.key_delay),
        }
    }

    /// Get backend name, or the platform default if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }

    /// Parse the scan code; unset means `ScanCode::DEFAULT`
    pub fn parse_scan_code(&self) -> Result<ScanCode, ScanCodeParseError> {
        parse_or_default(self.scan_code.as_deref())
    }

    /// Parse the click delay; unset means zero
    pub fn parse_click_delay(&self) -> Result<Delay, DelayParseError> {
        parse_or_default(self.click_delay.as_deref())
    }

    /// Parse the key delay; unset means zero
    pub fn parse_key_delay(&self) -> Result<Delay, DelayParseError> {
        parse_or_default(self.key_delay.as_deref())
    }
}

fn parse_or_default<T: FromStr + Default>(value: Option<&str>) -> Result<T, T::Err> {
    value.map_or_else(|| Ok(T::default()), str::parse)
}
