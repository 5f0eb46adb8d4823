//! Domain error types

use thiserror::Error;

/// Error when parsing a delay string
#[derive(Debug, Clone, Error)]
#[error("Invalid delay format: \"{input}\". Expected milliseconds or <number>ms, <number>s, <number>m (e.g., 50, 50ms, 2s, 1s500ms)")]
pub struct DelayParseError {
    pub input: String,
}

/// Error when parsing a virtual-key code
#[derive(Debug, Clone, Error)]
#[error("Invalid key: \"{input}\". Expected a code (65, 0x41), a single letter or digit, or a key name (enter, space, shift, ctrl, alt, tab, escape, backspace, f1-f12)")]
pub struct KeyParseError {
    pub input: String,
}

/// Error when parsing a key-state mask
#[derive(Debug, Clone, Error)]
#[error("Invalid key-state mask: \"{input}\". Valid masks are: down, pressed, any, or a 16-bit code")]
pub struct MaskParseError {
    pub input: String,
}

/// Error when parsing a hardware scan code
#[derive(Debug, Clone, Error)]
#[error("Invalid scan code: \"{input}\". Expected a byte value (e.g., 69 or 0x45)")]
pub struct ScanCodeParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
