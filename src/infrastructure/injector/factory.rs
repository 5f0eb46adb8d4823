//! Injector backend selection

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::application::ports::{InjectorError, InputInjector};

use super::enigo::EnigoInjector;
use super::noop::NoOpInjector;
#[cfg(windows)]
use super::win32::Win32Injector;

/// Available injector backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectorBackend {
    /// Windows: user32 input primitives
    Native,
    /// Cross-platform enigo library
    Enigo,
    /// Discard every event
    NoOp,
}

impl InjectorBackend {
    /// Whether the backend can be built on this platform
    pub const fn is_supported(self) -> bool {
        match self {
            InjectorBackend::Native => cfg!(windows),
            InjectorBackend::Enigo | InjectorBackend::NoOp => true,
        }
    }
}

/// Valid backend names
pub const VALID_BACKENDS: &[&str] = &["native", "enigo", "noop"];

impl fmt::Display for InjectorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectorBackend::Native => write!(f, "native"),
            InjectorBackend::Enigo => write!(f, "enigo"),
            InjectorBackend::NoOp => write!(f, "noop"),
        }
    }
}

/// Error type for parsing an injector backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid input backend '{}'. Valid options: {}",
            self.value,
            VALID_BACKENDS.join(", ")
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for InjectorBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(InjectorBackend::Native),
            "enigo" => Ok(InjectorBackend::Enigo),
            "noop" | "none" => Ok(InjectorBackend::NoOp),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create an injector for the given backend.
///
/// `native` fails on non-Windows platforms; `enigo` fails when it cannot
/// reach the input system (e.g. no display).
pub fn create_injector(backend: InjectorBackend) -> Result<Box<dyn InputInjector>, InjectorError> {
    debug!(%backend, "creating input injector");

    match backend {
        #[cfg(windows)]
        InjectorBackend::Native => Ok(Box::new(Win32Injector::new())),
        #[cfg(not(windows))]
        InjectorBackend::Native => Err(InjectorError::BackendUnavailable(backend.to_string())),
        InjectorBackend::Enigo => {
            let injector = EnigoInjector::new();
            injector.probe()?;
            Ok(Box::new(injector))
        }
        InjectorBackend::NoOp => Ok(Box::new(NoOpInjector::new())),
    }
}
