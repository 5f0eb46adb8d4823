//! Domain layer - Input value objects
//!
//! Contains keys, event flags, delays, configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod input;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use input::{
    Delay, KeyStateMask, KeyboardEventFlags, MouseButton, MouseEventFlags, ScanCode, VirtualKey,
};
