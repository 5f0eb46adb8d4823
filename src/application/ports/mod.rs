//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod injector;
pub mod pause;

// Re-export common types
pub use config::ConfigStore;
pub use injector::{InjectorError, InputInjector};
pub use pause::Pause;
