//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the host input system and the filesystem.

pub mod config;
pub mod injector;
pub mod pause;

// Re-export adapters
pub use config::XdgConfigStore;
pub use injector::{
    create_injector, EnigoInjector, InjectorBackend, NoOpInjector, RecordedCall, RecordedEvent,
    RecordingInjector,
};
#[cfg(windows)]
pub use injector::Win32Injector;
pub use pause::ThreadPause;
