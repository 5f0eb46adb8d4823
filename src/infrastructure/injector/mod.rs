//! Injector infrastructure module
//!
//! Provides the native Win32 injector on Windows, the cross-platform enigo
//! injector everywhere, and no-op / recording doubles.

mod enigo;
mod factory;
mod noop;
mod recording;
#[cfg(windows)]
mod win32;

pub use self::enigo::EnigoInjector;
pub use factory::{create_injector, InjectorBackend, ParseBackendError, VALID_BACKENDS};
pub use noop::NoOpInjector;
pub use recording::{RecordedCall, RecordedEvent, RecordingInjector};
#[cfg(windows)]
pub use win32::Win32Injector;
