//! No-op injector adapter

use crate::application::ports::InputInjector;
use crate::domain::input::{KeyboardEventFlags, MouseEventFlags, ScanCode, VirtualKey};

/// No-op injector that does nothing
///
/// Used for dry runs or where no input system is reachable.
/// Every key reads as released.
pub struct NoOpInjector;

impl NoOpInjector {
    /// Create a new no-op injector
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputInjector for NoOpInjector {
    fn async_key_state(&self, _key: VirtualKey) -> i16 {
        0
    }

    fn mouse_event(
        &self,
        _flags: MouseEventFlags,
        _dx: i32,
        _dy: i32,
        _data: i32,
        _extra_info: usize,
    ) {
    }

    fn keybd_event(
        &self,
        _key: VirtualKey,
        _scan: ScanCode,
        _flags: KeyboardEventFlags,
        _extra_info: usize,
    ) {
    }
}
