//! Input injector port interface

use std::sync::Arc;

use thiserror::Error;

use crate::domain::input::{KeyboardEventFlags, MouseEventFlags, ScanCode, VirtualKey};

/// Injector construction errors
#[derive(Debug, Clone, Error)]
pub enum InjectorError {
    #[error("Input backend '{0}' is not available on this platform")]
    BackendUnavailable(String),

    #[error("Failed to initialize input backend: {0}")]
    InitFailed(String),
}

/// Port for the host's native input primitives.
///
/// Calls are synchronous and report nothing back: a failing primitive is
/// indistinguishable from a successful one.
pub trait InputInjector: Send + Sync {
    /// Raw state word of the asynchronous key-state query for `key`.
    fn async_key_state(&self, key: VirtualKey) -> i16;

    /// Synthesize a pointer event.
    ///
    /// `data` and `extra_info` are reserved and always zero from the facade.
    fn mouse_event(&self, flags: MouseEventFlags, dx: i32, dy: i32, data: i32, extra_info: usize);

    /// Synthesize a keyboard event.
    fn keybd_event(
        &self,
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    );
}

impl<T: InputInjector + ?Sized> InputInjector for &T {
    fn async_key_state(&self, key: VirtualKey) -> i16 {
        (**self).async_key_state(key)
    }

    fn mouse_event(&self, flags: MouseEventFlags, dx: i32, dy: i32, data: i32, extra_info: usize) {
        (**self).mouse_event(flags, dx, dy, data, extra_info)
    }

    fn keybd_event(
        &self,
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    ) {
        (**self).keybd_event(key, scan, flags, extra_info)
    }
}

impl<T: InputInjector + ?Sized> InputInjector for Box<T> {
    fn async_key_state(&self, key: VirtualKey) -> i16 {
        (**self).async_key_state(key)
    }

    fn mouse_event(&self, flags: MouseEventFlags, dx: i32, dy: i32, data: i32, extra_info: usize) {
        (**self).mouse_event(flags, dx, dy, data, extra_info)
    }

    fn keybd_event(
        &self,
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    ) {
        (**self).keybd_event(key, scan, flags, extra_info)
    }
}

impl<T: InputInjector + ?Sized> InputInjector for Arc<T> {
    fn async_key_state(&self, key: VirtualKey) -> i16 {
        (**self).async_key_state(key)
    }

    fn mouse_event(&self, flags: MouseEventFlags, dx: i32, dy: i32, data: i32, extra_info: usize) {
        (**self).mouse_event(flags, dx, dy, data, extra_info)
    }

    fn keybd_event(
        &self,
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    ) {
        (**self).keybd_event(key, scan, flags, extra_info)
    }
}
