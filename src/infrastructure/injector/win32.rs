//! Win32 injector adapter
//!
//! Forwards straight to `GetAsyncKeyState`, `mouse_event` and `keybd_event`
//! in user32.

use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    keybd_event, mouse_event, GetAsyncKeyState,
};

use crate::application::ports::InputInjector;
use crate::domain::input::{KeyboardEventFlags, MouseEventFlags, ScanCode, VirtualKey};

/// Native Windows injector
pub struct Win32Injector;

impl Win32Injector {
    /// Create a new Win32 injector
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputInjector for Win32Injector {
    fn async_key_state(&self, key: VirtualKey) -> i16 {
        // SAFETY: takes a plain integer and touches no caller memory.
        unsafe { GetAsyncKeyState(i32::from(key.code())) }
    }

    fn mouse_event(&self, flags: MouseEventFlags, dx: i32, dy: i32, data: i32, extra_info: usize) {
        // SAFETY: all arguments are plain values.
        unsafe { mouse_event(flags.bits(), dx, dy, data, extra_info) }
    }

    fn keybd_event(
        &self,
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    ) {
        // SAFETY: all arguments are plain values.
        unsafe { keybd_event(key.code(), scan.code(), flags.bits(), extra_info) }
    }
}
