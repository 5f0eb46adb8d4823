//! Input facade use case
//!
//! Turns "click", "press this key" and friends into native injection calls
//! separated by synchronous pauses.

use tracing::debug;

use crate::domain::input::{
    Delay, KeyStateMask, KeyboardEventFlags, MouseButton, MouseEventFlags, ScanCode, VirtualKey,
};

use super::ports::{InputInjector, Pause};

/// Stateless front over an [`InputInjector`].
///
/// Every operation runs on the calling thread. Compound operations block
/// for their delay; none of them can be cancelled or report failure.
pub struct InputFacade<I, P> {
    injector: I,
    pause: P,
    scan_code: ScanCode,
}

impl<I: InputInjector, P: Pause> InputFacade<I, P> {
    /// Create a facade sending the default scan code with keyboard events.
    pub fn new(injector: I, pause: P) -> Self {
        Self {
            injector,
            pause,
            scan_code: ScanCode::DEFAULT,
        }
    }

    /// Override the scan code sent with keyboard events.
    pub fn with_scan_code(mut self, scan_code: ScanCode) -> Self {
        self.scan_code = scan_code;
        self
    }

    pub fn scan_code(&self) -> ScanCode {
        self.scan_code
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }

    /// Whether `key`'s async state word has any bit of `mask` set.
    pub fn is_key_pressed(&self, key: VirtualKey, mask: KeyStateMask) -> bool {
        let state = self.injector.async_key_state(key);
        mask.matches(state)
    }

    /// Move the pointer by (`x`, `y`).
    pub fn move_cursor(&self, x: i32, y: i32) {
        debug!(x, y, "move cursor");
        self.mouse(MouseEventFlags::MOVE, x, y);
    }

    /// Button down, wait `delay`, button up.
    pub fn click(&self, button: MouseButton, delay: Delay) {
        debug!(%button, %delay, "click");
        self.mouse(button.down_flag(), 0, 0);
        self.pause.pause(delay);
        self.mouse(button.up_flag(), 0, 0);
    }

    pub fn click_left(&self, delay: Delay) {
        self.click(MouseButton::Left, delay);
    }

    pub fn click_right(&self, delay: Delay) {
        self.click(MouseButton::Right, delay);
    }

    pub fn click_middle(&self, delay: Delay) {
        self.click(MouseButton::Middle, delay);
    }

    /// Key down, wait `delay`, key up.
    pub fn press_key(&self, key: VirtualKey, delay: Delay) {
        debug!(%key, %delay, "press key");
        self.keyboard(key, KeyboardEventFlags::KEYDOWN);
        self.pause.pause(delay);
        self.keyboard(key, KeyboardEventFlags::KEYUP);
    }

    /// Wait `delay`, then a single key down.
    pub fn key_down(&self, key: VirtualKey, delay: Delay) {
        debug!(%key, %delay, "key down");
        self.pause.pause(delay);
        self.keyboard(key, KeyboardEventFlags::KEYDOWN);
    }

    /// Wait `delay`, then a single key up.
    pub fn key_up(&self, key: VirtualKey, delay: Delay) {
        debug!(%key, %delay, "key up");
        self.pause.pause(delay);
        self.keyboard(key, KeyboardEventFlags::KEYUP);
    }

    fn mouse(&self, flags: MouseEventFlags, dx: i32, dy: i32) {
        self.injector.mouse_event(flags, dx, dy, 0, 0);
    }

    fn keyboard(&self, key: VirtualKey, flags: KeyboardEventFlags) {
        self.injector.keybd_event(key, self.scan_code, flags, 0);
    }
}
