//! Cross-platform injector adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11). Keyboard events go through
//! `Keyboard::raw`, so key codes are interpreted by the platform: virtual-key
//! codes on Windows, keycodes elsewhere.

use enigo::{Button, Coordinate, Direction, Enigo, InputResult, Keyboard, Mouse, Settings};
use tracing::debug;

use crate::application::ports::{InjectorError, InputInjector};
use crate::domain::input::{KeyboardEventFlags, MouseEventFlags, ScanCode, VirtualKey};

const BUTTON_FLAGS: [(MouseEventFlags, Button, Direction); 6] = [
    (MouseEventFlags::LEFTDOWN, Button::Left, Direction::Press),
    (MouseEventFlags::LEFTUP, Button::Left, Direction::Release),
    (MouseEventFlags::RIGHTDOWN, Button::Right, Direction::Press),
    (MouseEventFlags::RIGHTUP, Button::Right, Direction::Release),
    (MouseEventFlags::MIDDLEDOWN, Button::Middle, Direction::Press),
    (MouseEventFlags::MIDDLEUP, Button::Middle, Direction::Release),
];

/// Cross-platform injector adapter using enigo
///
/// A connection is opened per event, so held keys survive between calls.
pub struct EnigoInjector {
    settings: Settings,
}

impl EnigoInjector {
    /// Create a new enigo injector
    pub fn new() -> Self {
        Self {
            settings: Settings {
                release_keys_when_dropped: false,
                ..Settings::default()
            },
        }
    }

    /// Check that enigo can reach the input system.
    pub fn probe(&self) -> Result<(), InjectorError> {
        Enigo::new(&self.settings)
            .map(drop)
            .map_err(|e| InjectorError::InitFailed(format!("Failed to create enigo: {}", e)))
    }

    fn with_enigo(&self, what: &str, op: impl FnOnce(&mut Enigo) -> InputResult<()>) {
        match Enigo::new(&self.settings) {
            Ok(mut enigo) => {
                if let Err(e) = op(&mut enigo) {
                    debug!(error = %e, "enigo {} failed", what);
                }
            }
            Err(e) => debug!(error = %e, "enigo unavailable for {}", what),
        }
    }
}

impl Default for EnigoInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputInjector for EnigoInjector {
    fn async_key_state(&self, key: VirtualKey) -> i16 {
        debug!(%key, "enigo cannot query key state, reporting released");
        0
    }

    fn mouse_event(
        &self,
        flags: MouseEventFlags,
        dx: i32,
        dy: i32,
        _data: i32,
        _extra_info: usize,
    ) {
        self.with_enigo("mouse event", |enigo| {
            if flags.contains(MouseEventFlags::MOVE) {
                enigo.move_mouse(dx, dy, Coordinate::Rel)?;
            }
            for (flag, button, direction) in BUTTON_FLAGS {
                if flags.contains(flag) {
                    enigo.button(button, direction)?;
                }
            }
            Ok(())
        });
    }

    fn keybd_event(
        &self,
        key: VirtualKey,
        _scan: ScanCode,
        flags: KeyboardEventFlags,
        _extra_info: usize,
    ) {
        let direction = if flags.is_key_up() {
            Direction::Release
        } else {
            Direction::Press
        };
        self.with_enigo("keyboard event", |enigo| {
            enigo.raw(u16::from(key.code()), direction)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injector_creates_successfully() {
        let _injector = EnigoInjector::new();
    }

    #[test]
    fn injector_default_creates() {
        let _injector = EnigoInjector::default();
    }

    #[test]
    fn key_state_reports_released() {
        let injector = EnigoInjector::new();
        assert_eq!(injector.async_key_state(VirtualKey::SHIFT), 0);
    }

    #[test]
    fn every_button_flag_is_mapped() {
        let mapped = BUTTON_FLAGS
            .iter()
            .fold(MouseEventFlags::empty(), |acc, (flag, _, _)| acc | *flag);
        assert_eq!(mapped, MouseEventFlags::all() - MouseEventFlags::MOVE);
    }
}
