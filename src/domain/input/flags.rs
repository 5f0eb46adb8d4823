//! Event flags for mouse and keyboard injection

use std::fmt;

bitflags::bitflags! {
    /// Mouse event bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseEventFlags: u32 {
        const MOVE       = 0x0001;
        const LEFTDOWN   = 0x0002;
        const LEFTUP     = 0x0004;
        const RIGHTDOWN  = 0x0008;
        const RIGHTUP    = 0x0010;
        const MIDDLEDOWN = 0x0020;
        const MIDDLEUP   = 0x0040;
    }
}

bitflags::bitflags! {
    /// Keyboard event bitmask. A key-down carries no bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyboardEventFlags: u32 {
        const KEYDOWN = 0x0000;
        const KEYUP   = 0x0002;
    }
}

impl KeyboardEventFlags {
    pub const fn is_key_up(self) -> bool {
        self.contains(Self::KEYUP)
    }
}

/// Mouse button targeted by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const fn down_flag(self) -> MouseEventFlags {
        match self {
            MouseButton::Left => MouseEventFlags::LEFTDOWN,
            MouseButton::Right => MouseEventFlags::RIGHTDOWN,
            MouseButton::Middle => MouseEventFlags::MIDDLEDOWN,
        }
    }

    pub const fn up_flag(self) -> MouseEventFlags {
        match self {
            MouseButton::Left => MouseEventFlags::LEFTUP,
            MouseButton::Right => MouseEventFlags::RIGHTUP,
            MouseButton::Middle => MouseEventFlags::MIDDLEUP,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_flag_values() {
        assert_eq!(MouseEventFlags::MOVE.bits(), 0x01);
        assert_eq!(MouseEventFlags::LEFTDOWN.bits(), 0x02);
        assert_eq!(MouseEventFlags::LEFTUP.bits(), 0x04);
        assert_eq!(MouseEventFlags::RIGHTDOWN.bits(), 0x08);
        assert_eq!(MouseEventFlags::RIGHTUP.bits(), 0x10);
        assert_eq!(MouseEventFlags::MIDDLEDOWN.bits(), 0x20);
        assert_eq!(MouseEventFlags::MIDDLEUP.bits(), 0x40);
    }

    #[test]
    fn mouse_flags_combine() {
        let flags = MouseEventFlags::MOVE | MouseEventFlags::LEFTDOWN;
        assert_eq!(flags.bits(), 0x03);
        assert!(flags.contains(MouseEventFlags::MOVE));
        assert!(flags.contains(MouseEventFlags::LEFTDOWN));
        assert!(!flags.contains(MouseEventFlags::LEFTUP));
        assert_eq!(flags - MouseEventFlags::MOVE, MouseEventFlags::LEFTDOWN);
    }

    #[test]
    fn keyboard_flag_values() {
        assert_eq!(KeyboardEventFlags::KEYDOWN.bits(), 0);
        assert_eq!(KeyboardEventFlags::KEYUP.bits(), 2);
        assert!(KeyboardEventFlags::KEYUP.is_key_up());
        assert!(!KeyboardEventFlags::KEYDOWN.is_key_up());
    }

    #[test]
    fn button_flag_pairs() {
        assert_eq!(MouseButton::Left.down_flag(), MouseEventFlags::LEFTDOWN);
        assert_eq!(MouseButton::Left.up_flag(), MouseEventFlags::LEFTUP);
        assert_eq!(MouseButton::Right.down_flag(), MouseEventFlags::RIGHTDOWN);
        assert_eq!(MouseButton::Right.up_flag(), MouseEventFlags::RIGHTUP);
        assert_eq!(MouseButton::Middle.down_flag(), MouseEventFlags::MIDDLEDOWN);
        assert_eq!(MouseButton::Middle.up_flag(), MouseEventFlags::MIDDLEUP);
    }

    #[test]
    fn button_display() {
        assert_eq!(MouseButton::Left.to_string(), "left");
        assert_eq!(MouseButton::Middle.to_string(), "middle");
    }

    #[test]
    fn button_default_is_left() {
        assert_eq!(MouseButton::default(), MouseButton::Left);
    }
}
