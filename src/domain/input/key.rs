//! Virtual-key codes, key-state masks and scan codes

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{KeyParseError, MaskParseError, ScanCodeParseError};

/// Platform virtual-key code.
///
/// Codes are forwarded as-is; nothing checks that a code names a real key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualKey(u8);

impl VirtualKey {
    pub const LBUTTON: Self = Self(0x01);
    pub const RBUTTON: Self = Self(0x02);
    pub const MBUTTON: Self = Self(0x04);
    pub const BACK: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0D);
    pub const SHIFT: Self = Self(0x10);
    pub const CONTROL: Self = Self(0x11);
    pub const MENU: Self = Self(0x12);
    pub const ESCAPE: Self = Self(0x1B);
    pub const SPACE: Self = Self(0x20);
    pub const F1: Self = Self(0x70);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "lbutton" => Self::LBUTTON,
            "rbutton" => Self::RBUTTON,
            "mbutton" => Self::MBUTTON,
            "backspace" | "back" => Self::BACK,
            "tab" => Self::TAB,
            "enter" | "return" => Self::RETURN,
            "shift" => Self::SHIFT,
            "ctrl" | "control" => Self::CONTROL,
            "alt" | "menu" => Self::MENU,
            "escape" | "esc" => Self::ESCAPE,
            "space" => Self::SPACE,
            _ => {
                let n: u8 = name.strip_prefix('f')?.parse().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                Self(Self::F1.0 + n - 1)
            }
        };
        Some(key)
    }
}

impl From<u8> for VirtualKey {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl FromStr for VirtualKey {
    type Err = KeyParseError;

    /// Parse a key.
    ///
    /// A single ASCII letter or digit maps to its own key (`a` and `A` are
    /// both 0x41, `7` is 0x37). Longer numeric input is a raw code in decimal
    /// or `0x` hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || KeyParseError { input: s.to_string() };

        let mut chars = input.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return if c.is_ascii_alphanumeric() {
                Ok(Self(c.to_ascii_uppercase() as u8))
            } else {
                Err(invalid())
            };
        }

        parse_byte(input)
            .map(Self)
            .or_else(|| Self::from_name(&input.to_lowercase()))
            .ok_or_else(invalid)
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Mask tested against the state word of an asynchronous key-state query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStateMask(u16);

impl KeyStateMask {
    /// Key is currently held down (most significant bit).
    pub const DOWN: Self = Self(0x8000);
    /// Key was pressed since the previous query (least significant bit).
    pub const PRESSED_SINCE_LAST_QUERY: Self = Self(0x0001);
    /// Either of the above.
    pub const ANY: Self = Self(0x8001);

    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True when any bit of the mask is set in `state`.
    pub const fn matches(self, state: i16) -> bool {
        (state as u16) & self.0 != 0
    }
}

impl Default for KeyStateMask {
    fn default() -> Self {
        Self::DOWN
    }
}

impl FromStr for KeyStateMask {
    type Err = MaskParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "down" => Ok(Self::DOWN),
            "pressed" => Ok(Self::PRESSED_SINCE_LAST_QUERY),
            "any" => Ok(Self::ANY),
            _ => {
                let bits = match input.strip_prefix("0x") {
                    Some(hex) => u16::from_str_radix(hex, 16).ok(),
                    None => input.parse().ok(),
                };
                bits.map(Self).ok_or_else(|| MaskParseError {
                    input: s.to_string(),
                })
            }
        }
    }
}

/// Hardware scan code sent alongside keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanCode(u8);

impl ScanCode {
    /// Scan code sent when none is configured.
    pub const DEFAULT: Self = Self(0x45);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }
}

impl Default for ScanCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for ScanCode {
    type Err = ScanCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_byte(s.trim())
            .map(Self)
            .ok_or_else(|| ScanCodeParseError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for ScanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Parse a byte written in decimal or `0x`-prefixed hex.
fn parse_byte(input: &str) -> Option<u8> {
    let lower = input.to_lowercase();
    match lower.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => lower.parse().ok(),
    }
}
