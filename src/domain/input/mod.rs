//! Input value objects

mod delay;
mod flags;
mod key;

pub use delay::Delay;
pub use flags::{KeyboardEventFlags, MouseButton, MouseEventFlags};
pub use key::{KeyStateMask, ScanCode, VirtualKey};
