//! Thread-sleep pause adapter

use std::thread;

use crate::application::ports::Pause;
use crate::domain::input::Delay;

/// Pause that blocks the calling thread with `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl ThreadPause {
    pub fn new() -> Self {
        Self
    }
}

impl Pause for ThreadPause {
    fn pause(&self, delay: Delay) {
        if !delay.is_zero() {
            thread::sleep(delay.as_std());
        }
    }
}
