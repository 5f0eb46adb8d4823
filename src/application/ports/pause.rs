//! Pause port interface

use std::sync::Arc;

use crate::domain::input::Delay;

/// Port for the synchronous wait between input events.
pub trait Pause: Send + Sync {
    /// Block the calling thread for at least `delay`.
    fn pause(&self, delay: Delay);
}

impl<T: Pause + ?Sized> Pause for &T {
    fn pause(&self, delay: Delay) {
        (**self).pause(delay)
    }
}

impl<T: Pause + ?Sized> Pause for Box<T> {
    fn pause(&self, delay: Delay) {
        (**self).pause(delay)
    }
}

impl<T: Pause + ?Sized> Pause for Arc<T> {
    fn pause(&self, delay: Delay) {
        (**self).pause(delay)
    }
}
