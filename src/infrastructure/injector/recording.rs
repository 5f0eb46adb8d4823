//! Recording injector: a test double that logs calls instead of touching the OS

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Instant;

use crate::application::ports::{InputInjector, Pause};
use crate::domain::input::{Delay, KeyboardEventFlags, MouseEventFlags, ScanCode, VirtualKey};

/// A single call seen by the recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    KeyState {
        key: VirtualKey,
    },
    Mouse {
        flags: MouseEventFlags,
        dx: i32,
        dy: i32,
        data: i32,
        extra_info: usize,
    },
    Keyboard {
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    },
    Pause(Delay),
}

impl RecordedCall {
    /// True for calls that synthesize input (mouse or keyboard events).
    pub fn is_injection(&self) -> bool {
        matches!(self, RecordedCall::Mouse { .. } | RecordedCall::Keyboard { .. })
    }
}

/// A recorded call and when it happened
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub call: RecordedCall,
    pub at: Instant,
}

#[derive(Default)]
struct Shared {
    log: Mutex<Vec<RecordedEvent>>,
    key_states: Mutex<HashMap<VirtualKey, i16>>,
}

/// Injector and pause double sharing one call log.
///
/// Clones share the log, so one clone can be handed to the facade as the
/// injector and another as the pause. Pauses are logged without sleeping
/// unless built with [`RecordingInjector::with_real_pauses`].
#[derive(Clone, Default)]
pub struct RecordingInjector {
    shared: Arc<Shared>,
    real_pauses: bool,
}

impl RecordingInjector {
    /// Create a recorder whose pauses return immediately
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder whose pauses actually sleep
    pub fn with_real_pauses() -> Self {
        Self {
            real_pauses: true,
            ..Self::default()
        }
    }

    /// Script the state word returned for `key`. Unscripted keys read as 0.
    pub fn set_key_state(&self, key: VirtualKey, state: i16) {
        lock(&self.shared.key_states).insert(key, state);
    }

    /// Snapshot of every recorded event, oldest first
    pub fn events(&self) -> Vec<RecordedEvent> {
        lock(&self.shared.log).clone()
    }

    /// Snapshot of every recorded call, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.shared.log).iter().map(|e| e.call.clone()).collect()
    }

    /// Only the mouse and keyboard events
    pub fn injections(&self) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(RecordedCall::is_injection).collect()
    }

    pub fn clear(&self) {
        lock(&self.shared.log).clear();
    }

    fn record(&self, call: RecordedCall) {
        lock(&self.shared.log).push(RecordedEvent {
            call,
            at: Instant::now(),
        });
    }
}

impl InputInjector for RecordingInjector {
    fn async_key_state(&self, key: VirtualKey) -> i16 {
        self.record(RecordedCall::KeyState { key });
        lock(&self.shared.key_states).get(&key).copied().unwrap_or(0)
    }

    fn mouse_event(&self, flags: MouseEventFlags, dx: i32, dy: i32, data: i32, extra_info: usize) {
        self.record(RecordedCall::Mouse {
            flags,
            dx,
            dy,
            data,
            extra_info,
        });
    }

    fn keybd_event(
        &self,
        key: VirtualKey,
        scan: ScanCode,
        flags: KeyboardEventFlags,
        extra_info: usize,
    ) {
        self.record(RecordedCall::Keyboard {
            key,
            scan,
            flags,
            extra_info,
        });
    }
}

impl Pause for RecordingInjector {
    fn pause(&self, delay: Delay) {
        self.record(RecordedCall::Pause(delay));
        if self.real_pauses && !delay.is_zero() {
            thread::sleep(delay.as_std());
        }
    }
}

// A panicking test thread must not hide the log from the others.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_log() {
        let recorder = RecordingInjector::new();
        let other = recorder.clone();
        other.mouse_event(MouseEventFlags::MOVE, 1, 2, 0, 0);
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn scripted_key_state() {
        let recorder = RecordingInjector::new();
        recorder.set_key_state(VirtualKey::SHIFT, i16::MIN);
        assert_eq!(recorder.async_key_state(VirtualKey::SHIFT), i16::MIN);
        assert_eq!(recorder.async_key_state(VirtualKey::TAB), 0);
    }

    #[test]
    fn injections_skip_queries_and_pauses() {
        let recorder = RecordingInjector::new();
        recorder.async_key_state(VirtualKey::SHIFT);
        recorder.pause(Delay::from_millis(5));
        recorder.keybd_event(VirtualKey::TAB, ScanCode::DEFAULT, KeyboardEventFlags::KEYUP, 0);
        assert_eq!(recorder.calls().len(), 3);
        assert_eq!(recorder.injections().len(), 1);
    }

    #[test]
    fn clear_empties_log() {
        let recorder = RecordingInjector::new();
        recorder.pause(Delay::ZERO);
        recorder.clear();
        assert!(recorder.events().is_empty());
    }
}
