//! VeduInput - synthetic mouse and keyboard input
//!
//! A thin facade over the host's native input primitives: asynchronous
//! key-state queries, pointer events and keyboard events, with optional
//! pauses between the halves of a click or key press.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Keys, event flags, delays, configuration, and errors
//! - **Application**: The [`InputFacade`](application::InputFacade) and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Win32, enigo, no-op, recording, XDG config)
//! - **CLI**: Command-line driver, argument parsing, and output formatting
//!
//! # Example
//!
//! ```no_run
//! use vedu_input::application::InputFacade;
//! use vedu_input::domain::input::{Delay, VirtualKey};
//! use vedu_input::infrastructure::{EnigoInjector, ThreadPause};
//!
//! let facade = InputFacade::new(EnigoInjector::new(), ThreadPause::new());
//! facade.click_left(Delay::from_millis(50));
//! facade.press_key(VirtualKey::new(0x41), Delay::ZERO);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
