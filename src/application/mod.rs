//! Application layer - Use cases and port interfaces
//!
//! Contains the input facade and trait definitions
//! for external system interactions.

pub mod facade;
pub mod ports;

// Re-export use cases
pub use facade::InputFacade;
