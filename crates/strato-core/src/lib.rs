//! strato-core: Wire codec and device state for the Strato control protocol.
//!
//! This crate provides:
//! - Command frame encoding and response line decoding
//! - Enumeration tables for each status dimension
//! - Position-keyed batch results
//! - The total, defaulted playback state snapshot
//! - Error types and logging setup

pub mod constants;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod state;

pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat};
pub use state::PlaybackState;
