//! strato-test-utils: Test infrastructure for the Strato client.
//!
//! Provides:
//! - MockDevice: scripted in-process TCP device for session tests

mod mock_device;

pub use mock_device::{MockDevice, MockDeviceScript};
