//! Protocol module for the device wire format.
//!
//! This module provides:
//! - Command frame encoding and response line decoding
//! - The decoded ResponseMessage type and message names
//! - Position-keyed batch results
//! - Enumeration tables for status dimensions

mod batch;
mod codec;
mod enums;
mod message;

#[cfg(test)]
mod proptest;

pub use batch::{BatchEntry, BatchResponse};
pub use codec::{
    decode_int_field, decode_line, decode_tenths_field, encode_command, latin1_string,
};
pub use enums::{
    EnumIndex, CINEMASCAPE_MODE, DEVICE_POWER_STATE, MEDIA_LOCATION, PLAY_STATUS,
    SCREEN_MASK_RATIO, SYSTEM_READINESS_STATE, UI_DIALOG, UI_POPUP, UI_SCREEN, VIDEO_COLOR_DEPTH,
    VIDEO_COLOR_EOTF, VIDEO_COLOR_SAMPLING, VIDEO_COLOR_SPACE, VIDEO_MODE,
};
pub use message::{names, ResponseMessage};
