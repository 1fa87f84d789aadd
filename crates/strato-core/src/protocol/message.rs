//! Decoded response message type and the message names the client consumes.

/// A decoded device response line.
///
/// Responses carry a status code (0 = success, non-zero = device-reported
/// error, passed through opaquely), a message name such as `PLAY_STATUS`,
/// and the ordered colon-delimited field tokens that followed the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    /// Device result code. Only 0 is interpreted; other values are opaque.
    pub status: i32,
    /// Message/event name, e.g. `PLAY_STATUS`.
    pub name: String,
    /// Ordered field tokens, trailing-delimiter artifact already stripped.
    pub fields: Vec<String>,
}

impl ResponseMessage {
    /// True when the device reported success.
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Field token at `index`, if present.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// True when this is a successful response with the expected name and
    /// at least `min_fields` field tokens. Responses failing this check
    /// leave their derived state group at defaults.
    pub fn matches(&self, name: &str, min_fields: usize) -> bool {
        self.is_success() && self.name == name && self.fields.len() >= min_fields
    }
}

// =============================================================================
// Message Names
// =============================================================================

/// Response names produced by the status query battery.
pub mod names {
    pub const PLAY_STATUS: &str = "PLAY_STATUS";
    pub const MOVIE_LOCATION: &str = "MOVIE_LOCATION";
    pub const VIDEO_MODE: &str = "VIDEO_MODE";
    pub const VIDEO_COLOR: &str = "VIDEO_COLOR";
    pub const SCREEN_MASK: &str = "SCREEN_MASK";
    pub const CINEMASCAPE_MODE: &str = "CINEMASCAPE_MODE";
    pub const CINEMASCAPE_MASK: &str = "CINEMASCAPE_MASK";
    pub const SYSTEM_READINESS_STATE: &str = "SYSTEM_READINESS_STATE";
    pub const DEVICE_POWER_STATE: &str = "DEVICE_POWER_STATE";
    pub const UI_STATE: &str = "UI_STATE";
    pub const DEVICE_TYPE_NAME: &str = "DEVICE_TYPE_NAME";
}
