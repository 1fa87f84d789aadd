//! Enumeration tables mapping device status integers to semantic labels.
//!
//! Each observable dimension (play status, power state, video mode, ...)
//! has one fixed table. Decoding is lenient by design: a token that is not
//! an integer, or an integer the table does not know, passes through
//! unchanged so that newer firmware values survive untouched.

/// A fixed integer-to-label table for one status dimension.
#[derive(Debug)]
pub struct EnumIndex {
    entries: &'static [(u16, &'static str)],
}

impl EnumIndex {
    pub const fn new(entries: &'static [(u16, &'static str)]) -> Self {
        Self { entries }
    }

    /// Label for a known value.
    pub fn label(&self, value: u16) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| *label)
    }

    /// Decode a raw field token: parse as integer and look up the label,
    /// passing the token through unchanged when either step fails.
    pub fn decode(&self, token: &str) -> String {
        match token.trim().parse::<u16>() {
            Ok(value) => match self.label(value) {
                Some(label) => label.to_string(),
                None => token.to_string(),
            },
            Err(_) => token.to_string(),
        }
    }
}

// =============================================================================
// Tables
// =============================================================================

/// Playback transport status.
pub static PLAY_STATUS: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "paused"),
    (2, "playing"),
    (4, "forward"),
    (6, "reverse"),
]);

/// Where in the current movie playback is positioned.
pub static MEDIA_LOCATION: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "content"),
    (2, "intermission"),
    (3, "credits"),
    (4, "disc_menu"),
]);

/// Active video output mode on the HDMI output.
pub static VIDEO_MODE: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "480i60_4:3"),
    (2, "480i60_16:9"),
    (3, "480p60_4:3"),
    (4, "480p60_16:9"),
    (5, "576i50_4:3"),
    (6, "576i50_16:9"),
    (7, "576p50_4:3"),
    (8, "576p50_16:9"),
    (9, "720p60_16:9"),
    (10, "720p50_16:9"),
    (11, "1080i60_16:9"),
    (12, "1080i50_16:9"),
    (13, "1080p60_16:9"),
    (14, "1080p50_16:9"),
    (15, "1080p24_16:9"),
    (16, "1080p25_16:9"),
    (17, "1080p30_16:9"),
    (18, "3840x2160p24_16:9"),
    (19, "3840x2160p25_16:9"),
    (20, "3840x2160p30_16:9"),
    (21, "3840x2160p50_16:9"),
    (22, "3840x2160p60_16:9"),
    (23, "4096x2160p24_17:9"),
]);

/// Electro-optical transfer function of the video output.
pub static VIDEO_COLOR_EOTF: EnumIndex = EnumIndex::new(&[
    (0, "unknown"),
    (1, "sdr"),
    (2, "hdr10"),
    (3, "hlg"),
    (4, "dolby_vision"),
]);

/// Output color space.
pub static VIDEO_COLOR_SPACE: EnumIndex = EnumIndex::new(&[
    (0, "default"),
    (1, "rgb"),
    (2, "bt601"),
    (3, "bt709"),
    (4, "bt2020"),
]);

/// Output color depth in bits per pixel.
pub static VIDEO_COLOR_DEPTH: EnumIndex = EnumIndex::new(&[
    (0, "unknown"),
    (24, "24bit"),
    (30, "30bit"),
    (36, "36bit"),
    (48, "48bit"),
]);

/// Chroma sampling of the video output.
pub static VIDEO_COLOR_SAMPLING: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "4:2:2"),
    (2, "4:4:4"),
    (3, "4:2:0"),
    (4, "rgb"),
]);

/// Image aspect ratio reported for screen masking.
pub static SCREEN_MASK_RATIO: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "1.33"),
    (2, "1.66"),
    (3, "1.78"),
    (4, "1.85"),
    (5, "2.35"),
]);

/// CinemaScape display mode.
pub static CINEMASCAPE_MODE: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "anamorphic"),
    (2, "letterbox"),
    (3, "native"),
]);

/// Whether the movie subsystem is ready to play.
pub static SYSTEM_READINESS_STATE: EnumIndex =
    EnumIndex::new(&[(0, "ready"), (1, "becoming_ready"), (2, "idle")]);

/// Device power state.
pub static DEVICE_POWER_STATE: EnumIndex = EnumIndex::new(&[(0, "standby"), (1, "on")]);

/// On-screen display screen currently shown.
pub static UI_SCREEN: EnumIndex = EnumIndex::new(&[
    (0, "unknown"),
    (1, "movie_list"),
    (2, "movie_collections"),
    (3, "movie_covers"),
    (4, "movie_store"),
    (5, "system_status"),
    (6, "music_list"),
    (7, "music_covers"),
    (8, "music_collections"),
    (9, "music_store"),
    (10, "playing_movie"),
    (11, "playing_music"),
    (12, "vault_summary"),
    (13, "system_settings"),
]);

/// Popup overlaying the current screen.
pub static UI_POPUP: EnumIndex = EnumIndex::new(&[(0, "none"), (1, "status"), (2, "volume")]);

/// Modal dialog overlaying the current screen.
pub static UI_DIALOG: EnumIndex = EnumIndex::new(&[
    (0, "none"),
    (1, "question"),
    (2, "information"),
    (3, "warning"),
    (4, "error"),
]);
