//! Playback state snapshot assembled from one polling cycle.
//!
//! Every cycle produces an entirely new snapshot; fields whose source query
//! did not succeed, or whose response failed the status/name/arity checks,
//! keep their documented defaults. The snapshot is total: every field is
//! always present, so callers can diff cycles without null handling.

use serde::Serialize;

use crate::protocol::{
    decode_int_field, decode_tenths_field, names, BatchResponse, ResponseMessage,
    CINEMASCAPE_MODE, DEVICE_POWER_STATE, MEDIA_LOCATION, PLAY_STATUS, SCREEN_MASK_RATIO,
    SYSTEM_READINESS_STATE, UI_DIALOG, UI_POPUP, UI_SCREEN, VIDEO_COLOR_DEPTH, VIDEO_COLOR_EOTF,
    VIDEO_COLOR_SAMPLING, VIDEO_COLOR_SPACE, VIDEO_MODE,
};

/// Minimum field counts per response type. A response below its minimum
/// leaves the whole derived group at defaults rather than partially
/// populating it.
const MIN_FIELDS_PLAY_STATUS: usize = 8;
const MIN_FIELDS_MOVIE_LOCATION: usize = 1;
const MIN_FIELDS_VIDEO_MODE: usize = 3;
const MIN_FIELDS_VIDEO_COLOR: usize = 4;
const MIN_FIELDS_SCREEN_MASK: usize = 6;
const MIN_FIELDS_CINEMASCAPE: usize = 1;
const MIN_FIELDS_READINESS: usize = 1;
const MIN_FIELDS_POWER: usize = 1;
const MIN_FIELDS_UI_STATE: usize = 3;

/// Flat device-state record produced by one polling cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub media_location: String,
    pub play_status: String,
    pub play_speed: i64,
    pub title_length: i64,
    pub title_location: i64,
    pub chapter_length: i64,
    pub chapter_location: i64,
    pub video_mode: String,
    pub video_color_eotf: String,
    pub video_color_space: String,
    pub video_color_depth: String,
    pub video_color_sampling: String,
    pub screen_mask_ratio: String,
    pub screen_mask_top_trim_rel: f64,
    pub screen_mask_bottom_trim_rel: f64,
    pub screen_mask_conservative_ratio: String,
    pub screen_mask_top_mask_abs: f64,
    pub screen_mask_bottom_mask_abs: f64,
    pub cinemascape_mode: String,
    pub cinemascape_mask: i64,
    pub system_readiness_state: String,
    pub power_state: String,
    pub ui_screen: String,
    pub ui_popup: String,
    pub ui_dialog: String,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            media_location: "none".into(),
            play_status: "none".into(),
            play_speed: 0,
            title_length: 0,
            title_location: 0,
            chapter_length: 0,
            chapter_location: 0,
            video_mode: "none".into(),
            video_color_eotf: "unknown".into(),
            video_color_space: "default".into(),
            video_color_depth: "unknown".into(),
            video_color_sampling: "none".into(),
            screen_mask_ratio: "none".into(),
            screen_mask_top_trim_rel: 0.0,
            screen_mask_bottom_trim_rel: 0.0,
            screen_mask_conservative_ratio: "none".into(),
            screen_mask_top_mask_abs: 0.0,
            screen_mask_bottom_mask_abs: 0.0,
            cinemascape_mode: "none".into(),
            cinemascape_mask: 0,
            system_readiness_state: "idle".into(),
            power_state: "standby".into(),
            ui_screen: "unknown".into(),
            ui_popup: "none".into(),
            ui_dialog: "none".into(),
        }
    }
}

impl PlaybackState {
    /// Assemble a snapshot from the responses of one query battery.
    ///
    /// Each response group is validated (status 0, expected name, minimum
    /// arity) and applied all-or-nothing; anything that fails validation
    /// leaves its group at the defaults above.
    pub fn from_batch(batch: &BatchResponse) -> Self {
        let mut state = Self::default();

        if let Some(msg) = expect(batch, "GET_PLAY_STATUS", names::PLAY_STATUS, MIN_FIELDS_PLAY_STATUS) {
            state.play_status = PLAY_STATUS.decode(&msg.fields[0]);
            state.play_speed = decode_int_field(&msg.fields[1]).unwrap_or(0);
            state.title_length = decode_int_field(&msg.fields[3]).unwrap_or(0);
            state.title_location = decode_int_field(&msg.fields[4]).unwrap_or(0);
            state.chapter_length = decode_int_field(&msg.fields[6]).unwrap_or(0);
            state.chapter_location = decode_int_field(&msg.fields[7]).unwrap_or(0);
        }

        if let Some(msg) = expect(batch, "GET_MOVIE_LOCATION", names::MOVIE_LOCATION, MIN_FIELDS_MOVIE_LOCATION) {
            state.media_location = MEDIA_LOCATION.decode(&msg.fields[0]);
        }

        if let Some(msg) = expect(batch, "GET_VIDEO_MODE", names::VIDEO_MODE, MIN_FIELDS_VIDEO_MODE) {
            // Composite and component modes precede the HDMI output mode.
            state.video_mode = VIDEO_MODE.decode(&msg.fields[2]);
        }

        if let Some(msg) = expect(batch, "GET_VIDEO_COLOR", names::VIDEO_COLOR, MIN_FIELDS_VIDEO_COLOR) {
            state.video_color_eotf = VIDEO_COLOR_EOTF.decode(&msg.fields[0]);
            state.video_color_space = VIDEO_COLOR_SPACE.decode(&msg.fields[1]);
            state.video_color_depth = VIDEO_COLOR_DEPTH.decode(&msg.fields[2]);
            state.video_color_sampling = VIDEO_COLOR_SAMPLING.decode(&msg.fields[3]);
        }

        if let Some(msg) = expect(batch, "GET_SCREEN_MASK", names::SCREEN_MASK, MIN_FIELDS_SCREEN_MASK) {
            state.screen_mask_ratio = SCREEN_MASK_RATIO.decode(&msg.fields[0]);
            state.screen_mask_top_trim_rel = decode_tenths_field(&msg.fields[1]);
            state.screen_mask_bottom_trim_rel = decode_tenths_field(&msg.fields[2]);
            state.screen_mask_conservative_ratio = SCREEN_MASK_RATIO.decode(&msg.fields[3]);
            state.screen_mask_top_mask_abs = decode_tenths_field(&msg.fields[4]);
            state.screen_mask_bottom_mask_abs = decode_tenths_field(&msg.fields[5]);
        }

        if let Some(msg) = expect(batch, "GET_CINEMASCAPE_MODE", names::CINEMASCAPE_MODE, MIN_FIELDS_CINEMASCAPE) {
            state.cinemascape_mode = CINEMASCAPE_MODE.decode(&msg.fields[0]);
        }

        if let Some(msg) = expect(batch, "GET_CINEMASCAPE_MASK", names::CINEMASCAPE_MASK, MIN_FIELDS_CINEMASCAPE) {
            state.cinemascape_mask = decode_int_field(&msg.fields[0]).unwrap_or(0);
        }

        if let Some(msg) = expect(batch, "GET_SYSTEM_READINESS_STATE", names::SYSTEM_READINESS_STATE, MIN_FIELDS_READINESS) {
            state.system_readiness_state = SYSTEM_READINESS_STATE.decode(&msg.fields[0]);
        }

        if let Some(msg) = expect(batch, "GET_DEVICE_POWER_STATE", names::DEVICE_POWER_STATE, MIN_FIELDS_POWER) {
            state.power_state = DEVICE_POWER_STATE.decode(&msg.fields[0]);
        }

        if let Some(msg) = expect(batch, "GET_UI_STATE", names::UI_STATE, MIN_FIELDS_UI_STATE) {
            state.ui_screen = UI_SCREEN.decode(&msg.fields[0]);
            state.ui_popup = UI_POPUP.decode(&msg.fields[1]);
            state.ui_dialog = UI_DIALOG.decode(&msg.fields[2]);
        }

        state
    }
}

fn expect<'a>(
    batch: &'a BatchResponse,
    command: &str,
    name: &str,
    min_fields: usize,
) -> Option<&'a ResponseMessage> {
    let msg = batch.get(command)?;
    if !msg.matches(name, min_fields) {
        tracing::debug!(
            command,
            status = msg.status,
            name = %msg.name,
            fields = msg.fields.len(),
            "response failed validation; leaving group at defaults"
        );
        return None;
    }
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(batch: &mut BatchResponse, command: &str, status: i32, name: &str, fields: &[&str]) {
        batch.push(
            command.to_string(),
            Some(ResponseMessage {
                status,
                name: name.to_string(),
                fields: fields.iter().map(|f| f.to_string()).collect(),
            }),
        );
    }

    #[test]
    fn empty_batch_yields_all_defaults() {
        let state = PlaybackState::from_batch(&BatchResponse::default());
        assert_eq!(state, PlaybackState::default());
        assert_eq!(state.power_state, "standby");
        assert_eq!(state.play_status, "none");
        assert_eq!(state.system_readiness_state, "idle");
    }

    #[test]
    fn play_status_group_populates_from_valid_response() {
        let mut batch = BatchResponse::default();
        respond(
            &mut batch,
            "GET_PLAY_STATUS",
            0,
            names::PLAY_STATUS,
            &["2", "0", "?", "5400", "120", "?", "10", "3"],
        );
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.play_status, "playing");
        assert_eq!(state.play_speed, 0);
        assert_eq!(state.title_length, 5400);
        assert_eq!(state.title_location, 120);
        assert_eq!(state.chapter_length, 10);
        assert_eq!(state.chapter_location, 3);
    }

    #[test]
    fn short_play_status_leaves_group_at_defaults() {
        let mut batch = BatchResponse::default();
        respond(&mut batch, "GET_PLAY_STATUS", 0, names::PLAY_STATUS, &["2", "0", "1"]);
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.play_status, "none");
        assert_eq!(state.title_length, 0);
        assert_eq!(state.chapter_location, 0);
    }

    #[test]
    fn error_status_leaves_group_at_defaults() {
        let mut batch = BatchResponse::default();
        respond(
            &mut batch,
            "GET_PLAY_STATUS",
            3,
            names::PLAY_STATUS,
            &["2", "0", "?", "5400", "120", "?", "10", "3"],
        );
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.play_status, "none");
    }

    #[test]
    fn mismatched_name_leaves_group_at_defaults() {
        let mut batch = BatchResponse::default();
        respond(&mut batch, "GET_MOVIE_LOCATION", 0, "SOMETHING_ELSE", &["1"]);
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.media_location, "none");
    }

    #[test]
    fn screen_mask_decodes_tenths_with_zero_fallback() {
        let mut batch = BatchResponse::default();
        respond(
            &mut batch,
            "GET_SCREEN_MASK",
            0,
            names::SCREEN_MASK,
            &["4", "15", "x", "5", "250", "12"],
        );
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.screen_mask_ratio, "1.85");
        assert_eq!(state.screen_mask_top_trim_rel, 1.5);
        assert_eq!(state.screen_mask_bottom_trim_rel, 0.0);
        assert_eq!(state.screen_mask_conservative_ratio, "2.35");
        assert_eq!(state.screen_mask_top_mask_abs, 25.0);
        assert_eq!(state.screen_mask_bottom_mask_abs, 1.2);
    }

    #[test]
    fn video_color_group_is_all_or_nothing() {
        let mut batch = BatchResponse::default();
        respond(&mut batch, "GET_VIDEO_COLOR", 0, names::VIDEO_COLOR, &["2", "4"]);
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.video_color_eotf, "unknown");
        assert_eq!(state.video_color_space, "default");

        let mut batch = BatchResponse::default();
        respond(&mut batch, "GET_VIDEO_COLOR", 0, names::VIDEO_COLOR, &["2", "4", "30", "3"]);
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.video_color_eotf, "hdr10");
        assert_eq!(state.video_color_space, "bt2020");
        assert_eq!(state.video_color_depth, "30bit");
        assert_eq!(state.video_color_sampling, "4:2:0");
    }

    #[test]
    fn unknown_enum_values_pass_through_into_state() {
        let mut batch = BatchResponse::default();
        respond(&mut batch, "GET_DEVICE_POWER_STATE", 0, names::DEVICE_POWER_STATE, &["7"]);
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.power_state, "7");
    }

    #[test]
    fn ui_state_populates_screen_popup_dialog() {
        let mut batch = BatchResponse::default();
        respond(&mut batch, "GET_UI_STATE", 0, names::UI_STATE, &["10", "00", "00", "0"]);
        let state = PlaybackState::from_batch(&batch);
        assert_eq!(state.ui_screen, "playing_movie");
        assert_eq!(state.ui_popup, "none");
        assert_eq!(state.ui_dialog, "none");
    }
}
