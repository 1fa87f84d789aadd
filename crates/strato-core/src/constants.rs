//! Protocol and configuration constants for the Strato control protocol.

use std::time::Duration;

// =============================================================================
// Protocol Constants
// =============================================================================

/// Control-point device id used for all locally addressed commands.
pub const LOCAL_CPDID: &str = "01";

/// Zone segment for locally addressed commands.
pub const LOCAL_ZONE: &str = "0";

/// Line terminator for outbound frames and inbound responses.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Maximum accepted response line length. Lines beyond this are treated as
/// malformed; the device's status lines are all well under 1 KiB.
pub const MAX_LINE_LEN: usize = 8 * 1024;

/// Default TCP control port.
pub const DEFAULT_PORT: u16 = 10000;

// =============================================================================
// Timing Constants
// =============================================================================

/// Default per-operation timeout (connect and each response read).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for playback-state watching.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default delay between commands in a repeated dispatch sequence.
pub const COMMAND_DELAY: Duration = Duration::from_millis(400);

// =============================================================================
// Commands
// =============================================================================

/// Status query battery issued by a full playback-state poll, in order.
pub const PLAYBACK_QUERIES: [&str; 10] = [
    "GET_PLAY_STATUS",
    "GET_MOVIE_LOCATION",
    "GET_VIDEO_MODE",
    "GET_VIDEO_COLOR",
    "GET_SCREEN_MASK",
    "GET_CINEMASCAPE_MODE",
    "GET_CINEMASCAPE_MASK",
    "GET_SYSTEM_READINESS_STATE",
    "GET_DEVICE_POWER_STATE",
    "GET_UI_STATE",
];

/// Queries meaningful on any device class (server or player).
pub const SHARED_QUERIES: [&str; 2] = ["GET_SYSTEM_READINESS_STATE", "GET_DEVICE_POWER_STATE"];

/// Device type query used for profile detection.
pub const GET_DEVICE_TYPE_NAME: &str = "GET_DEVICE_TYPE_NAME";

/// Wake the device from standby.
pub const POWER_ON_COMMAND: &str = "LEAVE_STANDBY";

/// Put the device into standby.
pub const POWER_OFF_COMMAND: &str = "ENTER_STANDBY";

/// Stop playback or cancel the current UI operation.
pub const STOP_COMMAND: &str = "STOP_OR_CANCEL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_starts_with_play_status() {
        assert_eq!(PLAYBACK_QUERIES[0], "GET_PLAY_STATUS");
        assert_eq!(PLAYBACK_QUERIES.len(), 10);
    }

    #[test]
    fn shared_queries_are_a_subset_of_the_battery() {
        for query in SHARED_QUERIES {
            assert!(PLAYBACK_QUERIES.contains(&query));
        }
    }

    #[test]
    fn timing_constants_are_sane() {
        assert!(COMMAND_DELAY < DEFAULT_TIMEOUT);
        assert!(DEFAULT_TIMEOUT <= POLL_INTERVAL);
    }

    #[test]
    fn power_and_stop_commands_are_bare() {
        // Bare commands get the cpdid/zone wrapping at encode time.
        for command in [POWER_ON_COMMAND, POWER_OFF_COMMAND, STOP_COMMAND] {
            assert!(!command.contains('/'));
        }
    }
}
