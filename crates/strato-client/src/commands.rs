//! Human command names and their wire equivalents.
//!
//! The dispatch surface accepts curated aliases (remote-control vocabulary)
//! and, when explicitly enabled, raw pass-through commands for advanced use.

use strato_core::error::{Error, Result};

/// Curated alias table: human command name to wire command.
pub static COMMAND_ALIASES: &[(&str, &str)] = &[
    ("up", "UP"),
    ("down", "DOWN"),
    ("left", "LEFT"),
    ("right", "RIGHT"),
    ("select", "SELECT"),
    ("ok", "SELECT"),
    ("enter", "SELECT"),
    ("back", "BACK"),
    ("exit", "BACK"),
    ("home", "HOME"),
    ("menu", "MENU"),
    ("play", "PLAY"),
    ("pause", "PAUSE"),
    ("stop", "STOP"),
    ("next", "NEXT"),
    ("previous", "PREVIOUS"),
    ("rewind", "SCAN_REVERSE"),
    ("fast_forward", "SCAN_FORWARD"),
    ("info", "INFO"),
];

/// Resolve a human command to its wire form.
///
/// Alias lookup is case-insensitive. A command matching no alias passes
/// through trimmed only when raw commands are enabled; otherwise dispatch
/// is rejected so a typo cannot reach the device.
pub fn resolve_command(input: &str, allow_raw: bool) -> Result<String> {
    let lowered = input.trim().to_lowercase();
    if let Some((_, wire)) = COMMAND_ALIASES.iter().find(|(alias, _)| *alias == lowered) {
        return Ok((*wire).to_string());
    }

    if allow_raw {
        return Ok(input.trim().to_string());
    }

    Err(Error::RawCommandsDisabled {
        command: input.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!(resolve_command("play", false).unwrap(), "PLAY");
        assert_eq!(resolve_command("  Play ", false).unwrap(), "PLAY");
        assert_eq!(resolve_command("OK", false).unwrap(), "SELECT");
        assert_eq!(resolve_command("fast_forward", false).unwrap(), "SCAN_FORWARD");
    }

    #[test]
    fn raw_commands_require_the_gate() {
        assert!(matches!(
            resolve_command("GO_MOVIE_COVERS", false),
            Err(Error::RawCommandsDisabled { .. })
        ));
        assert_eq!(
            resolve_command("GO_MOVIE_COVERS", true).unwrap(),
            "GO_MOVIE_COVERS"
        );
    }

    #[test]
    fn raw_gate_passes_addressed_commands() {
        assert_eq!(resolve_command(" 05/1/PLAY: ", true).unwrap(), "05/1/PLAY:");
    }
}
