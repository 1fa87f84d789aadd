//! Property-based tests for the wire codec.
//!
//! These tests use proptest to verify:
//! - decode_line is total over arbitrary input
//! - encode_command frame shape for bare and addressed commands
//! - roundtrip of synthetically framed response lines

#![cfg(test)]

use proptest::prelude::*;

use crate::protocol::{decode_line, encode_command};

proptest! {
    #[test]
    fn decode_never_panics(line in ".*") {
        let _ = decode_line(&line);
    }

    #[test]
    fn decode_requires_two_slashes_and_a_colon(line in "[^/:]*") {
        // Without both separators there is nothing to decode.
        prop_assert!(decode_line(&line).is_none());
    }

    #[test]
    fn encode_wraps_bare_commands(command in "[a-zA-Z_]{1,24}") {
        let frame = encode_command(&command);
        let expected = format!("01/0/{}:\n", command.to_uppercase());
        prop_assert_eq!(frame, expected.into_bytes());
    }

    #[test]
    fn encode_passes_addressed_commands_through(command in "[0-9]{2}/[0-9]/[A-Z_]{1,24}:") {
        let frame = encode_command(&command);
        let mut expected = command.into_bytes();
        expected.push(b'\n');
        prop_assert_eq!(frame, expected);
    }

    #[test]
    fn roundtrip_synthetic_lines(
        status in 0i32..1000,
        name in "[A-Z_]{1,20}",
        fields in prop::collection::vec("[a-z0-9]{1,8}", 0..6),
    ) {
        let body = if fields.is_empty() {
            format!("{}:", name)
        } else {
            format!("{}:{}:", name, fields.join(":"))
        };
        let line = format!("01/0/{}:{}", status, body);
        let msg = decode_line(&line).expect("synthetic line must decode");
        prop_assert_eq!(msg.status, status);
        prop_assert_eq!(msg.name, name);
        prop_assert_eq!(msg.fields, fields);
    }
}
