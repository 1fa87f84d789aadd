//! Wire codec for the line-oriented control protocol.
//!
//! Outbound frames: `"<cpdid>/<zone>/<COMMAND>:"` terminated by `\n`.
//! Inbound lines: `"<addr1>/<addr2>/<status>:<NAME>[:<field>...]:[<echo>]"`.
//!
//! The codec is total in both directions: encoding never fails, and a line
//! that does not match the expected structure decodes to `None` rather than
//! an error. Absence is the normal "no data for this command" outcome.

use crate::constants::{LINE_TERMINATOR, LOCAL_CPDID, LOCAL_ZONE};
use crate::protocol::ResponseMessage;

/// Encode a command into its wire frame.
///
/// A command already containing `/` is treated as fully addressed and sent
/// verbatim (case preserved); anything else is upper-cased and wrapped with
/// the local cpdid/zone prefix. The frame is newline-terminated and encoded
/// byte-preserving: the protocol is byte-oriented Latin-1, not UTF-8.
pub fn encode_command(command: &str) -> Vec<u8> {
    let trimmed = command.trim();
    let frame = if trimmed.contains('/') {
        trimmed.to_string()
    } else {
        format!(
            "{}/{}/{}:",
            LOCAL_CPDID,
            LOCAL_ZONE,
            trimmed.to_uppercase()
        )
    };

    let mut bytes = latin1_bytes(&frame);
    bytes.push(LINE_TERMINATOR);
    bytes
}

/// Decode one raw response line.
///
/// Returns `None` for any line lacking the expected `addr1/addr2/PAYLOAD`
/// shape, a `status:body` payload split, or a parseable status integer.
/// Never panics for any input.
pub fn decode_line(raw: &str) -> Option<ResponseMessage> {
    let line = raw.trim();

    // Isolate the payload after the second '/'; the leading two segments
    // are the responding device's address.
    let first_slash = line.find('/')?;
    let second_slash = line[first_slash + 1..].find('/')? + first_slash + 1;
    let payload = &line[second_slash + 1..];

    let colon = payload.find(':')?;
    let status: i32 = payload[..colon].trim().parse().ok()?;

    // Some devices append an address echo after a final '/'; strip it
    // before splitting fields.
    let mut body = &payload[colon + 1..];
    if let Some(last_slash) = body.rfind('/') {
        body = &body[..last_slash];
    }

    let mut tokens = body.split(':');
    let name = tokens.next().unwrap_or("").to_string();
    let mut fields: Vec<String> = tokens.map(str::to_string).collect();

    // A trailing delimiter produces one empty final token; drop it.
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    Some(ResponseMessage {
        status,
        name,
        fields,
    })
}

/// Parse a field token as a base-10 integer.
pub fn decode_int_field(token: &str) -> Option<i64> {
    token.trim().parse().ok()
}

/// Decode a field the device reports in tenths of a percent.
///
/// An unparseable token decodes as 0 before scaling, so numeric state is
/// never left absent.
pub fn decode_tenths_field(token: &str) -> f64 {
    decode_int_field(token).unwrap_or(0) as f64 / 10.0
}

/// Recover a line of text from raw bytes, one char per byte.
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn latin1_bytes(text: &str) -> Vec<u8> {
    // Chars above U+00FF have no wire representation in this protocol.
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}
