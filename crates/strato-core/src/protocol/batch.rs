//! Batch results for a pipelined request/response session.
//!
//! Entries are stored by request position, so a batch that repeats a command
//! keeps every result. A command-text lookup is layered on top for callers
//! that address results by name; when a command was sent more than once the
//! text view resolves to the last occurrence.

use crate::protocol::ResponseMessage;

/// One command slot in a batch: the command as given by the caller and the
/// decoded response, absent when the read timed out, hit EOF, or the line
/// failed structural decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub command: String,
    pub response: Option<ResponseMessage>,
}

/// Results of one batch, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResponse {
    entries: Vec<BatchEntry>,
}

impl BatchResponse {
    /// A batch where every command is marked absent, used when the
    /// connection could not be established at all.
    pub fn all_absent<S: AsRef<str>>(commands: &[S]) -> Self {
        Self {
            entries: commands
                .iter()
                .map(|c| BatchEntry {
                    command: c.as_ref().to_string(),
                    response: None,
                })
                .collect(),
        }
    }

    pub fn push(&mut self, command: String, response: Option<ResponseMessage>) {
        self.entries.push(BatchEntry { command, response });
    }

    /// Mark `commands` absent at the tail of this batch. Used when a
    /// transport error aborts the remainder of a batch.
    pub fn push_absent<S: AsRef<str>>(&mut self, commands: &[S]) {
        for command in commands {
            self.push(command.as_ref().to_string(), None);
        }
    }

    /// Entries in request order.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Response at request position `index`.
    pub fn at(&self, index: usize) -> Option<&ResponseMessage> {
        self.entries.get(index).and_then(|e| e.response.as_ref())
    }

    /// Command-text view: the response for `command`, resolving duplicates
    /// to the last occurrence.
    pub fn get(&self, command: &str) -> Option<&ResponseMessage> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.command == command)
            .and_then(|e| e.response.as_ref())
    }

    /// Number of command slots in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots that produced a decoded response.
    pub fn present(&self) -> usize {
        self.entries.iter().filter(|e| e.response.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(name: &str) -> Option<ResponseMessage> {
        Some(ResponseMessage {
            status: 0,
            name: name.to_string(),
            fields: Vec::new(),
        })
    }

    #[test]
    fn all_absent_covers_every_command() {
        let batch = BatchResponse::all_absent(&["A", "B"]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.present(), 0);
        assert!(batch.get("A").is_none());
    }

    #[test]
    fn duplicate_commands_keep_both_positions() {
        let mut batch = BatchResponse::default();
        batch.push("PING".into(), ok("FIRST"));
        batch.push("PING".into(), ok("SECOND"));

        assert_eq!(batch.at(0).unwrap().name, "FIRST");
        assert_eq!(batch.at(1).unwrap().name, "SECOND");
        // Text view resolves to the last occurrence.
        assert_eq!(batch.get("PING").unwrap().name, "SECOND");
    }

    #[test]
    fn text_view_skips_nothing_when_unique() {
        let mut batch = BatchResponse::default();
        batch.push("A".into(), ok("A_RESP"));
        batch.push("B".into(), None);
        assert_eq!(batch.get("A").unwrap().name, "A_RESP");
        assert!(batch.get("B").is_none());
        assert!(batch.get("C").is_none());
    }
}
