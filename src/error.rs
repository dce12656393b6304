use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers of the renamer.
///
/// Per-file problems during a batch run (unresolved names, collisions,
/// failed copies) are not errors at this level; they are recorded as
/// [`RenameOutcome`](crate::batch::RenameOutcome) values instead.
#[derive(Debug, Error)]
pub enum RenamerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("MIDI number {0} is outside the note table (0-127)")]
    MidiOutOfRange(u8),

    #[error("Invalid note range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Reasons a note range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("'{0}' is not of the form <start>-<end> (example: E2-E6)")]
    Malformed(String),

    #[error("unknown note name in '{0}' (example: E2-E6)")]
    UnknownNote(String),

    #[error("start note {start} ({start_midi}) is above end note {end} ({end_midi})")]
    StartAfterEnd {
        start: String,
        start_midi: u8,
        end: String,
        end_midi: u8,
    },
}

pub type Result<T> = std::result::Result<T, RenamerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = RenamerError::MidiOutOfRange(200);
        assert_eq!(
            error.to_string(),
            "MIDI number 200 is outside the note table (0-127)"
        );

        let error = RenamerError::from(RangeError::Malformed("E2E6".to_string()));
        assert_eq!(
            error.to_string(),
            "Invalid note range: 'E2E6' is not of the form <start>-<end> (example: E2-E6)"
        );
    }

    #[test]
    fn test_start_after_end_display() {
        let error = RangeError::StartAfterEnd {
            start: "G6".to_string(),
            start_midi: 91,
            end: "C4".to_string(),
            end_midi: 60,
        };
        assert_eq!(
            error.to_string(),
            "start note G6 (91) is above end note C4 (60)"
        );
    }
}
