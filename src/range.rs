//! Inclusive MIDI note ranges and the `<start>-<end>` text form.

use std::ops::RangeInclusive;

use crate::error::RangeError;
use crate::note_table::{MIDI_MAX, MIDI_MIN, NoteTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRange {
    start: u8,
    end: u8,
}

impl NoteRange {
    /// The whole table, `C-1` to `G9`.
    pub fn full() -> Self {
        NoteRange {
            start: MIDI_MIN,
            end: MIDI_MAX,
        }
    }

    pub fn from_names(table: &NoteTable, start: &str, end: &str) -> Result<Self, RangeError> {
        let start_midi = table
            .lookup_by_name(start)
            .ok_or_else(|| RangeError::UnknownNote(start.to_string()))?;
        let end_midi = table
            .lookup_by_name(end)
            .ok_or_else(|| RangeError::UnknownNote(end.to_string()))?;

        if start_midi > end_midi {
            return Err(RangeError::StartAfterEnd {
                start: start.to_string(),
                start_midi,
                end: end.to_string(),
                end_midi,
            });
        }

        Ok(NoteRange {
            start: start_midi,
            end: end_midi,
        })
    }

    /// Parses user text such as `"E2-E6"` or `" C#3 - B5 "`.
    ///
    /// Lowest-octave names carry their own hyphen (`"C-1-E2"`), so each
    /// hyphen is tried as the separator and the first split naming two
    /// table entries is used.
    pub fn parse(text: &str, table: &NoteTable) -> Result<Self, RangeError> {
        let text = text.trim();
        let mut saw_hyphen = false;

        for (index, _) in text.match_indices('-') {
            saw_hyphen = true;
            let start = text[..index].trim();
            let end = text[index + 1..].trim();
            if table.contains_name(start) && table.contains_name(end) {
                return Self::from_names(table, start, end);
            }
        }

        if saw_hyphen {
            Err(RangeError::UnknownNote(text.to_string()))
        } else {
            Err(RangeError::Malformed(text.to_string()))
        }
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn midi_numbers(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }
}

impl Default for NoteRange {
    fn default() -> Self {
        NoteRange::full()
    }
}
