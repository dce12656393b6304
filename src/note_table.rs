//! Fixed mapping between MIDI note numbers and note names.
//!
//! Octaves follow the "middle C = 60" convention, so MIDI 0 is `C-1`
//! and MIDI 127 is `G9`. Only sharp spellings are used.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{RenamerError, Result};

pub const MIDI_MIN: u8 = 0;
pub const MIDI_MAX: u8 = 127;

const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

static STANDARD_TABLE: OnceLock<NoteTable> = OnceLock::new();

/// Immutable bidirectional note table, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct NoteTable {
    names: Vec<String>,
    numbers: HashMap<String, u8>,
}

impl NoteTable {
    pub fn new() -> Self {
        let names: Vec<String> = (MIDI_MIN..=MIDI_MAX).map(note_name_for).collect();
        let numbers = names
            .iter()
            .enumerate()
            .map(|(midi, name)| (name.clone(), midi as u8))
            .collect();

        NoteTable { names, numbers }
    }

    /// Process-wide table, built on first use.
    pub fn standard() -> &'static NoteTable {
        STANDARD_TABLE.get_or_init(NoteTable::new)
    }

    /// Looks up a note name exactly as spelled in the table (`"C-1"`, `"F#3"`).
    pub fn lookup_by_name(&self, name: &str) -> Option<u8> {
        self.numbers.get(name).copied()
    }

    pub fn lookup_by_number(&self, midi_number: u8) -> Result<&str> {
        self.names
            .get(midi_number as usize)
            .map(String::as_str)
            .ok_or(RenamerError::MidiOutOfRange(midi_number))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.numbers.contains_key(name)
    }

    /// All (MIDI number, note name) pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(midi, name)| (midi as u8, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        NoteTable::new()
    }
}

fn note_name_for(midi_number: u8) -> String {
    let pitch_class = PITCH_CLASSES[(midi_number % 12) as usize];
    let octave = (midi_number / 12) as i32 - 1;
    format!("{pitch_class}{octave}")
}
