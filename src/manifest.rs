//! Manifests: the list of expected sample filenames for a note range.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::naming::{LabelNaming, NamingScheme};
use crate::note_table::NoteTable;
use crate::range::NoteRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub midi_number: u8,
    pub note_name: String,
    pub file_name: String,
}

impl ManifestEntry {
    /// The filename with its extension removed, as shown in previews.
    pub fn stem(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(dot) if dot > 0 => &self.file_name[..dot],
            _ => &self.file_name,
        }
    }
}

/// Manifest between two table note names, inclusive.
pub fn build_manifest(
    table: &NoteTable,
    start_note: &str,
    end_note: &str,
    label: &str,
    extension: &str,
) -> Result<Vec<ManifestEntry>> {
    let range = NoteRange::from_names(table, start_note, end_note)?;
    build_manifest_for_range(table, range, label, extension)
}

/// Manifest over every note in the table.
pub fn build_full_manifest(table: &NoteTable, label: &str, extension: &str) -> Result<Vec<ManifestEntry>> {
    build_manifest_for_range(table, NoteRange::full(), label, extension)
}

pub fn build_manifest_for_range(
    table: &NoteTable,
    range: NoteRange,
    label: &str,
    extension: &str,
) -> Result<Vec<ManifestEntry>> {
    let scheme = LabelNaming::new(label);
    range
        .midi_numbers()
        .map(|midi_number| -> Result<ManifestEntry> {
            let note_name = table.lookup_by_number(midi_number)?;
            Ok(ManifestEntry {
                midi_number,
                note_name: note_name.to_string(),
                file_name: scheme.file_name(midi_number, note_name, extension),
            })
        })
        .collect()
}

/// One extension-less name per line.
pub fn preview_lines(entries: &[ManifestEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.stem().to_string()).collect()
}

/// Manifest file contents: one filename per line, each newline-terminated.
pub fn render_manifest(entries: &[ManifestEntry]) -> String {
    let mut content = String::new();
    for entry in entries {
        content.push_str(&entry.file_name);
        content.push('\n');
    }
    content
}

pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    fs::write(path, render_manifest(entries))?;
    info!("Wrote {} manifest entries to {}", entries.len(), path.display());
    Ok(())
}

pub fn default_manifest_file_name(label: &str) -> String {
    format!("{label}_names.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RangeError, RenamerError};

    #[test]
    fn test_build_manifest_e2_to_e6() {
        let entries = build_manifest(NoteTable::standard(), "E2", "E6", "Bass", ".wav").unwrap();

        assert_eq!(entries.len(), 88 - 40 + 1);
        assert_eq!(entries.first().unwrap().file_name, "40_E2_Bass.wav");
        assert_eq!(entries.last().unwrap().file_name, "88_E6_Bass.wav");
        assert!(entries.windows(2).all(|pair| pair[0].midi_number + 1 == pair[1].midi_number));
    }

    #[test]
    fn test_build_manifest_start_after_end() {
        let result = build_manifest(NoteTable::standard(), "G6", "C4", "Bass", ".wav");
        assert!(matches!(
            result,
            Err(RenamerError::InvalidRange(RangeError::StartAfterEnd { .. }))
        ));
    }

    #[test]
    fn test_build_manifest_unknown_note() {
        let result = build_manifest(NoteTable::standard(), "E2", "X9", "Bass", ".wav");
        assert!(matches!(
            result,
            Err(RenamerError::InvalidRange(RangeError::UnknownNote(name))) if name == "X9"
        ));
    }

    #[test]
    fn test_build_full_manifest() {
        let entries = build_full_manifest(NoteTable::standard(), "Pad", ".wav").unwrap();
        assert_eq!(entries.len(), 128);
        assert_eq!(entries[0].file_name, "0_C-1_Pad.wav");
        assert_eq!(entries[0].note_name, "C-1");
        assert_eq!(entries[127].file_name, "127_G9_Pad.wav");
    }

    #[test]
    fn test_preview_lines_drop_extension() {
        let entries = build_manifest(NoteTable::standard(), "C4", "C#4", "Electric_Guitar", ".wav").unwrap();
        assert_eq!(
            preview_lines(&entries),
            vec!["60_C4_Electric_Guitar", "61_C#4_Electric_Guitar"]
        );
    }

    #[test]
    fn test_render_manifest() {
        let entries = build_manifest(NoteTable::standard(), "A4", "B4", "Bass", ".wav").unwrap();
        assert_eq!(
            render_manifest(&entries),
            "69_A4_Bass.wav\n70_A#4_Bass.wav\n71_B4_Bass.wav\n"
        );
        assert_eq!(render_manifest(&[]), "");
    }

    #[test]
    fn test_default_manifest_file_name() {
        assert_eq!(default_manifest_file_name("Bass"), "Bass_names.txt");
    }
}
