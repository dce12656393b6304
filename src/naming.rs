//! Output filename schemes.

use std::path::Path;

use crate::resolver::{FilenameResolver, UnresolvedPolicy};

/// Builds an output filename for one note.
///
/// `extension` is appended verbatim; callers supply the leading dot.
pub trait NamingScheme {
    fn file_name(&self, midi_number: u8, note_name: &str, extension: &str) -> String;
}

/// Full sample name: `<midi>_<note>_<instrument>_<group>_RR<n><ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleNaming {
    pub instrument: String,
    pub group: String,
    pub round_robin: u32,
}

/// Short name used for manifests and folder renames: `<midi>_<note>_<label><ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNaming {
    pub label: String,
}

impl SampleNaming {
    pub fn new(instrument: impl Into<String>, group: impl Into<String>, round_robin: u32) -> Self {
        SampleNaming {
            instrument: instrument.into(),
            group: group.into(),
            round_robin,
        }
    }
}

impl LabelNaming {
    pub fn new(label: impl Into<String>) -> Self {
        LabelNaming { label: label.into() }
    }
}

impl NamingScheme for SampleNaming {
    fn file_name(&self, midi_number: u8, note_name: &str, extension: &str) -> String {
        sample_file_name(
            midi_number,
            note_name,
            &self.instrument,
            &self.group,
            self.round_robin,
            extension,
        )
    }
}

impl NamingScheme for LabelNaming {
    fn file_name(&self, midi_number: u8, note_name: &str, extension: &str) -> String {
        label_file_name(midi_number, note_name, &self.label, extension)
    }
}

pub fn sample_file_name(
    midi_number: u8,
    note_name: &str,
    instrument: &str,
    group: &str,
    round_robin: u32,
    extension: &str,
) -> String {
    format!("{midi_number}_{note_name}_{instrument}_{group}_RR{round_robin}{extension}")
}

pub fn label_file_name(midi_number: u8, note_name: &str, label: &str, extension: &str) -> String {
    format!("{midi_number}_{note_name}_{label}{extension}")
}

/// Extension of `filename` including the leading dot, or `""` when it has none.
/// Dotfiles such as `.wav` count as having no extension.
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Proposes a new name for a single file, keeping its extension.
///
/// Returns `None` only when the name is unresolved and `policy` is
/// [`UnresolvedPolicy::LeaveUnresolved`].
pub fn propose_name(
    resolver: &FilenameResolver<'_>,
    filename: &str,
    scheme: &dyn NamingScheme,
    policy: UnresolvedPolicy,
) -> Option<String> {
    let note = resolver.resolve_with_policy(filename, policy)?;
    Some(scheme.file_name(note.midi_number, &note.note_name, &extension_of(filename)))
}
