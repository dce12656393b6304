//! Extracting a (MIDI number, note name) pair from a loosely formatted
//! sample filename.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::note_table::NoteTable;

/// `<digits>_<note>` at the very start of the name. No octave sign here,
/// so `0_C-1.wav` never matches this form.
const STRICT_PREFIX_PATTERN: &str = r"^(\d+)_([A-G]#?\d+)";

/// A note token anywhere, bounded by `_` or `-` on both sides. The only
/// signed octave is `-1`.
const LOOSE_TOKEN_PATTERN: &str = r"[_-]([A-G]#?(?:-1|\d+))[_-]";

const FALLBACK_MIDI: u8 = 60;
const FALLBACK_NOTE: &str = "C4";

static STRICT_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static LOOSE_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn strict_prefix_regex() -> &'static Regex {
    STRICT_PREFIX_REGEX.get_or_init(|| Regex::new(STRICT_PREFIX_PATTERN).expect("invalid regex pattern"))
}

fn loose_token_regex() -> &'static Regex {
    LOOSE_TOKEN_REGEX.get_or_init(|| Regex::new(LOOSE_TOKEN_PATTERN).expect("invalid regex pattern"))
}

/// Which rule produced a [`ResolvedNote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMethod {
    StrictPrefix,
    LooseToken,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNote {
    pub midi_number: u8,
    /// The note token as it appeared in the filename.
    pub note_name: String,
    pub method: ResolutionMethod,
}

/// What to do when a filename carries no recognizable note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Substitute middle C (60, "C4"). Only meant for previews.
    DefaultToC4,
    #[default]
    LeaveUnresolved,
}

#[derive(Debug, Clone, Copy)]
pub struct FilenameResolver<'a> {
    table: &'a NoteTable,
}

impl<'a> FilenameResolver<'a> {
    pub fn new(table: &'a NoteTable) -> Self {
        FilenameResolver { table }
    }

    pub fn table(&self) -> &'a NoteTable {
        self.table
    }

    /// Tries the strict prefix form first, then a bounded note token
    /// anywhere in the name. Returns `None` when neither validates.
    pub fn resolve(&self, filename: &str) -> Option<ResolvedNote> {
        let resolved = self
            .match_strict_prefix(filename)
            .or_else(|| self.match_loose_token(filename));

        match &resolved {
            Some(note) => debug!(
                "Resolved '{}' to {} ({}) via {:?}",
                filename, note.midi_number, note.note_name, note.method
            ),
            None => debug!("No note found in '{}'", filename),
        }
        resolved
    }

    pub fn resolve_with_policy(&self, filename: &str, policy: UnresolvedPolicy) -> Option<ResolvedNote> {
        self.resolve(filename).or_else(|| match policy {
            UnresolvedPolicy::DefaultToC4 => Some(ResolvedNote {
                midi_number: FALLBACK_MIDI,
                note_name: FALLBACK_NOTE.to_string(),
                method: ResolutionMethod::Fallback,
            }),
            UnresolvedPolicy::LeaveUnresolved => None,
        })
    }

    fn match_strict_prefix(&self, filename: &str) -> Option<ResolvedNote> {
        let captures = strict_prefix_regex().captures(filename)?;
        let token = captures.get(2)?.as_str();
        // Digit runs too long for a u8 can't name a table entry anyway.
        let midi_number: u8 = captures.get(1)?.as_str().parse().ok()?;

        let canonical = self.table.lookup_by_number(midi_number).ok()?;
        if canonical.replace('-', "") != token {
            return None;
        }

        Some(ResolvedNote {
            midi_number,
            note_name: token.to_string(),
            method: ResolutionMethod::StrictPrefix,
        })
    }

    fn match_loose_token(&self, filename: &str) -> Option<ResolvedNote> {
        let token = loose_token_regex().captures(filename)?.get(1)?.as_str();
        let midi_number = self.table.lookup_by_name(token)?;

        Some(ResolvedNote {
            midi_number,
            note_name: token.to_string(),
            method: ResolutionMethod::LooseToken,
        })
    }
}
