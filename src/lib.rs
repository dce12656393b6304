// Re-export main types and functions for the CLI and other front ends
pub mod batch;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod note_table;
pub mod range;
pub mod resolver;

pub use batch::{
    BatchOptions, BatchRenamer, BatchSummary, FailurePhase, PlannedRename, RenameOutcome, RenameRecord,
};
pub use error::{RangeError, RenamerError, Result};
pub use manifest::{
    ManifestEntry, build_full_manifest, build_manifest, build_manifest_for_range, default_manifest_file_name,
    preview_lines, write_manifest,
};
pub use naming::{LabelNaming, NamingScheme, SampleNaming, label_file_name, propose_name, sample_file_name};
pub use note_table::NoteTable;
pub use range::NoteRange;
pub use resolver::{FilenameResolver, ResolutionMethod, ResolvedNote, UnresolvedPolicy};
