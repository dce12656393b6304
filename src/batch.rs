//! Folder-wide renaming with a backup copy taken before every rename.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use log::{debug, error, info, warn};

use crate::error::{RenamerError, Result};
use crate::naming::{LabelNaming, NamingScheme, extension_of};
use crate::resolver::FilenameResolver;

pub const DEFAULT_EXTENSIONS: [&str; 4] = ["wav", "aif", "aiff", "mp3"];
pub const DEFAULT_BACKUP_DIR: &str = "backup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Label placed after the note in every new name.
    pub label: String,
    /// Subdirectory of the target folder receiving the backup copies.
    pub backup_dir_name: String,
    /// Eligible extensions without the dot, compared case-insensitively.
    pub extensions: Vec<String>,
}

impl BatchOptions {
    pub fn new(label: impl Into<String>) -> Self {
        BatchOptions {
            label: label.into(),
            backup_dir_name: DEFAULT_BACKUP_DIR.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn is_eligible(&self, file_name: impl AsRef<Path>) -> bool {
        file_name
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
    }
}

/// Step at which a per-file failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePhase {
    /// Copying into the backup folder failed; the original is untouched.
    Backup,
    /// The backup copy exists but the original could not be moved.
    Rename,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    SkippedCollision,
    SkippedUnresolved,
    Failed { phase: FailurePhase, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub original_path: PathBuf,
    pub backup_path: Option<PathBuf>,
    pub new_path: Option<PathBuf>,
    pub outcome: RenameOutcome,
}

/// A proposed rename shown before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub original_name: String,
    pub proposed_name: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub renamed: usize,
    pub skipped_collision: usize,
    pub skipped_unresolved: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[RenameRecord]) -> Self {
        let mut summary = BatchSummary::default();
        for record in records {
            match record.outcome {
                RenameOutcome::Renamed => summary.renamed += 1,
                RenameOutcome::SkippedCollision => summary.skipped_collision += 1,
                RenameOutcome::SkippedUnresolved => summary.skipped_unresolved += 1,
                RenameOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.renamed + self.skipped_collision + self.skipped_unresolved + self.failed
    }
}

pub struct BatchRenamer<'a> {
    resolver: FilenameResolver<'a>,
    options: BatchOptions,
    scheme: LabelNaming,
}

impl<'a> BatchRenamer<'a> {
    pub fn new(resolver: FilenameResolver<'a>, options: BatchOptions) -> Self {
        let scheme = LabelNaming::new(options.label.clone());
        BatchRenamer {
            resolver,
            options,
            scheme,
        }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Eligible audio files directly inside `directory`, sorted by name.
    pub fn eligible_files(&self, directory: &Path) -> Result<Vec<OsString>> {
        if !directory.is_dir() {
            return Err(RenamerError::NotADirectory(directory.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if self.options.is_eligible(&file_name) {
                files.push(file_name);
            }
        }

        files.sort();
        Ok(files)
    }

    /// New name for one file, or `None` when its note can't be resolved.
    pub fn proposed_name(&self, file_name: &str) -> Option<String> {
        let note = self.resolver.resolve(file_name)?;
        Some(self.scheme.file_name(note.midi_number, &note.note_name, &extension_of(file_name)))
    }

    pub fn preview_folder(&self, directory: &Path) -> Result<Vec<PlannedRename>> {
        Ok(self
            .eligible_files(directory)?
            .into_iter()
            .map(|file_name| PlannedRename {
                proposed_name: file_name.to_str().and_then(|name| self.proposed_name(name)),
                original_name: file_name.to_string_lossy().into_owned(),
            })
            .collect())
    }

    pub fn rename_folder(&self, directory: &Path) -> Result<Vec<RenameRecord>> {
        self.rename_folder_with_progress(directory, &ProgressBar::hidden())
    }

    /// Renames every eligible file in `directory`, one at a time, in
    /// file-name order rather than raw directory listing order.
    ///
    /// Per-file problems are recorded in the returned records and never
    /// stop the batch; only failing to list the directory is an error.
    pub fn rename_folder_with_progress(&self, directory: &Path, progress: &ProgressBar) -> Result<Vec<RenameRecord>> {
        let files = self.eligible_files(directory)?;
        let backup_dir = directory.join(&self.options.backup_dir_name);
        info!("Renaming {} files in {}", files.len(), directory.display());

        progress.set_length(files.len() as u64);
        let mut records = Vec::with_capacity(files.len());
        for file_name in &files {
            progress.set_message(format!("Processing {}", file_name.to_string_lossy()));
            records.push(self.rename_file(directory, &backup_dir, file_name));
            progress.inc(1);
        }

        Ok(records)
    }

    fn rename_file(&self, directory: &Path, backup_dir: &Path, file_name: &OsStr) -> RenameRecord {
        let original_path = directory.join(file_name);
        let Some(file_name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name {:?}", file_name);
            return RenameRecord {
                original_path,
                backup_path: None,
                new_path: None,
                outcome: RenameOutcome::SkippedUnresolved,
            };
        };
        debug!("Processing file: {}", file_name);

        let Some(new_name) = self.proposed_name(file_name) else {
            info!("Skipping {}: no MIDI number or note name found", file_name);
            return RenameRecord {
                original_path,
                backup_path: None,
                new_path: None,
                outcome: RenameOutcome::SkippedUnresolved,
            };
        };

        let new_path = directory.join(&new_name);
        // A dangling symlink still occupies the name.
        if fs::symlink_metadata(&new_path).is_ok() {
            warn!("File {} already exists, skipping {}", new_name, file_name);
            return RenameRecord {
                original_path,
                backup_path: None,
                new_path: Some(new_path),
                outcome: RenameOutcome::SkippedCollision,
            };
        }

        let backup_path = backup_dir.join(file_name);
        if let Err(err) = fs::create_dir_all(backup_dir).and_then(|_| fs::copy(&original_path, &backup_path)) {
            error!("Backup of {} failed: {}", file_name, err);
            return RenameRecord {
                original_path,
                backup_path: None,
                new_path: Some(new_path),
                outcome: RenameOutcome::Failed {
                    phase: FailurePhase::Backup,
                    message: err.to_string(),
                },
            };
        }

        let outcome = match fs::rename(&original_path, &new_path) {
            Ok(()) => {
                debug!("Renamed {} -> {}", file_name, new_name);
                RenameOutcome::Renamed
            }
            Err(err) => {
                error!("Rename of {} failed after backup: {}", file_name, err);
                RenameOutcome::Failed {
                    phase: FailurePhase::Rename,
                    message: err.to_string(),
                }
            }
        };

        RenameRecord {
            original_path,
            backup_path: Some(backup_path),
            new_path: Some(new_path),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note_table::NoteTable;

    fn renamer(label: &str) -> BatchRenamer<'static> {
        BatchRenamer::new(FilenameResolver::new(NoteTable::standard()), BatchOptions::new(label))
    }

    #[test]
    fn test_eligible_extensions() {
        let options = BatchOptions::new("Bass");
        assert!(options.is_eligible("60_C4.wav"));
        assert!(options.is_eligible("60_C4.WAV"));
        assert!(options.is_eligible("take.Aif"));
        assert!(options.is_eligible("take.aiff"));
        assert!(options.is_eligible("take.mp3"));
        assert!(!options.is_eligible("take.flac"));
        assert!(!options.is_eligible("notes.txt"));
        assert!(!options.is_eligible("wav"));
    }

    #[test]
    fn test_proposed_name_keeps_extension() {
        let renamer = renamer("Bass");
        assert_eq!(renamer.proposed_name("60_C4_old.AIF"), Some("60_C4_Bass.AIF".to_string()));
        assert_eq!(renamer.proposed_name("Guitar_F#3_take2.mp3"), Some("54_F#3_Bass.mp3".to_string()));
        assert_eq!(renamer.proposed_name("random.wav"), None);
    }

    #[test]
    fn test_not_a_directory() {
        let renamer = renamer("Bass");
        let result = renamer.rename_folder(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(RenamerError::NotADirectory(_))));
    }

    #[test]
    fn test_summary_counts() {
        let record = |outcome| RenameRecord {
            original_path: PathBuf::from("a.wav"),
            backup_path: None,
            new_path: None,
            outcome,
        };
        let records = vec![
            record(RenameOutcome::Renamed),
            record(RenameOutcome::Renamed),
            record(RenameOutcome::SkippedCollision),
            record(RenameOutcome::SkippedUnresolved),
            record(RenameOutcome::Failed {
                phase: FailurePhase::Rename,
                message: "denied".to_string(),
            }),
        ];

        let summary = BatchSummary::from_records(&records);
        assert_eq!(summary.renamed, 2);
        assert_eq!(summary.skipped_collision, 1);
        assert_eq!(summary.skipped_unresolved, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 5);
    }
}
