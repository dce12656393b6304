// Sample Renamer: name audio samples by MIDI note and plan sample libraries.
//
// Usage:
//   sample-renamer manifest --name Bass --range E2-E6 [--output Bass_names.txt]
//   sample-renamer rename ./samples --name Bass [--dry-run]
//   sample-renamer name 67_G4_take1.wav --instrument Bass --group Gadulka_Buzz

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, info};

use sample_renamer::{
    BatchOptions, BatchRenamer, BatchSummary, FailurePhase, FilenameResolver, NoteRange, NoteTable, RenameOutcome,
    RenameRecord, Result, SampleNaming, UnresolvedPolicy, build_manifest_for_range, default_manifest_file_name,
    preview_lines, propose_name, write_manifest,
};

#[derive(Parser, Debug)]
#[command(name = "sample-renamer", version)]
#[command(about = "Rename audio samples by MIDI note and generate sample-name manifests", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Preview or save the list of expected filenames for a note range
    Manifest {
        /// Name placed after the note (e.g. Electric_Guitar)
        #[arg(short, long)]
        name: String,

        /// Note range such as E2-E6 (default: the full MIDI range)
        #[arg(short, long)]
        range: Option<String>,

        /// Extension for every entry, including the dot
        #[arg(short, long, default_value = ".wav")]
        ext: String,

        /// Output file (default: `<name>_names.txt`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the names instead of writing a file
        #[arg(long)]
        preview: bool,
    },

    /// Rename every audio file in a folder, backing each one up first
    Rename {
        /// Folder containing .wav/.aif/.aiff/.mp3 files
        directory: PathBuf,

        /// Name placed after the note (e.g. Electric_Guitar)
        #[arg(short, long)]
        name: String,

        /// Show the proposed names without renaming anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Propose a full sample name for a single file
    Name {
        filename: String,

        #[arg(short, long)]
        instrument: String,

        #[arg(short, long)]
        group: String,

        /// Round-robin index
        #[arg(long, default_value = "1")]
        rr: u32,

        /// Don't fall back to C4 when no note is found
        #[arg(long)]
        no_default: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("🎵 Sample Renamer v{} 🎵", env!("CARGO_PKG_VERSION"));
    println!();

    let table = NoteTable::standard();
    let result = match cli.command {
        Command::Manifest {
            name,
            range,
            ext,
            output,
            preview,
        } => run_manifest(table, &name, range.as_deref(), &ext, output, preview),
        Command::Rename {
            directory,
            name,
            dry_run,
        } => run_rename(table, &directory, &name, dry_run),
        Command::Name {
            filename,
            instrument,
            group,
            rr,
            no_default,
        } => run_name(table, &filename, &instrument, &group, rr, no_default),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_manifest(
    table: &NoteTable,
    name: &str,
    range_text: Option<&str>,
    extension: &str,
    output: Option<PathBuf>,
    preview: bool,
) -> Result<()> {
    let range = match range_text {
        Some(text) => NoteRange::parse(text, table)?,
        None => NoteRange::full(),
    };
    let entries = build_manifest_for_range(table, range, name, extension)?;

    if preview {
        for line in preview_lines(&entries) {
            println!("{}", line);
        }
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| PathBuf::from(default_manifest_file_name(name)));
    println!("-> Saving {} names to: {:?}", entries.len(), output_path);
    write_manifest(&output_path, &entries)?;
    println!("✅ Text file has been created.");
    Ok(())
}

fn run_rename(table: &NoteTable, directory: &Path, name: &str, dry_run: bool) -> Result<()> {
    let renamer = BatchRenamer::new(FilenameResolver::new(table), BatchOptions::new(name));

    let plan = renamer.preview_folder(directory)?;
    if plan.is_empty() {
        println!("⚠️  No audio files found in directory: {}", directory.display());
        return Ok(());
    }

    for planned in &plan {
        match &planned.proposed_name {
            Some(proposed) => println!("{} -> {}", planned.original_name, proposed),
            None => println!("{} -> (no note found, will be skipped)", planned.original_name),
        }
    }

    if dry_run {
        return Ok(());
    }

    println!();
    println!("🚀 Renaming {} files...", plan.len());
    let progress = ProgressBar::new(plan.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("🔄 [{bar:40.cyan/blue}] {pos:>3}/{len:3} files ({percent}%) {msg}") {
        progress.set_style(style);
    }

    let records = renamer.rename_folder_with_progress(directory, &progress)?;
    progress.finish_with_message("Renaming complete!");
    info!("Batch finished with {} records", records.len());

    print_summary(&records);
    Ok(())
}

fn print_summary(records: &[RenameRecord]) {
    let summary = BatchSummary::from_records(records);

    println!();
    println!("📊 RENAME SUMMARY:");
    println!("   ✅ Renamed:          {}", summary.renamed);
    println!("   ⏭️  Already exists:   {}", summary.skipped_collision);
    println!("   ❔ No note found:    {}", summary.skipped_unresolved);
    println!("   ❌ Failed:           {}", summary.failed);
    println!("   📁 Total:            {}", summary.total());

    let problems: Vec<String> = records.iter().filter_map(describe_problem).collect();
    if !problems.is_empty() {
        println!();
        println!("⚠️  DETAILS:");
        for problem in &problems {
            println!("   • {}", problem);
        }
    }
}

fn describe_problem(record: &RenameRecord) -> Option<String> {
    let original = record.original_path.display();
    match &record.outcome {
        RenameOutcome::Renamed => None,
        RenameOutcome::SkippedCollision => Some(format!(
            "{}: target {} already exists",
            original,
            record.new_path.as_deref().map(|p| p.display().to_string()).unwrap_or_default()
        )),
        RenameOutcome::SkippedUnresolved => Some(format!("{}: could not find a MIDI number or note name", original)),
        RenameOutcome::Failed {
            phase: FailurePhase::Backup,
            message,
        } => Some(format!("{}: backup failed, file untouched ({})", original, message)),
        RenameOutcome::Failed {
            phase: FailurePhase::Rename,
            message,
        } => Some(format!("{}: backed up but not renamed ({})", original, message)),
    }
}

fn run_name(
    table: &NoteTable,
    filename: &str,
    instrument: &str,
    group: &str,
    round_robin: u32,
    no_default: bool,
) -> Result<()> {
    let resolver = FilenameResolver::new(table);
    let scheme = SampleNaming::new(instrument, group, round_robin);
    let policy = if no_default {
        UnresolvedPolicy::LeaveUnresolved
    } else {
        UnresolvedPolicy::DefaultToC4
    };

    match propose_name(&resolver, filename, &scheme, policy) {
        Some(proposed) => println!("{} → {}", filename, proposed),
        None => println!("{} → (no note found)", filename),
    }
    Ok(())
}
