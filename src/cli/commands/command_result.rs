use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::{MergeStats, ReadFailure};

#[derive(Debug)]
pub enum CommandSummary {
    Dump(DumpSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DumpSummary {
    /// Source files collected by the directory walk.
    pub files_found: usize,
    pub files_scanned: usize,
    /// Paths the walk could not access.
    pub skipped_paths: usize,
    pub unreadable: Vec<ReadFailure>,
    /// Distinct text ids written.
    pub id_count: usize,
    pub match_count: usize,
    /// Set when an existing table was merged.
    pub merge: Option<MergeStats>,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tidump commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
