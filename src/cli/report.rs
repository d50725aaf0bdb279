//! Console output for command results.
//!
//! Kept apart from the pipeline so tidump can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, DumpSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Dump(summary) => {
            print_unreadable_warning_to(summary, verbose, &mut io::stderr().lock());
            print_dump_to(summary, verbose, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => {
            print_init_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock());
        }
    }
}

/// Announce how many source files the walk collected.
pub fn print_found(count: usize, root: &Path) {
    print_found_to(count, root, &mut io::stdout().lock());
}

pub fn print_found_to<W: Write>(count: usize, root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Found {} source {} under {}",
        count,
        plural(count, "file", "files"),
        root.display()
    );
}

pub fn print_dump_to<W: Write>(summary: &DumpSummary, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} in {} of {} files ({} path(s) inaccessible)",
            summary.match_count,
            plural(summary.match_count, "match", "matches"),
            summary.files_scanned,
            summary.files_found,
            summary.skipped_paths
        );
    }

    if let Some(stats) = summary.merge {
        let _ = writeln!(
            writer,
            "Kept {} existing {}, dropped {} stale {}",
            stats.kept,
            plural(stats.kept, "translation", "translations"),
            stats.stale,
            plural(stats.stale, "id", "ids"),
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} text {} from {} {} to {}",
            summary.id_count,
            plural(summary.id_count, "id", "ids"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.output.display()
        )
        .green()
    );
}

pub fn print_unreadable_warning_to<W: Write>(summary: &DumpSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for failure in &summary.unreadable {
            let _ = writeln!(
                writer,
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                failure.path.display(),
                failure.error
            );
        }
        return;
    }

    let count = summary.unreadable.len();
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read and were skipped (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
