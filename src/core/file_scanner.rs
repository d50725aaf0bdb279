use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths under the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files in traversal order.
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Recursively collect files under `root` whose name ends with one of `extensions`.
///
/// A `root` that is not a directory yields no files.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    if !root.is_dir() {
        if verbose {
            eprintln!(
                "{} Source root is not a directory: {}",
                "warning:".bold().yellow(),
                root.display()
            );
        }
        return ScanResult {
            files,
            skipped_count,
        };
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        // `Path::is_file` follows symlinks, so linked sources are scanned too
        if path.is_file() && is_source_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Suffix match on the file name, so `.cpp` matches `main.cpp`.
fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
