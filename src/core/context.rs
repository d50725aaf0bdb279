use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    cli::args::DumpArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        extractor::{ExtractOptions, Extractor},
        file_scanner::scan_files,
        table::TextIdTable,
    },
};

/// A source file that could not be read.
#[derive(Debug)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Output of the extraction stage.
#[derive(Debug, Default)]
pub struct Extraction {
    pub table: TextIdTable,
    /// Files read and scanned successfully.
    pub files_scanned: usize,
    /// Marker matches, duplicates included.
    pub match_count: usize,
    pub unreadable: Vec<ReadFailure>,
}

/// Everything a dump run needs, resolved once up front.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--marker TR`)
/// 2. `.tidumprc.json` found from the source root upwards
/// 3. Built-in defaults
pub struct DumpContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory tree to scan.
    pub root_dir: PathBuf,

    /// Where the table is written.
    pub output: PathBuf,

    /// Source files to scan, in traversal order.
    pub files: Vec<PathBuf>,

    /// Paths the directory walk could not access.
    pub skipped_count: usize,

    pub verbose: bool,
}

impl DumpContext {
    /// Load configuration, apply CLI overrides and collect the source files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid, or the CLI overrides
    /// leave it invalid.
    pub fn new(args: &DumpArgs) -> Result<Self> {
        let verbose = args.verbose;

        let root_dir = args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let config_result = load_config(&config_search_dir(&root_dir, &cwd))?;

        if verbose {
            match &config_result.path {
                Some(path) => eprintln!("Note: Using config file {}", path.display()),
                None => eprintln!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }

        let base_dir = config_result.base_dir().map(Path::to_path_buf);
        let mut config = config_result.config;

        if let Some(ref marker) = args.marker {
            config.marker = marker.clone();
        }
        if !args.extensions.is_empty() {
            config.extensions = args.extensions.clone();
        }
        if args.strip_quotes {
            config.strip_quotes = true;
        }
        if args.all_matches {
            config.all_matches = true;
        }
        config.validate().context("Invalid command line options")?;

        let output = match &args.output {
            Some(output) => output.clone(),
            None => resolve_config_path(base_dir.as_deref(), &config.output),
        };

        let scan_result = scan_files(&root_dir, &config.extensions, &config.ignores, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            output,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
            verbose,
        })
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            strip_quotes: self.config.strip_quotes,
            all_matches: self.config.all_matches,
        }
    }

    /// Scan every collected file, one at a time, into a single table.
    ///
    /// Unreadable files are recorded and skipped.
    pub fn extract(&self) -> Result<Extraction> {
        let extractor = Extractor::new(&self.config.marker, self.extract_options())?;
        let mut extraction = Extraction::default();
        let total = self.files.len();

        for (index, path) in self.files.iter().enumerate() {
            if self.verbose {
                eprintln!("Processing {} ({}/{})", path.display(), index + 1, total);
            }

            let mut file_table = TextIdTable::new();
            match extractor.extract_file(path, &mut file_table) {
                Ok(count) => {
                    extraction.match_count += count;
                    extraction.files_scanned += 1;
                    extraction.table.merge(file_table);
                }
                Err(e) => {
                    extraction.unreadable.push(ReadFailure {
                        path: path.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        Ok(extraction)
    }
}

/// Absolute directory the config search starts from.
///
/// A missing root still yields an absolute path, so its parents are searched.
fn config_search_dir(root: &Path, cwd: &Path) -> PathBuf {
    if let Ok(path) = root.canonicalize() {
        return path;
    }
    let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());
    cwd.join(root)
}

/// Relative paths from a config file are anchored at the config file's directory.
fn resolve_config_path(base_dir: Option<&Path>, value: &str) -> PathBuf {
    let path = Path::new(value);
    match base_dir {
        Some(base) if path.is_relative() => {
            let rel = path.strip_prefix(".").unwrap_or(path);
            base.join(rel)
        }
        _ => path.to_path_buf(),
    }
}
