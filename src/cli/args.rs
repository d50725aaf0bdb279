//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `dump`: Extract text ids from sources and write the JSON table
//! - `init`: Initialize a tidump configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Dump(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Default, Parser)]
pub struct DumpArgs {
    /// Directory tree to scan (default: current directory)
    #[arg(long, short = 's')]
    pub source_root: Option<PathBuf>,

    /// Output JSON file (overrides config file)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Marker that precedes the quoted text id (overrides config file)
    #[arg(long)]
    pub marker: Option<String>,

    /// File name suffix to scan, replaces the configured list
    /// Can be specified multiple times: --ext .cpp --ext .h
    #[arg(long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// Store ids without their surrounding quotes
    #[arg(long)]
    pub strip_quotes: bool,

    /// Record every marker on a line instead of only the first
    #[arg(long)]
    pub all_matches: bool,

    /// Keep translations already present in the output file
    #[arg(long)]
    pub merge: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    #[command(flatten)]
    pub args: DumpArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract marker text ids from source files into a JSON table
    Dump(DumpCommand),
    /// Initialize a new .tidumprc.json configuration file
    Init,
}
