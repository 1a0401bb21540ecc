//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract comments from every source file under a directory
//! - `extract`: Extract comments from a single file (or stdin)
//! - `init`: Initialize comscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::Language;

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
}

/// Output format for extracted comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

/// Common arguments shared by commands that read configuration.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Tokenize every file as this language instead of detecting it from the extension
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// File to read, or `-` for stdin
    pub file: PathBuf,

    /// Language of the input (required for stdin)
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract comments from all C-family and JavaScript files under the source root
    Scan(ScanCommand),
    /// Extract comments from a single file
    Extract(ExtractCommand),
    /// Initialize a new .comscanrc.json configuration file
    Init,
}
