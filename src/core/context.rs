use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{Comment, Language, file_scanner::scan_files, parsers::ExtractComments},
    issues::{Issue, ReadErrorIssue, Report, UnterminatedCommentIssue},
};

/// Comments extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComments {
    pub file_path: String,
    pub language: Language,
    pub comments: Vec<Comment>,
}

/// Everything a scan produced, sorted by file path.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub files: Vec<FileComments>,
    pub issues: Vec<Issue>,
}

impl ScanOutput {
    pub fn comment_count(&self) -> usize {
        self.files.iter().map(|f| f.comments.len()).sum()
    }
}

/// Read and tokenize one file.
///
/// An unterminated comment is reported as-is; the file is not retried with
/// another tokenizer.
pub fn extract_file(file_path: &str, language: Language) -> Result<FileComments, Issue> {
    let code = fs::read_to_string(file_path).map_err(|e| {
        Issue::from(ReadErrorIssue {
            file_path: file_path.to_string(),
            error: format!("Failed to read file: {}", e),
        })
    })?;

    let comments = language
        .tokenizer()
        .extract_comments(&code)
        .map_err(|_| Issue::from(UnterminatedCommentIssue::new(file_path)))?;

    Ok(FileComments {
        file_path: file_path.to_string(),
        language,
        comments,
    })
}

/// Scan context: merged configuration plus the files it selects.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--source-root src`)
/// 2. `.comscanrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Files to tokenize, with the language detected from their extension.
    pub files: BTreeMap<String, Language>,
    pub verbose: bool,
}

impl ScanContext {
    /// Load config from the source root and scan it for source files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .comscanrc.json found, using default configuration");
        }

        Ok(Self::with_config(config_result.config, root_dir, verbose))
    }

    pub fn with_config(config: Config, root_dir: PathBuf, verbose: bool) -> Self {
        let scan_result = scan_files(Path::new(&root_dir), &config, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
        }
    }

    /// Tokenize every scanned file in parallel.
    ///
    /// `language_override` forces one language for all files instead of the
    /// per-extension mapping.
    pub fn extract_all(&self, language_override: Option<Language>) -> ScanOutput {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|(file_path, language)| {
                extract_file(file_path, language_override.unwrap_or(*language))
            })
            .collect();

        let mut output = ScanOutput::default();
        for result in results {
            match result {
                Ok(file) => output.files.push(file),
                Err(issue) => {
                    if self.verbose {
                        eprintln!("Warning: {} - {}", issue.file_path(), issue.message());
                    }
                    output.issues.push(issue);
                }
            }
        }

        output.files.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        output.issues.sort();
        output
    }
}
