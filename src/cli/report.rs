//! Report formatting and printing utilities.
//!
//! Text output lists comments per file, followed by cargo-style issues.
//! JSON output is a single document for other tools to consume.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary},
};
use crate::core::{Comment, FileComments, Language, Location, ScanOutput};
use crate::issues::{Issue, Report, Rule, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(output) => match result.format {
            OutputFormat::Text => {
                report_to(output, writer);
                print_summary_to(output, writer);
            }
            OutputFormat::Json => print_json_to(output, writer),
        },
        CommandSummary::Extract(output) => match result.format {
            OutputFormat::Text => report_to(output, writer),
            OutputFormat::Json => print_json_to(output, writer),
        },
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

/// Print extracted comments and issues in text form.
pub fn report_to<W: Write>(output: &ScanOutput, writer: &mut W) {
    for file in output.files.iter().filter(|f| !f.comments.is_empty()) {
        print_file(file, writer);
    }

    for issue in &output.issues {
        print_issue(issue, writer);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_file<W: Write>(file: &FileComments, writer: &mut W) {
    let _ = writeln!(writer, "{}", display_path(&file.file_path).bold());

    let locations: Vec<String> = file.comments.iter().map(format_location).collect();
    let width = locations.iter().map(String::len).max().unwrap_or(1);

    for (comment, location) in file.comments.iter().zip(&locations) {
        let _ = writeln!(
            writer,
            "  {}  {}",
            format!("{:<width$}", location, width = width).blue(),
            escape_content(comment.content())
        );
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}",
        "-->".blue(),
        display_path(issue.file_path())
    );

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }
}

fn print_summary_to<W: Write>(output: &ScanOutput, writer: &mut W) {
    if output.issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} from {}",
                plural(output.comment_count(), "comment"),
                plural(output.files.len(), "file")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Extracted {} from {}, {} could not be scanned",
            FAILURE_MARK.red(),
            plural(output.comment_count(), "comment"),
            plural(output.files.len(), "file"),
            plural(output.issues.len(), "file").red()
        );
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path).green()
    );
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    issues: Vec<JsonIssue<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    language: Language,
    comments: &'a [Comment],
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    path: &'a str,
    rule: Rule,
    severity: Severity,
    message: String,
}

fn print_json_to<W: Write>(output: &ScanOutput, writer: &mut W) {
    let report = JsonReport {
        files: output
            .files
            .iter()
            .map(|f| JsonFile {
                path: display_path(&f.file_path),
                language: f.language,
                comments: &f.comments,
            })
            .collect(),
        issues: output
            .issues
            .iter()
            .map(|i| JsonIssue {
                path: display_path(i.file_path()),
                rule: i.report_rule(),
                severity: i.report_severity(),
                message: i.message(),
            })
            .collect(),
    };

    // Serializing borrowed strings and plain enums cannot fail.
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        let _ = writeln!(writer, "{}", json);
    }
}

fn format_location(comment: &Comment) -> String {
    match comment.location() {
        Location::Line(line) => line.to_string(),
        Location::Lines(_) if comment.line() == comment.end_line() => comment.line().to_string(),
        Location::Lines(_) => format!("{}-{}", comment.line(), comment.end_line()),
    }
}

/// Paths under the current directory are shown without the leading `./`.
fn display_path(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

fn escape_content(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
