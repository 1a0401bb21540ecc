use super::super::args::OutputFormat;
use crate::core::ScanOutput;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanOutput),
    Extract(ScanOutput),
    Init(InitSummary),
}

impl CommandSummary {
    /// Extraction output, if this command produced any.
    pub fn output(&self) -> Option<&ScanOutput> {
        match self {
            CommandSummary::Scan(output) | CommandSummary::Extract(output) => Some(output),
            CommandSummary::Init(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: String,
}

/// Result of running comscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub format: OutputFormat,
    /// Number of files that produced an error-severity issue.
    pub error_count: usize,
}
