use super::{CommandResult, CommandSummary};
use crate::cli::args::OutputFormat;
use crate::issues::Severity;

pub fn finish(summary: CommandSummary, format: OutputFormat) -> CommandResult {
    let error_count = summary.output().map_or(0, |output| {
        output
            .issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    });

    CommandResult {
        summary,
        format,
        error_count,
    }
}
