use anyhow::Result;

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, finish};
use crate::core::ScanContext;

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;

    if ctx.verbose {
        eprintln!("Scanning {} file(s)", ctx.files.len());
    }

    let output = ctx.extract_all(cmd.language);

    Ok(finish(CommandSummary::Scan(output), cmd.format))
}
