use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, finish};
use crate::{
    core::{ExtractComments, FileComments, Language, ScanOutput},
    issues::UnterminatedCommentIssue,
};

/// Display name used for input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let from_stdin = cmd.file == Path::new("-");

    let language = match cmd.language {
        Some(language) => language,
        None if from_stdin => anyhow::bail!("--language is required when reading from stdin"),
        None => Language::from_path(&cmd.file).with_context(|| {
            format!(
                "Cannot detect the language of {}, use --language",
                cmd.file.display()
            )
        })?,
    };

    let (file_path, code) = if from_stdin {
        let mut code = String::new();
        io::stdin()
            .read_to_string(&mut code)
            .context("Failed to read stdin")?;
        (STDIN_NAME.to_string(), code)
    } else {
        let code = fs::read_to_string(&cmd.file)
            .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?;
        (cmd.file.to_string_lossy().into_owned(), code)
    };

    let mut output = ScanOutput::default();
    match language.tokenizer().extract_comments(&code) {
        Ok(comments) => output.files.push(FileComments {
            file_path,
            language,
            comments,
        }),
        Err(_) => output
            .issues
            .push(UnterminatedCommentIssue::new(file_path).into()),
    }

    Ok(finish(CommandSummary::Extract(output), cmd.format))
}
