use std::fmt;

use serde::Serialize;

/// Where a comment sits in its source file.
///
/// Serializes as a bare integer for single-line comments and as an array
/// of line numbers for multi-line comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Location {
    /// 1-indexed line of a single-line comment.
    Line(usize),
    /// Every 1-indexed line a multi-line comment spans, ascending and contiguous.
    Lines(Vec<usize>),
}

/// A comment extracted from source code.
///
/// Records are immutable once built. The constructors are the only way to
/// create one, so `is_multiline` always agrees with the shape of `location`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    content: String,
    location: Location,
    is_multiline: bool,
}

impl Comment {
    /// A comment terminated by end of line (or end of input).
    pub fn single_line(content: impl Into<String>, line: usize) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-indexed");
        Self {
            content: content.into(),
            location: Location::Line(line),
            is_multiline: false,
        }
    }

    /// A comment with explicit delimiters, spanning `start..=end`.
    pub fn multi_line(content: impl Into<String>, start: usize, end: usize) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self {
            content: content.into(),
            location: Location::Lines((start..=end).collect()),
            is_multiline: true,
        }
    }

    /// Raw text between the delimiters.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_multiline(&self) -> bool {
        self.is_multiline
    }

    /// All lines covered by the comment.
    pub fn lines(&self) -> &[usize] {
        match &self.location {
            Location::Line(line) => std::slice::from_ref(line),
            Location::Lines(lines) => lines,
        }
    }

    /// Line the comment starts on.
    pub fn line(&self) -> usize {
        self.lines()[0]
    }

    /// Line the comment ends on.
    pub fn end_line(&self) -> usize {
        self.lines()[self.lines().len() - 1]
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
