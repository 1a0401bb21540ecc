//! Comment extraction for C-family languages.
//!
//! Works with C99+, C++, Objective-C and Java. Two comment forms exist:
//!
//! - Single-line comments start with `//` and run to the end of the line.
//! - Multi-line comments start with `/*` and end with the nearest `*/`, and may
//!   span several lines. One that never closes is an error.
//!
//! Preprocessor directives are not interpreted.
//!
//! # Limitations
//!
//! Only double-quoted string literals are shielded, and backslash escapes are
//! not honored inside them: `"a \" // b"` ends the literal at the escaped quote,
//! so `// b"` is reported as a comment. Single-quoted literals such as `'/*'`
//! are not shielded at all. Grammars differ across the family, so these cases
//! are left as they are.

use std::sync::LazyLock;

use regex::Regex;

use super::line_index::LineIndex;
use crate::core::{Comment, ExtractResult, UnterminatedCommentError};

// Alternatives are tried in order at each position. String literals come
// first so comment markers inside them are consumed as part of the literal.
// `error` can only match a `/*` that `multi` could not close.
static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?P<literal>(?:"[^"\n]*")+)|(?P<single>//(?P<single_content>.*)$)|(?P<multi>/\*(?P<multi_content>(?s:.*?))\*/)|(?P<error>/\*)"#,
    )
    .unwrap()
});

/// Extract all comments from C-family source code, in document order.
///
/// # Errors
///
/// Returns [`UnterminatedCommentError`] if a `/*` has no matching `*/`.
/// Comments found before it are discarded.
pub fn extract_comments(code: &str) -> ExtractResult {
    let line_index = LineIndex::new(code);
    let mut comments = Vec::new();

    for captures in COMMENT_REGEX.captures_iter(code) {
        if let Some(single) = captures.name("single") {
            let content = captures.name("single_content").map_or("", |m| m.as_str());
            comments.push(Comment::single_line(
                content,
                line_index.line_of(single.start()),
            ));
        } else if let Some(multi) = captures.name("multi") {
            let content = captures.name("multi_content").map_or("", |m| m.as_str());
            comments.push(Comment::multi_line(
                content,
                line_index.line_of(multi.start()),
                line_index.line_of(multi.end()),
            ));
        } else if captures.name("error").is_some() {
            return Err(UnterminatedCommentError);
        }
    }

    Ok(comments)
}
