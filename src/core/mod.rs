//! Core comment extraction engine.
//!
//! ## Module Structure
//!
//! - `data`: Comment record, Location and Language
//! - `error`: UnterminatedCommentError shared by all tokenizers
//! - `parsers`: per-language-family tokenizers
//! - `file_scanner`: source file discovery
//! - `context`: ScanContext, parallel extraction over scanned files

pub mod context;
pub mod data;
pub mod error;
pub mod file_scanner;
pub mod parsers;

pub use context::{FileComments, ScanContext, ScanOutput};
pub use data::{Comment, Language, Location};
pub use error::{ExtractResult, UnterminatedCommentError};
pub use parsers::{ExtractComments, Tokenizer};

/// Extract comments from `code` using the tokenizer for `language`.
///
/// # Example
///
/// ```
/// use comscan::core::{Comment, Language, extract_comments};
///
/// let comments = extract_comments(Language::JavaScript, "let a = 1; // one").unwrap();
/// assert_eq!(comments, vec![Comment::single_line(" one", 1)]);
/// ```
pub fn extract_comments(language: Language, code: &str) -> ExtractResult {
    language.tokenizer().extract_comments(code)
}
