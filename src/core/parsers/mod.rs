//! Per-language-family comment tokenizers.
//!
//! Every tokenizer honors the same contract: take the full source text and
//! return its comments in document order, or
//! [`UnterminatedCommentError`](crate::core::UnterminatedCommentError) when a
//! multi-line comment never closes.
//!
//! ## Module Structure
//!
//! - `c_family`: regex-driven tokenizer for C, C++, Objective-C and Java
//! - `javascript`: state-machine tokenizer for JavaScript and TypeScript
//! - `line_index`: byte offset to line number lookup

pub mod c_family;
pub mod javascript;
pub mod line_index;

use enum_dispatch::enum_dispatch;

use crate::core::ExtractResult;

/// Capability shared by all tokenizers.
#[enum_dispatch]
pub trait ExtractComments {
    /// Extract all comments from `code`, in document order.
    ///
    /// Fails with [`UnterminatedCommentError`](crate::core::UnterminatedCommentError)
    /// when a multi-line comment opener has no closer.
    fn extract_comments(&self, code: &str) -> ExtractResult;
}

/// Tokenizer for `//` and `/* */` comments with `"`-only string shielding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CFamilyTokenizer;

impl ExtractComments for CFamilyTokenizer {
    fn extract_comments(&self, code: &str) -> ExtractResult {
        c_family::extract_comments(code)
    }
}

/// Tokenizer for `//` and `/* */` comments with escape-aware `"` and `'` strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JavaScriptTokenizer;

impl ExtractComments for JavaScriptTokenizer {
    fn extract_comments(&self, code: &str) -> ExtractResult {
        javascript::extract_comments(code)
    }
}

/// One tokenizer per language family.
#[enum_dispatch(ExtractComments)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenizer {
    CFamily(CFamilyTokenizer),
    JavaScript(JavaScriptTokenizer),
}

impl Tokenizer {
    pub fn name(&self) -> &'static str {
        match self {
            Tokenizer::CFamily(_) => "c-family",
            Tokenizer::JavaScript(_) => "javascript",
        }
    }
}
