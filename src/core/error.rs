use thiserror::Error;

/// A multi-line comment opener with no matching closer before end of input.
///
/// Every tokenizer returns this same value, so callers can treat them
/// interchangeably. It carries nothing beyond its kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unterminated multi-line comment")]
pub struct UnterminatedCommentError;

/// Result of tokenizing one source text.
pub type ExtractResult = Result<Vec<super::Comment>, UnterminatedCommentError>;
