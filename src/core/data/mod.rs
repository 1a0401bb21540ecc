//! Core data types shared by every tokenizer and the scan pipeline.
//!
//! ## Module Structure
//!
//! - `comment`: Comment record and its Location
//! - `language`: Language enum and extension-based dispatch

pub mod comment;
pub mod language;

pub use comment::{Comment, Location};
pub use language::Language;
