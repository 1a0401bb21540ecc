//! comscan - comment extraction for C-family and JavaScript source code
//!
//! comscan is a CLI tool and library that walks source text in a single
//! forward pass and returns every comment with its line numbers, without a
//! full compiler front end. String literals are tracked just enough to keep
//! comment-like text inside them from being reported.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tokenizers, comment data model and scan pipeline
//! - `issues`: Per-file problem types and reporting trait
//!
//! ## Example
//!
//! ```
//! use comscan::core::parsers::c_family;
//!
//! let comments = c_family::extract_comments("int x; // counter\n").unwrap();
//! assert_eq!(comments[0].content(), " counter");
//! assert_eq!(comments[0].line(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
