use std::{fmt, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::parsers::{CFamilyTokenizer, JavaScriptTokenizer, Tokenizer};

/// Source language of a file, as far as comment syntax is concerned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
pub enum Language {
    #[value(name = "c")]
    #[serde(rename = "c")]
    C,
    #[value(name = "cpp")]
    #[serde(rename = "cpp")]
    Cpp,
    #[value(name = "objective-c")]
    #[serde(rename = "objective-c")]
    ObjectiveC,
    #[value(name = "java")]
    #[serde(rename = "java")]
    Java,
    #[value(name = "javascript")]
    #[serde(rename = "javascript")]
    JavaScript,
    #[value(name = "typescript")]
    #[serde(rename = "typescript")]
    TypeScript,
}

impl Language {
    /// Look up a language by file extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "c" | "h" => Some(Language::C),
            "cc" | "cpp" | "cxx" | "c++" | "hh" | "hpp" | "hxx" | "h++" | "ino" => {
                Some(Language::Cpp)
            }
            "m" | "mm" => Some(Language::ObjectiveC),
            "java" => Some(Language::Java),
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" | "tsx" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// The tokenizer that understands this language's comment syntax.
    pub fn tokenizer(self) -> Tokenizer {
        match self {
            Language::C | Language::Cpp | Language::ObjectiveC | Language::Java => {
                CFamilyTokenizer.into()
            }
            Language::JavaScript | Language::TypeScript => JavaScriptTokenizer.into(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::ObjectiveC => "objective-c",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
