pub mod cli;
pub mod config;
pub mod converter;
pub mod dictionary;
pub mod error;

pub use config::Config;
pub use converter::{convert, match_case, Converter, Strategy};
pub use dictionary::SpellingMap;
pub use error::{ConvertError, Result};

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub finding_count: usize,
    pub converted_count: usize,
    pub findings: Vec<Finding>,
}

/// A US spelling found in a text, and what it converts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub word: String,
    pub replacement: String,
    pub line: usize,
    pub column: usize,
    pub start: usize, // Byte offset where the word starts
    pub end: usize,   // Byte offset where the word ends
    pub context: String,
}
