use lazy_static::lazy_static;
use regex::{Match, Regex};
use std::collections::HashSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// A run of word characters inside the text being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize, // Byte offset where the token starts
    pub end: usize,   // Byte offset where the token ends
    pub line: usize,
    pub column: usize, // 1-indexed, in characters
}

/// Word runs in `text`, left to right, without position bookkeeping.
pub fn words(text: &str) -> impl Iterator<Item = Match<'_>> {
    WORD.find_iter(text)
}

/// Split text into word tokens, left to right.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;
    let mut scanned = 0;

    // Characters are counted once, from the previous token onwards.
    for m in words(text) {
        for ch in text[scanned..m.start()].chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        scanned = m.start();

        tokens.push(Token {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
            line,
            column,
        });
    }

    tokens
}

/// Distinct surface forms in order of first appearance.
///
/// Forms differing only in case stay distinct: `Color` and `COLOR` are two.
pub fn distinct_forms(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    words(text)
        .map(|m| m.as_str())
        .filter(|word| seen.insert(*word))
        .collect()
}
