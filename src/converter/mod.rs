pub mod case;
pub mod tokenizer;

use crate::dictionary::SpellingMap;
use crate::error::{ConvertError, Result};
use crate::Finding;
use regex::{NoExpand, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub use case::match_case;
use tokenizer::{distinct_forms, tokenize, words, Token};

/// How replacements are applied across a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One case-insensitive pass per distinct surface form, in order of first
    /// appearance. Every occurrence of a word takes the casing of the first
    /// form that reached it.
    #[default]
    Global,
    /// Tokenize once and replace each token on its own, keeping its casing.
    PerToken,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" => Ok(Strategy::Global),
            "per-token" | "per_token" => Ok(Strategy::PerToken),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Global => write!(f, "global"),
            Strategy::PerToken => write!(f, "per-token"),
        }
    }
}

/// The UK spelling of a single word, cased like the word, if the map knows it.
pub fn translate_word(word: &str, dictionary: &SpellingMap) -> Option<String> {
    dictionary
        .get(&word.to_lowercase())
        .map(|uk| match_case(word, uk))
}

/// Replace every US spelling in `text` with its UK spelling.
///
/// Each distinct surface form gets its own whole-word, case-insensitive pass
/// over the evolving output. Forms are visited in order of first appearance,
/// so when one word shows up as both `Color` and `COLOR`, the first casing
/// seen decides the casing of every occurrence.
pub fn convert(text: &str, dictionary: &SpellingMap) -> String {
    let mut output = text.to_string();

    for form in distinct_forms(text) {
        let Some(replacement) = translate_word(form, dictionary) else {
            continue;
        };

        let pattern = format!(r"\b{}\b", regex::escape(form));
        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                log::warn!("Skipping '{}': {}", form, e);
                continue;
            }
        };

        log::trace!("Replacing '{}' with '{}'", form, replacement);
        let replaced = match re.replace_all(&output, NoExpand(&replacement)) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(replaced) => replaced,
        };
        output = replaced;
    }

    output
}

/// Single-pass conversion: every token is looked up and replaced on its own.
pub fn convert_per_token(text: &str, dictionary: &SpellingMap) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for word in words(text) {
        if let Some(replacement) = translate_word(word.as_str(), dictionary) {
            log::trace!("Replacing '{}' with '{}'", word.as_str(), replacement);
            output.push_str(&text[last..word.start()]);
            output.push_str(&replacement);
            last = word.end();
        }
    }

    output.push_str(&text[last..]);
    output
}

pub fn convert_with(text: &str, dictionary: &SpellingMap, strategy: Strategy) -> String {
    match strategy {
        Strategy::Global => convert(text, dictionary),
        Strategy::PerToken => convert_per_token(text, dictionary),
    }
}

/// Borrow bytes as text, or fail with `InvalidInput`.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::invalid_input(format!("input is not UTF-8 ({})", e)))
}

/// Convert raw bytes, rejecting anything that is not UTF-8.
pub fn convert_bytes(bytes: &[u8], dictionary: &SpellingMap, strategy: Strategy) -> Result<String> {
    Ok(convert_with(decode(bytes)?, dictionary, strategy))
}

/// What each word (by lowercase spelling) ends up as under `Strategy::Global`.
///
/// The first form seen wins, unless its replacement is the same word: then
/// every later form's pass matches it again, and the last form wins.
fn global_replacements(text: &str, dictionary: &SpellingMap) -> HashMap<String, String> {
    let mut replacements = HashMap::new();

    for form in distinct_forms(text) {
        let key = form.to_lowercase();
        let Some(uk) = dictionary.get(&key) else {
            continue;
        };
        let replacement = match_case(form, uk);

        match replacements.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(replacement);
            }
            Entry::Occupied(mut entry) => {
                if uk.to_lowercase() == *entry.key() {
                    entry.insert(replacement);
                }
            }
        }
    }

    replacements
}

/// Every word in `text` that conversion with `strategy` would change, with
/// where it is and what it becomes.
pub fn find_us_spellings(text: &str, dictionary: &SpellingMap, strategy: Strategy) -> Vec<Finding> {
    let global = match strategy {
        Strategy::Global => global_replacements(text, dictionary),
        Strategy::PerToken => HashMap::new(),
    };

    tokenize(text)
        .into_iter()
        .filter_map(|token| {
            let replacement = match strategy {
                Strategy::Global => global.get(&token.text.to_lowercase()).cloned(),
                Strategy::PerToken => translate_word(token.text, dictionary),
            }?;
            if replacement == token.text {
                return None;
            }

            Some(Finding {
                word: token.text.to_string(),
                replacement,
                line: token.line,
                column: token.column,
                start: token.start,
                end: token.end,
                context: get_context(text, &token),
            })
        })
        .collect()
}

/// Up to 20 characters either side of the token, without leaving its line.
fn get_context(text: &str, token: &Token<'_>) -> String {
    const RADIUS: usize = 20;

    let mut start = token.start;
    let mut cut_before = false;
    for (count, (idx, ch)) in text[..token.start].char_indices().rev().enumerate() {
        if ch == '\n' {
            break;
        }
        if count == RADIUS {
            cut_before = true;
            break;
        }
        start = idx;
    }

    let after = &text[token.end..];
    let mut end = token.end;
    let mut cut_after = false;
    for (count, (idx, ch)) in after.char_indices().enumerate() {
        if ch == '\n' || after[idx..].starts_with("\r\n") {
            break;
        }
        if count == RADIUS {
            cut_after = true;
            break;
        }
        end = token.end + idx + ch.len_utf8();
    }

    let context = &text[start..end];
    match (cut_before, cut_after) {
        (true, true) => format!("...{}...", context),
        (true, false) => format!("...{}", context),
        (false, true) => format!("{}...", context),
        (false, false) => context.to_string(),
    }
}

/// A spelling map paired with the strategy used to apply it.
#[derive(Debug, Clone)]
pub struct Converter {
    dictionary: SpellingMap,
    strategy: Strategy,
}

impl Converter {
    pub fn new(dictionary: SpellingMap, strategy: Strategy) -> Self {
        Self {
            dictionary,
            strategy,
        }
    }

    pub fn dictionary(&self) -> &SpellingMap {
        &self.dictionary
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn convert(&self, text: &str) -> String {
        convert_with(text, &self.dictionary, self.strategy)
    }

    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String> {
        convert_bytes(bytes, &self.dictionary, self.strategy)
    }

    /// The words `convert` would change, using the same strategy.
    pub fn check(&self, text: &str) -> Vec<Finding> {
        find_us_spellings(text, &self.dictionary, self.strategy)
    }

    pub fn translate(&self, word: &str) -> Option<String> {
        translate_word(word, &self.dictionary)
    }
}
