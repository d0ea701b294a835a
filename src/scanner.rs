//! Dialect-agnostic word scanner.
//!
//! The scanner treats a token as a maximal run of word-like characters;
//! whitespace, quotes and punctuation delimit. Hyphen and underscore are
//! word characters, since candidate tokens commonly contain them. There
//! is no structural awareness and no failure mode: any input scans fully.

use std::collections::HashSet;

use logos::Logos;

/// Word-run token for the permissive scan
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordToken {
    /// Maximal run of word-like characters
    #[regex(r"[A-Za-z0-9_-]+")]
    Word,
}

/// Scan text into a fresh token set
pub fn scan(text: &str) -> HashSet<String> {
    let mut tokens = HashSet::new();
    scan_into(text, &mut tokens);
    tokens
}

/// Scan text, inserting tokens into an existing set.
///
/// Each word run yields the whole run, lower-cased; runs containing
/// hyphens additionally yield every hyphen-separated segment, so a
/// candidate like `is` is found inside `whaaa-is-going`.
pub fn scan_into(text: &str, tokens: &mut HashSet<String>) {
    let mut lexer = WordToken::lexer(text);
    while let Some(result) = lexer.next() {
        if result.is_ok() {
            insert_word(lexer.slice(), tokens);
        }
    }
}

/// Insert a single word run plus its hyphen-separated segments
pub(crate) fn insert_word(word: &str, tokens: &mut HashSet<String>) {
    let lowered = word.to_lowercase();
    if lowered.contains('-') {
        for segment in lowered.split('-').filter(|segment| !segment.is_empty()) {
            tokens.insert(segment.to_string());
        }
    }
    tokens.insert(lowered);
}
