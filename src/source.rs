//! Source fragments and their containment/join contract.
//!
//! A [`Source`] is an immutable unit of text plus the token set derived
//! from it at construction time. The two constructors are total: the
//! simple one cannot fail by design, and the script one absorbs every
//! parse failure by degrading to the simple kind.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::JoinError;
use crate::options::SourceOptions;
use crate::scanner;
use crate::script;

/// How a source's token set was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Permissive word scan
    Simple,
    /// Structural script extraction
    Script,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Simple => write!(f, "simple"),
            SourceKind::Script => write!(f, "script"),
        }
    }
}

/// Bytes re-scanned on each side of the boundary when the concatenation
/// of two script texts no longer parses as a whole.
const SEAM_WINDOW: usize = 256;

/// An immutable fragment of text plus the tokens present in it
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    raw: String,
    kind: SourceKind,
    options: SourceOptions,
    tokens: HashSet<String>,
}

impl Source {
    /// Build a source with the permissive word scan. Total over all input.
    pub fn simple(text: impl Into<String>, options: SourceOptions) -> Source {
        let raw = text.into();
        let tokens = scanner::scan(&raw);
        Source {
            raw,
            kind: SourceKind::Simple,
            options,
            tokens,
        }
    }

    /// Build a source by parsing the text as a script.
    ///
    /// Never fails: when the structural parse rejects the text, the
    /// result is a simple source over the same text and options, and its
    /// kind reports the degradation.
    pub fn script(text: impl Into<String>, options: SourceOptions) -> Source {
        let raw = text.into();
        match script::parser::parse(&raw) {
            Ok(program) => {
                let tokens = script::extract::collect(&program, &options);
                Source {
                    raw,
                    kind: SourceKind::Script,
                    options,
                    tokens,
                }
            }
            Err(_) => Source::simple(raw, options),
        }
    }

    /// How this source's token set was produced
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The original text, in full
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The options the token set was built with
    pub fn options(&self) -> SourceOptions {
        self.options
    }

    /// The extracted tokens, in no particular order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Case-insensitive exact membership test. No substring matching.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_lowercase())
    }

    /// Join `self` and `other` into one source covering both texts.
    ///
    /// The result keeps `self`'s options and kind, its raw text is the
    /// full `self`-then-`other` concatenation, and its token set is the
    /// union of both sides plus a re-extraction over the concatenated
    /// text, so a token split at the boundary is still detected. Chained
    /// joins keep working because the full raw text is carried forward.
    pub fn join(&self, other: &Source) -> Result<Source, JoinError> {
        if self.kind != other.kind {
            return Err(JoinError::KindMismatch {
                left: self.kind,
                right: other.kind,
            });
        }
        let raw = format!("{}{}", self.raw, other.raw);
        let mut tokens: HashSet<String> = self.tokens.union(&other.tokens).cloned().collect();
        match self.kind {
            SourceKind::Simple => scanner::scan_into(&raw, &mut tokens),
            SourceKind::Script => match script::parser::parse(&raw) {
                Ok(program) => {
                    tokens.extend(script::extract::collect(&program, &self.options));
                }
                // Concatenation no longer parses as a whole; a bounded
                // scan around the boundary still catches split tokens
                Err(_) => scanner::scan_into(&seam_window(&self.raw, &other.raw), &mut tokens),
            },
        }
        Ok(Source {
            raw,
            kind: self.kind,
            options: self.options,
            tokens,
        })
    }
}

/// Trailing slice of `left` plus leading slice of `right`, clamped to
/// char boundaries
fn seam_window(left: &str, right: &str) -> String {
    let mut start = left.len().saturating_sub(SEAM_WINDOW);
    while !left.is_char_boundary(start) {
        start += 1;
    }
    let mut end = right.len().min(SEAM_WINDOW);
    while !right.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &left[start..], &right[..end])
}
