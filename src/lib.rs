//! # tokset
//!
//! Token-presence extraction for source fragments.
//!
//! A [`Source`] holds a chunk of text plus the set of tokens considered
//! present in it, decided once at construction. The script constructor
//! extracts tokens from structural positions only (string literals,
//! object keys, literal array joins) and never collects identifiers or
//! keywords; when the text doesn't parse it silently degrades to the
//! permissive word scan. Sources of the same kind can be joined so that
//! a token split across the fragment boundary is still found.
//!
//! ## Example
//!
//! ```text
//! let source = Source::script("const c = {inVisible: true}", SourceOptions::default());
//! assert!(source.contains("invisible"));
//! assert!(!source.contains("const"));
//! ```

pub mod error;
pub mod formats;
pub mod options;
pub mod scanner;
pub mod script;
pub mod source;

pub use error::JoinError;
pub use options::SourceOptions;
pub use source::{Source, SourceKind};
