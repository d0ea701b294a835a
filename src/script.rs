//! Dialect-aware script extraction.
//!
//! Pipeline: logos tokens → chumsky parse → extraction walk. The grammar
//! is a deliberately small subset of the dialect; whatever it rejects is
//! absorbed by the source constructor, which degrades to the word
//! scanner instead of surfacing an error.

pub mod ast;
pub mod extract;
pub mod parser;
pub mod tokens;
