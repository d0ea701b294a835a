//! Diagnostic output formats.
//!
//! Collaborators occasionally need to see what a source actually
//! extracted; this renders the kind, options and sorted token list as
//! JSON. Diagnostic surface only, not a wire format.

use serde_json::{json, Value};

use crate::source::Source;

/// Render a source's kind and token set as a JSON report
pub fn token_report(source: &Source) -> Value {
    let mut tokens: Vec<&str> = source.tokens().collect();
    tokens.sort_unstable();
    json!({
        "kind": source.kind().to_string(),
        "strict": source.options().strict,
        "tokens": tokens,
    })
}
