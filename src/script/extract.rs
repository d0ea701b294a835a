//! Token collection walk over a parsed program.
//!
//! This is the structural counterpart of the word scanner: instead of
//! every word-like run, only literal data positions contribute tokens.
//! Bare identifiers, member-access property reads and keywords never do.

use std::collections::HashSet;

use crate::options::SourceOptions;
use crate::scanner;
use crate::script::ast::{Expr, Program, Stmt};

/// Collect the presence tokens of a parsed program.
///
/// Collected positions:
/// - every string literal value, whole;
/// - object literal keys and the final property of a dotted assignment;
/// - `[literals].join(<literal>)` calls, as the joined concatenation;
/// - loose mode only: word runs inside string literals, and the
///   hyphen-joined combination of each pair of consecutive literals.
pub fn collect(program: &Program, options: &SourceOptions) -> HashSet<String> {
    let mut walk = Walk {
        options,
        tokens: HashSet::new(),
        literals: Vec::new(),
    };
    for stmt in &program.body {
        walk.stmt(stmt);
    }
    let Walk {
        mut tokens,
        literals,
        ..
    } = walk;
    if !options.strict {
        for pair in literals.windows(2) {
            tokens.insert(format!("{}-{}", pair[0], pair[1]).to_lowercase());
        }
    }
    tokens
}

struct Walk<'a> {
    options: &'a SourceOptions,
    tokens: HashSet<String>,
    /// String literal values in source order, for the loose adjacency rule
    literals: Vec<String>,
}

impl Walk<'_> {
    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Decl { init, .. } => {
                if let Some(init) = init {
                    self.expr(init);
                }
            }
            Stmt::Assign { target, value } => {
                // A dotted assignment writes a key, so the final property
                // counts; a bare identifier target does not
                if let Expr::Member { property, .. } = target {
                    self.insert(property);
                }
                self.expr(value);
            }
            Stmt::Expr(expr) => self.expr(expr),
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Str(value) => self.literal(value),
            Expr::Number | Expr::Bool(_) | Expr::Null | Expr::Ident(_) => {}
            Expr::Array(elements) => {
                for element in elements {
                    self.expr(element);
                }
            }
            Expr::Object(props) => {
                for (key, value) in props {
                    self.insert(key.text());
                    self.expr(value);
                }
            }
            // Property reads are never tokens, only the object side recurses
            Expr::Member { object, .. } => self.expr(object),
            Expr::Index { object, index } => {
                self.expr(object);
                self.expr(index);
            }
            Expr::Call { callee, args } => {
                if let Some(joined) = literal_join(callee, args) {
                    self.insert(&joined);
                }
                self.expr(callee);
                for arg in args {
                    self.expr(arg);
                }
            }
            Expr::Binary(operands) => {
                for operand in operands {
                    self.expr(operand);
                }
            }
        }
    }

    fn literal(&mut self, value: &str) {
        self.insert(value);
        if !self.options.strict {
            scanner::scan_into(value, &mut self.tokens);
        }
        self.literals.push(value.to_string());
    }

    fn insert(&mut self, token: &str) {
        self.tokens.insert(token.to_lowercase());
    }
}

/// Detect `[<string literals>].join(<string literal>)` and return the
/// joined value. Any non-literal element disqualifies the whole call.
fn literal_join(callee: &Expr, args: &[Expr]) -> Option<String> {
    let (object, property) = match callee {
        Expr::Member { object, property } => (object.as_ref(), property),
        _ => return None,
    };
    if property != "join" {
        return None;
    }
    let elements = match object {
        Expr::Array(elements) => elements,
        _ => return None,
    };
    let separator = match args {
        [Expr::Str(separator)] => separator,
        _ => return None,
    };
    let mut parts = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            Expr::Str(value) => parts.push(value.as_str()),
            _ => return None,
        }
    }
    Some(parts.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parser::parse;

    fn collect_from(source: &str, options: SourceOptions) -> HashSet<String> {
        collect(&parse(source).unwrap(), &options)
    }

    #[test]
    fn test_string_literals_are_whole_tokens() {
        let tokens = collect_from("const a = 'the-OtHer-cLass'", SourceOptions::default());
        assert!(tokens.contains("the-other-class"));
    }

    #[test]
    fn test_identifiers_and_keywords_are_not_tokens() {
        let tokens = collect_from(
            "const myVar = 'x'; window.should_not_be_found(classes.also_not_found)",
            SourceOptions::default(),
        );
        assert!(!tokens.contains("const"));
        assert!(!tokens.contains("myvar"));
        assert!(!tokens.contains("window"));
        assert!(!tokens.contains("should_not_be_found"));
        assert!(!tokens.contains("also_not_found"));
    }

    #[test]
    fn test_object_keys_are_tokens() {
        let tokens = collect_from(
            "const c = {inVisIble: true, blocK__Element: true, 'str-key': 1}",
            SourceOptions::default(),
        );
        assert!(tokens.contains("invisible"));
        assert!(tokens.contains("block__element"));
        assert!(tokens.contains("str-key"));
    }

    #[test]
    fn test_dotted_assignment_key_is_a_token() {
        let tokens = collect_from(
            "classes.aDditIonal_class = false; plain = 1",
            SourceOptions::default(),
        );
        assert!(tokens.contains("additional_class"));
        assert!(!tokens.contains("classes"));
        assert!(!tokens.contains("plain"));
    }

    #[test]
    fn test_literal_array_join_emits_the_combination() {
        let tokens = collect_from("var d = ['fa', 'icon'].join('-')", SourceOptions::default());
        assert!(tokens.contains("fa"));
        assert!(tokens.contains("icon"));
        assert!(tokens.contains("fa-icon"));
    }

    #[test]
    fn test_join_with_non_literal_element_is_ignored() {
        let tokens = collect_from("var d = ['fa', icon].join('-')", SourceOptions::default());
        assert!(tokens.contains("fa"));
        assert!(!tokens.contains("fa-icon"));
    }

    #[test]
    fn test_loose_mode_scans_string_interiors() {
        let tokens = collect_from(
            "const html = '<div class=\"inner-class\">Content</div>'",
            SourceOptions::default(),
        );
        assert!(tokens.contains("div"));
        assert!(tokens.contains("inner-class"));
        assert!(tokens.contains("content"));
    }

    #[test]
    fn test_loose_mode_combines_adjacent_literals() {
        let tokens = collect_from("var a = 'foo'; var b = 'bar'", SourceOptions::default());
        assert!(tokens.contains("foo-bar"));
    }

    #[test]
    fn test_strict_mode_suppresses_loose_discovery() {
        let options = SourceOptions { strict: true };
        let tokens = collect_from(
            "const html = '<div class=\"inner-class\">x</div>'; var a = 'foo'; var b = 'bar'",
            options,
        );
        assert!(!tokens.contains("div"));
        assert!(!tokens.contains("inner-class"));
        assert!(!tokens.contains("foo-bar"));
        assert!(tokens.contains("foo"));
        assert!(tokens.contains("bar"));
    }

    #[test]
    fn test_strict_mode_keeps_structural_positions() {
        let options = SourceOptions { strict: true };
        let tokens = collect_from(
            "const o = {inVisible: true}; o.extra_key = 1; var d = ['fa', 'icon'].join('-')",
            options,
        );
        assert!(tokens.contains("invisible"));
        assert!(tokens.contains("extra_key"));
        assert!(tokens.contains("fa-icon"));
    }
}
