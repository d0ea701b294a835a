//! Token definitions for the script dialect.
//!
//! The tokens are defined using the logos derive macro. Whitespace and
//! comments are skipped by the lexer; statement boundaries are recovered
//! by the parser, which treats semicolons as optional separators.

use logos::{Lexer, Logos};

/// Strip the surrounding quotes and resolve escape sequences
fn unquote(lexer: &mut Lexer<Token>) -> String {
    let slice = lexer.slice();
    let inner = &slice[1..slice.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some('t') => value.push('\t'),
            Some(other) => value.push(other),
            None => {}
        }
    }
    value
}

/// All tokens the script lexer can produce
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum Token {
    // Declaration keywords
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("const")]
    Const,

    // Literal keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lexer| lexer.slice().to_string())]
    Ident(String),

    /// String literal, either quote style, with the quotes stripped and
    /// escapes resolved
    #[regex(r#""([^"\\\n]|\\.)*""#, unquote)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, unquote)]
    Str(String),

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("=")]
    Assign,

    // Binary operators; which one appears is irrelevant to extraction
    #[token("===")]
    #[token("==")]
    Eq,
    #[token("!==")]
    #[token("!=")]
    NotEq,
    #[token("+")]
    Plus,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
}

/// Tokenize script text.
///
/// Unlike the word scanner this lexer is allowed to fail: any input it
/// cannot recognize (an unterminated string, a stray byte) aborts the lex
/// and returns the offending span, which the caller absorbs by degrading
/// to the simple variant.
pub fn tokenize(source: &str) -> Result<Vec<Token>, logos::Span> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(lexer.span()),
        }
    }
    Ok(tokens)
}
