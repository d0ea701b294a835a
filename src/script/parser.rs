//! Chumsky parser for the script dialect.
//!
//! The grammar is extraction-oriented: it covers declarations,
//! assignments and the literal shapes the walk collects from, and rejects
//! everything else so the caller can degrade to the word scanner. It is
//! not a general dialect parser and does not try to be.

use chumsky::prelude::*;
use std::fmt;
use std::ops::Range;

use crate::script::ast::{Expr, PropKey, Program, Stmt};
use crate::script::tokens::{tokenize, Token};

/// Type alias for parser error
type Syntax = Simple<Token>;

/// Failure of the structural parse.
///
/// Internal only: every caller absorbs this into a fallback construction,
/// so it never crosses the crate boundary.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// Input the lexer could not recognize, with the offending byte span
    Lex(Range<usize>),
    /// Token stream the grammar rejected
    Syntax(Vec<Syntax>),
    /// Brackets nested beyond the supported depth
    Nesting(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(span) => {
                write!(f, "unrecognized input at bytes {}..{}", span.start, span.end)
            }
            ParseError::Syntax(errors) => write!(f, "{} syntax error(s)", errors.len()),
            ParseError::Nesting(depth) => {
                write!(f, "brackets nested {} deep, deeper than supported", depth)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Helper: match a specific token
fn token(t: Token) -> impl Parser<Token, (), Error = Syntax> + Clone {
    just(t).ignored()
}

/// Build the expression parser
fn expr() -> impl Parser<Token, Expr, Error = Syntax> + Clone {
    recursive(|expr| {
        let literal = select! {
            Token::Str(value) => Expr::Str(value),
            Token::Number => Expr::Number,
            Token::True => Expr::Bool(true),
            Token::False => Expr::Bool(false),
            Token::Null => Expr::Null,
        };

        let array = expr
            .clone()
            .separated_by(token(Token::Comma))
            .allow_trailing()
            .delimited_by(token(Token::LBracket), token(Token::RBracket))
            .map(Expr::Array);

        let key = select! {
            Token::Ident(name) => PropKey::Ident(name),
            Token::Str(value) => PropKey::Str(value),
        };
        let object = key
            .then_ignore(token(Token::Colon))
            .then(expr.clone())
            .separated_by(token(Token::Comma))
            .allow_trailing()
            .delimited_by(token(Token::LBrace), token(Token::RBrace))
            .map(Expr::Object);

        let atom = literal
            .or(select! { Token::Ident(name) => Expr::Ident(name) })
            .or(array)
            .or(object)
            .or(expr
                .clone()
                .delimited_by(token(Token::LParen), token(Token::RParen)));

        let call_args = expr
            .clone()
            .separated_by(token(Token::Comma))
            .allow_trailing()
            .delimited_by(token(Token::LParen), token(Token::RParen));

        let member = token(Token::Dot)
            .ignore_then(select! { Token::Ident(name) => name })
            .map(Postfix::Member);
        let index = expr
            .clone()
            .delimited_by(token(Token::LBracket), token(Token::RBracket))
            .map(Postfix::Index);
        let postfix = member.or(call_args.map(Postfix::Call)).or(index);

        let postfixed = atom.then(postfix.repeated()).map(|(base, ops)| {
            ops.into_iter().fold(base, |object, op| match op {
                Postfix::Member(property) => Expr::Member {
                    object: Box::new(object),
                    property,
                },
                Postfix::Call(args) => Expr::Call {
                    callee: Box::new(object),
                    args,
                },
                Postfix::Index(index) => Expr::Index {
                    object: Box::new(object),
                    index: Box::new(index),
                },
            })
        });

        let operator = token(Token::Plus)
            .or(token(Token::Eq))
            .or(token(Token::NotEq))
            .or(token(Token::And))
            .or(token(Token::Or));

        postfixed
            .clone()
            .then(operator.ignore_then(postfixed).repeated())
            .map(|(first, rest)| {
                if rest.is_empty() {
                    first
                } else {
                    let mut operands = vec![first];
                    operands.extend(rest);
                    Expr::Binary(operands)
                }
            })
    })
}

/// Postfix operation applied to an atom
enum Postfix {
    Member(String),
    Call(Vec<Expr>),
    Index(Expr),
}

/// Build the statement parser
fn stmt() -> impl Parser<Token, Stmt, Error = Syntax> + Clone {
    let keyword = token(Token::Var)
        .or(token(Token::Let))
        .or(token(Token::Const));
    let decl = keyword
        .ignore_then(select! { Token::Ident(name) => name })
        .then(token(Token::Assign).ignore_then(expr()).or_not())
        .map(|(name, init)| Stmt::Decl { name, init });

    // Assignment targets are identifier-rooted dotted chains; anything
    // fancier is outside the dialect subset
    let target = select! { Token::Ident(name) => Expr::Ident(name) }
        .then(
            token(Token::Dot)
                .ignore_then(select! { Token::Ident(name) => name })
                .repeated(),
        )
        .map(|(root, properties)| {
            properties.into_iter().fold(root, |object, property| Expr::Member {
                object: Box::new(object),
                property,
            })
        });
    let assign = target
        .then_ignore(token(Token::Assign))
        .then(expr())
        .map(|(target, value)| Stmt::Assign { target, value });

    decl.or(assign).or(expr().map(Stmt::Expr))
}

/// Build the program parser. Semicolons are optional separators.
fn program() -> impl Parser<Token, Program, Error = Syntax> {
    let leading = token(Token::Semi).repeated();
    let trailing = token(Token::Semi).repeated();
    leading
        .ignore_then(stmt().then_ignore(trailing).repeated())
        .then_ignore(end())
        .map(|body| Program { body })
}

/// Recursive descent consumes stack per nesting level, so anything
/// nested deeper than this is rejected up front and the caller degrades
/// to the word scanner
const MAX_NESTING: usize = 128;

/// Maximum bracket nesting depth of a token stream. Unbalanced closers
/// never push the count below zero; the parser rejects them anyway.
fn nesting_depth(tokens: &[Token]) -> usize {
    let mut depth: usize = 0;
    let mut max = 0;
    for token in tokens {
        match token {
            Token::LParen | Token::LBracket | Token::LBrace => {
                depth += 1;
                max = max.max(depth);
            }
            Token::RParen | Token::RBracket | Token::RBrace => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }
    max
}

/// Parse script text into a program
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source).map_err(ParseError::Lex)?;
    let depth = nesting_depth(&tokens);
    if depth > MAX_NESTING {
        return Err(ParseError::Nesting(depth));
    }
    program().parse(tokens).map_err(ParseError::Syntax)
}
