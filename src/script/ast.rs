//! AST for the script dialect.
//!
//! Deliberately small: the tree only distinguishes the shapes the
//! extraction walk cares about. Values that can never contribute tokens
//! (numbers, booleans) carry no payload.

use serde::Serialize;

/// Property key in an object literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropKey {
    /// Bare identifier key, `{foo: ...}`
    Ident(String),
    /// String literal key, `{"foo": ...}`
    Str(String),
}

impl PropKey {
    /// The key text, however it was written
    pub fn text(&self) -> &str {
        match self {
            PropKey::Ident(name) | PropKey::Str(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Str(String),
    Number,
    Bool(bool),
    Null,
    Ident(String),
    Array(Vec<Expr>),
    Object(Vec<(PropKey, Expr)>),
    Member {
        object: Box<Expr>,
        property: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Flat operand chain of a binary expression; the operators are
    /// dropped since they never affect extraction
    Binary(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// `var`/`let`/`const` declaration; the bound name is kept only so
    /// the tree round-trips for diagnostics, it is never a token
    Decl { name: String, init: Option<Expr> },
    /// Assignment to a bare identifier or a dotted member target
    Assign { target: Expr, value: Expr },
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub body: Vec<Stmt>,
}
