//! Statement model for generated SBL branch tests.
//!
//! Only the vocabulary the generator needs is modelled: literal pushes and
//! the `br` / `elbr` / `el` family.

/// A literal SBL value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    String(String),
    Bool(bool),
    /// `@`
    Nil,
}

impl Value {
    /// Whether a `br` or `elbr` taking this value as its condition runs its body.
    /// Only `F` and `@` are falsy; `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Nil)
    }
}

/// A statement that pushes exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Push {
    pub value: Value,
}

impl Push {
    pub fn new(value: impl Into<Value>) -> Self {
        Push {
            value: value.into(),
        }
    }

    pub fn is_true(&self) -> bool {
        self.value.is_truthy()
    }
}

/// An element of a statement sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Push(Push),
    Br(Box<BrStmt>),
}

/// `elbr <cond> { <body> }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElbrClause {
    pub cond: Vec<Statement>,
    pub body: Vec<Statement>,
}

/// `el { <body> }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElClause {
    pub body: Vec<Statement>,
}

/// `<pre> br <cond> { <body> } <elbr>* <el>? <post>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrStmt {
    pub pre: Vec<Statement>,
    pub cond: Vec<Statement>,
    pub body: Vec<Statement>,
    pub elbr: Vec<ElbrClause>,
    pub el: Option<ElClause>,
    pub post: Vec<Statement>,
}

impl ElbrClause {
    pub fn new(cond: Vec<Statement>, body: Vec<Statement>) -> Self {
        ElbrClause { cond, body }
    }
}

impl ElClause {
    pub fn new(body: Vec<Statement>) -> Self {
        ElClause { body }
    }
}

impl BrStmt {
    pub fn new(
        pre: Vec<Statement>,
        cond: Vec<Statement>,
        body: Vec<Statement>,
        elbr: Vec<ElbrClause>,
        el: Option<ElClause>,
        post: Vec<Statement>,
    ) -> Self {
        BrStmt {
            pre,
            cond,
            body,
            elbr,
            el,
            post,
        }
    }

    /// A bare `br <cond> { <body> }` with every other slot empty.
    pub fn simple(cond: Vec<Statement>, body: Vec<Statement>) -> Self {
        BrStmt::new(Vec::new(), cond, body, Vec::new(), None, Vec::new())
    }

    /// Copy of this statement with `body` replaced.
    ///
    /// Used to nest one candidate inside another without sharing: each outer
    /// tree owns its own copy of the inner statement.
    pub fn with_body(&self, body: Vec<Statement>) -> Self {
        BrStmt {
            body,
            ..self.clone()
        }
    }
}

/// Build a statement sequence from literals and statements alike.
///
/// ```
/// use sbl_brgen::ast::{seq, Value};
/// let s = seq([Value::Int(1), Value::Bool(true), Value::Nil]);
/// assert_eq!(s.len(), 3);
/// ```
pub fn seq<I, T>(items: I) -> Vec<Statement>
where
    I: IntoIterator<Item = T>,
    T: Into<Statement>,
{
    items.into_iter().map(Into::into).collect()
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Value> for Statement {
    fn from(v: Value) -> Self {
        Statement::Push(Push { value: v })
    }
}

impl From<i64> for Statement {
    fn from(n: i64) -> Self {
        Value::from(n).into()
    }
}

impl From<bool> for Statement {
    fn from(b: bool) -> Self {
        Value::from(b).into()
    }
}

impl From<&str> for Statement {
    fn from(s: &str) -> Self {
        Value::from(s).into()
    }
}

impl From<String> for Statement {
    fn from(s: String) -> Self {
        Value::from(s).into()
    }
}

impl From<Push> for Statement {
    fn from(p: Push) -> Self {
        Statement::Push(p)
    }
}

impl From<BrStmt> for Statement {
    fn from(br: BrStmt) -> Self {
        Statement::Br(Box::new(br))
    }
}
