use crate::ast::{BrStmt, ElbrClause};
use crate::render::Render;
use std::fmt;
use std::io;
use thiserror::Error;

/// The construct whose condition found nothing to pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    Br(BrStmt),
    Elbr(ElbrClause),
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Br(br) => f.write_str(&br.render()),
            Sender::Elbr(elbr) => f.write_str(&elbr.render()),
        }
    }
}

/// Raised while simulating a statement whose flow is impossible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A condition was reached with an empty stack.
    #[error("empty stack when testing the condition of `{sender}`")]
    EmptyStack { sender: Sender },
}

impl FlowError {
    pub fn empty_stack(sender: Sender) -> Self {
        FlowError::EmptyStack { sender }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::EmptyStack { .. } => "empty-stack",
        }
    }
}

/// Errors surfaced while generating a suite.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to write generated tests: {0}")]
    Io(#[from] io::Error),

    /// A candidate that passed validity filtering failed to simulate again.
    #[error("candidate lost its flow after validation: {0}")]
    Flow(#[from] FlowError),
}
