// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types shared across the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A partial accessor was applied to a node of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("shape mismatch: expected {expected}, found {found}")]
pub struct ShapeMismatch {
    pub expected: &'static str,
    pub found: String,
}

impl ShapeMismatch {
    pub fn new(expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            expected,
            found: found.into(),
        }
    }
}

/// Why an expectation could not be turned into an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("unknown verb `{0}`")]
    UnknownVerb(String),

    #[error("invalid arity `{0}`")]
    InvalidArity(String),

    #[error("empty target in `{0}`")]
    EmptyTarget(String),

    #[error("malformed inspection `{0}`")]
    MalformedInspection(String),

    #[error("malformed scope `{0}`")]
    MalformedScope(String),
}

/// Structured failure reported by a parser collaborator.
///
/// The engine never looks inside `message`; it only distinguishes success
/// from failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("parse failure: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
