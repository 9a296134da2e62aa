// SPDX-License-Identifier: PMPL-1.0-or-later

//! Running expectations against source units
//!
//! Concrete-syntax parsers are collaborators behind [`SourceParser`]. A
//! source unit that fails to parse yields [`AnalysisOutcome::Unavailable`],
//! never a verdict list computed over some placeholder tree.

use crate::ast::Expression;
use crate::error::ParseError;
use crate::expectation::{compile, CompilerConfig, Expectation};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Turns raw source text into a tree, or fails
pub trait SourceParser {
    fn parse(&self, source: &str) -> Result<Expression, ParseError>;
}

impl<F> SourceParser for F
where
    F: Fn(&str) -> Result<Expression, ParseError>,
{
    fn parse(&self, source: &str) -> Result<Expression, ParseError> {
        self(source)
    }
}

/// Collaborator that reads a tree already serialized as JSON.
///
/// Nesting depth is not capped: anything `serde_json::to_string` writes
/// for an [`Expression`] reads back, however deep.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAstParser;

impl SourceParser for JsonAstParser {
    fn parse(&self, source: &str) -> Result<Expression, ParseError> {
        let mut deserializer = serde_json::Deserializer::from_str(source);
        deserializer.disable_recursion_limit();
        let tree = Expression::deserialize(&mut deserializer)
            .and_then(|tree| deserializer.end().map(|()| tree))
            .map_err(|err| ParseError::new(err.to_string()))?;
        Ok(tree)
    }
}

/// Verdict for one expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationResult {
    pub expectation: Expectation,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// One verdict per expectation, in input order
    Verdicts { results: Vec<ExpectationResult> },
    /// The source could not be parsed; nothing was evaluated
    Unavailable { reason: ParseError },
}

impl AnalysisOutcome {
    pub fn results(&self) -> Option<&[ExpectationResult]> {
        match self {
            AnalysisOutcome::Verdicts { results } => Some(results),
            AnalysisOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AnalysisOutcome::Verdicts { .. })
    }
}

/// Compile and evaluate every expectation against `tree`.
///
/// Expectations are independent and the tree is immutable, so they are
/// evaluated in parallel; results keep the input order.
pub fn evaluate_all(
    tree: &Expression,
    expectations: &[Expectation],
    config: &CompilerConfig,
) -> Vec<ExpectationResult> {
    expectations
        .par_iter()
        .map(|expectation| {
            let inspection = compile(expectation, config);
            ExpectationResult {
                expectation: expectation.clone(),
                passed: inspection(tree),
            }
        })
        .collect()
}

/// Parse `source` with `parser` and evaluate every expectation
pub fn analyze<P>(
    parser: &P,
    source: &str,
    expectations: &[Expectation],
    config: &CompilerConfig,
) -> AnalysisOutcome
where
    P: SourceParser + ?Sized,
{
    match parser.parse(source) {
        Ok(tree) => AnalysisOutcome::Verdicts {
            results: evaluate_all(&tree, expectations, config),
        },
        Err(reason) => {
            info!("analysis unavailable: {}", reason);
            AnalysisOutcome::Unavailable { reason }
        }
    }
}
