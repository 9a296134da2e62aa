// SPDX-License-Identifier: PMPL-1.0-or-later

//! Expectation compiler
//!
//! An expectation is a rubric line made of two strings: a scope spec and
//! an inspection spec. Compiling it yields one [`Inspection`]:
//!
//! ```text
//! inspection := ["Not:"] Verb [":" Object]
//!             | ["Not:"] "HasArity:" N
//! object     := "*" | "~" name | "=" name | name
//! ```
//!
//! Rubric text that cannot be interpreted compiles to a constant-true
//! inspection. That policy lives in [`compile`] and nowhere else;
//! [`try_compile`] reports the reason instead.

pub mod scope;
pub mod verbs;

use crate::binding::{BindingPredicate, LikeMode};
use crate::error::CompileError;
use crate::inspector::generic::declares_with_arity;
use crate::inspector::{always, negate, Inspection};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use scope::Scope;
pub use verbs::Verb;

const NOT: &str = "Not";
const HAS_ARITY: &str = "HasArity";

/// A rubric line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(default, alias = "binding")]
    pub scope: String,
    pub inspection: String,
}

impl Expectation {
    pub fn new(scope: &str, inspection: &str) -> Self {
        Self {
            scope: scope.to_string(),
            inspection: inspection.to_string(),
        }
    }
}

/// Knobs of the compiler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// How `~name` objects compare identifiers
    #[serde(default)]
    pub like_mode: LikeMode,
}

/// Compile an expectation, falling back to a constant-true inspection
/// when any part of it cannot be interpreted
pub fn compile(expectation: &Expectation, config: &CompilerConfig) -> Inspection {
    match try_compile(expectation, config) {
        Ok(inspection) => {
            debug!(
                "compiled expectation ({:?}, {:?})",
                expectation.scope, expectation.inspection
            );
            inspection
        }
        Err(err) => {
            warn!(
                "expectation ({:?}, {:?}) is vacuously satisfied: {}",
                expectation.scope, expectation.inspection, err
            );
            always()
        }
    }
}

/// Compile an expectation, reporting why it cannot be interpreted
pub fn try_compile(
    expectation: &Expectation,
    config: &CompilerConfig,
) -> Result<Inspection, CompileError> {
    let scope = Scope::parse(&expectation.scope)?;
    let (negated, base) = compile_inspection(&expectation.inspection, config)?;
    let sliced = scope.slice(base);
    Ok(if negated { negate(sliced) } else { sliced })
}

/// Returns whether the spec was negated, and the unscoped inspection
fn compile_inspection(
    spec: &str,
    config: &CompilerConfig,
) -> Result<(bool, Inspection), CompileError> {
    let mut parts: Vec<&str> = spec.split(':').collect();
    let negated = parts.first() == Some(&NOT);
    if negated {
        parts.remove(0);
    }

    let inspection = match parts.as_slice() {
        [HAS_ARITY, arity] => {
            declares_with_arity(parse_arity(arity)?, BindingPredicate::Anyone)
        }
        [verb] => lookup(verb)?.inspection(BindingPredicate::Anyone),
        [verb, object] => lookup(verb)?.inspection(compile_object(object, spec, config)?),
        _ => return Err(CompileError::MalformedInspection(spec.to_string())),
    };
    Ok((negated, inspection))
}

/// Bare decimal digits only; `usize::from_str` alone would also take `+2`
fn parse_arity(arity: &str) -> Result<usize, CompileError> {
    let invalid = || CompileError::InvalidArity(arity.to_string());
    if arity.is_empty() || !arity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    arity.parse().map_err(|_| invalid())
}

fn lookup(verb: &str) -> Result<Verb, CompileError> {
    Verb::parse(verb).ok_or_else(|| CompileError::UnknownVerb(verb.to_string()))
}

/// `*` is anyone, `~name` is fuzzy, `=name` and a bare `name` are exact.
/// A lone `~` or `=` is itself the name being matched.
fn compile_object(
    object: &str,
    spec: &str,
    config: &CompilerConfig,
) -> Result<BindingPredicate, CompileError> {
    if object.is_empty() {
        return Err(CompileError::EmptyTarget(spec.to_string()));
    }
    if object == "*" {
        return Ok(BindingPredicate::Anyone);
    }
    if let Some(name) = object.strip_prefix('~').filter(|name| !name.is_empty()) {
        return Ok(BindingPredicate::like(name, config.like_mode));
    }
    if let Some(name) = object.strip_prefix('=').filter(|name| !name.is_empty()) {
        return Ok(BindingPredicate::named(name));
    }
    Ok(BindingPredicate::named(object))
}
