// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scope specs: which part of a program an inspection looks at
//!
//! ```text
//! ""                    whole program
//! "A.B.C"               C nested anywhere in B, nested anywhere in A
//! "Intransitive:A.B"    B declared directly in top-level A; only B's own
//!                       contents are inspected, not its members' bodies
//! ```

use crate::ast::Expression;
use crate::error::CompileError;
use crate::explorer::{
    member_declarations_of, nested_declarations_of, shallow_view, top_level_declarations_of,
};
use crate::inspector::{scoped, Inspection};
use std::sync::Arc;

const INTRANSITIVE: &str = "Intransitive";

/// A compiled scope spec. [`Scope::slice`] narrows a whole-program
/// inspection down to the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Global,
    Transitive(Vec<String>),
    Intransitive(Vec<String>),
}

impl Scope {
    pub fn parse(spec: &str) -> Result<Self, CompileError> {
        if spec.is_empty() {
            return Ok(Scope::Global);
        }
        match spec.split_once(':') {
            Some((INTRANSITIVE, path)) => Ok(Scope::Intransitive(parse_path(path, spec)?)),
            Some(_) => Err(CompileError::MalformedScope(spec.to_string())),
            None => Ok(Scope::Transitive(parse_path(spec, spec)?)),
        }
    }

    pub fn slice(&self, inspection: Inspection) -> Inspection {
        match self {
            Scope::Global => inspection,
            Scope::Transitive(path) => {
                let Some((first, rest)) = path.split_first() else {
                    return inspection;
                };
                let innermost = rest
                    .iter()
                    .rev()
                    .fold(inspection, |inner, name| within(name, inner));
                scoped(innermost)(first.as_str())
            }
            Scope::Intransitive(path) => {
                let path = path.clone();
                Arc::new(move |tree: &Expression| {
                    resolve_intransitive(&path, tree)
                        .into_iter()
                        .any(|decl| inspection(&shallow_view(decl)))
                })
            }
        }
    }
}

fn parse_path(path: &str, spec: &str) -> Result<Vec<String>, CompileError> {
    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    if segments
        .iter()
        .any(|segment| segment.is_empty() || segment.contains(':'))
    {
        return Err(CompileError::MalformedScope(spec.to_string()));
    }
    Ok(segments)
}

/// Runs `inspection` on the declarations bound to `name` strictly inside
/// the declaration it is given
fn within(name: &str, inspection: Inspection) -> Inspection {
    let name = name.to_string();
    Arc::new(move |decl: &Expression| {
        nested_declarations_of(&name, decl)
            .into_iter()
            .any(|nested| inspection(nested))
    })
}

fn resolve_intransitive<'a>(path: &[String], tree: &'a Expression) -> Vec<&'a Expression> {
    let Some((first, rest)) = path.split_first() else {
        return vec![tree];
    };
    let mut scopes: Vec<&Expression> = top_level_declarations_of(tree)
        .into_iter()
        .filter(|decl| decl.declared_name() == Some(first.as_str()))
        .collect();
    for name in rest {
        scopes = scopes
            .into_iter()
            .flat_map(member_declarations_of)
            .filter(|decl| decl.declared_name() == Some(name.as_str()))
            .collect();
    }
    scopes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Scope::parse(""), Ok(Scope::Global));
        assert_eq!(
            Scope::parse("Bank.Account.deposit"),
            Ok(Scope::Transitive(vec![
                "Bank".into(),
                "Account".into(),
                "deposit".into()
            ]))
        );
        assert_eq!(
            Scope::parse("Intransitive:Account"),
            Ok(Scope::Intransitive(vec!["Account".into()]))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_specs() {
        for spec in [
            "Transitive:Account",
            "Intransitive:",
            "Intransitive:A:B",
            "A..B",
            ".A",
            "A.",
        ] {
            assert!(Scope::parse(spec).is_err(), "accepted {:?}", spec);
        }
    }

    #[test]
    fn test_lone_keyword_is_a_name() {
        assert_eq!(
            Scope::parse("Intransitive"),
            Ok(Scope::Transitive(vec!["Intransitive".into()]))
        );
    }
}
