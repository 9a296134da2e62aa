// SPDX-License-Identifier: PMPL-1.0-or-later

//! Predicates over identifiers
//!
//! A [`BindingPredicate`] decides which declared (or referenced) names an
//! inspection accepts: any name, exactly one name, or names that read like
//! a given one once split into words.

use crate::tokenizer;
use serde::{Deserialize, Serialize};

/// How close two identifiers' words must be for a `Like` match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeMode {
    /// Same multiset of lowercase words, in any order
    #[default]
    Equivalent,
    /// At least one lowercase word in common
    Overlap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingPredicate {
    /// Accepts every identifier
    Anyone,
    /// Case-sensitive equality
    Named(String),
    /// Word-level similarity
    Like { name: String, mode: LikeMode },
}

impl BindingPredicate {
    pub fn named(name: &str) -> Self {
        BindingPredicate::Named(name.to_string())
    }

    pub fn like(name: &str, mode: LikeMode) -> Self {
        BindingPredicate::Like {
            name: name.to_string(),
            mode,
        }
    }

    pub fn matches(&self, identifier: &str) -> bool {
        match self {
            BindingPredicate::Anyone => true,
            BindingPredicate::Named(name) => name == identifier,
            BindingPredicate::Like { name, mode } => is_like(*mode, name, identifier),
        }
    }

    /// Whether this predicate places no constraint on the name at all.
    /// Anonymous constructs such as lambdas only satisfy such predicates.
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, BindingPredicate::Anyone)
    }
}

/// Fuzzy identifier comparison. Strings that cannot be segmented never match.
pub fn is_like(mode: LikeMode, target: &str, candidate: &str) -> bool {
    let (Some(mut expected), Some(mut actual)) =
        (tokenizer::words(target), tokenizer::words(candidate))
    else {
        return false;
    };

    match mode {
        LikeMode::Equivalent => {
            expected.sort();
            actual.sort();
            expected == actual
        }
        LikeMode::Overlap => expected.iter().any(|word| actual.contains(word)),
    }
}
