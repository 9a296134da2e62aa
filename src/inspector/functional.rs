// SPDX-License-Identifier: PMPL-1.0-or-later

//! Functional-programming inspections

use super::generic::{declares_shaped, uses};
use super::{is_or_contains_expression, Inspection};
use crate::ast::Expression;
use crate::binding::BindingPredicate;

/// Composition is a reference to the `.` operator
pub fn uses_composition() -> Inspection {
    uses(BindingPredicate::named("."))
}

pub fn uses_lambda() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Lambda { .. }))
}

pub fn uses_comprehension() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Comprehension { .. }))
}

pub fn uses_pattern_matching() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Match { .. }))
}

pub fn declares_type_alias(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::TypeAlias { .. }))
}

pub fn declares_type_signature(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::TypeSignature { .. }))
}

pub fn declares_record(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Record { .. }))
}
