// SPDX-License-Identifier: PMPL-1.0-or-later

//! Imperative-programming inspections

use super::generic::declares_shaped;
use super::{is_or_contains_expression, Inspection};
use crate::ast::Expression;
use crate::binding::BindingPredicate;

pub fn declares_procedure(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Procedure { .. }))
}

pub fn uses_while() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::While { .. }))
}

pub fn uses_repeat() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Repeat { .. }))
}

pub fn uses_switch() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Switch { .. }))
}

pub fn uses_return() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Return(_)))
}

/// Some assignment to an identifier satisfying `target`
pub fn uses_assignment(target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| match expression {
        Expression::Assignment { name, .. } => target.matches(name),
        _ => false,
    })
}
