// SPDX-License-Identifier: PMPL-1.0-or-later

//! Paradigm-independent inspections

use super::{contains_body, either, is_or_contains_expression, Inspection};
use crate::ast::{EquationBody, Expression};
use crate::binding::BindingPredicate;
use crate::explorer::references_of;

/// Some declaration whose name satisfies `target` and whose node passes
/// `shape`
pub(crate) fn declares_shaped(
    target: BindingPredicate,
    shape: fn(&Expression) -> bool,
) -> Inspection {
    is_or_contains_expression(move |expression| {
        shape(expression)
            && expression
                .declared_name()
                .is_some_and(|name| target.matches(name))
    })
}

/// Any binding at all whose name satisfies `target`
pub fn declares(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |_| true)
}

pub fn declares_function(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Function { .. }))
}

pub fn declares_variable(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Variable { .. }))
}

pub fn declares_entry_point(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::EntryPoint { .. }))
}

/// Functions, procedures and methods: anything with equations and a name
pub fn declares_computation(target: BindingPredicate) -> Inspection {
    declares_shaped(target, is_computation)
}

fn is_computation(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Function { .. } | Expression::Procedure { .. } | Expression::Method { .. }
    )
}

/// Some reference (or logic consult) to an identifier satisfying `target`
pub fn uses(target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| match expression {
        Expression::Reference(name) | Expression::Exist { name, .. } => target.matches(name),
        _ => false,
    })
}

/// A declaration satisfying `target` references its own name from within
/// its own body
pub fn has_direct_recursion(target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| match expression.declared_name() {
        Some(name) if target.matches(name) => references_of(expression).contains(&name),
        _ => false,
    })
}

/// Node-level arity test. Functions, procedures and methods pass when any
/// of their equations has exactly `arity` parameters; lambdas, rules and
/// facts when their own parameter list does.
pub fn has_arity(arity: usize, expression: &Expression) -> bool {
    match expression {
        Expression::Function { equations, .. }
        | Expression::Procedure { equations, .. }
        | Expression::Method { equations, .. } => {
            equations.iter().any(|equation| equation.arity() == arity)
        }
        Expression::Lambda { params, .. }
        | Expression::Rule { params, .. }
        | Expression::Fact { params, .. } => params.len() == arity,
        _ => false,
    }
}

/// Some declaration satisfying `target` with the given arity. Lambdas are
/// anonymous, so they only count when `target` is unconstrained.
pub fn declares_with_arity(arity: usize, target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| {
        let named = match expression {
            Expression::Lambda { .. } => target.is_unconstrained(),
            other => other
                .declared_name()
                .is_some_and(|name| target.matches(name)),
        };
        named && has_arity(arity, expression)
    })
}

/// A declaration satisfying `target` takes `_` as one of its top-level
/// parameters. Lambdas are not covered.
pub fn uses_anonymous_variable(target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| {
        let Some(name) = expression.declared_name() else {
            return false;
        };
        if !target.matches(name) {
            return false;
        }
        match expression {
            Expression::Function { equations, .. }
            | Expression::Procedure { equations, .. }
            | Expression::Method { equations, .. } => equations
                .iter()
                .any(|equation| equation.params.iter().any(|p| p.is_wildcard())),
            Expression::Rule { params, .. } | Expression::Fact { params, .. } => {
                params.iter().any(|p| p.is_wildcard())
            }
            _ => false,
        }
    })
}

pub fn uses_if() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::If { .. }))
}

pub fn uses_guards() -> Inspection {
    contains_body(EquationBody::is_guarded)
}

/// Either an `if` or a guarded equation
pub fn uses_conditional() -> Inspection {
    either(uses_if(), uses_guards())
}
