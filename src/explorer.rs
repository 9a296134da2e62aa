// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flattened views over a tree
//!
//! Every view is recomputed on each call and borrows from the tree it
//! explores. Trees are finite and acyclic, so plain recursive descent
//! always terminates.

use crate::ast::{EquationBody, Expression};

/// `tree` followed by every expression nested in it, in pre-order:
/// a node first, then each child subtree left to right.
pub fn expressions_of(tree: &Expression) -> Vec<&Expression> {
    let mut found = Vec::new();
    collect_expressions(tree, &mut found);
    found
}

fn collect_expressions<'a>(expression: &'a Expression, found: &mut Vec<&'a Expression>) {
    found.push(expression);
    for child in expression.children() {
        collect_expressions(child, found);
    }
}

/// Every equation body reachable from `tree`, in pre-order of their owners
pub fn equation_bodies_of(tree: &Expression) -> Vec<&EquationBody> {
    expressions_of(tree)
        .into_iter()
        .filter_map(Expression::equations)
        .flatten()
        .map(|equation| &equation.body)
        .collect()
}

/// Declarations anywhere within `tree` (including `tree` itself) whose
/// declared identifier is exactly `name`
pub fn binded_declarations_of<'a>(name: &str, tree: &'a Expression) -> Vec<&'a Expression> {
    expressions_of(tree)
        .into_iter()
        .filter(|expression| expression.declared_name() == Some(name))
        .collect()
}

/// Declarations within `decl`, excluding `decl` itself, bound to `name`
pub fn nested_declarations_of<'a>(name: &str, decl: &'a Expression) -> Vec<&'a Expression> {
    expressions_of(decl)
        .into_iter()
        .skip(1)
        .filter(|expression| expression.declared_name() == Some(name))
        .collect()
}

/// Identifiers referenced within `tree`: plain references and logic
/// consults, with repetitions, in pre-order
pub fn references_of(tree: &Expression) -> Vec<&str> {
    expressions_of(tree)
        .into_iter()
        .filter_map(|expression| match expression {
            Expression::Reference(name) | Expression::Exist { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

/// Outermost declarations of a program: `tree` itself when it is a
/// declaration, otherwise the first declarations met on every path down
/// from the root. Declarations are never descended into.
pub fn top_level_declarations_of(tree: &Expression) -> Vec<&Expression> {
    let mut found = Vec::new();
    collect_outermost(tree, &mut found);
    found
}

/// Declarations directly inside `decl`, not inside any of its members
pub fn member_declarations_of(decl: &Expression) -> Vec<&Expression> {
    let mut found = Vec::new();
    for child in decl.children() {
        collect_outermost(child, &mut found);
    }
    found
}

fn collect_outermost<'a>(expression: &'a Expression, found: &mut Vec<&'a Expression>) {
    if expression.is_declaration() {
        found.push(expression);
        return;
    }
    for child in expression.children() {
        collect_outermost(child, found);
    }
}

/// Copy of `decl` in which every nested declaration owning a body of its
/// own keeps its name and parameters but loses that body. Inspecting the
/// view answers questions about `decl`'s own contents only.
///
/// Variables and attributes are part of the enclosing code, so their
/// initializers stay visible.
pub fn shallow_view(decl: &Expression) -> Expression {
    let mut view = decl.clone();
    for child in view.children_mut() {
        hollow_nested(child);
    }
    view
}

fn owns_body(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::EntryPoint { .. }
            | Expression::Function { .. }
            | Expression::Procedure { .. }
            | Expression::Method { .. }
            | Expression::Object { .. }
            | Expression::Rule { .. }
    )
}

fn hollow_nested(expression: &mut Expression) {
    if owns_body(expression) {
        for child in expression.children_mut() {
            *child = Expression::Nil;
        }
        return;
    }
    for child in expression.children_mut() {
        hollow_nested(child);
    }
}
