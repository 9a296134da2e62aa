// SPDX-License-Identifier: PMPL-1.0-or-later

//! Inspections: boolean questions asked of a tree
//!
//! An [`Inspection`] answers "does this tree, or anything inside it,
//! satisfy P". A [`ScopedInspection`] asks the same question of the
//! declarations bound to a given identifier.
//!
//! Every predicate in the paradigm modules is built the same way: a
//! node-shape test composed with one of the three traversal combinators
//! below. Shapes a test does not recognise answer `false`.

pub mod functional;
pub mod generic;
pub mod logic;
pub mod object_oriented;
pub mod procedural;

use crate::ast::{EquationBody, Expression};
use crate::explorer::{binded_declarations_of, equation_bodies_of, expressions_of};
use std::sync::Arc;

/// Predicate over a tree. Cheap to clone and safe to share across threads.
pub type Inspection = Arc<dyn Fn(&Expression) -> bool + Send + Sync>;

/// Inspection parameterised by the identifier it is restricted to
pub type ScopedInspection = Arc<dyn Fn(&str) -> Inspection + Send + Sync>;

/// True iff `test` holds for `tree` or any expression nested in it
pub fn is_or_contains_expression<F>(test: F) -> Inspection
where
    F: Fn(&Expression) -> bool + Send + Sync + 'static,
{
    Arc::new(move |tree: &Expression| expressions_of(tree).into_iter().any(|e| test(e)))
}

/// True iff `test` holds for some equation body reachable from the tree
pub fn contains_body<F>(test: F) -> Inspection
where
    F: Fn(&EquationBody) -> bool + Send + Sync + 'static,
{
    Arc::new(move |tree: &Expression| equation_bodies_of(tree).into_iter().any(|b| test(b)))
}

/// True iff `test` holds for some declaration bound to `name`
pub fn is_or_contains_declaration<F>(name: &str, test: F) -> Inspection
where
    F: Fn(&Expression) -> bool + Send + Sync + 'static,
{
    let name = name.to_string();
    Arc::new(move |tree: &Expression| {
        binded_declarations_of(&name, tree)
            .into_iter()
            .any(|decl| test(decl))
    })
}

/// Lift `inspection` so that it runs against the declarations bound to a
/// name rather than against the whole tree
pub fn scoped(inspection: Inspection) -> ScopedInspection {
    Arc::new(move |name: &str| {
        let inspection = inspection.clone();
        is_or_contains_declaration(name, move |decl| inspection(decl))
    })
}

pub fn negate(inspection: Inspection) -> Inspection {
    Arc::new(move |tree: &Expression| !inspection(tree))
}

pub fn either(left: Inspection, right: Inspection) -> Inspection {
    Arc::new(move |tree: &Expression| left(tree) || right(tree))
}

pub fn both(left: Inspection, right: Inspection) -> Inspection {
    Arc::new(move |tree: &Expression| left(tree) && right(tree))
}

/// Constant-true inspection
pub fn always() -> Inspection {
    Arc::new(|_: &Expression| true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    fn tree() -> Expression {
        Expression::sequence(vec![
            Expression::function(
                "f",
                vec![Equation::unguarded(
                    vec![],
                    Expression::apply(Expression::reference("g"), vec![Expression::Bool(true)]),
                )],
            ),
            Expression::variable("x", Expression::Number(1.0)),
        ])
    }

    fn is_bool(e: &Expression) -> bool {
        matches!(e, Expression::Bool(_))
    }

    #[test]
    fn test_containment_law() {
        // Holds at the root or in some child subtree, never elsewhere.
        let contains_bool = is_or_contains_expression(is_bool);
        let t = tree();
        let via_children = is_bool(&t) || t.children().into_iter().any(|c| contains_bool(c));
        assert_eq!(contains_bool(&t), via_children);
        assert!(contains_bool(&t));
        assert!(!contains_bool(&Expression::Nil));
    }

    #[test]
    fn test_contains_body() {
        let guarded = contains_body(EquationBody::is_guarded);
        assert!(!guarded(&tree()));
    }

    #[test]
    fn test_is_or_contains_declaration() {
        let has_bool = is_or_contains_declaration("f", |decl| {
            expressions_of(decl).into_iter().any(is_bool)
        });
        assert!(has_bool(&tree()));
        let in_x = is_or_contains_declaration("x", |decl| {
            expressions_of(decl).into_iter().any(is_bool)
        });
        assert!(!in_x(&tree()));
    }

    #[test]
    fn test_logical_combinators() {
        let yes = always();
        let no = negate(always());
        assert!(either(yes.clone(), no.clone())(&Expression::Nil));
        assert!(!both(yes, no)(&Expression::Nil));
    }

    #[test]
    fn test_scoped() {
        let has_reference = is_or_contains_expression(|e| matches!(e, Expression::Reference(_)));
        let scoped_reference = scoped(has_reference);
        assert!(scoped_reference("f")(&tree()));
        assert!(!scoped_reference("x")(&tree()));
        assert!(!scoped_reference("missing")(&tree()));
    }
}
