// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logic-programming inspections

use super::generic::{declares_shaped, uses};
use super::{either, is_or_contains_expression, Inspection};
use crate::ast::Expression;
use crate::binding::BindingPredicate;

pub fn declares_fact(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Fact { .. }))
}

pub fn declares_rule(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Rule { .. }))
}

/// A predicate is defined by facts, rules, or both
pub fn declares_predicate(target: BindingPredicate) -> Inspection {
    either(declares_fact(target.clone()), declares_rule(target))
}

pub fn uses_not() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Not(_)))
}

pub fn uses_findall() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Findall { .. }))
}

pub fn uses_forall() -> Inspection {
    is_or_contains_expression(|e| matches!(e, Expression::Forall { .. }))
}

pub fn uses_unify_operator() -> Inspection {
    uses(BindingPredicate::named("="))
}

pub fn uses_cut() -> Inspection {
    uses(BindingPredicate::named("!"))
}

pub fn uses_fail() -> Inspection {
    uses(BindingPredicate::named("fail"))
}

/// Some consult of a predicate whose name satisfies `target`
pub fn uses_existential(target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| match expression {
        Expression::Exist { name, .. } => target.matches(name),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    fn var(name: &str) -> Pattern {
        Pattern::variable(name)
    }

    fn family() -> Expression {
        Expression::sequence(vec![
            Expression::fact("parent", vec![Pattern::literal("tom"), Pattern::literal("bob")]),
            Expression::rule(
                "childless",
                vec![var("X")],
                vec![
                    Expression::exist("person", vec![var("X")]),
                    Expression::Not(Box::new(Expression::exist(
                        "parent",
                        vec![var("X"), Pattern::Wildcard],
                    ))),
                ],
            ),
            Expression::rule(
                "siblings",
                vec![var("X"), var("Y")],
                vec![
                    Expression::Findall {
                        template: Box::new(Expression::reference("C")),
                        generator: Box::new(Expression::exist("parent", vec![var("P"), var("C")])),
                        result: Box::new(Expression::reference("Cs")),
                    },
                    Expression::apply(
                        Expression::reference("="),
                        vec![Expression::reference("X"), Expression::reference("Y")],
                    ),
                    Expression::reference("!"),
                ],
            ),
        ])
    }

    #[test]
    fn test_declarations() {
        let tree = family();
        assert!(declares_fact(BindingPredicate::named("parent"))(&tree));
        assert!(!declares_rule(BindingPredicate::named("parent"))(&tree));
        assert!(declares_rule(BindingPredicate::named("childless"))(&tree));
        assert!(declares_predicate(BindingPredicate::named("parent"))(&tree));
        assert!(declares_predicate(BindingPredicate::named("siblings"))(&tree));
        assert!(!declares_predicate(BindingPredicate::named("person"))(&tree));
    }

    #[test]
    fn test_constructs() {
        let tree = family();
        assert!(uses_not()(&tree));
        assert!(uses_findall()(&tree));
        assert!(!uses_forall()(&tree));
        assert!(uses_unify_operator()(&tree));
        assert!(uses_cut()(&tree));
        assert!(!uses_fail()(&tree));
        assert!(uses_existential(BindingPredicate::named("person"))(&tree));
    }
}
