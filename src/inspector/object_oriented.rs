// SPDX-License-Identifier: PMPL-1.0-or-later

//! Object-oriented inspections

use super::generic::declares_shaped;
use super::{is_or_contains_expression, Inspection};
use crate::ast::Expression;
use crate::binding::BindingPredicate;

/// Named object declarations. Classes are modelled as objects.
pub fn declares_object(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Object { .. }))
}

pub fn declares_attribute(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Attribute { .. }))
}

pub fn declares_method(target: BindingPredicate) -> Inspection {
    declares_shaped(target, |e| matches!(e, Expression::Method { .. }))
}

/// Some message send whose selector is a name satisfying `target`
pub fn uses_message_send(target: BindingPredicate) -> Inspection {
    is_or_contains_expression(move |expression| match expression {
        Expression::Send { selector, .. } => match &**selector {
            Expression::Reference(name) => target.matches(name),
            _ => target.is_unconstrained(),
        },
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    fn account() -> Expression {
        Expression::object(
            "Account",
            Expression::sequence(vec![
                Expression::attribute("balance", Expression::Number(0.0)),
                Expression::method(
                    "withdraw",
                    vec![Equation::unguarded(
                        vec![Pattern::variable("amount")],
                        Expression::send(
                            Expression::reference("self"),
                            "balance:",
                            vec![Expression::reference("amount")],
                        ),
                    )],
                ),
            ]),
        )
    }

    #[test]
    fn test_object_members() {
        let tree = account();
        assert!(declares_object(BindingPredicate::named("Account"))(&tree));
        assert!(declares_attribute(BindingPredicate::named("balance"))(&tree));
        assert!(declares_method(BindingPredicate::named("withdraw"))(&tree));
        assert!(!declares_method(BindingPredicate::named("balance"))(&tree));
    }

    #[test]
    fn test_message_send() {
        let tree = account();
        assert!(uses_message_send(BindingPredicate::Anyone)(&tree));
        assert!(uses_message_send(BindingPredicate::named("balance:"))(&tree));
        assert!(!uses_message_send(BindingPredicate::named("deposit:"))(&tree));
    }
}
