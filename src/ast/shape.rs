// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shape accessors over [`Expression`] nodes
//!
//! Every match here is exhaustive on purpose: adding a variant must force
//! a decision about its children and its declared name.

use super::{ComprehensionStatement, Equation, EquationBody, Expression};
use crate::error::ShapeMismatch;

impl Expression {
    /// Variant name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::TypeAlias { .. } => "TypeAlias",
            Expression::Record { .. } => "Record",
            Expression::TypeSignature { .. } => "TypeSignature",
            Expression::EntryPoint { .. } => "EntryPoint",
            Expression::Function { .. } => "Function",
            Expression::Procedure { .. } => "Procedure",
            Expression::Method { .. } => "Method",
            Expression::Variable { .. } => "Variable",
            Expression::Attribute { .. } => "Attribute",
            Expression::Object { .. } => "Object",
            Expression::Rule { .. } => "Rule",
            Expression::Fact { .. } => "Fact",
            Expression::Reference(_) => "Reference",
            Expression::Application { .. } => "Application",
            Expression::Send { .. } => "Send",
            Expression::Lambda { .. } => "Lambda",
            Expression::Assignment { .. } => "Assignment",
            Expression::If { .. } => "If",
            Expression::While { .. } => "While",
            Expression::Repeat { .. } => "Repeat",
            Expression::Match { .. } => "Match",
            Expression::Switch { .. } => "Switch",
            Expression::Sequence(_) => "Sequence",
            Expression::Return(_) => "Return",
            Expression::Exist { .. } => "Exist",
            Expression::Not(_) => "Not",
            Expression::Findall { .. } => "Findall",
            Expression::Forall { .. } => "Forall",
            Expression::Comprehension { .. } => "Comprehension",
            Expression::Number(_) => "Number",
            Expression::Bool(_) => "Bool",
            Expression::String(_) => "String",
            Expression::Symbol(_) => "Symbol",
            Expression::Tuple(_) => "Tuple",
            Expression::List(_) => "List",
            Expression::Nil => "Nil",
            Expression::ObjectLiteral(_) => "ObjectLiteral",
            Expression::Equal => "Equal",
            Expression::NotEqual => "NotEqual",
            Expression::Other => "Other",
        }
    }

    /// Identifier bound by this node, if it is a declaration
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Expression::TypeAlias { name }
            | Expression::Record { name }
            | Expression::TypeSignature { name, .. }
            | Expression::EntryPoint { name, .. }
            | Expression::Function { name, .. }
            | Expression::Procedure { name, .. }
            | Expression::Method { name, .. }
            | Expression::Variable { name, .. }
            | Expression::Attribute { name, .. }
            | Expression::Object { name, .. }
            | Expression::Rule { name, .. }
            | Expression::Fact { name, .. } => Some(name),

            Expression::Reference(_)
            | Expression::Application { .. }
            | Expression::Send { .. }
            | Expression::Lambda { .. }
            | Expression::Assignment { .. }
            | Expression::If { .. }
            | Expression::While { .. }
            | Expression::Repeat { .. }
            | Expression::Match { .. }
            | Expression::Switch { .. }
            | Expression::Sequence(_)
            | Expression::Return(_)
            | Expression::Exist { .. }
            | Expression::Not(_)
            | Expression::Findall { .. }
            | Expression::Forall { .. }
            | Expression::Comprehension { .. }
            | Expression::Number(_)
            | Expression::Bool(_)
            | Expression::String(_)
            | Expression::Symbol(_)
            | Expression::Tuple(_)
            | Expression::List(_)
            | Expression::Nil
            | Expression::ObjectLiteral(_)
            | Expression::Equal
            | Expression::NotEqual
            | Expression::Other => None,
        }
    }

    pub fn is_declaration(&self) -> bool {
        self.declared_name().is_some()
    }

    /// Equations of functions, procedures, methods and pattern matches
    pub fn equations(&self) -> Option<&[Equation]> {
        match self {
            Expression::Function { equations, .. }
            | Expression::Procedure { equations, .. }
            | Expression::Method { equations, .. }
            | Expression::Match { equations, .. } => Some(equations),
            _ => None,
        }
    }

    /// Immediate sub-expressions, left to right.
    ///
    /// Patterns and identifiers are not expressions and are never yielded.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::TypeAlias { .. }
            | Expression::Record { .. }
            | Expression::TypeSignature { .. }
            | Expression::Fact { .. }
            | Expression::Reference(_)
            | Expression::Exist { .. }
            | Expression::Number(_)
            | Expression::Bool(_)
            | Expression::String(_)
            | Expression::Symbol(_)
            | Expression::Nil
            | Expression::Equal
            | Expression::NotEqual
            | Expression::Other => Vec::new(),

            Expression::EntryPoint { body, .. }
            | Expression::Object { body, .. }
            | Expression::Lambda { body, .. }
            | Expression::ObjectLiteral(body)
            | Expression::Return(body)
            | Expression::Not(body) => vec![&**body],

            Expression::Variable { initializer, .. }
            | Expression::Attribute { initializer, .. } => vec![&**initializer],
            Expression::Assignment { value, .. } => vec![&**value],

            Expression::Function { equations, .. }
            | Expression::Procedure { equations, .. }
            | Expression::Method { equations, .. } => equation_expressions(equations),

            Expression::Match {
                scrutinee,
                equations,
            } => {
                let mut children = vec![&**scrutinee];
                children.extend(equation_expressions(equations));
                children
            }

            Expression::Rule { body, .. }
            | Expression::Sequence(body)
            | Expression::Tuple(body)
            | Expression::List(body) => body.iter().collect(),

            Expression::Application { callee, arguments } => {
                let mut children = vec![&**callee];
                children.extend(arguments);
                children
            }
            Expression::Send {
                receiver,
                selector,
                arguments,
            } => {
                let mut children = vec![&**receiver, &**selector];
                children.extend(arguments);
                children
            }

            Expression::If {
                condition,
                then_branch,
                else_branch,
            } => vec![&**condition, &**then_branch, &**else_branch],
            Expression::While { condition, body } => vec![&**condition, &**body],
            Expression::Repeat { count, body } => vec![&**count, &**body],
            Expression::Switch { scrutinee, cases } => {
                let mut children = vec![&**scrutinee];
                for (case, result) in cases {
                    children.push(case);
                    children.push(result);
                }
                children
            }

            Expression::Findall {
                template,
                generator,
                result,
            } => vec![&**template, &**generator, &**result],
            Expression::Forall {
                generator,
                condition,
            } => vec![&**generator, &**condition],

            Expression::Comprehension { result, statements } => {
                let mut children = vec![&**result];
                for statement in statements {
                    children.push(match statement {
                        ComprehensionStatement::Generator { source, .. } => source,
                        ComprehensionStatement::Qualifier(filter) => filter,
                        ComprehensionStatement::Let { value, .. } => value,
                    });
                }
                children
            }
        }
    }

    /// Mutable counterpart of [`Expression::children`], same order.
    pub(crate) fn children_mut(&mut self) -> Vec<&mut Expression> {
        match self {
            Expression::TypeAlias { .. }
            | Expression::Record { .. }
            | Expression::TypeSignature { .. }
            | Expression::Fact { .. }
            | Expression::Reference(_)
            | Expression::Exist { .. }
            | Expression::Number(_)
            | Expression::Bool(_)
            | Expression::String(_)
            | Expression::Symbol(_)
            | Expression::Nil
            | Expression::Equal
            | Expression::NotEqual
            | Expression::Other => Vec::new(),

            Expression::EntryPoint { body, .. }
            | Expression::Object { body, .. }
            | Expression::Lambda { body, .. }
            | Expression::ObjectLiteral(body)
            | Expression::Return(body)
            | Expression::Not(body) => vec![&mut **body],

            Expression::Variable { initializer, .. }
            | Expression::Attribute { initializer, .. } => vec![&mut **initializer],
            Expression::Assignment { value, .. } => vec![&mut **value],

            Expression::Function { equations, .. }
            | Expression::Procedure { equations, .. }
            | Expression::Method { equations, .. } => equation_expressions_mut(equations),

            Expression::Match {
                scrutinee,
                equations,
            } => {
                let mut children = vec![&mut **scrutinee];
                children.extend(equation_expressions_mut(equations));
                children
            }

            Expression::Rule { body, .. }
            | Expression::Sequence(body)
            | Expression::Tuple(body)
            | Expression::List(body) => body.iter_mut().collect(),

            Expression::Application { callee, arguments } => {
                let mut children = vec![&mut **callee];
                children.extend(arguments.iter_mut());
                children
            }
            Expression::Send {
                receiver,
                selector,
                arguments,
            } => {
                let mut children = vec![&mut **receiver, &mut **selector];
                children.extend(arguments.iter_mut());
                children
            }

            Expression::If {
                condition,
                then_branch,
                else_branch,
            } => vec![&mut **condition, &mut **then_branch, &mut **else_branch],
            Expression::While { condition, body } => vec![&mut **condition, &mut **body],
            Expression::Repeat { count, body } => vec![&mut **count, &mut **body],
            Expression::Switch { scrutinee, cases } => {
                let mut children = vec![&mut **scrutinee];
                for (case, result) in cases.iter_mut() {
                    children.push(case);
                    children.push(result);
                }
                children
            }

            Expression::Findall {
                template,
                generator,
                result,
            } => vec![&mut **template, &mut **generator, &mut **result],
            Expression::Forall {
                generator,
                condition,
            } => vec![&mut **generator, &mut **condition],

            Expression::Comprehension { result, statements } => {
                let mut children = vec![&mut **result];
                for statement in statements.iter_mut() {
                    children.push(match statement {
                        ComprehensionStatement::Generator { source, .. } => source,
                        ComprehensionStatement::Qualifier(filter) => filter,
                        ComprehensionStatement::Let { value, .. } => value,
                    });
                }
                children
            }
        }
    }

    /// Body of a function, procedure or method known to have exactly one
    /// equation. Any other shape is a [`ShapeMismatch`].
    pub fn single_equation_body(&self) -> Result<&EquationBody, ShapeMismatch> {
        const EXPECTED: &str = "function, procedure or method with exactly one equation";
        match self {
            Expression::Function { equations, .. }
            | Expression::Procedure { equations, .. }
            | Expression::Method { equations, .. } => match equations.as_slice() {
                [only] => Ok(&only.body),
                _ => Err(ShapeMismatch::new(
                    EXPECTED,
                    format!("{} with {} equations", self.kind(), equations.len()),
                )),
            },
            other => Err(ShapeMismatch::new(EXPECTED, other.kind())),
        }
    }

    /// Like [`Expression::single_equation_body`], additionally requiring the
    /// body to be unguarded.
    pub fn unguarded_body(&self) -> Result<&Expression, ShapeMismatch> {
        match self.single_equation_body()? {
            EquationBody::Unguarded(body) => Ok(body),
            EquationBody::Guarded(_) => Err(ShapeMismatch::new(
                "unguarded single equation",
                format!("guarded {}", self.kind()),
            )),
        }
    }
}

fn equation_expressions(equations: &[Equation]) -> Vec<&Expression> {
    equations
        .iter()
        .flat_map(|equation| equation.body.expressions())
        .collect()
}

fn equation_expressions_mut(equations: &mut [Equation]) -> Vec<&mut Expression> {
    let mut expressions = Vec::new();
    for equation in equations.iter_mut() {
        match &mut equation.body {
            EquationBody::Unguarded(body) => expressions.push(body),
            EquationBody::Guarded(guards) => {
                for (condition, result) in guards.iter_mut() {
                    expressions.push(condition);
                    expressions.push(result);
                }
            }
        }
    }
    expressions
}

#[cfg(test)]
mod tests {
    use crate::ast::*;

    fn identity() -> Expression {
        Expression::function(
            "id",
            vec![Equation::unguarded(
                vec![Pattern::variable("x")],
                Expression::reference("x"),
            )],
        )
    }

    #[test]
    fn test_declared_name() {
        assert_eq!(identity().declared_name(), Some("id"));
        assert_eq!(Expression::reference("id").declared_name(), None);
        assert!(Expression::fact("parent", vec![]).is_declaration());
    }

    #[test]
    fn test_children_order() {
        let send = Expression::send(
            Expression::reference("account"),
            "deposit",
            vec![Expression::Number(10.0)],
        );
        let kinds: Vec<_> = send.children().iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec!["Reference", "Reference", "Number"]);
    }

    #[test]
    fn test_guarded_children_interleave_conditions_and_results() {
        let f = Expression::function(
            "abs",
            vec![Equation::guarded(
                vec![Pattern::variable("x")],
                vec![
                    (Expression::reference("c1"), Expression::reference("r1")),
                    (Expression::reference("c2"), Expression::reference("r2")),
                ],
            )],
        );
        let names: Vec<_> = f
            .children()
            .into_iter()
            .map(|c| match c {
                Expression::Reference(name) => name.as_str(),
                _ => "?",
            })
            .collect();
        assert_eq!(names, vec!["c1", "r1", "c2", "r2"]);
    }

    #[test]
    fn test_single_equation_body() {
        let body = identity().single_equation_body().cloned();
        assert_eq!(
            body,
            Ok(EquationBody::Unguarded(Expression::reference("x")))
        );
        assert_eq!(identity().unguarded_body(), Ok(&Expression::reference("x")));
    }

    #[test]
    fn test_single_equation_body_rejects_other_shapes() {
        let two = Expression::function(
            "f",
            vec![
                Equation::unguarded(vec![], Expression::Nil),
                Equation::unguarded(vec![], Expression::Nil),
            ],
        );
        let err = two.single_equation_body().unwrap_err();
        assert_eq!(err.found, "Function with 2 equations");

        let none = Expression::function("g", vec![]);
        assert!(none.single_equation_body().is_err());
        assert!(Expression::Nil.single_equation_body().is_err());
    }

    #[test]
    fn test_sequence_normalization() {
        assert_eq!(Expression::sequence(vec![]), Expression::Nil);
        assert_eq!(
            Expression::sequence(vec![Expression::Bool(true)]),
            Expression::Bool(true)
        );
        assert!(matches!(
            Expression::sequence(vec![Expression::Nil, Expression::Nil]),
            Expression::Sequence(_)
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_structure() {
        let tree = Expression::sequence(vec![
            identity(),
            Expression::rule(
                "grandparent",
                vec![Pattern::variable("X"), Pattern::variable("Z")],
                vec![Expression::exist("parent", vec![Pattern::Wildcard])],
            ),
        ]);
        let json = serde_json::to_string(&tree).unwrap();
        let back: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
