// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unified abstract syntax for functional, object-oriented, imperative
//! and logic programs.
//!
//! A single [`Expression`] type stands for every node of every supported
//! paradigm. Trees are plain owned values: no node identity, no parent
//! pointers, no sharing. They are built once by a parser collaborator and
//! only read afterwards.
//!
//! The model enforces no cross-paradigm legality rules. An object may hold
//! a logic rule; whether that is sensible is a question for the inspection
//! layer.

mod shape;

use serde::{Deserialize, Serialize};

/// Name of a declaration or of a referenced binding. No naming convention
/// is assumed.
pub type Identifier = String;

/// Shape of a binding occurrence: parameters, rule heads, match arms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum Pattern {
    /// `x`
    Variable(Identifier),
    /// `4`, `"hello"`
    Literal(String),
    /// `x:xs`
    InfixApplication {
        left: Box<Pattern>,
        operator: String,
        right: Box<Pattern>,
    },
    /// `Just x`
    Application { name: Identifier, args: Vec<Pattern> },
    Tuple(Vec<Pattern>),
    List(Vec<Pattern>),
    /// Prolog-style compound head argument: `point(X, Y)`
    Functor { name: Identifier, args: Vec<Pattern> },
    /// `whole@(x:_)`
    As {
        name: Identifier,
        pattern: Box<Pattern>,
    },
    /// `_`
    Wildcard,
    Other,
}

/// A parameter-pattern list paired with a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub params: Vec<Pattern>,
    pub body: EquationBody,
}

/// Right-hand side of an equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum EquationBody {
    Unguarded(Expression),
    /// Ordered `(condition, result)` pairs; the first true condition wins.
    Guarded(Vec<(Expression, Expression)>),
}

/// One clause of a comprehension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum ComprehensionStatement {
    /// `pattern <- source`
    Generator { pattern: Pattern, source: Expression },
    /// Boolean filter
    Qualifier(Expression),
    /// `let name = value`
    Let { name: Identifier, value: Expression },
}

/// A node of the unified tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum Expression {
    // === Declarations ===
    TypeAlias {
        name: Identifier,
    },
    Record {
        name: Identifier,
    },
    TypeSignature {
        name: Identifier,
        types: Vec<Identifier>,
    },
    EntryPoint {
        name: Identifier,
        body: Box<Expression>,
    },
    Function {
        name: Identifier,
        equations: Vec<Equation>,
    },
    Procedure {
        name: Identifier,
        equations: Vec<Equation>,
    },
    Method {
        name: Identifier,
        equations: Vec<Equation>,
    },
    Variable {
        name: Identifier,
        initializer: Box<Expression>,
    },
    Attribute {
        name: Identifier,
        initializer: Box<Expression>,
    },
    Object {
        name: Identifier,
        body: Box<Expression>,
    },
    Rule {
        name: Identifier,
        params: Vec<Pattern>,
        body: Vec<Expression>,
    },
    Fact {
        name: Identifier,
        params: Vec<Pattern>,
    },

    // === References and application ===
    Reference(Identifier),
    /// Uncurried application: callee plus all arguments
    Application {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// Message send: `receiver.selector(arguments)`
    Send {
        receiver: Box<Expression>,
        selector: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Lambda {
        params: Vec<Pattern>,
        body: Box<Expression>,
    },
    Assignment {
        name: Identifier,
        value: Box<Expression>,
    },

    // === Control structures ===
    If {
        condition: Box<Expression>,
        then_branch: Box<Expression>,
        else_branch: Box<Expression>,
    },
    While {
        condition: Box<Expression>,
        body: Box<Expression>,
    },
    Repeat {
        count: Box<Expression>,
        body: Box<Expression>,
    },
    Match {
        scrutinee: Box<Expression>,
        equations: Vec<Equation>,
    },
    Switch {
        scrutinee: Box<Expression>,
        cases: Vec<(Expression, Expression)>,
    },
    Sequence(Vec<Expression>),
    Return(Box<Expression>),

    // === Logic programming ===
    /// Consult of a predicate inside a rule body: `parent(X, Y)`
    Exist {
        name: Identifier,
        params: Vec<Pattern>,
    },
    Not(Box<Expression>),
    Findall {
        template: Box<Expression>,
        generator: Box<Expression>,
        result: Box<Expression>,
    },
    Forall {
        generator: Box<Expression>,
        condition: Box<Expression>,
    },

    // === Comprehension ===
    Comprehension {
        result: Box<Expression>,
        statements: Vec<ComprehensionStatement>,
    },

    // === Literals and atoms ===
    Number(f64),
    Bool(bool),
    String(String),
    Symbol(String),
    Tuple(Vec<Expression>),
    List(Vec<Expression>),
    Nil,
    /// Unnamed object literal
    ObjectLiteral(Box<Expression>),
    Equal,
    NotEqual,
    /// Construct the parser could not map onto any other variant
    Other,
}

impl Pattern {
    pub fn variable(name: &str) -> Self {
        Pattern::Variable(name.to_string())
    }

    pub fn literal(value: &str) -> Self {
        Pattern::Literal(value.to_string())
    }

    pub fn functor(name: &str, args: Vec<Pattern>) -> Self {
        Pattern::Functor {
            name: name.to_string(),
            args,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }
}

impl Equation {
    pub fn new(params: Vec<Pattern>, body: EquationBody) -> Self {
        Self { params, body }
    }

    pub fn unguarded(params: Vec<Pattern>, body: Expression) -> Self {
        Self::new(params, EquationBody::Unguarded(body))
    }

    pub fn guarded(params: Vec<Pattern>, guards: Vec<(Expression, Expression)>) -> Self {
        Self::new(params, EquationBody::Guarded(guards))
    }

    /// Number of parameter patterns
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl EquationBody {
    /// Expressions held by the body, conditions before their results
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            EquationBody::Unguarded(body) => vec![body],
            EquationBody::Guarded(guards) => guards
                .iter()
                .flat_map(|(condition, result)| [condition, result])
                .collect(),
        }
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, EquationBody::Guarded(_))
    }
}

impl Expression {
    pub fn reference(name: &str) -> Self {
        Expression::Reference(name.to_string())
    }

    pub fn apply(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Application {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn send(receiver: Expression, selector: &str, arguments: Vec<Expression>) -> Self {
        Expression::Send {
            receiver: Box::new(receiver),
            selector: Box::new(Expression::reference(selector)),
            arguments,
        }
    }

    pub fn function(name: &str, equations: Vec<Equation>) -> Self {
        Expression::Function {
            name: name.to_string(),
            equations,
        }
    }

    pub fn procedure(name: &str, equations: Vec<Equation>) -> Self {
        Expression::Procedure {
            name: name.to_string(),
            equations,
        }
    }

    pub fn method(name: &str, equations: Vec<Equation>) -> Self {
        Expression::Method {
            name: name.to_string(),
            equations,
        }
    }

    pub fn variable(name: &str, initializer: Expression) -> Self {
        Expression::Variable {
            name: name.to_string(),
            initializer: Box::new(initializer),
        }
    }

    pub fn attribute(name: &str, initializer: Expression) -> Self {
        Expression::Attribute {
            name: name.to_string(),
            initializer: Box::new(initializer),
        }
    }

    pub fn object(name: &str, body: Expression) -> Self {
        Expression::Object {
            name: name.to_string(),
            body: Box::new(body),
        }
    }

    pub fn rule(name: &str, params: Vec<Pattern>, body: Vec<Expression>) -> Self {
        Expression::Rule {
            name: name.to_string(),
            params,
            body,
        }
    }

    pub fn fact(name: &str, params: Vec<Pattern>) -> Self {
        Expression::Fact {
            name: name.to_string(),
            params,
        }
    }

    pub fn exist(name: &str, params: Vec<Pattern>) -> Self {
        Expression::Exist {
            name: name.to_string(),
            params,
        }
    }

    pub fn lambda(params: Vec<Pattern>, body: Expression) -> Self {
        Expression::Lambda {
            params,
            body: Box::new(body),
        }
    }

    pub fn if_then_else(
        condition: Expression,
        then_branch: Expression,
        else_branch: Expression,
    ) -> Self {
        Expression::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    /// Wrap statements in a sequence, collapsing the trivial cases:
    /// no statements is `Nil`, a single statement stands for itself.
    pub fn sequence(mut items: Vec<Expression>) -> Self {
        match items.len() {
            0 => Expression::Nil,
            1 => items.remove(0),
            _ => Expression::Sequence(items),
        }
    }
}
