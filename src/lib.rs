// SPDX-License-Identifier: PMPL-1.0-or-later

//! Inspectorate: paradigm-agnostic semantic code analysis.
//!
//! Programs written in functional, object-oriented, imperative or logic
//! style are described by one tree type, and rubric lines ("expectations")
//! are compiled into predicates that answer structural questions about
//! such trees.
//!
//! ENGINE PILLARS:
//! 1. **Ast**: The unified [`ast::Expression`] model.
//! 2. **Explorer**: Flattened, deterministic views over a tree.
//! 3. **Inspector**: Containment combinators and the per-paradigm
//!    predicate library built on them.
//! 4. **Expectation**: The compiler from `(scope, inspection)` strings to
//!    predicates, with a permissive fallback for unreadable rubric text.
//!
//! ```
//! use inspectorate::ast::{Equation, Expression, Pattern};
//! use inspectorate::expectation::{compile, CompilerConfig, Expectation};
//!
//! let program = Expression::function(
//!     "length",
//!     vec![Equation::unguarded(
//!         vec![Pattern::variable("xs")],
//!         Expression::apply(
//!             Expression::reference("length"),
//!             vec![Expression::reference("xs")],
//!         ),
//!     )],
//! );
//! let config = CompilerConfig::default();
//! let recursive = compile(&Expectation::new("", "HasDirectRecursion:length"), &config);
//! assert!(recursive(&program));
//! ```

pub mod analysis;
pub mod ast;
pub mod binding;
pub mod error;
pub mod expectation;
pub mod explorer;
pub mod inspector;
pub mod rubric;
pub mod tokenizer;

pub use analysis::{analyze, evaluate_all, AnalysisOutcome, ExpectationResult, SourceParser};
pub use ast::{Expression, Identifier};
pub use binding::{BindingPredicate, LikeMode};
pub use error::{CompileError, ParseError, ShapeMismatch};
pub use expectation::{compile, try_compile, CompilerConfig, Expectation};
pub use inspector::{Inspection, ScopedInspection};
pub use rubric::Rubric;
