// SPDX-License-Identifier: PMPL-1.0-or-later

//! Verb table: the fixed vocabulary of inspection specs

use crate::binding::BindingPredicate;
use crate::inspector::{functional, generic, logic, object_oriented, procedural, Inspection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    HasAnonymousVariable,
    HasArity0,
    HasArity1,
    HasArity2,
    HasArity3,
    HasAssignment,
    HasAttribute,
    HasBinding,
    HasClass,
    HasComposition,
    HasComprehension,
    HasComputation,
    HasConditional,
    HasCut,
    HasDirectRecursion,
    HasEntryPoint,
    HasFact,
    HasFail,
    HasFindall,
    HasForall,
    HasFunction,
    HasGuards,
    HasIf,
    HasLambda,
    HasMessageSend,
    HasMethod,
    HasNot,
    HasObject,
    HasPatternMatching,
    HasPredicate,
    HasProcedure,
    HasRecord,
    HasRepeat,
    HasReturn,
    HasRule,
    HasSwitch,
    HasTypeAlias,
    HasTypeSignature,
    HasUnifyOperator,
    HasUsage,
    HasVariable,
    HasWhile,
}

impl Verb {
    pub const ALL: [Verb; 42] = [
        Verb::HasAnonymousVariable,
        Verb::HasArity0,
        Verb::HasArity1,
        Verb::HasArity2,
        Verb::HasArity3,
        Verb::HasAssignment,
        Verb::HasAttribute,
        Verb::HasBinding,
        Verb::HasClass,
        Verb::HasComposition,
        Verb::HasComprehension,
        Verb::HasComputation,
        Verb::HasConditional,
        Verb::HasCut,
        Verb::HasDirectRecursion,
        Verb::HasEntryPoint,
        Verb::HasFact,
        Verb::HasFail,
        Verb::HasFindall,
        Verb::HasForall,
        Verb::HasFunction,
        Verb::HasGuards,
        Verb::HasIf,
        Verb::HasLambda,
        Verb::HasMessageSend,
        Verb::HasMethod,
        Verb::HasNot,
        Verb::HasObject,
        Verb::HasPatternMatching,
        Verb::HasPredicate,
        Verb::HasProcedure,
        Verb::HasRecord,
        Verb::HasRepeat,
        Verb::HasReturn,
        Verb::HasRule,
        Verb::HasSwitch,
        Verb::HasTypeAlias,
        Verb::HasTypeSignature,
        Verb::HasUnifyOperator,
        Verb::HasUsage,
        Verb::HasVariable,
        Verb::HasWhile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::HasAnonymousVariable => "HasAnonymousVariable",
            Verb::HasArity0 => "HasArity0",
            Verb::HasArity1 => "HasArity1",
            Verb::HasArity2 => "HasArity2",
            Verb::HasArity3 => "HasArity3",
            Verb::HasAssignment => "HasAssignment",
            Verb::HasAttribute => "HasAttribute",
            Verb::HasBinding => "HasBinding",
            Verb::HasClass => "HasClass",
            Verb::HasComposition => "HasComposition",
            Verb::HasComprehension => "HasComprehension",
            Verb::HasComputation => "HasComputation",
            Verb::HasConditional => "HasConditional",
            Verb::HasCut => "HasCut",
            Verb::HasDirectRecursion => "HasDirectRecursion",
            Verb::HasEntryPoint => "HasEntryPoint",
            Verb::HasFact => "HasFact",
            Verb::HasFail => "HasFail",
            Verb::HasFindall => "HasFindall",
            Verb::HasForall => "HasForall",
            Verb::HasFunction => "HasFunction",
            Verb::HasGuards => "HasGuards",
            Verb::HasIf => "HasIf",
            Verb::HasLambda => "HasLambda",
            Verb::HasMessageSend => "HasMessageSend",
            Verb::HasMethod => "HasMethod",
            Verb::HasNot => "HasNot",
            Verb::HasObject => "HasObject",
            Verb::HasPatternMatching => "HasPatternMatching",
            Verb::HasPredicate => "HasPredicate",
            Verb::HasProcedure => "HasProcedure",
            Verb::HasRecord => "HasRecord",
            Verb::HasRepeat => "HasRepeat",
            Verb::HasReturn => "HasReturn",
            Verb::HasRule => "HasRule",
            Verb::HasSwitch => "HasSwitch",
            Verb::HasTypeAlias => "HasTypeAlias",
            Verb::HasTypeSignature => "HasTypeSignature",
            Verb::HasUnifyOperator => "HasUnifyOperator",
            Verb::HasUsage => "HasUsage",
            Verb::HasVariable => "HasVariable",
            Verb::HasWhile => "HasWhile",
        }
    }

    /// Case-sensitive lookup; verbs are part of a bit-exact rubric format
    pub fn parse(name: &str) -> Option<Self> {
        Verb::ALL.into_iter().find(|verb| verb.as_str() == name)
    }

    /// Build the inspection this verb stands for. Verbs about constructs
    /// rather than bindings ignore `target`.
    pub fn inspection(self, target: BindingPredicate) -> Inspection {
        match self {
            Verb::HasAnonymousVariable => generic::uses_anonymous_variable(target),
            Verb::HasArity0 => generic::declares_with_arity(0, target),
            Verb::HasArity1 => generic::declares_with_arity(1, target),
            Verb::HasArity2 => generic::declares_with_arity(2, target),
            Verb::HasArity3 => generic::declares_with_arity(3, target),
            Verb::HasAssignment => procedural::uses_assignment(target),
            Verb::HasAttribute => object_oriented::declares_attribute(target),
            Verb::HasBinding => generic::declares(target),
            Verb::HasClass | Verb::HasObject => object_oriented::declares_object(target),
            Verb::HasComposition => functional::uses_composition(),
            Verb::HasComprehension => functional::uses_comprehension(),
            Verb::HasComputation => generic::declares_computation(target),
            Verb::HasConditional => generic::uses_conditional(),
            Verb::HasCut => logic::uses_cut(),
            Verb::HasDirectRecursion => generic::has_direct_recursion(target),
            Verb::HasEntryPoint => generic::declares_entry_point(target),
            Verb::HasFact => logic::declares_fact(target),
            Verb::HasFail => logic::uses_fail(),
            Verb::HasFindall => logic::uses_findall(),
            Verb::HasForall => logic::uses_forall(),
            Verb::HasFunction => generic::declares_function(target),
            Verb::HasGuards => generic::uses_guards(),
            Verb::HasIf => generic::uses_if(),
            Verb::HasLambda => functional::uses_lambda(),
            Verb::HasMessageSend => object_oriented::uses_message_send(target),
            Verb::HasMethod => object_oriented::declares_method(target),
            Verb::HasNot => logic::uses_not(),
            Verb::HasPatternMatching => functional::uses_pattern_matching(),
            Verb::HasPredicate => logic::declares_predicate(target),
            Verb::HasProcedure => procedural::declares_procedure(target),
            Verb::HasRecord => functional::declares_record(target),
            Verb::HasRepeat => procedural::uses_repeat(),
            Verb::HasReturn => procedural::uses_return(),
            Verb::HasRule => logic::declares_rule(target),
            Verb::HasSwitch => procedural::uses_switch(),
            Verb::HasTypeAlias => functional::declares_type_alias(target),
            Verb::HasTypeSignature => functional::declares_type_signature(target),
            Verb::HasUnifyOperator => logic::uses_unify_operator(),
            Verb::HasUsage => generic::uses(target),
            Verb::HasVariable => generic::declares_variable(target),
            Verb::HasWhile => procedural::uses_while(),
        }
    }
}
