//! Builder registration — binding grammar productions to builders.
//!
//! Builder configuration (the built-in flag, tag vs. validator) is decided
//! once, when a production is registered, never at reduction time: the
//! built-in-primitive and user-declared productions register differently
//! configured variants of the same builder.

use rustc_hash::FxHashMap;

use crate::base::Name;
use crate::metamodel::ConstraintKind;

use super::build_behavior::{build_exception, build_op_param, build_operation, build_service};
use super::build_constraints::{
    build_apply_def, build_common_tag, build_constr_def, build_constraint,
};
use super::build_members::{build_property, build_type_def};
use super::build_structure::{build_model, build_package};
use super::build_types::{build_data_type, build_enum_literal, build_enumeration};
use super::child::Child;
use super::context::ReduceContext;
use super::error::ReduceError;
use super::leaf::{
    build_description, build_ident, build_int, build_spec_param_string, build_string,
    build_variadic,
};
use super::specs::{
    build_constraint_spec, build_constraint_spec_list, build_depends_def, build_extends_def,
    build_ref,
};

/// A builder, ready to be registered to a grammar production.
///
/// Leaf builders receive the matched lexeme as a single token child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builder {
    // Leaves
    Ident,
    Int,
    Str,
    Variadic,
    SpecParamStr,
    Description,

    // Structure
    Model,
    Package,

    // Types
    DataType { built_in: bool },
    Enumeration,
    EnumLiteral,

    // Constraints
    Constraint { built_in: bool, kind: ConstraintKind },
    CommonTag,
    ConstrDef,
    ApplyDef,

    // Members
    TypeDef,
    Property,

    // Behavior
    OpParam,
    Operation,
    Exception,
    Service,

    // Specs and reference wrappers
    ConstraintSpec,
    ConstraintSpecList,
    Ref,
    ExtendsDef,
    DependsDef,
}

impl Builder {
    /// Reduce one production's children into a single value.
    pub fn reduce(
        &self,
        ctx: &ReduceContext,
        children: Vec<Child>,
    ) -> Result<Child, ReduceError> {
        match self {
            Builder::Ident => Ok(build_ident(ctx, &leaf_lexeme("id", children)?)),
            Builder::Int => build_int(&leaf_lexeme("intVal", children)?),
            Builder::Str => Ok(build_string(&leaf_lexeme("string", children)?)),
            Builder::Variadic => Ok(build_variadic()),
            Builder::SpecParamStr => Ok(build_spec_param_string(ctx, children)),
            Builder::Description => Ok(build_description(ctx, children)),
            Builder::Model => Ok(build_model(ctx, children)),
            Builder::Package => Ok(build_package(ctx, children)),
            Builder::DataType { built_in } => Ok(build_data_type(ctx, children, *built_in)),
            Builder::Enumeration => Ok(build_enumeration(ctx, children)),
            Builder::EnumLiteral => build_enum_literal(ctx, children),
            Builder::Constraint { built_in, kind } => {
                Ok(build_constraint(ctx, children, *built_in, *kind))
            }
            Builder::CommonTag => Ok(build_common_tag(ctx, children)),
            Builder::ConstrDef => Ok(build_constr_def(ctx, children)),
            Builder::ApplyDef => Ok(build_apply_def(ctx, children)),
            Builder::TypeDef => Ok(build_type_def(ctx, children)),
            Builder::Property => Ok(build_property(ctx, children)),
            Builder::OpParam => Ok(build_op_param(ctx, children)),
            Builder::Operation => Ok(build_operation(ctx, children)),
            Builder::Exception => Ok(build_exception(ctx, children)),
            Builder::Service => Ok(build_service(ctx, children)),
            Builder::ConstraintSpec => Ok(build_constraint_spec(ctx, children)),
            Builder::ConstraintSpecList => Ok(build_constraint_spec_list(ctx, children)),
            Builder::Ref => Ok(build_ref(ctx, children)),
            Builder::ExtendsDef => Ok(build_extends_def(ctx, children)),
            Builder::DependsDef => Ok(build_depends_def(ctx, children)),
        }
    }
}

/// Pull the matched lexeme out of a leaf production's children.
fn leaf_lexeme(rule: &'static str, children: Vec<Child>) -> Result<Name, ReduceError> {
    let found = children.len();
    for child in children {
        match child {
            Child::Token(lexeme) => return Ok(lexeme),
            Child::Str(text) => return Ok(Name::from(text)),
            _ => {}
        }
    }
    Err(ReduceError::MalformedNode {
        rule,
        expected: 1,
        found,
    })
}

/// Maps grammar production names to builders.
#[derive(Debug, Default, Clone)]
pub struct BuilderRegistry {
    builders: FxHashMap<Name, Builder>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical wiring for the DMDL grammar's production names.
    pub fn standard() -> Self {
        let mut registry = Self::new();

        // Leaves
        registry.register("id", Builder::Ident);
        registry.register("intVal", Builder::Int);
        registry.register("string", Builder::Str);
        registry.register("ellipsis", Builder::Variadic);
        registry.register("constraintParam", Builder::SpecParamStr);
        registry.register("namedElement", Builder::Description);

        // Structure
        registry.register("model", Builder::Model);
        registry.register("package", Builder::Package);

        // Types: built-in and user-declared productions get their own
        // configurations
        registry.register("dataType", Builder::DataType { built_in: false });
        registry.register("builtInDataType", Builder::DataType { built_in: true });
        registry.register("enum", Builder::Enumeration);
        registry.register("enumLiteral", Builder::EnumLiteral);

        // Constraints: four productions, four configurations
        registry.register(
            "tagType",
            Builder::Constraint {
                built_in: false,
                kind: ConstraintKind::Tag,
            },
        );
        registry.register(
            "builtInTagType",
            Builder::Constraint {
                built_in: true,
                kind: ConstraintKind::Tag,
            },
        );
        registry.register(
            "validatorType",
            Builder::Constraint {
                built_in: false,
                kind: ConstraintKind::Validator,
            },
        );
        registry.register(
            "builtInValidatorType",
            Builder::Constraint {
                built_in: true,
                kind: ConstraintKind::Validator,
            },
        );
        registry.register("commonTag", Builder::CommonTag);
        registry.register("constrDef", Builder::ConstrDef);
        registry.register("applyDef", Builder::ApplyDef);

        // Members
        registry.register("typeDef", Builder::TypeDef);
        registry.register("property", Builder::Property);

        // Behavior
        registry.register("opParam", Builder::OpParam);
        registry.register("operation", Builder::Operation);
        registry.register("exception", Builder::Exception);
        registry.register("service", Builder::Service);

        // Specs and reference wrappers
        registry.register("constraintSpec", Builder::ConstraintSpec);
        registry.register("constraintSpecList", Builder::ConstraintSpecList);
        registry.register("reference", Builder::Ref);
        registry.register("extends", Builder::ExtendsDef);
        registry.register("dependsOn", Builder::DependsDef);

        registry
    }

    pub fn register(&mut self, rule: impl Into<Name>, builder: Builder) {
        self.builders.insert(rule.into(), builder);
    }

    pub fn get(&self, rule: &str) -> Option<&Builder> {
        self.builders.get(rule)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Reduce one production by name.
    pub fn reduce(
        &self,
        rule: &str,
        ctx: &ReduceContext,
        children: Vec<Child>,
    ) -> Result<Child, ReduceError> {
        let builder = self
            .builders
            .get(rule)
            .ok_or_else(|| ReduceError::UnknownRule(rule.to_string()))?;
        builder.reduce(ctx, children)
    }
}
