//! Structural builders for operations, parameters, exceptions, and
//! services.

use crate::metamodel::{ClassKind, ClassifierRef, ExceptionType, OpParam, Operation, Service};

use super::child::Child;
use super::context::ReduceContext;
use super::filter::strip_markers;

/// Build one operation parameter.
///
/// Flag and type-reference handling mirror the property builder; a spec
/// set child merges member-wise into the parameter's own set.
pub fn build_op_param(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut param = OpParam::default();

    for child in children {
        match child {
            Child::TypeDef(type_def) => param.type_def = Some(type_def),
            Child::Described(desc) => param.desc = Some(desc),
            Child::SpecSet(set) => {
                for spec in set {
                    param.specs.insert(spec);
                }
            }
            Child::Token(token) => match token.as_str() {
                "ordered" => param.ordered = true,
                "required" => param.required = true,
                "unique" => param.unique = true,
                _ => {}
            },
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::trace!(name = param.name().map(|n| n.as_str()), "reduced op param");
    }

    Child::OpParam(param)
}

/// Build a service operation.
///
/// Identical flag/type/spec handling to the parameter builder; in
/// addition, every remaining bare identifier child is a thrown-exception
/// reference.
pub fn build_operation(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut oper = Operation::default();

    for child in strip_markers(children) {
        match child {
            Child::TypeDef(type_def) => oper.type_def = Some(type_def),
            Child::Described(desc) => oper.desc = Some(desc),
            Child::Token(token) => match token.as_str() {
                "ordered" => oper.ordered = true,
                "unique" => oper.unique = true,
                "required" => oper.required = true,
                _ => {}
            },
            Child::OpParam(param) => oper.params.push(param),
            Child::SpecSet(set) => {
                for spec in set {
                    oper.specs.insert(spec);
                }
            }
            Child::Ident(ident) => {
                oper.throws
                    .insert(ClassifierRef::new(ident, ClassKind::ExceptType));
            }
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = oper.name().map(|n| n.as_str()),
            params = oper.params.len(),
            throws = oper.throws.len(),
            "reduced operation"
        );
    }

    Child::Operation(oper)
}

/// Build an exception type declaration.
pub fn build_exception(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut exception = ExceptionType::default();

    for child in strip_markers(children) {
        match child {
            Child::Ident(ident) => exception.name = ident.name,
            Child::Described(desc) => exception.desc = Some(desc),
            Child::Property(prop) => exception.properties.push(prop),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = %exception.name,
            properties = exception.properties.len(),
            "reduced exception type"
        );
    }

    Child::Exception(exception)
}

/// Build a service declaration.
pub fn build_service(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut service = Service::default();

    for child in strip_markers(children) {
        match child {
            Child::Ident(ident) => service.name = ident.name,
            Child::Described(desc) => service.desc = Some(desc),
            Child::Extends(reference) => service.extends = Some(reference),
            Child::DependsOn(references) => service.depends = references,
            Child::SpecSet(set) => {
                for spec in set {
                    service.specs.insert(spec);
                }
            }
            Child::Operation(operation) => service.operations.push(operation),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = %service.name,
            operations = service.operations.len(),
            depends = service.depends.len(),
            "reduced service"
        );
    }

    Child::Service(service)
}
