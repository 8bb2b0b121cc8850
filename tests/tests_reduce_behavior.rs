//! Reduction tests — operations, parameters, exceptions, and services.

use rstest::rstest;

use dmdl::metamodel::{
    ClassKind, ConstraintSpec, ConstraintSpecSet, Description, QualifiedIdent, SpecParam,
};
use dmdl::reduce::{
    build_depends_def, build_exception, build_extends_def, build_ident, build_op_param,
    build_operation, build_property, build_service, build_type_def,
};
use dmdl::{Child, ReduceContext};

fn ident(ctx: &ReduceContext, name: &str) -> Child {
    build_ident(ctx, name)
}

fn spec(ctx: &ReduceContext, target: &str, params: Vec<SpecParam>) -> ConstraintSpec {
    ConstraintSpec::with_params(QualifiedIdent::new(target, ctx.namespace()), params)
}

fn spec_set(specs: impl IntoIterator<Item = ConstraintSpec>) -> Child {
    Child::SpecSet(specs.into_iter().collect::<ConstraintSpecSet>())
}

// ============================================================================
// OpParam
// ============================================================================

#[rstest]
#[case("ordered")]
#[case("required")]
#[case("unique")]
fn test_op_param_flags(#[case] flag: &str) {
    let ctx = ReduceContext::new();
    let Child::OpParam(param) = build_op_param(&ctx, vec![Child::from(flag)]) else {
        panic!("expected op param");
    };
    assert_eq!(param.ordered, flag == "ordered");
    assert_eq!(param.required, flag == "required");
    assert_eq!(param.unique, flag == "unique");
}

#[test]
fn test_op_param_merges_specs_member_wise() {
    let ctx = ReduceContext::new();
    let children = vec![
        spec_set([spec(&ctx, "notNull", vec![])]),
        spec_set([
            spec(&ctx, "notNull", vec![]),
            spec(&ctx, "maxValue", vec![SpecParam::Int(10)]),
        ]),
    ];
    let Child::OpParam(param) = build_op_param(&ctx, children) else {
        panic!("expected op param");
    };
    assert_eq!(param.specs.len(), 2);
}

#[test]
fn test_op_param_description() {
    let ctx = ReduceContext::new();
    let built = build_op_param(
        &ctx,
        vec![Child::Described(Description::short("the lookup key"))],
    );
    let Child::OpParam(param) = built else {
        panic!("expected op param");
    };
    assert_eq!(param.desc.unwrap().short.as_deref(), Some("the lookup key"));
}

// ============================================================================
// Operation
// ============================================================================

#[test]
fn test_operation_bare_idents_are_thrown_exceptions() {
    let ctx = ReduceContext::new();
    let return_type = build_type_def(&ctx, vec![ident(&ctx, "bool"), ident(&ctx, "check")]);
    let built = build_operation(
        &ctx,
        vec![
            return_type,
            Child::from("("),
            Child::from(")"),
            ident(&ctx, "ValidationError"),
            ident(&ctx, "TimeoutError"),
        ],
    );
    let Child::Operation(oper) = built else {
        panic!("expected operation");
    };
    assert_eq!(oper.name().map(|n| n.as_str()), Some("check"));
    assert_eq!(oper.throws.len(), 2);
    for thrown in &oper.throws {
        assert_eq!(thrown.kind, Some(ClassKind::ExceptType));
    }
}

#[test]
fn test_operation_collects_params_in_order() {
    let ctx = ReduceContext::new();
    let param = |name: &str| {
        let td = build_type_def(&ctx, vec![ident(&ctx, "int"), ident(&ctx, name)]);
        build_op_param(&ctx, vec![td])
    };
    let built = build_operation(&ctx, vec![param("first"), param("second")]);
    let Child::Operation(oper) = built else {
        panic!("expected operation");
    };
    let names: Vec<_> = oper
        .params
        .iter()
        .filter_map(|p| p.name().map(|n| n.as_str()))
        .collect();
    assert_eq!(names, ["first", "second"]);
}

#[test]
fn test_operation_duplicate_throws_collapse() {
    let ctx = ReduceContext::new();
    let built = build_operation(
        &ctx,
        vec![ident(&ctx, "SameError"), ident(&ctx, "SameError")],
    );
    let Child::Operation(oper) = built else {
        panic!("expected operation");
    };
    assert_eq!(oper.throws.len(), 1);
}

// ============================================================================
// Exception
// ============================================================================

#[test]
fn test_exception_collects_properties() {
    let ctx = ReduceContext::new();
    let prop = |name: &str| {
        let td = build_type_def(&ctx, vec![ident(&ctx, "string"), ident(&ctx, name)]);
        build_property(&ctx, vec![td])
    };
    let built = build_exception(
        &ctx,
        vec![
            Child::from("exception"),
            ident(&ctx, "NotFound"),
            Child::from("{"),
            prop("message"),
            prop("code"),
            Child::from("}"),
        ],
    );
    let Child::Exception(exception) = built else {
        panic!("expected exception");
    };
    assert_eq!(exception.name, "NotFound");
    assert_eq!(exception.properties.len(), 2);
}

// ============================================================================
// Service
// ============================================================================

#[test]
fn test_service_extends_and_depends() {
    let ctx = ReduceContext::new();
    let extends = build_extends_def(&ctx, vec![Child::from("extends"), ident(&ctx, "BaseService")]);
    let depends = build_depends_def(
        &ctx,
        vec![ident(&ctx, "AuditService"), ident(&ctx, "MailService")],
    );
    let built = build_service(&ctx, vec![ident(&ctx, "UserService"), extends, depends]);
    let Child::Service(service) = built else {
        panic!("expected service");
    };
    assert_eq!(service.name, "UserService");
    let extends = service.extends.expect("extends reference set");
    assert_eq!(extends.target.name, "BaseService");
    assert_eq!(extends.kind, Some(ClassKind::Entity));
    assert_eq!(service.depends.len(), 2);
    assert_eq!(service.depends[0].kind, None);
}

#[test]
fn test_service_duplicate_specs_collapse() {
    // Two spec-set children carrying an identical invocation yield one
    // bound spec on the service.
    let ctx = ReduceContext::new();
    let duplicate = || {
        spec_set([spec(
            &ctx,
            "audited",
            vec![SpecParam::Str("full".to_string())],
        )])
    };
    let built = build_service(&ctx, vec![ident(&ctx, "S"), duplicate(), duplicate()]);
    let Child::Service(service) = built else {
        panic!("expected service");
    };
    assert_eq!(service.specs.len(), 1);
}

#[test]
fn test_service_operations_keep_source_order() {
    let ctx = ReduceContext::new();
    let operation = |name: &str| {
        let td = build_type_def(&ctx, vec![ident(&ctx, "void"), ident(&ctx, name)]);
        build_operation(&ctx, vec![td])
    };
    let built = build_service(
        &ctx,
        vec![ident(&ctx, "S"), operation("create"), operation("delete")],
    );
    let Child::Service(service) = built else {
        panic!("expected service");
    };
    let names: Vec<_> = service
        .operations
        .iter()
        .filter_map(|o| o.name().map(|n| n.as_str()))
        .collect();
    assert_eq!(names, ["create", "delete"]);
}
