//! Structural builders for the model root and packages.

use crate::metamodel::{Model, Package, PackageMember, TypeDecl};

use super::child::Child;
use super::context::ReduceContext;
use super::filter::strip_markers;

/// Build the model root. Exactly one per compiled unit.
pub fn build_model(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut model = Model::default();

    for child in children {
        match child {
            Child::Ident(ident) => model.name = ident.name,
            Child::Described(desc) => model.desc = Some(desc),
            Child::Data(data) => model.types.push(TypeDecl::Data(data)),
            Child::Enum(enumeration) => model.types.push(TypeDecl::Enum(enumeration)),
            Child::Constraint(constraint) => model.constraints.push(constraint),
            Child::Package(package) => model.packages.push(package),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = %model.name,
            types = model.types.len(),
            constraints = model.constraints.len(),
            packages = model.packages.len(),
            "reduced model"
        );
    }

    Child::Model(model)
}

/// Build a package.
///
/// The driving collaborator extends the namespace path by this package's
/// name while the member children reduce; this builder only assembles the
/// already-reduced members.
pub fn build_package(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut package = Package::default();

    for child in strip_markers(children) {
        match child {
            Child::Ident(ident) => package.name = ident.name,
            Child::Described(desc) => package.desc = Some(desc),
            Child::Package(inner) => package.members.push(PackageMember::Package(inner)),
            Child::Data(data) => package.members.push(PackageMember::Data(data)),
            Child::Enum(enumeration) => package.members.push(PackageMember::Enum(enumeration)),
            Child::Constraint(constraint) => {
                package.members.push(PackageMember::Constraint(constraint))
            }
            Child::Exception(exception) => {
                package.members.push(PackageMember::Exception(exception))
            }
            Child::Service(service) => package.members.push(PackageMember::Service(service)),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = %package.name,
            members = package.members.len(),
            "reduced package"
        );
    }

    Child::Package(package)
}
