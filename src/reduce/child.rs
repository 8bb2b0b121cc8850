//! The closed set of values a builder may receive or return.

use crate::base::Name;
use crate::metamodel::{
    ApplyDef, ClassifierRef, CommonTag, ConstrDef, Constraint, ConstraintSpec, ConstraintSpecSet,
    DataType, Description, EnumLiteral, Enumeration, ExceptionType, Model, OpParam, Operation,
    Package, Property, QualifiedIdent, Service, TypeDef,
};

/// A reduced child value.
///
/// Every value that can flow from one reduction into its parent reduction
/// is a variant here, so structural builders can pattern-match their
/// children exhaustively and route each one into exactly one accumulator
/// field — with an explicit ignore arm for variants a given production
/// never supplies.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    /// An optional production that matched nothing.
    Absent,
    /// A raw literal token: punctuation, a reserved keyword, or a flag
    /// word such as `unique` or `+`.
    Token(Name),
    /// A qualified identifier leaf.
    Ident(QualifiedIdent),
    /// An integer literal leaf.
    Int(i64),
    /// A string literal's content, quotes already shed.
    Str(String),
    /// The `...` variadic marker.
    Variadic,
    /// A short/long description pair.
    Described(Description),

    // Metamodel nodes
    Model(Model),
    Package(Package),
    Data(DataType),
    Enum(Enumeration),
    EnumLiteral(EnumLiteral),
    Constraint(Constraint),
    CommonTag(CommonTag),
    ConstrDef(ConstrDef),
    ApplyDef(ApplyDef),
    TypeDef(TypeDef),
    Property(Property),
    OpParam(OpParam),
    Operation(Operation),
    Exception(ExceptionType),
    Service(Service),

    // Constraint-specification values
    Spec(ConstraintSpec),
    SpecSet(ConstraintSpecSet),

    // Reference wrappers
    /// An opposite-end reference from a `ref` production.
    Ref(QualifiedIdent),
    /// The single superclass-like reference of an `extends` clause.
    Extends(ClassifierRef),
    /// The ordered reference list of a `dependsOn` clause.
    DependsOn(Vec<ClassifierRef>),
}

impl Child {
    /// Variant name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Child::Absent => "absent",
            Child::Token(_) => "token",
            Child::Ident(_) => "ident",
            Child::Int(_) => "int",
            Child::Str(_) => "str",
            Child::Variadic => "variadic",
            Child::Described(_) => "description",
            Child::Model(_) => "model",
            Child::Package(_) => "package",
            Child::Data(_) => "data type",
            Child::Enum(_) => "enumeration",
            Child::EnumLiteral(_) => "enum literal",
            Child::Constraint(_) => "constraint",
            Child::CommonTag(_) => "common tag",
            Child::ConstrDef(_) => "constr def",
            Child::ApplyDef(_) => "apply def",
            Child::TypeDef(_) => "type def",
            Child::Property(_) => "property",
            Child::OpParam(_) => "op param",
            Child::Operation(_) => "operation",
            Child::Exception(_) => "exception",
            Child::Service(_) => "service",
            Child::Spec(_) => "constraint spec",
            Child::SpecSet(_) => "constraint spec set",
            Child::Ref(_) => "ref",
            Child::Extends(_) => "extends",
            Child::DependsOn(_) => "depends on",
        }
    }

    /// True for a raw token equal to `text`.
    pub fn is_token(&self, text: &str) -> bool {
        matches!(self, Child::Token(t) if t == text)
    }

    pub fn into_model(self) -> Option<Model> {
        match self {
            Child::Model(model) => Some(model),
            _ => None,
        }
    }
}

impl From<&str> for Child {
    fn from(token: &str) -> Self {
        Child::Token(Name::from(token))
    }
}
