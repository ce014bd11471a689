use serde::{Deserialize, Serialize};

use crate::primitive::PrimitiveKind;

/// A type reference as it appears in a declaration.
///
/// This is the output contract of whatever produced the declaration (a
/// descriptor/signature parser, a stub loader, a test fixture): a small AST
/// naming types by binary name, with no resolution applied. `javelin-reflect`
/// turns these into canonical types when it loads the declaring class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// A class or interface reference, by dotted binary name, with optional
    /// type arguments (`java.util.List` with `[String]`).
    Named {
        name: String,
        args: Vec<TypeRef>,
    },
    Array(Box<TypeRef>),
    /// A type variable in scope, by name (`T`). Resolution looks the name up
    /// in the declaring method's type parameters first, then the declaring
    /// class's.
    Var(String),
    /// `?`
    Wildcard,
    /// `? extends B`
    WildcardExtends(Box<TypeRef>),
    /// `? super B`
    WildcardSuper(Box<TypeRef>),
}

impl TypeRef {
    /// A non-generic class reference.
    pub fn named(name: impl Into<String>) -> TypeRef {
        TypeRef::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A parameterized class reference.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> TypeRef {
        TypeRef::Named {
            name: name.into(),
            args,
        }
    }

    pub fn array(element: TypeRef) -> TypeRef {
        TypeRef::Array(Box::new(element))
    }

    pub fn var(name: impl Into<String>) -> TypeRef {
        TypeRef::Var(name.into())
    }

    pub fn object() -> TypeRef {
        TypeRef::named("java.lang.Object")
    }

    pub fn string() -> TypeRef {
        TypeRef::named("java.lang.String")
    }

    pub const fn void() -> TypeRef {
        TypeRef::Primitive(PrimitiveKind::Void)
    }

    pub const fn int() -> TypeRef {
        TypeRef::Primitive(PrimitiveKind::Int)
    }

    pub const fn boolean() -> TypeRef {
        TypeRef::Primitive(PrimitiveKind::Boolean)
    }
}
