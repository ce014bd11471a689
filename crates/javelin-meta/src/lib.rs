#![forbid(unsafe_code)]

//! Erased class metadata as plain data.
//!
//! This crate is the "host platform" surface consumed by `javelin-reflect`:
//! class declarations the way a classfile reader or signature parser would
//! hand them over, with no type-system semantics of their own. Everything
//! here is serializable so embedders can persist declaration sets alongside
//! their own classpath caches.

mod decl;
mod modifiers;
mod primitive;
mod ty_ref;

pub use crate::decl::{
    ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, TypeParamDecl,
};
pub use crate::modifiers::Modifiers;
pub use crate::primitive::PrimitiveKind;
pub use crate::ty_ref::TypeRef;
