#![forbid(unsafe_code)]

//! Generics-aware type introspection and member resolution over erased JVM
//! class metadata.
//!
//! The host platform only knows erased classes; this crate rebuilds the
//! richer model bytecode-analysis tooling needs on top of them:
//!
//! - a closed type algebra (declared classes, arrays, primitives, generic
//!   parameters, wildcards, intersection types, erased projections, and the
//!   bottom/null sentinels), with structural equivalence for composite
//!   variants and canonical identity for declared ones
//! - a canonicalizing [`TypeRegistry`] that owns every declared type and
//!   answers relationship queries (subtyping, assignability, interface
//!   implementation)
//! - a reflection-grade member lookup pipeline driven by [`BindingFlags`],
//!   with visibility/scope filtering, inheritance flattening, and
//!   overload/constructor resolution under varargs and exact-binding rules
//! - description and class-file signature renderers
//!
//! Class declarations come from [`javelin_meta`]; anything the embedder has
//! not registered is requested through an injected [`SymbolResolver`].
//!
//! ```
//! use javelin_meta::{ClassDecl, FieldDecl, Modifiers, TypeRef};
//! use javelin_reflect::{BindingFlags, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! registry
//!     .register(
//!         &ClassDecl::new("com.example.Point", Modifiers::PUBLIC)
//!             .with_field(FieldDecl::new("x", Modifiers::PUBLIC, TypeRef::int())),
//!     )
//!     .unwrap();
//!
//! let point = registry.canonicalize("com.example.Point").unwrap();
//! let x = registry.get_field(&point, "x", BindingFlags::DEFAULT).unwrap();
//! assert!(x.is_some());
//! ```

mod algebra;
mod binder;
mod bindings;
mod bootstrap;
mod error;
mod filter;
mod flags;
mod format;
mod members;
mod query;
mod registry;
mod relations;
mod resolver;
mod signature;
mod ty;

pub use crate::binder::{DefaultBinder, MethodCandidate, OverloadBinder};
pub use crate::bindings::TypeBindings;
pub use crate::error::{Result, TypeError};
pub use crate::flags::BindingFlags;
pub use crate::members::{
    CallingConvention, ConstructorInfo, FieldInfo, MemberInfo, MemberKind, MethodBase, MethodInfo,
    ParameterInfo,
};
pub use crate::registry::TypeRegistry;
pub use crate::resolver::{MapResolver, NoResolver, SymbolResolver};
pub use crate::ty::{ClassId, Type, TypeVarId};
