//! Member handles and the flattened declared+inherited member walks.

use std::collections::HashSet;

use javelin_meta::Modifiers;

use crate::algebra::base_type_in;
use crate::registry::Store;
use crate::relations::explicit_interfaces;
use crate::ty::{ClassId, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    Standard,
    VarArgs,
    /// Matches any convention; valid in queries only.
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
    NestedType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub position: usize,
    pub param_type: Type,
}

/// A field, viewed through the (possibly instantiated) type that declares
/// or inherits it; the signature carries substituted type arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub declaring_type: Type,
    pub name: String,
    pub modifiers: Modifiers,
    pub field_type: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub declaring_type: Type,
    pub name: String,
    pub modifiers: Modifiers,
    /// The method's own generic parameters, for generic methods.
    pub type_parameters: Vec<Type>,
    pub parameters: Vec<ParameterInfo>,
    pub return_type: Type,
    pub calling_convention: CallingConvention,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    pub declaring_type: Type,
    pub modifiers: Modifiers,
    pub parameters: Vec<ParameterInfo>,
    pub calling_convention: CallingConvention,
}

/// Heterogeneous member result, in field / method / constructor /
/// nested-type group order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberInfo {
    Field(FieldInfo),
    Method(MethodInfo),
    Constructor(ConstructorInfo),
    NestedType(Type),
}

/// What methods and constructors share: enough surface for signature
/// comparison and overload selection.
pub trait MethodBase {
    fn member_name(&self) -> &str;
    fn modifiers(&self) -> Modifiers;
    fn declaring_type(&self) -> &Type;
    fn parameters(&self) -> &[ParameterInfo];
    fn calling_convention(&self) -> CallingConvention;
}

impl MethodBase for MethodInfo {
    fn member_name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn declaring_type(&self) -> &Type {
        &self.declaring_type
    }

    fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    fn calling_convention(&self) -> CallingConvention {
        self.calling_convention
    }
}

impl MethodBase for ConstructorInfo {
    fn member_name(&self) -> &str {
        "<init>"
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn declaring_type(&self) -> &Type {
        &self.declaring_type
    }

    fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    fn calling_convention(&self) -> CallingConvention {
        self.calling_convention
    }
}

// ----------------------------------------------------------------------
// Hierarchy flattening
// ----------------------------------------------------------------------

/// The class-shaped views a member walk visits, in resolution order: the
/// type itself, its explicit interfaces (depth first), then the base chain,
/// each with substituted type arguments. Diamond-inherited interfaces
/// appear once.
pub(crate) fn hierarchy(store: &Store, ty: &Type) -> Vec<Type> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    walk(store, ty, &mut out, &mut seen);
    out
}

fn walk(store: &Store, start: &Type, out: &mut Vec<Type>, seen: &mut HashSet<Type>) {
    let mut current = Some(start.clone());
    while let Some(ty) = current {
        let class_shaped = matches!(ty, Type::Declared { .. } | Type::Erased(_));
        if class_shaped {
            if !seen.insert(ty.clone()) {
                break;
            }
            out.push(ty.clone());
        }
        for interface in explicit_interfaces(store, &ty) {
            walk(store, &interface, out, seen);
        }
        current = base_type_in(store, &ty);
    }
}

fn member_type(store: &Store, node: &Type, raw: &Type) -> Type {
    match node {
        Type::Declared { class, args } => store.bindings_for(*class, args).substitute(raw),
        Type::Erased(_) => store.erase(raw),
        _ => raw.clone(),
    }
}

fn convention(varargs: bool) -> CallingConvention {
    if varargs {
        CallingConvention::VarArgs
    } else {
        CallingConvention::Standard
    }
}

/// All fields visible on `ty`: declared first, then interface fields, then
/// the superclass's, signatures substituted per view.
pub(crate) fn collect_fields(store: &Store, ty: &Type) -> Vec<FieldInfo> {
    let mut out = Vec::new();
    for node in hierarchy(store, ty) {
        let Some(class) = store.class_id_of(&node) else {
            continue;
        };
        for field in &store.class(class).fields {
            out.push(FieldInfo {
                declaring_type: node.clone(),
                name: field.name.clone(),
                modifiers: field.modifiers,
                field_type: member_type(store, &node, &field.ty),
            });
        }
    }
    out
}

/// All methods visible on `ty`, overridden base declarations included;
/// hide-by-signature resolution happens later, in the binder.
pub(crate) fn collect_methods(store: &Store, ty: &Type) -> Vec<MethodInfo> {
    let mut out = Vec::new();
    for node in hierarchy(store, ty) {
        let Some(class) = store.class_id_of(&node) else {
            continue;
        };
        for method in &store.class(class).methods {
            out.push(MethodInfo {
                declaring_type: node.clone(),
                name: method.name.clone(),
                modifiers: method.modifiers,
                type_parameters: method
                    .type_params
                    .iter()
                    .map(|&v| Type::TypeVar(v))
                    .collect(),
                parameters: method
                    .params
                    .iter()
                    .enumerate()
                    .map(|(position, p)| ParameterInfo {
                        position,
                        param_type: member_type(store, &node, p),
                    })
                    .collect(),
                return_type: member_type(store, &node, &method.return_type),
                calling_convention: convention(method.varargs),
            });
        }
    }
    out
}

/// Constructors are never inherited: only the queried type's own (or, for a
/// bounded variant, its first class-shaped view's).
pub(crate) fn collect_constructors(store: &Store, ty: &Type) -> Vec<ConstructorInfo> {
    let Some(node) = hierarchy(store, ty).into_iter().next() else {
        return Vec::new();
    };
    let Some(class) = store.class_id_of(&node) else {
        return Vec::new();
    };
    store
        .class(class)
        .constructors
        .iter()
        .map(|ctor| ConstructorInfo {
            declaring_type: node.clone(),
            modifiers: ctor.modifiers,
            parameters: ctor
                .params
                .iter()
                .enumerate()
                .map(|(position, p)| ParameterInfo {
                    position,
                    param_type: member_type(store, &node, p),
                })
                .collect(),
            calling_convention: convention(ctor.varargs),
        })
        .collect()
}

/// Nested classes declared on `ty` and its ancestors, as canonical types
/// paired with the class that declares them. The caller must have resolved
/// nested-name lists beforehand.
pub(crate) fn collect_nested(store: &Store, ty: &Type) -> Vec<(ClassId, Type)> {
    let mut out = Vec::new();
    for node in hierarchy(store, ty) {
        let Some(class) = store.class_id_of(&node) else {
            continue;
        };
        if let Some(ids) = &store.class(class).nested_ids {
            for &nested in ids {
                out.push((class, store.canonical_type(nested)));
            }
        }
    }
    out
}

/// Simple name of a nested class: the segment after the last `$` (or `.`).
pub(crate) fn nested_simple_name(binary_name: &str) -> &str {
    match binary_name.rfind(['$', '.']) {
        Some(pos) => &binary_name[pos + 1..],
        None => binary_name,
    }
}
