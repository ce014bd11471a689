//! Relationship algorithms: structural equivalence, subtyping, interface
//! implementation, and assignability.

use crate::algebra::{base_type_in, is_definition_in};
use crate::registry::{Store, TypeRegistry};
use crate::ty::Type;

impl TypeRegistry {
    /// Variant-dispatched structural equivalence.
    pub fn is_equivalent(&self, a: &Type, b: &Type) -> bool {
        equivalent(&self.store(), a, b)
    }

    /// Equivalence with a variant-agreement guard: both sides must agree on
    /// being a generic parameter, a wildcard, and a compound before the
    /// structural comparison runs.
    pub fn equals(&self, a: &Type, b: &Type) -> bool {
        equals(&self.store(), a, b)
    }

    /// Whether `b` appears in `a`'s base-type chain. A type is never its
    /// own subtype.
    pub fn is_subtype(&self, a: &Type, b: &Type) -> bool {
        is_subtype(&self.store(), a, b)
    }

    /// Whether `a` or any of its ancestors lists an interface structurally
    /// equivalent to `interface_type`, directly or through a
    /// super-interface.
    pub fn implements_interface(&self, a: &Type, interface_type: &Type) -> bool {
        implements_interface(&self.store(), a, interface_type)
    }

    /// Whether a value of type `source` can be bound to a slot of type
    /// `target`.
    pub fn is_assignable_from(&self, target: &Type, source: &Type) -> bool {
        assignable(&self.store(), target, source)
    }
}

pub(crate) fn equivalent(store: &Store, a: &Type, b: &Type) -> bool {
    if a == b {
        return true;
    }

    let a_param = a.is_generic_parameter();
    if a_param != b.is_generic_parameter() {
        return false;
    }
    if a_param {
        // A generic parameter is identified by where it was declared.
        if let (Type::TypeVar(va), Type::TypeVar(vb)) = (a, b) {
            return store.type_var(*va).owner == store.type_var(*vb).owner;
        }
        return false;
    }

    let a_wild = a.is_wildcard();
    if a_wild != b.is_wildcard() {
        return false;
    }
    if a_wild {
        if let (
            Type::Wildcard {
                extends_bound: ea,
                super_bound: sa,
            },
            Type::Wildcard {
                extends_bound: eb,
                super_bound: sb,
            },
        ) = (a, b)
        {
            return equivalent(store, ea, eb) && equivalent(store, sa, sb);
        }
        return false;
    }

    let a_compound = a.is_compound();
    if a_compound != b.is_compound() {
        return false;
    }
    if a_compound {
        if let (
            Type::Compound {
                base: ba,
                interfaces: ia,
            },
            Type::Compound {
                base: bb,
                interfaces: ib,
            },
        ) = (a, b)
        {
            // Interface ordering is significant.
            return equivalent(store, ba, bb)
                && ia.len() == ib.len()
                && ia.iter().zip(ib).all(|(x, y)| equivalent(store, x, y));
        }
        return false;
    }

    match (a, b) {
        (Type::Array(ea), Type::Array(eb)) => equivalent(store, ea, eb),
        (Type::Array(_), _) | (_, Type::Array(_)) => false,
        (Type::Declared { class: ca, args: aa }, Type::Declared { class: cb, args: ab }) => {
            ca == cb
                && aa.len() == ab.len()
                && aa.iter().zip(ab).all(|(x, y)| equivalent(store, x, y))
        }
        _ => false,
    }
}

pub(crate) fn equals(store: &Store, a: &Type, b: &Type) -> bool {
    a.is_generic_parameter() == b.is_generic_parameter()
        && a.is_wildcard() == b.is_wildcard()
        && a.is_compound() == b.is_compound()
        && equivalent(store, a, b)
}

pub(crate) fn is_subtype(store: &Store, a: &Type, b: &Type) -> bool {
    // The walk starts at the base type, so a type is never its own subtype.
    let mut current = base_type_in(store, a);
    while let Some(ancestor) = current {
        if equals(store, &ancestor, b) {
            return true;
        }
        current = base_type_in(store, &ancestor);
    }
    false
}

pub(crate) fn implements_interface(store: &Store, a: &Type, interface_type: &Type) -> bool {
    let mut current = Some(a.clone());
    while let Some(ty) = current {
        for implemented in explicit_interfaces(store, &ty) {
            if equivalent(store, &implemented, interface_type)
                || implements_interface(store, &implemented, interface_type)
            {
                return true;
            }
        }
        current = base_type_in(store, &ty);
    }
    false
}

/// Interfaces listed directly on the type, with type arguments substituted;
/// inherited-through-base interfaces are not included.
pub(crate) fn explicit_interfaces(store: &Store, ty: &Type) -> Vec<Type> {
    match ty {
        Type::Declared { class, args } => {
            let bindings = store.bindings_for(*class, args);
            store
                .class(*class)
                .interfaces
                .iter()
                .map(|i| bindings.substitute(i))
                .collect()
        }
        Type::Erased(class) => {
            let interfaces = store.class(*class).interfaces.clone();
            interfaces.iter().map(|i| store.erase(i)).collect()
        }
        Type::Array(_) => ["java.lang.Cloneable", "java.io.Serializable"]
            .iter()
            .filter_map(|name| store.find(name))
            .map(|id| store.canonical_type(id))
            .collect(),
        Type::Compound { interfaces, .. } => interfaces.clone(),
        _ => Vec::new(),
    }
}

pub(crate) fn assignable(store: &Store, target: &Type, source: &Type) -> bool {
    // The bottom type converts to everything.
    if source.is_bottom() {
        return true;
    }
    if equivalent(store, target, source) {
        return true;
    }
    // Null converts to any reference type.
    if source.is_null_type() {
        return !target.is_primitive();
    }

    // A wildcard source is usable only through its upper bound.
    if let Type::Wildcard {
        extends_bound,
        super_bound,
    } = source
    {
        if super_bound.is_bottom() {
            return assignable(store, target, extends_bound);
        }
        return assignable(store, target, &store.object_type());
    }

    // A generic-parameter source converts through its upper bound.
    if let Type::TypeVar(v) = source {
        let bound = store.type_var(*v).upper_bound.clone();
        return assignable(store, target, &bound);
    }

    match target {
        Type::Primitive(kind) => match store.class_id_of(source) {
            // Unboxing of the reference counterpart; primitives themselves
            // convert by identity only, which `equivalent` already covered.
            Some(id) => store.primitive_for_box(id) == Some(*kind),
            None => false,
        },
        Type::TypeVar(v) => {
            // Upper bound must accept the source, and reciprocally the
            // source must accept the lower bound (always Bottom for
            // parameters).
            let bound = store.type_var(*v).upper_bound.clone();
            assignable(store, &bound, source) && assignable(store, source, &Type::Bottom)
        }
        Type::Wildcard {
            extends_bound,
            super_bound,
        } => {
            assignable(store, extends_bound, source)
                && (super_bound.is_bottom() || assignable(store, source, super_bound))
        }
        Type::Compound { base, interfaces } => {
            assignable(store, base, source)
                && interfaces.iter().all(|i| assignable(store, i, source))
        }
        Type::Array(target_elem) => match source {
            Type::Array(source_elem) => {
                if target_elem.is_primitive() || source_elem.is_primitive() {
                    equivalent(store, target_elem, source_elem)
                } else {
                    assignable(store, target_elem, source_elem)
                }
            }
            _ => false,
        },
        Type::Bottom => false,
        Type::Null => source.is_null_type(),
        Type::Declared { .. } | Type::Erased(_) => assignable_to_declared(store, target, source),
    }
}

fn assignable_to_declared(store: &Store, target: &Type, source: &Type) -> bool {
    // Boxing: a primitive source converts to its reference counterpart and
    // on through that class's hierarchy.
    let boxed;
    let source = match source {
        Type::Primitive(kind) => match store.box_id(*kind) {
            Some(id) => {
                boxed = Type::declared(id, Vec::new());
                &boxed
            }
            None => return false,
        },
        other => other,
    };

    let target_id = match store.class_id_of(target) {
        Some(id) => id,
        None => return false,
    };

    let found = match find_supertype_instance(store, source, target_id) {
        Some(found) => found,
        None => return false,
    };

    match target {
        // An erased target accepts any parameterization of its class.
        Type::Erased(_) => true,
        Type::Declared { args: target_args, .. } => {
            if target_args.is_empty() {
                true
            } else if is_definition_in(store, target) {
                // The definition stands in for the raw type and accepts any
                // instantiation.
                true
            } else {
                let found_args = match &found {
                    Type::Declared { args, .. } => args.clone(),
                    _ => Vec::new(),
                };
                target_args.len() == found_args.len()
                    && target_args
                        .iter()
                        .zip(&found_args)
                        .all(|(t, s)| contains_argument(store, t, s))
            }
        }
        _ => false,
    }
}

/// Type-argument containment: a wildcard argument admits anything its
/// bounds admit; a concrete argument requires equivalence.
fn contains_argument(store: &Store, target_arg: &Type, source_arg: &Type) -> bool {
    if target_arg.is_wildcard() {
        assignable(store, target_arg, source_arg)
    } else {
        equivalent(store, target_arg, source_arg)
    }
}

/// Walk `source`'s hierarchy (itself, base chain, interfaces) looking for
/// the instantiation of `target_id` it inherits.
fn find_supertype_instance(store: &Store, source: &Type, target_id: crate::ty::ClassId) -> Option<Type> {
    if store.class_id_of(source) == Some(target_id) {
        return Some(source.clone());
    }
    for interface in explicit_interfaces(store, source) {
        if let Some(found) = find_supertype_instance(store, &interface, target_id) {
            return Some(found);
        }
    }
    let base = base_type_in(store, source)?;
    find_supertype_instance(store, &base, target_id)
}
