//! Class-file signature renderings.
//!
//! Follows the JVMS signature grammar: `L<binary-name>;` with `/`-separated
//! segments for reference types, `T<name>;` for generic parameters,
//! angle-bracket type-argument lists, and `*`/`+`/`-` for wildcard
//! arguments. The generic form renders a definition the way the class-file
//! `Signature` attribute would, synthesizing an `Object` supertype when a
//! type has neither explicit base type nor interfaces.

use crate::algebra::base_type_in;
use crate::registry::Store;
use crate::relations::explicit_interfaces;
use crate::ty::Type;

pub(crate) fn signature(store: &Store, ty: &Type) -> String {
    let mut s = String::new();
    append_signature(store, ty, &mut s);
    s
}

fn append_signature(store: &Store, ty: &Type, s: &mut String) {
    match ty {
        Type::TypeVar(v) => {
            s.push('T');
            s.push_str(&store.type_var(*v).name);
            s.push(';');
        }
        Type::Declared { class, args } => {
            s.push('L');
            s.push_str(&store.class(*class).binary_name.replace('.', "/"));
            if !args.is_empty() {
                s.push('<');
                for arg in args {
                    append_signature(store, arg, s);
                }
                s.push('>');
            }
            s.push(';');
        }
        Type::Erased(class) => {
            s.push('L');
            s.push_str(&store.class(*class).binary_name.replace('.', "/"));
            s.push(';');
        }
        Type::Array(element) => {
            s.push('[');
            append_signature(store, element, s);
        }
        Type::Primitive(kind) => s.push(kind.descriptor()),
        Type::Wildcard {
            extends_bound,
            super_bound,
        } => {
            if !super_bound.is_bottom() {
                s.push('-');
                append_signature(store, super_bound, s);
            } else if store.is_object(extends_bound) {
                s.push('*');
            } else {
                s.push('+');
                append_signature(store, extends_bound, s);
            }
        }
        Type::Compound { base, .. } => append_signature(store, base, s),
        // Sentinels never appear in a well-formed signature position.
        Type::Bottom | Type::Null => append_signature(store, &store.object_type(), s),
    }
}

pub(crate) fn generic_signature(store: &Store, ty: &Type) -> String {
    let mut s = String::new();
    append_generic_signature(store, ty, &mut s);
    s
}

fn append_generic_signature(store: &Store, ty: &Type, s: &mut String) {
    match ty {
        Type::TypeVar(v) => {
            // Formal-parameter form: `T:Ljava/lang/Object;`, with the extra
            // `:` separating an interface bound.
            let var = store.type_var(*v);
            let bound = var.upper_bound.clone();
            s.push_str(&var.name);
            if store.is_interface(&bound) {
                s.push(':');
            }
            s.push(':');
            append_signature(store, &bound, s);
        }
        Type::Primitive(kind) => s.push(kind.descriptor()),
        Type::Array(element) => {
            s.push('[');
            append_generic_signature(store, element, s);
        }
        Type::Wildcard { .. } => append_signature(store, ty, s),
        _ => {
            if let Type::Declared { args, .. } = ty {
                if !args.is_empty() {
                    s.push('<');
                    for arg in args {
                        append_generic_signature(store, arg, s);
                    }
                    s.push('>');
                }
            }

            let base = base_type_in(store, ty);
            let interfaces = explicit_interfaces(store, ty);

            match &base {
                Some(base) => append_signature(store, base, s),
                None => {
                    if interfaces.is_empty() {
                        append_signature(store, &store.object_type(), s);
                    }
                }
            }
            for interface in &interfaces {
                append_signature(store, interface, s);
            }
        }
    }
}

pub(crate) fn erased_signature(store: &Store, ty: &Type) -> String {
    signature(store, &store.erase(ty))
}
