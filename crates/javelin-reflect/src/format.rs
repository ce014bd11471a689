//! Human-readable type descriptions.
//!
//! Four renderings, all pure over the algebra and memoized by the registry:
//! brief (qualified name + type arguments), simple (unqualified), full
//! (brief plus `extends`/`implements` clauses), and erased (type-erased
//! class name only).

use std::sync::Arc;

use crate::algebra::base_type_in;
use crate::registry::{RenderKind, Store, TypeRegistry};
use crate::relations::explicit_interfaces;
use crate::signature;
use crate::ty::Type;

impl TypeRegistry {
    /// Qualified class name plus type arguments, no supertypes.
    pub fn brief_description(&self, ty: &Type) -> String {
        self.render(RenderKind::BriefDescription, ty)
    }

    /// Unqualified class name plus type arguments.
    pub fn simple_description(&self, ty: &Type) -> String {
        self.render(RenderKind::SimpleDescription, ty)
    }

    /// Simple description plus `extends`/`implements` clauses.
    pub fn full_description(&self, ty: &Type) -> String {
        self.render(RenderKind::FullDescription, ty)
    }

    /// Type-erased class name.
    pub fn erased_description(&self, ty: &Type) -> String {
        self.render(RenderKind::ErasedDescription, ty)
    }

    /// Binary-signature rendering (`Ljava/util/List<Ljava/lang/String;>;`).
    pub fn signature(&self, ty: &Type) -> String {
        self.render(RenderKind::Signature, ty)
    }

    /// Class-file `Signature`-attribute rendering, formal type parameters
    /// included for definitions.
    pub fn generic_signature(&self, ty: &Type) -> String {
        self.render(RenderKind::GenericSignature, ty)
    }

    /// Erased binary signature (`Ljava/util/List;`).
    pub fn erased_signature(&self, ty: &Type) -> String {
        self.render(RenderKind::ErasedSignature, ty)
    }

    /// Dotted binary name of the erased class (element type for arrays).
    pub fn full_name(&self, ty: &Type) -> String {
        type_full_name(&self.store(), ty)
    }

    pub fn simple_name(&self, ty: &Type) -> String {
        type_simple_name(&self.store(), ty)
    }

    /// `/`-separated internal name.
    pub fn internal_name(&self, ty: &Type) -> String {
        internal_name(&self.store(), ty)
    }

    fn render(&self, kind: RenderKind, ty: &Type) -> String {
        let mut store = self.store();
        if let Some(memoized) = store.memo.get(&(kind, ty.clone())) {
            return memoized.to_string();
        }
        let rendered = match kind {
            RenderKind::BriefDescription => brief_description(&store, ty),
            RenderKind::SimpleDescription => simple_description(&store, ty),
            RenderKind::FullDescription => full_description(&store, ty),
            RenderKind::ErasedDescription => erased_description(&store, ty),
            RenderKind::Signature => signature::signature(&store, ty),
            RenderKind::GenericSignature => signature::generic_signature(&store, ty),
            RenderKind::ErasedSignature => signature::erased_signature(&store, ty),
        };
        store
            .memo
            .insert((kind, ty.clone()), Arc::from(rendered.as_str()));
        rendered
    }
}

pub(crate) fn brief_description(store: &Store, ty: &Type) -> String {
    describe(store, ty, true)
}

pub(crate) fn simple_description(store: &Store, ty: &Type) -> String {
    describe(store, ty, false)
}

fn describe(store: &Store, ty: &Type, qualified: bool) -> String {
    match ty {
        Type::Declared { class, args } => {
            let data = store.class(*class);
            let mut s = if qualified {
                data.binary_name.clone()
            } else {
                simple_segment(&data.binary_name).to_string()
            };
            if !args.is_empty() {
                s.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i != 0 {
                        s.push_str(", ");
                    }
                    s.push_str(&describe(store, arg, qualified));
                }
                s.push('>');
            }
            s
        }
        Type::Erased(class) => {
            let name = &store.class(*class).binary_name;
            if qualified {
                name.clone()
            } else {
                simple_segment(name).to_string()
            }
        }
        Type::Array(element) => format!("{}[]", describe(store, element, qualified)),
        Type::Primitive(kind) => kind.keyword().to_string(),
        Type::TypeVar(v) => store.type_var(*v).name.clone(),
        Type::Wildcard {
            extends_bound,
            super_bound,
        } => {
            if !super_bound.is_bottom() {
                format!("? super {}", describe(store, super_bound, qualified))
            } else if store.is_object(extends_bound) {
                "?".to_string()
            } else {
                format!("? extends {}", describe(store, extends_bound, qualified))
            }
        }
        Type::Compound { base, interfaces } => {
            let mut parts = Vec::with_capacity(1 + interfaces.len());
            if !store.is_object(base) {
                parts.push(describe(store, base, qualified));
            }
            for interface in interfaces {
                parts.push(describe(store, interface, qualified));
            }
            if parts.is_empty() {
                describe(store, base, qualified)
            } else {
                parts.join(" & ")
            }
        }
        Type::Bottom => "<nothing>".to_string(),
        Type::Null => "<nulltype>".to_string(),
    }
}

pub(crate) fn full_description(store: &Store, ty: &Type) -> String {
    let mut s = simple_description(store, ty);

    if matches!(ty, Type::Declared { .. } | Type::Erased(_)) {
        if let Some(base) = base_type_in(store, ty) {
            if !store.is_object(&base) {
                s.push_str(" extends ");
                s.push_str(&brief_description(store, &base));
            }
        }
        let interfaces = explicit_interfaces(store, ty);
        if !interfaces.is_empty() {
            s.push_str(" implements ");
            for (i, interface) in interfaces.iter().enumerate() {
                if i != 0 {
                    s.push_str(", ");
                }
                s.push_str(&brief_description(store, interface));
            }
        }
    }

    s
}

pub(crate) fn erased_description(store: &Store, ty: &Type) -> String {
    type_full_name(store, &store.erase(ty))
}

pub(crate) fn type_full_name(store: &Store, ty: &Type) -> String {
    match ty {
        Type::Declared { class, .. } | Type::Erased(class) => {
            store.class(*class).binary_name.clone()
        }
        Type::Array(element) => format!("{}[]", type_full_name(store, element)),
        Type::Primitive(kind) => kind.keyword().to_string(),
        Type::TypeVar(v) => store.type_var(*v).name.clone(),
        _ => brief_description(store, ty),
    }
}

pub(crate) fn type_simple_name(store: &Store, ty: &Type) -> String {
    match ty {
        Type::Declared { class, .. } | Type::Erased(class) => {
            simple_segment(&store.class(*class).binary_name).to_string()
        }
        Type::Array(element) => format!("{}[]", type_simple_name(store, element)),
        Type::Primitive(kind) => kind.keyword().to_string(),
        Type::TypeVar(v) => store.type_var(*v).name.clone(),
        _ => simple_description(store, ty),
    }
}

pub(crate) fn internal_name(store: &Store, ty: &Type) -> String {
    match ty {
        Type::Declared { class, .. } | Type::Erased(class) => {
            store.class(*class).binary_name.replace('.', "/")
        }
        // Arrays use the descriptor form, the way `Class::getName` does.
        Type::Array(_) => signature::erased_signature(store, ty),
        Type::Primitive(kind) => kind.descriptor().to_string(),
        _ => type_full_name(store, ty),
    }
}

/// Last `.`/`$` segment of a binary name.
pub(crate) fn simple_segment(binary_name: &str) -> &str {
    match binary_name.rfind(['.', '$']) {
        Some(pos) => &binary_name[pos + 1..],
        None => binary_name,
    }
}
