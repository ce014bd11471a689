//! Structural operations over canonical types: generic binding, wildcard and
//! compound construction, bounds, erasure, and the class-shaped predicates
//! that need registry metadata.

use javelin_meta::Modifiers;

use crate::bindings::TypeBindings;
use crate::error::{Result, TypeError};
use crate::format;
use crate::registry::{Store, TypeRegistry, TypeVarOwner};
use crate::ty::Type;

impl TypeRegistry {
    /// Modifiers of the underlying class for declared types; arrays are
    /// final with their element's visibility; primitives are public final.
    pub fn modifiers(&self, ty: &Type) -> Modifiers {
        let store = self.store();
        modifiers_in(&store, ty)
    }

    pub fn is_interface(&self, ty: &Type) -> bool {
        self.store().is_interface(ty)
    }

    /// Neither an interface nor an enum.
    pub fn is_class(&self, ty: &Type) -> bool {
        let store = self.store();
        match store.class_id_of(ty) {
            Some(id) => {
                let m = store.class(id).modifiers;
                !m.is_interface() && !m.is_enum()
            }
            None => false,
        }
    }

    pub fn is_enum(&self, ty: &Type) -> bool {
        let store = self.store();
        match store.class_id_of(ty) {
            Some(id) => store.class(id).modifiers.is_enum(),
            None => false,
        }
    }

    pub fn is_abstract(&self, ty: &Type) -> bool {
        let store = self.store();
        match store.class_id_of(ty) {
            Some(id) => store.class(id).modifiers.is_abstract(),
            None => false,
        }
    }

    /// A generic type whose binding set is its own parameter list.
    pub fn is_generic_type_definition(&self, ty: &Type) -> bool {
        let store = self.store();
        is_definition_in(&store, ty)
    }

    /// The ordered parameter-to-argument binding set of a declared type.
    pub fn type_bindings(&self, ty: &Type) -> TypeBindings {
        let store = self.store();
        match ty {
            Type::Declared { class, args } => store.bindings_for(*class, args),
            _ => TypeBindings::empty().clone(),
        }
    }

    /// Bound type arguments; empty for non-generic types.
    pub fn type_arguments(&self, ty: &Type) -> Vec<Type> {
        match ty {
            Type::Declared { args, .. } => args.clone(),
            _ => Vec::new(),
        }
    }

    /// The definition's generic parameters, as types.
    pub fn generic_type_parameters(&self, ty: &Type) -> Result<Vec<Type>> {
        let store = self.store();
        match ty {
            Type::Declared { class, args } if !args.is_empty() => Ok(store
                .class(*class)
                .type_params
                .iter()
                .map(|&v| Type::TypeVar(v))
                .collect()),
            _ => Err(TypeError::NotGenericType(format::brief_description(
                &store, ty,
            ))),
        }
    }

    /// The generic type definition underlying a generic type.
    pub fn generic_type_definition(&self, ty: &Type) -> Result<Type> {
        let store = self.store();
        match ty {
            Type::Declared { class, args } if !args.is_empty() => {
                Ok(store.canonical_type(*class))
            }
            _ => Err(TypeError::NotGenericType(format::brief_description(
                &store, ty,
            ))),
        }
    }

    /// Bind all parameters of a generic type definition at once. The
    /// receiver may also be an existing instantiation, in which case its
    /// definition is rebound.
    pub fn make_generic_type(&self, definition: &Type, args: Vec<Type>) -> Result<Type> {
        let store = self.store();
        let class = match definition {
            Type::Declared { class, args } if !args.is_empty() => *class,
            other => {
                return Err(TypeError::NotGenericType(format::brief_description(
                    &store, other,
                )))
            }
        };
        let expected = store.class(class).type_params.len();
        if args.len() != expected {
            return Err(TypeError::GenericArityMismatch {
                expected,
                found: args.len(),
            });
        }
        Ok(Type::declared(class, args))
    }

    /// The type-erased projection: non-generic types erase to themselves, an
    /// instantiation erases through its definition, a definition to its one
    /// erased projection.
    pub fn erased_type(&self, ty: &Type) -> Type {
        match ty {
            Type::Declared { class, args } if !args.is_empty() => Type::Erased(*class),
            _ => ty.clone(),
        }
    }

    /// The direct supertype, with type arguments substituted along the way.
    pub fn base_type(&self, ty: &Type) -> Option<Type> {
        let store = self.store();
        base_type_in(&store, ty)
    }

    /// Element type of an array.
    pub fn element_type(&self, ty: &Type) -> Result<Type> {
        match ty {
            Type::Array(element) => Ok((**element).clone()),
            _ => {
                let store = self.store();
                Err(TypeError::NotArrayType(format::brief_description(
                    &store, ty,
                )))
            }
        }
    }

    /// Explicit interfaces (not inherited through the base type), with type
    /// arguments substituted.
    pub fn interfaces(&self, ty: &Type) -> Vec<Type> {
        let mut store = self.store();
        if ty.is_array() {
            // Arrays implement Cloneable and Serializable; make sure both
            // are canonicalized before the pure walk looks them up.
            for name in ["java.lang.Cloneable", "java.io.Serializable"] {
                let _ = self.load_class(&mut store, name);
            }
        }
        crate::relations::explicit_interfaces(&store, ty)
    }

    pub fn extends_wildcard(&self, bound: Type) -> Type {
        Type::Wildcard {
            extends_bound: Box::new(bound),
            super_bound: Box::new(Type::Bottom),
        }
    }

    pub fn super_wildcard(&self, bound: Type) -> Type {
        Type::Wildcard {
            extends_bound: Box::new(self.object_type()),
            super_bound: Box::new(bound),
        }
    }

    pub fn unbounded_wildcard(&self) -> Type {
        self.extends_wildcard(self.object_type())
    }

    /// `?`: extends bound is the root object type and there is no super
    /// bound.
    pub fn is_unbound_wildcard(&self, ty: &Type) -> bool {
        match ty {
            Type::Wildcard {
                extends_bound,
                super_bound,
            } => super_bound.is_bottom() && self.store().is_object(extends_bound),
            _ => false,
        }
    }

    /// A wildcard bounded from below; unbounded wildcards count.
    pub fn is_super_bound(&self, ty: &Type) -> bool {
        match ty {
            Type::Wildcard {
                extends_bound,
                super_bound,
            } => !super_bound.is_bottom() || self.store().is_object(extends_bound),
            _ => false,
        }
    }

    /// Build an intersection type from an ordered bound list. At most one
    /// bound may be a class (it becomes the class bound, defaulting to the
    /// root object type when all bounds are interfaces); generic-parameter
    /// bounds are rejected.
    pub fn make_compound_type(&self, bounds: &[Type]) -> Result<Type> {
        if bounds.is_empty() {
            return Err(TypeError::CompoundTypeEmptyBounds);
        }
        let (base, interfaces) = {
            let store = self.store();
            if !store.is_interface(&bounds[0]) {
                (bounds[0].clone(), bounds[1..].to_vec())
            } else {
                (store.object_type(), bounds.to_vec())
            }
        };
        self.make_compound(base, interfaces)
    }

    /// Build an intersection type from an explicit class bound and interface
    /// bounds.
    pub fn make_compound(&self, base: Type, interfaces: Vec<Type>) -> Result<Type> {
        let store = self.store();
        if base.is_generic_parameter() {
            return Err(TypeError::CompoundTypeGenericParameterBound);
        }
        if interfaces.is_empty() {
            return Err(TypeError::CompoundTypeEmptyBounds);
        }
        for bound in &interfaces {
            if bound.is_generic_parameter() {
                return Err(TypeError::CompoundTypeGenericParameterBound);
            }
            if !store.is_interface(bound) {
                return Err(TypeError::CompoundTypeMultipleClassBounds);
            }
        }
        Ok(Type::Compound {
            base: Box::new(base),
            interfaces,
        })
    }

    /// Upper bound of a generic parameter or wildcard.
    pub fn extends_bound(&self, ty: &Type) -> Result<Type> {
        let store = self.store();
        match ty {
            Type::TypeVar(v) => Ok(store.type_var(*v).upper_bound.clone()),
            Type::Wildcard { extends_bound, .. } => Ok((**extends_bound).clone()),
            _ => Err(TypeError::NotBoundedType(format::brief_description(
                &store, ty,
            ))),
        }
    }

    /// Lower bound of a wildcard ([`Type::Bottom`] when absent).
    pub fn super_bound(&self, ty: &Type) -> Result<Type> {
        let store = self.store();
        match ty {
            Type::Wildcard { super_bound, .. } => Ok((**super_bound).clone()),
            _ => Err(TypeError::NotWildcard(format::brief_description(&store, ty))),
        }
    }

    /// Position of a generic parameter in its owner's declaration.
    pub fn generic_parameter_position(&self, ty: &Type) -> Result<usize> {
        let store = self.store();
        match ty {
            Type::TypeVar(v) => Ok(store.type_var(*v).index as usize),
            _ => Err(TypeError::NotGenericParameter(format::brief_description(
                &store, ty,
            ))),
        }
    }

    /// Enum constant names, in declaration order.
    pub fn enum_names(&self, ty: &Type) -> Result<Vec<String>> {
        let store = self.store();
        match store.class_id_of(ty) {
            Some(id) if store.class(id).modifiers.is_enum() => Ok(store
                .class(id)
                .fields
                .iter()
                .filter(|f| f.modifiers.is_enum())
                .map(|f| f.name.clone())
                .collect()),
            _ => Err(TypeError::NotEnumType(format::brief_description(&store, ty))),
        }
    }

    /// Owner of a nested class or class-owned generic parameter.
    pub fn declaring_type(&self, ty: &Type) -> Result<Option<Type>> {
        let mut store = self.store();
        match ty {
            Type::Declared { class, .. } | Type::Erased(class) => {
                match store.class(*class).declaring_class.clone() {
                    Some(owner) => {
                        let checkpoint = store.checkpoint();
                        match self.load_class(&mut store, &owner) {
                            Ok(id) => Ok(Some(store.canonical_type(id))),
                            Err(err) => {
                                store.rollback(checkpoint);
                                Err(err)
                            }
                        }
                    }
                    None => Ok(None),
                }
            }
            Type::TypeVar(v) => match store.type_var(*v).owner {
                TypeVarOwner::Class(class) => Ok(Some(store.canonical_type(class))),
                TypeVarOwner::Method { .. } => Ok(None),
            },
            _ => Ok(None),
        }
    }

    /// Whether the underlying class is nested in another class.
    pub fn is_nested(&self, ty: &Type) -> bool {
        let store = self.store();
        match store.class_id_of(ty) {
            Some(id) => store.class(id).declaring_class.is_some(),
            None => false,
        }
    }

    /// Of two types, the one that is a subtype of the other; `None` when
    /// neither is.
    pub fn most_specific_type(&self, a: &Type, b: &Type) -> Option<Type> {
        if self.is_subtype(a, b) {
            return Some(a.clone());
        }
        if self.is_subtype(b, a) {
            return Some(b.clone());
        }
        None
    }
}

pub(crate) fn modifiers_in(store: &Store, ty: &Type) -> Modifiers {
    match ty {
        Type::Declared { class, .. } | Type::Erased(class) => store.class(*class).modifiers,
        Type::Array(element) => {
            let visibility = modifiers_in(store, element).0
                & (Modifiers::PUBLIC.0 | Modifiers::PRIVATE.0 | Modifiers::PROTECTED.0);
            Modifiers(visibility) | Modifiers::FINAL
        }
        Type::Primitive(_) => Modifiers::PUBLIC | Modifiers::FINAL,
        _ => Modifiers::empty(),
    }
}

pub(crate) fn is_definition_in(store: &Store, ty: &Type) -> bool {
    match ty {
        Type::Declared { class, args } if !args.is_empty() => {
            let params = &store.class(*class).type_params;
            params.len() == args.len()
                && params
                    .iter()
                    .zip(args)
                    .all(|(p, a)| matches!(a, Type::TypeVar(v) if v == p))
        }
        _ => false,
    }
}

pub(crate) fn base_type_in(store: &Store, ty: &Type) -> Option<Type> {
    match ty {
        Type::Declared { class, args } => {
            let super_type = store.class(*class).super_type.clone()?;
            let bindings = store.bindings_for(*class, args);
            Some(bindings.substitute(&super_type))
        }
        Type::Erased(class) => {
            let super_type = store.class(*class).super_type.clone()?;
            Some(store.erase(&super_type))
        }
        Type::Array(_) => Some(store.object_type()),
        Type::TypeVar(v) => Some(store.type_var(*v).upper_bound.clone()),
        Type::Wildcard { extends_bound, .. } => Some((**extends_bound).clone()),
        Type::Compound { base, .. } => Some((**base).clone()),
        Type::Primitive(_) | Type::Bottom | Type::Null => None,
    }
}
