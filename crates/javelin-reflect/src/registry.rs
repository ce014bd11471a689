use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use javelin_meta::{ClassDecl, Modifiers, PrimitiveKind, TypeRef};

use crate::binder::{DefaultBinder, OverloadBinder};
use crate::bindings::TypeBindings;
use crate::bootstrap;
use crate::error::{Result, TypeError};
use crate::resolver::SymbolResolver;
use crate::ty::{ClassId, Type, TypeVarId};

/// The canonicalizing type store.
///
/// One registry owns every canonical class and generic-parameter entry for
/// its lifetime; callers never construct declared types directly. All
/// queries take `&self`: a single coarse lock guards canonicalization, lazy
/// nested-class loading, and derived-string memoization, so a registry can
/// be shared freely across threads. A failed resolution rolls back
/// everything it installed, which keeps the published maps free of
/// partially constructed entries and leaves the name open for a later
/// attempt.
pub struct TypeRegistry {
    resolver: Box<dyn SymbolResolver>,
    binder: Box<dyn OverloadBinder>,
    inner: Mutex<Store>,
}

impl TypeRegistry {
    /// A registry backed only by the built-in `java.lang` core declarations.
    pub fn new() -> TypeRegistry {
        TypeRegistry::with_resolver(Box::new(crate::resolver::NoResolver))
    }

    /// A registry that consults `resolver` for any class the built-in core
    /// set does not cover.
    pub fn with_resolver(resolver: Box<dyn SymbolResolver>) -> TypeRegistry {
        let registry = TypeRegistry {
            resolver,
            binder: Box::new(DefaultBinder),
            inner: Mutex::new(Store {
                classes: Vec::new(),
                by_name: HashMap::new(),
                type_vars: Vec::new(),
                object: ClassId::from_index(0),
                memo: HashMap::new(),
            }),
        };
        {
            let mut store = registry.store();
            // `java.lang.Object` is installed first so that `Store::object`
            // (fixed at index 0) is valid before any other resolution runs.
            registry
                .load_class(&mut store, "java.lang.Object")
                .expect("built-in core declarations are self-contained");
        }
        registry
    }

    /// Replace the overload-selection strategy used by `get_method` /
    /// `get_constructor` when an argument-type list is supplied.
    pub fn with_binder(mut self, binder: Box<dyn OverloadBinder>) -> TypeRegistry {
        self.binder = binder;
        self
    }

    pub(crate) fn overload_binder(&self) -> &dyn OverloadBinder {
        &*self.binder
    }

    pub(crate) fn store(&self) -> MutexGuard<'_, Store> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The single canonical type for the class named `binary_name`,
    /// resolving and installing it on first request. For a generic class
    /// this is the generic type definition.
    pub fn canonicalize(&self, binary_name: &str) -> Result<Type> {
        let mut store = self.store();
        let checkpoint = store.checkpoint();
        match self.load_class(&mut store, binary_name) {
            Ok(id) => Ok(store.canonical_type(id)),
            Err(err) => {
                store.rollback(checkpoint);
                Err(err)
            }
        }
    }

    /// Install a declaration directly, bypassing the resolver. If the class
    /// is already canonicalized the existing entry wins and is returned
    /// unchanged.
    pub fn register(&self, decl: &ClassDecl) -> Result<Type> {
        let mut store = self.store();
        let checkpoint = store.checkpoint();
        match self.install_decl(&mut store, decl) {
            Ok(id) => Ok(store.canonical_type(id)),
            Err(err) => {
                store.rollback(checkpoint);
                Err(err)
            }
        }
    }

    /// The root object type (`java.lang.Object`).
    pub fn object_type(&self) -> Type {
        self.store().object_type()
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    pub(crate) fn load_class(&self, store: &mut Store, binary_name: &str) -> Result<ClassId> {
        if let Some(&id) = store.by_name.get(binary_name) {
            return Ok(id);
        }

        // The built-in core set pins the identity of `java.lang`; the
        // injected resolver serves everything else.
        let decl = match bootstrap::core_declaration(binary_name) {
            Some(decl) => decl,
            None => match self.resolver.resolve(binary_name) {
                Some(decl) => decl,
                None => {
                    tracing::debug!(
                        target: "javelin.reflect",
                        class = binary_name,
                        "symbol resolver could not supply a declaration"
                    );
                    return Err(TypeError::NotResolvable(binary_name.to_string()));
                }
            },
        };

        if decl.binary_name != binary_name {
            tracing::debug!(
                target: "javelin.reflect",
                requested = binary_name,
                resolved = %decl.binary_name,
                "resolver returned a declaration for a different class"
            );
            return Err(TypeError::NotResolvable(binary_name.to_string()));
        }

        self.install_decl(store, &decl)
    }

    fn install_decl(&self, store: &mut Store, decl: &ClassDecl) -> Result<ClassId> {
        if let Some(&id) = store.by_name.get(&decl.binary_name) {
            return Ok(id);
        }

        // Publish the id before resolving any referenced type so cyclic
        // hierarchies (Enum<E extends Enum<E>>) terminate.
        let id = ClassId::from_index(store.classes.len());
        store.classes.push(ClassData {
            binary_name: decl.binary_name.clone(),
            modifiers: decl.modifiers,
            declaring_class: decl.declaring_class.clone(),
            type_params: Vec::new(),
            super_type: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            nested_classes: decl.nested_classes.clone(),
            nested_ids: None,
        });
        store.by_name.insert(decl.binary_name.clone(), id);

        let mut class_vars = Vec::with_capacity(decl.type_params.len());
        for (index, tp) in decl.type_params.iter().enumerate() {
            let vid = TypeVarId::from_index(store.type_vars.len());
            store.type_vars.push(TypeVarData {
                name: tp.name.clone(),
                owner: TypeVarOwner::Class(id),
                index: index as u32,
                upper_bound: Type::Bottom,
            });
            class_vars.push(vid);
        }
        store.classes[id.index()].type_params = class_vars.clone();

        let class_scope: Vec<(String, TypeVarId)> = decl
            .type_params
            .iter()
            .zip(&class_vars)
            .map(|(tp, &vid)| (tp.name.clone(), vid))
            .collect();

        for (tp, &vid) in decl.type_params.iter().zip(&class_vars) {
            let bound = match &tp.bound {
                Some(bound) => self.resolve_ref(store, bound, &class_scope, &[])?,
                None => store.object_type(),
            };
            store.type_vars[vid.index()].upper_bound = bound;
        }

        let super_type = match &decl.super_class {
            Some(super_class) => Some(self.resolve_ref(store, super_class, &class_scope, &[])?),
            None => None,
        };

        let mut interfaces = Vec::with_capacity(decl.interfaces.len());
        for interface in &decl.interfaces {
            interfaces.push(self.resolve_ref(store, interface, &class_scope, &[])?);
        }

        let mut fields = Vec::with_capacity(decl.fields.len());
        for field in &decl.fields {
            fields.push(FieldData {
                name: field.name.clone(),
                modifiers: field.modifiers,
                ty: self.resolve_ref(store, &field.field_type, &class_scope, &[])?,
            });
        }

        let mut methods = Vec::with_capacity(decl.methods.len());
        for (member, method) in decl.methods.iter().enumerate() {
            let mut method_vars = Vec::with_capacity(method.type_params.len());
            for (index, tp) in method.type_params.iter().enumerate() {
                let vid = TypeVarId::from_index(store.type_vars.len());
                store.type_vars.push(TypeVarData {
                    name: tp.name.clone(),
                    owner: TypeVarOwner::Method {
                        class: id,
                        member: member as u32,
                    },
                    index: index as u32,
                    upper_bound: Type::Bottom,
                });
                method_vars.push(vid);
            }
            let method_scope: Vec<(String, TypeVarId)> = method
                .type_params
                .iter()
                .zip(&method_vars)
                .map(|(tp, &vid)| (tp.name.clone(), vid))
                .collect();
            for (tp, &vid) in method.type_params.iter().zip(&method_vars) {
                let bound = match &tp.bound {
                    Some(bound) => {
                        self.resolve_ref(store, bound, &class_scope, &method_scope)?
                    }
                    None => store.object_type(),
                };
                store.type_vars[vid.index()].upper_bound = bound;
            }

            let mut params = Vec::with_capacity(method.parameters.len());
            for parameter in &method.parameters {
                params.push(self.resolve_ref(store, parameter, &class_scope, &method_scope)?);
            }
            let return_type =
                self.resolve_ref(store, &method.return_type, &class_scope, &method_scope)?;

            methods.push(MethodData {
                name: method.name.clone(),
                modifiers: method.modifiers,
                type_params: method_vars,
                params,
                return_type,
                varargs: method.modifiers.is_varargs(),
            });
        }

        let mut constructors = Vec::with_capacity(decl.constructors.len());
        for constructor in &decl.constructors {
            let mut params = Vec::with_capacity(constructor.parameters.len());
            for parameter in &constructor.parameters {
                params.push(self.resolve_ref(store, parameter, &class_scope, &[])?);
            }
            constructors.push(CtorData {
                modifiers: constructor.modifiers,
                params,
                varargs: constructor.modifiers.is_varargs(),
            });
        }

        let data = &mut store.classes[id.index()];
        data.super_type = super_type;
        data.interfaces = interfaces;
        data.fields = fields;
        data.methods = methods;
        data.constructors = constructors;

        tracing::debug!(
            target: "javelin.reflect",
            class = %decl.binary_name,
            "canonicalized class"
        );
        Ok(id)
    }

    fn resolve_ref(
        &self,
        store: &mut Store,
        type_ref: &TypeRef,
        class_scope: &[(String, TypeVarId)],
        method_scope: &[(String, TypeVarId)],
    ) -> Result<Type> {
        Ok(match type_ref {
            TypeRef::Primitive(kind) => Type::Primitive(*kind),
            TypeRef::Named { name, args } => {
                let id = self.load_class(store, name)?;
                let param_count = store.class(id).type_params.len();
                if args.is_empty() {
                    // A raw reference to a generic class resolves to its
                    // generic type definition.
                    store.canonical_type(id)
                } else {
                    if args.len() != param_count {
                        return Err(TypeError::GenericArityMismatch {
                            expected: param_count,
                            found: args.len(),
                        });
                    }
                    let mut resolved = Vec::with_capacity(args.len());
                    for arg in args {
                        resolved.push(self.resolve_ref(store, arg, class_scope, method_scope)?);
                    }
                    Type::declared(id, resolved)
                }
            }
            TypeRef::Array(element) => self
                .resolve_ref(store, element, class_scope, method_scope)?
                .make_array_type(),
            TypeRef::Var(name) => {
                let found = method_scope
                    .iter()
                    .rev()
                    .chain(class_scope.iter().rev())
                    .find(|(n, _)| n == name);
                match found {
                    Some(&(_, vid)) => Type::TypeVar(vid),
                    None => {
                        return Err(TypeError::NotResolvable(format!("type variable `{name}`")))
                    }
                }
            }
            TypeRef::Wildcard => Type::Wildcard {
                extends_bound: Box::new(store.object_type()),
                super_bound: Box::new(Type::Bottom),
            },
            TypeRef::WildcardExtends(bound) => Type::Wildcard {
                extends_bound: Box::new(self.resolve_ref(
                    store,
                    bound,
                    class_scope,
                    method_scope,
                )?),
                super_bound: Box::new(Type::Bottom),
            },
            TypeRef::WildcardSuper(bound) => Type::Wildcard {
                extends_bound: Box::new(store.object_type()),
                super_bound: Box::new(self.resolve_ref(store, bound, class_scope, method_scope)?),
            },
        })
    }

    /// Resolve the nested-class name list of `id` to canonical ids.
    pub(crate) fn ensure_nested_loaded(
        &self,
        store: &mut Store,
        id: ClassId,
    ) -> Result<Vec<ClassId>> {
        if let Some(ids) = &store.class(id).nested_ids {
            return Ok(ids.clone());
        }
        let names = store.class(id).nested_classes.clone();
        let mut ids = Vec::with_capacity(names.len());
        for name in &names {
            ids.push(self.load_class(store, name)?);
        }
        store.classes[id.index()].nested_ids = Some(ids.clone());
        Ok(ids)
    }
}

impl Default for TypeRegistry {
    fn default() -> TypeRegistry {
        TypeRegistry::new()
    }
}

// ----------------------------------------------------------------------
// Guarded state
// ----------------------------------------------------------------------

pub(crate) struct Store {
    pub(crate) classes: Vec<ClassData>,
    pub(crate) by_name: HashMap<String, ClassId>,
    pub(crate) type_vars: Vec<TypeVarData>,
    pub(crate) object: ClassId,
    pub(crate) memo: HashMap<(RenderKind, Type), Arc<str>>,
}

#[derive(Clone, Copy)]
pub(crate) struct Checkpoint {
    classes_len: usize,
    type_vars_len: usize,
}

impl Store {
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            classes_len: self.classes.len(),
            type_vars_len: self.type_vars.len(),
        }
    }

    /// Undo every install since `checkpoint`. Only reachable while the
    /// single registry lock is held, so no reader can have observed the
    /// entries being discarded.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        for class in &self.classes[checkpoint.classes_len..] {
            self.by_name.remove(&class.binary_name);
        }
        self.classes.truncate(checkpoint.classes_len);
        self.type_vars.truncate(checkpoint.type_vars_len);
    }

    pub(crate) fn class(&self, id: ClassId) -> &ClassData {
        &self.classes[id.index()]
    }

    pub(crate) fn type_var(&self, id: TypeVarId) -> &TypeVarData {
        &self.type_vars[id.index()]
    }

    pub(crate) fn find(&self, binary_name: &str) -> Option<ClassId> {
        self.by_name.get(binary_name).copied()
    }

    pub(crate) fn object_type(&self) -> Type {
        Type::declared(self.object, Vec::new())
    }

    pub(crate) fn is_object(&self, ty: &Type) -> bool {
        matches!(ty, Type::Declared { class, args } if *class == self.object && args.is_empty())
    }

    /// The canonical type for a class id: the generic type definition when
    /// the class is generic, the plain declared type otherwise.
    pub(crate) fn canonical_type(&self, id: ClassId) -> Type {
        let params = &self.class(id).type_params;
        if params.is_empty() {
            Type::declared(id, Vec::new())
        } else {
            Type::declared(id, params.iter().map(|&v| Type::TypeVar(v)).collect())
        }
    }

    pub(crate) fn bindings_for(&self, id: ClassId, args: &[Type]) -> TypeBindings {
        if args.is_empty() {
            return TypeBindings::empty().clone();
        }
        TypeBindings::new(self.class(id).type_params.clone(), args.to_vec())
    }

    pub(crate) fn class_id_of(&self, ty: &Type) -> Option<ClassId> {
        match ty {
            Type::Declared { class, .. } | Type::Erased(class) => Some(*class),
            _ => None,
        }
    }

    pub(crate) fn is_interface(&self, ty: &Type) -> bool {
        match self.class_id_of(ty) {
            Some(id) => self.class(id).modifiers.is_interface(),
            None => false,
        }
    }

    /// The class id of the boxed counterpart for a primitive kind, if the
    /// box class has been canonicalized.
    pub(crate) fn box_id(&self, kind: PrimitiveKind) -> Option<ClassId> {
        self.find(kind.box_class())
    }

    pub(crate) fn primitive_for_box(&self, id: ClassId) -> Option<PrimitiveKind> {
        PrimitiveKind::from_box_class(&self.class(id).binary_name)
    }

    /// Type erasure: strips type arguments, maps variables and bounded
    /// variants to the erasure of their bound.
    pub(crate) fn erase(&self, ty: &Type) -> Type {
        match ty {
            Type::Declared { class, args } => {
                if args.is_empty() {
                    ty.clone()
                } else {
                    Type::Erased(*class)
                }
            }
            Type::Erased(_) | Type::Primitive(_) | Type::Bottom | Type::Null => ty.clone(),
            Type::Array(element) => Type::Array(Box::new(self.erase(element))),
            Type::TypeVar(v) => {
                let bound = self.type_var(*v).upper_bound.clone();
                self.erase(&bound)
            }
            Type::Wildcard { extends_bound, .. } => self.erase(extends_bound),
            Type::Compound { base, .. } => self.erase(base),
        }
    }
}

// ----------------------------------------------------------------------
// Canonical class and member data
// ----------------------------------------------------------------------

pub(crate) struct ClassData {
    pub(crate) binary_name: String,
    pub(crate) modifiers: Modifiers,
    pub(crate) declaring_class: Option<String>,
    pub(crate) type_params: Vec<TypeVarId>,
    pub(crate) super_type: Option<Type>,
    pub(crate) interfaces: Vec<Type>,
    pub(crate) fields: Vec<FieldData>,
    pub(crate) methods: Vec<MethodData>,
    pub(crate) constructors: Vec<CtorData>,
    pub(crate) nested_classes: Vec<String>,
    pub(crate) nested_ids: Option<Vec<ClassId>>,
}

pub(crate) struct FieldData {
    pub(crate) name: String,
    pub(crate) modifiers: Modifiers,
    pub(crate) ty: Type,
}

pub(crate) struct MethodData {
    pub(crate) name: String,
    pub(crate) modifiers: Modifiers,
    pub(crate) type_params: Vec<TypeVarId>,
    pub(crate) params: Vec<Type>,
    pub(crate) return_type: Type,
    pub(crate) varargs: bool,
}

pub(crate) struct CtorData {
    pub(crate) modifiers: Modifiers,
    pub(crate) params: Vec<Type>,
    pub(crate) varargs: bool,
}

pub(crate) struct TypeVarData {
    pub(crate) name: String,
    pub(crate) owner: TypeVarOwner,
    pub(crate) index: u32,
    pub(crate) upper_bound: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TypeVarOwner {
    Class(ClassId),
    Method { class: ClassId, member: u32 },
}

/// Memo key discriminant for derived string artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RenderKind {
    BriefDescription,
    SimpleDescription,
    FullDescription,
    ErasedDescription,
    Signature,
    GenericSignature,
    ErasedSignature,
}
