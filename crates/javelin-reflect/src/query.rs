//! The member query surface: plural candidate lookups and single-member
//! resolution (fields, overloads, constructors, nested types).
//!
//! Candidate assembly runs under the registry lock; disambiguation (which
//! re-enters the public relationship queries) runs after it is released.

use crate::binder::{self, MethodCandidate};
use crate::error::{Result, TypeError};
use crate::filter::{passes_scope_filter, passes_shape_filter, CandidateMeta, LookupOptions, NameFilter};
use crate::flags::BindingFlags;
use crate::members::{
    self, CallingConvention, ConstructorInfo, FieldInfo, MemberInfo, MemberKind, MethodBase,
    MethodInfo,
};
use crate::registry::{Store, TypeRegistry};
use crate::ty::{ClassId, Type};

impl TypeRegistry {
    /// All fields matching `flags`, declared and inherited.
    pub fn get_fields(&self, ty: &Type, flags: BindingFlags) -> Vec<FieldInfo> {
        let store = self.store();
        field_candidates(&store, ty, None, flags, false)
    }

    /// All methods matching `flags`, overridden declarations included.
    pub fn get_methods(&self, ty: &Type, flags: BindingFlags) -> Vec<MethodInfo> {
        self.get_methods_with(ty, flags, CallingConvention::Any)
    }

    pub fn get_methods_with(
        &self,
        ty: &Type,
        flags: BindingFlags,
        calling_convention: CallingConvention,
    ) -> Vec<MethodInfo> {
        let store = self.store();
        method_candidates(&store, ty, None, flags, calling_convention, None, false)
    }

    pub fn get_constructors(&self, ty: &Type, flags: BindingFlags) -> Vec<ConstructorInfo> {
        let store = self.store();
        constructor_candidates(&store, ty, None, flags, CallingConvention::Any, None, false)
    }

    pub fn get_nested_types(&self, ty: &Type, flags: BindingFlags) -> Result<Vec<Type>> {
        let mut store = self.store();
        let checkpoint = store.checkpoint();
        match self.nested_candidates(&mut store, ty, None, flags, false) {
            Ok(types) => Ok(types),
            Err(err) => {
                store.rollback(checkpoint);
                Err(err)
            }
        }
    }

    /// All members of the requested kinds, grouped field / method /
    /// constructor / nested-type.
    pub fn get_members(&self, ty: &Type, flags: BindingFlags) -> Result<Vec<MemberInfo>> {
        self.get_member(
            ty,
            None,
            flags,
            &[
                MemberKind::Field,
                MemberKind::Method,
                MemberKind::Constructor,
                MemberKind::NestedType,
            ],
        )
    }

    /// Members of the requested kinds matching `name`. A `None` name
    /// matches everything; a trailing `*` switches to prefix matching.
    pub fn get_member(
        &self,
        ty: &Type,
        name: Option<&str>,
        flags: BindingFlags,
        kinds: &[MemberKind],
    ) -> Result<Vec<MemberInfo>> {
        let mut store = self.store();
        let mut out = Vec::new();

        if kinds.contains(&MemberKind::Field) {
            out.extend(
                field_candidates(&store, ty, name, flags, true)
                    .into_iter()
                    .map(MemberInfo::Field),
            );
        }
        if kinds.contains(&MemberKind::Method) {
            out.extend(
                method_candidates(&store, ty, name, flags, CallingConvention::Any, None, true)
                    .into_iter()
                    .map(MemberInfo::Method),
            );
        }
        if kinds.contains(&MemberKind::Constructor) {
            out.extend(
                constructor_candidates(
                    &store,
                    ty,
                    name,
                    flags,
                    CallingConvention::Any,
                    None,
                    true,
                )
                .into_iter()
                .map(MemberInfo::Constructor),
            );
        }
        if kinds.contains(&MemberKind::NestedType) {
            let checkpoint = store.checkpoint();
            match self.nested_candidates(&mut store, ty, name, flags, true) {
                Ok(types) => out.extend(types.into_iter().map(MemberInfo::NestedType)),
                Err(err) => {
                    store.rollback(checkpoint);
                    return Err(err);
                }
            }
        }
        Ok(out)
    }

    /// Resolve a field by name: among matching candidates the most derived
    /// declaring type wins; competing interface declarations are ambiguous.
    pub fn get_field(
        &self,
        ty: &Type,
        name: &str,
        flags: BindingFlags,
    ) -> Result<Option<FieldInfo>> {
        let candidates = {
            let store = self.store();
            field_candidates(&store, ty, Some(name), flags, false)
        };

        let mut best: Option<FieldInfo> = None;
        let mut interface_contest = false;

        for candidate in candidates {
            if let Some(current) = &best {
                if self.is_equivalent(&candidate.declaring_type, &current.declaring_type) {
                    return Err(TypeError::AmbiguousMatch);
                }
                if self.is_interface(&current.declaring_type)
                    && self.is_interface(&candidate.declaring_type)
                {
                    interface_contest = true;
                }
            }
            let take = match &best {
                None => true,
                Some(current) => {
                    self.is_subtype(&candidate.declaring_type, &current.declaring_type)
                        || self.is_interface(&current.declaring_type)
                }
            };
            if take {
                best = Some(candidate);
            }
        }

        if interface_contest {
            if let Some(current) = &best {
                if self.is_interface(&current.declaring_type) {
                    return Err(TypeError::AmbiguousMatch);
                }
            }
        }

        Ok(best)
    }

    /// Resolve a method by name and optional argument shape.
    ///
    /// `None` argument types means "any shape": a lone candidate wins, and
    /// several candidates resolve only when they share one signature (the
    /// hide-by-signature override case, won by the most derived declaring
    /// type). A `Some` list, empty included, goes through overload
    /// selection.
    pub fn get_method(
        &self,
        ty: &Type,
        name: &str,
        flags: BindingFlags,
        calling_convention: CallingConvention,
        argument_types: Option<&[Type]>,
    ) -> Result<Option<MethodInfo>> {
        let candidates = {
            let store = self.store();
            method_candidates(
                &store,
                ty,
                Some(name),
                flags,
                calling_convention,
                argument_types,
                false,
            )
        };
        self.select_method_base(candidates, flags, argument_types)
    }

    /// Resolve a constructor by optional argument shape; the same selection
    /// rules as [`TypeRegistry::get_method`].
    pub fn get_constructor(
        &self,
        ty: &Type,
        flags: BindingFlags,
        calling_convention: CallingConvention,
        argument_types: Option<&[Type]>,
    ) -> Result<Option<ConstructorInfo>> {
        let candidates = {
            let store = self.store();
            constructor_candidates(
                &store,
                ty,
                None,
                flags,
                calling_convention,
                argument_types,
                false,
            )
        };
        self.select_method_base(candidates, flags, argument_types)
    }

    /// Resolve a nested type by name. The owner's full name may be included
    /// as a prefix (`com.example.Outer$Inner` or just `Inner`).
    pub fn get_nested_type(
        &self,
        ty: &Type,
        full_name: &str,
        flags: BindingFlags,
    ) -> Result<Option<Type>> {
        let candidates = {
            let mut store = self.store();
            let checkpoint = store.checkpoint();
            let name = strip_owner_prefix(&store, ty, full_name, flags);
            let name = match name {
                Some(name) => name,
                None => return Ok(None),
            };
            match self.nested_candidates(&mut store, ty, Some(&name), flags, false) {
                Ok(types) => types,
                Err(err) => {
                    store.rollback(checkpoint);
                    return Err(err);
                }
            }
        };

        let mut iter = candidates.into_iter();
        let first = iter.next();
        if iter.next().is_some() {
            return Err(TypeError::AmbiguousMatch);
        }
        Ok(first)
    }

    /// The enum-constant fields of an enum type, in declaration order.
    pub fn enum_constants(&self, ty: &Type) -> Result<Vec<FieldInfo>> {
        let names = self.enum_names(ty)?;
        let store = self.store();
        Ok(members::collect_fields(&store, ty)
            .into_iter()
            .filter(|f| f.modifiers.is_enum() && names.iter().any(|n| n == &f.name))
            .collect())
    }

    fn select_method_base<M>(
        &self,
        mut candidates: Vec<M>,
        flags: BindingFlags,
        argument_types: Option<&[Type]>,
    ) -> Result<Option<M>>
    where
        M: MethodBase + Clone,
    {
        if candidates.is_empty() {
            return Ok(None);
        }

        match argument_types {
            None => {
                if candidates.len() == 1 {
                    return Ok(candidates.pop());
                }
                let first = candidates[0].clone();
                for candidate in &candidates[1..] {
                    if !binder::same_signature(self, candidate, &first) {
                        return Err(TypeError::AmbiguousMatch);
                    }
                }
                Ok(binder::most_derived(self, candidates))
            }
            Some(args) => {
                if args.is_empty() && candidates.len() == 1 {
                    return Ok(candidates.pop());
                }
                let selected = {
                    let views: Vec<MethodCandidate<'_>> =
                        candidates.iter().map(|c| MethodCandidate::of(c)).collect();
                    self.overload_binder()
                        .select_method(self, flags, &views, args)?
                };
                Ok(selected.map(|index| candidates.swap_remove(index)))
            }
        }
    }

    fn nested_candidates(
        &self,
        store: &mut Store,
        ty: &Type,
        name: Option<&str>,
        flags: BindingFlags,
        allow_prefix: bool,
    ) -> Result<Vec<Type>> {
        for node in members::hierarchy(store, ty) {
            if let Some(id) = store.class_id_of(&node) {
                self.ensure_nested_loaded(store, id)?;
            }
        }

        let mut opts = LookupOptions::new(flags);
        opts.name = NameFilter::build(name, flags, allow_prefix);
        let queried = queried_class_id(store, ty);

        Ok(members::collect_nested(store, ty)
            .into_iter()
            .filter(|(owner, nested)| {
                let Some(nested_id) = store.class_id_of(nested) else {
                    return false;
                };
                let meta = CandidateMeta {
                    name: members::nested_simple_name(&store.class(nested_id).binary_name),
                    modifiers: store.class(nested_id).modifiers,
                    declaring_class: Some(*owner),
                    kind: MemberKind::NestedType,
                };
                passes_scope_filter(queried, &meta, &opts)
            })
            .map(|(_, nested)| nested)
            .collect())
    }
}

fn queried_class_id(store: &Store, ty: &Type) -> Option<ClassId> {
    store.class_id_of(ty).or_else(|| {
        members::hierarchy(store, ty)
            .first()
            .and_then(|node| store.class_id_of(node))
    })
}

fn field_candidates(
    store: &Store,
    ty: &Type,
    name: Option<&str>,
    flags: BindingFlags,
    allow_prefix: bool,
) -> Vec<FieldInfo> {
    let mut opts = LookupOptions::new(flags);
    opts.name = NameFilter::build(name, flags, allow_prefix);
    let queried = queried_class_id(store, ty);

    members::collect_fields(store, ty)
        .into_iter()
        .filter(|field| {
            let meta = CandidateMeta {
                name: &field.name,
                modifiers: field.modifiers,
                declaring_class: store.class_id_of(&field.declaring_type),
                kind: MemberKind::Field,
            };
            passes_scope_filter(queried, &meta, &opts)
        })
        .collect()
}

fn method_candidates(
    store: &Store,
    ty: &Type,
    name: Option<&str>,
    flags: BindingFlags,
    calling_convention: CallingConvention,
    argument_types: Option<&[Type]>,
    allow_prefix: bool,
) -> Vec<MethodInfo> {
    let mut opts = LookupOptions::new(flags);
    opts.name = NameFilter::build(name, flags, allow_prefix);
    opts.calling_convention = calling_convention;
    opts.argument_types = argument_types;
    let queried = queried_class_id(store, ty);

    members::collect_methods(store, ty)
        .into_iter()
        .filter(|method| {
            let meta = CandidateMeta {
                name: &method.name,
                modifiers: method.modifiers,
                declaring_class: store.class_id_of(&method.declaring_type),
                kind: MemberKind::Method,
            };
            passes_scope_filter(queried, &meta, &opts)
                && passes_shape_filter(
                    store,
                    &method.parameters,
                    method.calling_convention,
                    &opts,
                )
        })
        .collect()
}

fn constructor_candidates(
    store: &Store,
    ty: &Type,
    name: Option<&str>,
    flags: BindingFlags,
    calling_convention: CallingConvention,
    argument_types: Option<&[Type]>,
    allow_prefix: bool,
) -> Vec<ConstructorInfo> {
    let mut opts = LookupOptions::new(flags);
    opts.name = NameFilter::build(name, flags, allow_prefix);
    opts.calling_convention = calling_convention;
    opts.argument_types = argument_types;
    let queried = queried_class_id(store, ty);

    members::collect_constructors(store, ty)
        .into_iter()
        .filter(|ctor| {
            let meta = CandidateMeta {
                name: ctor.member_name(),
                modifiers: ctor.modifiers,
                declaring_class: store.class_id_of(&ctor.declaring_type),
                kind: MemberKind::Constructor,
            };
            passes_scope_filter(queried, &meta, &opts)
                && passes_shape_filter(store, &ctor.parameters, ctor.calling_convention, &opts)
        })
        .collect()
}

/// For nested-type lookups the owner's full name may prefix the requested
/// name; strip it. `None` means the request named the owner itself.
fn strip_owner_prefix(
    store: &Store,
    ty: &Type,
    full_name: &str,
    flags: BindingFlags,
) -> Option<String> {
    let Some(owner_id) = store.class_id_of(ty) else {
        return Some(full_name.to_string());
    };
    let owner_name = &store.class(owner_id).binary_name;
    let is_long_name = if flags.contains(BindingFlags::IGNORE_CASE) {
        full_name.to_lowercase().starts_with(&owner_name.to_lowercase())
    } else {
        full_name.starts_with(owner_name.as_str())
    };
    if is_long_name {
        if full_name.len() <= owner_name.len() + 1 {
            return None;
        }
        Some(full_name[owner_name.len() + 1..].to_string())
    } else {
        Some(full_name.to_string())
    }
}
