//! The member filter pipeline: one explicit lookup-configuration value and
//! the ordered visibility/scope/name/shape checks applied to every
//! candidate.

use javelin_meta::Modifiers;

use crate::flags::BindingFlags;
use crate::members::{CallingConvention, MemberKind, ParameterInfo};
use crate::registry::Store;
use crate::relations::equivalent;
use crate::ty::ClassId;
use crate::Type;

/// Name-matching mode resolved from the requested name and flags.
#[derive(Debug, Clone)]
pub(crate) struct NameFilter {
    pattern: String,
    prefix: bool,
    ignore_case: bool,
}

impl NameFilter {
    /// `None` name means match-all. A trailing `*` switches to prefix
    /// matching, but only where the lookup allows it (plural surfaces, not
    /// single-member resolution).
    pub(crate) fn build(
        name: Option<&str>,
        flags: BindingFlags,
        allow_prefix: bool,
    ) -> Option<NameFilter> {
        let name = name?;
        let ignore_case = flags.contains(BindingFlags::IGNORE_CASE);
        let (pattern, prefix) = match name.strip_suffix('*') {
            Some(stripped) if allow_prefix => (stripped, true),
            _ => (name, false),
        };
        Some(NameFilter {
            pattern: if ignore_case {
                pattern.to_lowercase()
            } else {
                pattern.to_string()
            },
            prefix,
            ignore_case,
        })
    }

    pub(crate) fn matches(&self, candidate: &str) -> bool {
        if self.ignore_case {
            let candidate = candidate.to_lowercase();
            if self.prefix {
                candidate.starts_with(&self.pattern)
            } else {
                candidate == self.pattern
            }
        } else if self.prefix {
            candidate.starts_with(&self.pattern)
        } else {
            candidate == self.pattern
        }
    }
}

/// The whole lookup configuration, carried as one value through the
/// pipeline.
pub(crate) struct LookupOptions<'a> {
    pub(crate) flags: BindingFlags,
    pub(crate) name: Option<NameFilter>,
    pub(crate) calling_convention: CallingConvention,
    pub(crate) argument_types: Option<&'a [Type]>,
}

impl<'a> LookupOptions<'a> {
    pub(crate) fn new(flags: BindingFlags) -> LookupOptions<'a> {
        LookupOptions {
            flags,
            name: None,
            calling_convention: CallingConvention::Any,
            argument_types: None,
        }
    }
}

/// The member-side facts the scope filter needs.
pub(crate) struct CandidateMeta<'a> {
    pub(crate) name: &'a str,
    pub(crate) modifiers: Modifiers,
    pub(crate) declaring_class: Option<ClassId>,
    pub(crate) kind: MemberKind,
}

/// The ordered visibility/scope/name filter. Inheritance is judged against
/// the queried class id, which already normalizes instantiations to their
/// definition.
pub(crate) fn passes_scope_filter(
    queried_class: Option<ClassId>,
    candidate: &CandidateMeta<'_>,
    opts: &LookupOptions<'_>,
) -> bool {
    let flags = opts.flags;
    let m = candidate.modifiers;

    if m.is_public() {
        if !flags.contains(BindingFlags::PUBLIC) {
            return false;
        }
    } else if !flags.contains(BindingFlags::NON_PUBLIC) {
        return false;
    }

    let inherited = candidate.declaring_class != queried_class;
    if inherited && flags.contains(BindingFlags::DECLARED_ONLY) {
        return false;
    }

    if candidate.kind != MemberKind::NestedType {
        if m.is_static() {
            if inherited && !flags.contains(BindingFlags::FLATTEN_HIERARCHY) {
                return false;
            }
            if !flags.contains(BindingFlags::STATIC) {
                return false;
            }
        } else if !flags.contains(BindingFlags::INSTANCE) {
            return false;
        }
    }

    if let Some(name) = &opts.name {
        if !name.matches(candidate.name) {
            return false;
        }
    }

    // Asymmetry: package-private, inherited, instance members survive a
    // {NonPublic, Instance} lookup without DeclaredOnly only when they are
    // overridable methods. Fields and final methods drop out here.
    if !flags.contains(BindingFlags::DECLARED_ONLY)
        && inherited
        && m.is_package_private()
        && flags.contains(BindingFlags::NON_PUBLIC)
        && !m.is_static()
        && flags.contains(BindingFlags::INSTANCE)
    {
        return candidate.kind == MemberKind::Method && !m.is_final();
    }

    true
}

/// The argument-shape filter for methods and constructors.
pub(crate) fn passes_shape_filter(
    store: &Store,
    parameters: &[ParameterInfo],
    candidate_convention: CallingConvention,
    opts: &LookupOptions<'_>,
) -> bool {
    if opts.calling_convention != CallingConvention::Any
        && opts.calling_convention != candidate_convention
    {
        return false;
    }

    let Some(args) = opts.argument_types else {
        return true;
    };

    if args.len() != parameters.len() {
        let dynamic_call = opts
            .flags
            .intersects(BindingFlags::INVOKE_METHOD | BindingFlags::CREATE_INSTANCE);
        if candidate_convention == CallingConvention::VarArgs {
            if parameters.is_empty() {
                return false;
            }
            // Short by more than one argument cannot bind the varargs tail.
            if args.len() + 1 < parameters.len() {
                return false;
            }
            let Some(last) = parameters.last() else {
                return false;
            };
            if !last.param_type.is_array() {
                return false;
            }
        } else if !dynamic_call {
            return false;
        }
    } else if opts.flags.contains(BindingFlags::EXACT_BINDING)
        && !opts.flags.contains(BindingFlags::INVOKE_METHOD)
    {
        for (parameter, arg) in parameters.iter().zip(args) {
            if !equivalent(store, &parameter.param_type, arg) {
                return false;
            }
        }
    }

    true
}
