//! Overload and field disambiguation.
//!
//! The selection strategy used when an argument-type list drives the lookup
//! is pluggable; [`DefaultBinder`] performs standard applicability scoring
//! (per-parameter assignability, with the varargs tail expanded) and picks
//! the most specific applicable candidate. Runs outside the registry lock,
//! against the public query surface.

use crate::error::{Result, TypeError};
use crate::flags::BindingFlags;
use crate::members::{CallingConvention, MethodBase, ParameterInfo};
use crate::registry::TypeRegistry;
use crate::ty::Type;

/// A borrowed view of one method or constructor candidate.
pub struct MethodCandidate<'a> {
    pub name: &'a str,
    pub declaring_type: &'a Type,
    pub parameters: &'a [ParameterInfo],
    pub calling_convention: CallingConvention,
}

impl<'a> MethodCandidate<'a> {
    pub fn of(member: &'a (impl MethodBase + ?Sized)) -> MethodCandidate<'a> {
        MethodCandidate {
            name: member.member_name(),
            declaring_type: member.declaring_type(),
            parameters: member.parameters(),
            calling_convention: member.calling_convention(),
        }
    }
}

/// Disambiguates method/constructor candidates against a supplied
/// argument-type list.
pub trait OverloadBinder: Send + Sync {
    /// Pick the index of the winning candidate. `Ok(None)` means no
    /// candidate is applicable; [`TypeError::AmbiguousMatch`] means two or
    /// more equally specific candidates survive.
    fn select_method(
        &self,
        registry: &TypeRegistry,
        flags: BindingFlags,
        candidates: &[MethodCandidate<'_>],
        argument_types: &[Type],
    ) -> Result<Option<usize>>;
}

/// Applicability + most-specific selection, JLS-flavored: fixed-arity
/// applicability is preferred over varargs expansion, and among equally
/// specific candidates that share one signature the most derived declaring
/// type wins.
pub struct DefaultBinder;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Applicability {
    Fixed,
    VarArgs,
}

impl OverloadBinder for DefaultBinder {
    fn select_method(
        &self,
        registry: &TypeRegistry,
        _flags: BindingFlags,
        candidates: &[MethodCandidate<'_>],
        argument_types: &[Type],
    ) -> Result<Option<usize>> {
        let mut applicable: Vec<(usize, Applicability)> = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            if fixed_applicable(registry, candidate.parameters, argument_types) {
                applicable.push((index, Applicability::Fixed));
            } else if candidate.calling_convention == CallingConvention::VarArgs
                && varargs_applicable(registry, candidate.parameters, argument_types)
            {
                applicable.push((index, Applicability::VarArgs));
            }
        }

        if applicable.is_empty() {
            return Ok(None);
        }

        // Phase preference: if anything binds without the varargs
        // expansion, varargs-only candidates drop out.
        if applicable.iter().any(|&(_, a)| a == Applicability::Fixed) {
            applicable.retain(|&(_, a)| a == Applicability::Fixed);
        }

        if applicable.len() == 1 {
            return Ok(Some(applicable[0].0));
        }

        // Keep the maximally specific candidates.
        let arity = argument_types.len();
        let maximal: Vec<usize> = applicable
            .iter()
            .filter(|&&(index, _)| {
                !applicable.iter().any(|&(other, _)| {
                    other != index
                        && strictly_more_specific(
                            registry,
                            &candidates[other],
                            &candidates[index],
                            arity,
                        )
                })
            })
            .map(|&(index, _)| index)
            .collect();

        match maximal.as_slice() {
            [] => Err(TypeError::AmbiguousMatch),
            [single] => Ok(Some(*single)),
            rest => {
                // Identical signatures are the override case: the most
                // derived declaring type wins. Anything else is ambiguous.
                let first = &candidates[rest[0]];
                if rest[1..]
                    .iter()
                    .all(|&i| same_candidate_signature(registry, &candidates[i], first))
                {
                    let mut best = rest[0];
                    for &index in &rest[1..] {
                        if registry.is_subtype(
                            candidates[index].declaring_type,
                            candidates[best].declaring_type,
                        ) {
                            best = index;
                        }
                    }
                    Ok(Some(best))
                } else {
                    tracing::trace!(
                        target: "javelin.reflect",
                        candidates = rest.len(),
                        "overload selection found equally specific candidates"
                    );
                    Err(TypeError::AmbiguousMatch)
                }
            }
        }
    }
}

fn fixed_applicable(
    registry: &TypeRegistry,
    parameters: &[ParameterInfo],
    args: &[Type],
) -> bool {
    parameters.len() == args.len()
        && parameters
            .iter()
            .zip(args)
            .all(|(p, a)| registry.is_assignable_from(&p.param_type, a))
}

fn varargs_applicable(
    registry: &TypeRegistry,
    parameters: &[ParameterInfo],
    args: &[Type],
) -> bool {
    let Some((last, fixed)) = parameters.split_last() else {
        return false;
    };
    if args.len() < fixed.len() {
        return false;
    }
    let Some(element) = last.param_type.element_type() else {
        return false;
    };
    fixed
        .iter()
        .zip(args)
        .all(|(p, a)| registry.is_assignable_from(&p.param_type, a))
        && args[fixed.len()..]
            .iter()
            .all(|a| registry.is_assignable_from(element, a))
}

/// Parameter type seen by the `position`-th argument once the varargs tail
/// is expanded to `arity` arguments.
fn effective_parameter<'a>(
    parameters: &'a [ParameterInfo],
    position: usize,
    arity: usize,
) -> Option<&'a Type> {
    if parameters.len() == arity {
        return parameters.get(position).map(|p| &p.param_type);
    }
    let (last, fixed) = parameters.split_last()?;
    if position < fixed.len() {
        Some(&fixed[position].param_type)
    } else {
        last.param_type.element_type()
    }
}

fn strictly_more_specific(
    registry: &TypeRegistry,
    a: &MethodCandidate<'_>,
    b: &MethodCandidate<'_>,
    arity: usize,
) -> bool {
    more_specific(registry, a, b, arity) && !more_specific(registry, b, a, arity)
}

/// `a` is at least as specific as `b` when every parameter of `a` is
/// acceptable where `b`'s corresponding parameter is expected.
fn more_specific(
    registry: &TypeRegistry,
    a: &MethodCandidate<'_>,
    b: &MethodCandidate<'_>,
    arity: usize,
) -> bool {
    for position in 0..arity {
        let (Some(pa), Some(pb)) = (
            effective_parameter(a.parameters, position, arity),
            effective_parameter(b.parameters, position, arity),
        ) else {
            return false;
        };
        if !registry.is_assignable_from(pb, pa) {
            return false;
        }
    }
    true
}

fn same_candidate_signature(
    registry: &TypeRegistry,
    a: &MethodCandidate<'_>,
    b: &MethodCandidate<'_>,
) -> bool {
    a.name == b.name
        && a.parameters.len() == b.parameters.len()
        && a.parameters
            .iter()
            .zip(b.parameters)
            .all(|(x, y)| registry.is_equivalent(&x.param_type, &y.param_type))
}

// ----------------------------------------------------------------------
// Shared selection helpers for the no-argument-list lookup paths
// ----------------------------------------------------------------------

/// Name-and-signature comparison for the hide-by-signature rule.
pub(crate) fn same_signature<M: MethodBase>(registry: &TypeRegistry, a: &M, b: &M) -> bool {
    same_candidate_signature(registry, &MethodCandidate::of(a), &MethodCandidate::of(b))
}

/// Of candidates sharing one signature, the one declared furthest down the
/// hierarchy.
pub(crate) fn most_derived<M: MethodBase>(registry: &TypeRegistry, candidates: Vec<M>) -> Option<M> {
    let mut best: Option<M> = None;
    for candidate in candidates {
        best = match best {
            None => Some(candidate),
            Some(current) => {
                if registry.is_subtype(candidate.declaring_type(), current.declaring_type()) {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }
    best
}
