pub type Result<T> = std::result::Result<T, TypeError>;

/// Errors produced by type canonicalization and member resolution.
///
/// "Zero candidates" is never an error: single-member lookups return
/// `Ok(None)` when nothing matches. Errors are reserved for declarations
/// that cannot be canonicalized, irreducible ambiguity, and operations
/// invoked on a type variant that does not support them.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    #[error("type `{0}` could not be resolved")]
    NotResolvable(String),

    #[error("ambiguous match: more than one member satisfies the request")]
    AmbiguousMatch,

    #[error("`{0}` is not a generic type")]
    NotGenericType(String),

    #[error("`{0}` is not a generic parameter")]
    NotGenericParameter(String),

    #[error("`{0}` is not a bounded type")]
    NotBoundedType(String),

    #[error("`{0}` is not a wildcard type")]
    NotWildcard(String),

    #[error("`{0}` is not an enum type")]
    NotEnumType(String),

    #[error("`{0}` does not have an element type")]
    NotArrayType(String),

    #[error("wrong number of type arguments: expected {expected}, found {found}")]
    GenericArityMismatch { expected: usize, found: usize },

    #[error("compound type bounds may not be empty")]
    CompoundTypeEmptyBounds,

    #[error("compound type may not have a generic parameter bound")]
    CompoundTypeGenericParameterBound,

    #[error("compound type may only have one class bound")]
    CompoundTypeMultipleClassBounds,
}
