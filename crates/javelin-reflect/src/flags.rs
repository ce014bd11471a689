use std::fmt;

/// Lookup-control flags for member queries.
///
/// An immutable bitmask set drawn from a closed vocabulary; combine with `|`
/// and subtract with `-`. The flags govern visibility (`PUBLIC` /
/// `NON_PUBLIC`), static-vs-instance scope, inheritance scope
/// (`DECLARED_ONLY`, `FLATTEN_HIERARCHY`), name matching (`IGNORE_CASE`),
/// and invocation intent (`EXACT_BINDING`, `INVOKE_METHOD`,
/// `CREATE_INSTANCE`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BindingFlags(u16);

impl BindingFlags {
    pub const NONE: BindingFlags = BindingFlags(0);

    pub const PUBLIC: BindingFlags = BindingFlags(1 << 0);
    pub const NON_PUBLIC: BindingFlags = BindingFlags(1 << 1);
    pub const STATIC: BindingFlags = BindingFlags(1 << 2);
    pub const INSTANCE: BindingFlags = BindingFlags(1 << 3);
    /// Restrict results to members declared by the queried type itself.
    pub const DECLARED_ONLY: BindingFlags = BindingFlags(1 << 4);
    /// Admit inherited static members (static members are otherwise visible
    /// only on their declaring type).
    pub const FLATTEN_HIERARCHY: BindingFlags = BindingFlags(1 << 5);
    pub const IGNORE_CASE: BindingFlags = BindingFlags(1 << 6);
    /// Require supplied argument types to be exactly equivalent to the
    /// declared parameter types, not merely assignable.
    pub const EXACT_BINDING: BindingFlags = BindingFlags(1 << 7);
    /// Dynamic-call intent: tolerate arity mismatches when filtering methods.
    pub const INVOKE_METHOD: BindingFlags = BindingFlags(1 << 8);
    /// Dynamic-instantiation intent, the constructor analog of
    /// [`BindingFlags::INVOKE_METHOD`].
    pub const CREATE_INSTANCE: BindingFlags = BindingFlags(1 << 9);

    /// Default lookup: all visibilities, instance and static members.
    pub const DEFAULT: BindingFlags = BindingFlags(
        BindingFlags::PUBLIC.0
            | BindingFlags::NON_PUBLIC.0
            | BindingFlags::STATIC.0
            | BindingFlags::INSTANCE.0,
    );

    /// Public members only, instance and static.
    pub const PUBLIC_ONLY: BindingFlags = BindingFlags(
        BindingFlags::PUBLIC.0 | BindingFlags::STATIC.0 | BindingFlags::INSTANCE.0,
    );

    pub const fn contains(self, other: BindingFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: BindingFlags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for BindingFlags {
    type Output = BindingFlags;

    fn bitor(self, rhs: BindingFlags) -> BindingFlags {
        BindingFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for BindingFlags {
    fn bitor_assign(&mut self, rhs: BindingFlags) {
        self.0 |= rhs.0;
    }
}

impl std::ops::Sub for BindingFlags {
    type Output = BindingFlags;

    fn sub(self, rhs: BindingFlags) -> BindingFlags {
        BindingFlags(self.0 & !rhs.0)
    }
}

impl fmt::Debug for BindingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: &[(BindingFlags, &str)] = &[
            (BindingFlags::PUBLIC, "PUBLIC"),
            (BindingFlags::NON_PUBLIC, "NON_PUBLIC"),
            (BindingFlags::STATIC, "STATIC"),
            (BindingFlags::INSTANCE, "INSTANCE"),
            (BindingFlags::DECLARED_ONLY, "DECLARED_ONLY"),
            (BindingFlags::FLATTEN_HIERARCHY, "FLATTEN_HIERARCHY"),
            (BindingFlags::IGNORE_CASE, "IGNORE_CASE"),
            (BindingFlags::EXACT_BINDING, "EXACT_BINDING"),
            (BindingFlags::INVOKE_METHOD, "INVOKE_METHOD"),
            (BindingFlags::CREATE_INSTANCE, "CREATE_INSTANCE"),
        ];

        if self.is_empty() {
            return f.write_str("NONE");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(*flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_difference() {
        let flags = BindingFlags::PUBLIC | BindingFlags::STATIC;
        assert!(flags.contains(BindingFlags::PUBLIC));
        assert!(flags.contains(BindingFlags::STATIC));
        assert!(!flags.contains(BindingFlags::INSTANCE));

        let without = flags - BindingFlags::STATIC;
        assert!(without.contains(BindingFlags::PUBLIC));
        assert!(!without.contains(BindingFlags::STATIC));
    }

    #[test]
    fn default_lookup_spans_both_visibilities() {
        assert!(BindingFlags::DEFAULT.contains(BindingFlags::PUBLIC));
        assert!(BindingFlags::DEFAULT.contains(BindingFlags::NON_PUBLIC));
        assert!(BindingFlags::DEFAULT.contains(BindingFlags::STATIC));
        assert!(BindingFlags::DEFAULT.contains(BindingFlags::INSTANCE));
        assert!(!BindingFlags::DEFAULT.contains(BindingFlags::DECLARED_ONLY));
    }
}
