use std::fmt;

use serde::{Deserialize, Serialize};

/// JVM access and property flags for classes and members.
///
/// This is the raw `access_flags` word from the classfile format, wrapped so
/// callers get named queries instead of bit twiddling. Flag values follow
/// JVMS table 4.1-B / 4.5-A / 4.6-A.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers(pub u16);

impl Modifiers {
    pub const PUBLIC: Modifiers = Modifiers(0x0001);
    pub const PRIVATE: Modifiers = Modifiers(0x0002);
    pub const PROTECTED: Modifiers = Modifiers(0x0004);
    pub const STATIC: Modifiers = Modifiers(0x0008);
    pub const FINAL: Modifiers = Modifiers(0x0010);
    pub const VOLATILE: Modifiers = Modifiers(0x0040);
    pub const VARARGS: Modifiers = Modifiers(0x0080);
    pub const INTERFACE: Modifiers = Modifiers(0x0200);
    pub const ABSTRACT: Modifiers = Modifiers(0x0400);
    pub const SYNTHETIC: Modifiers = Modifiers(0x1000);
    pub const ANNOTATION: Modifiers = Modifiers(0x2000);
    pub const ENUM: Modifiers = Modifiers(0x4000);

    pub const fn empty() -> Modifiers {
        Modifiers(0)
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn with(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    pub const fn is_public(self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    pub const fn is_private(self) -> bool {
        self.contains(Modifiers::PRIVATE)
    }

    pub const fn is_protected(self) -> bool {
        self.contains(Modifiers::PROTECTED)
    }

    /// No access bits set at all: default ("package") visibility.
    pub const fn is_package_private(self) -> bool {
        self.0 & (Modifiers::PUBLIC.0 | Modifiers::PRIVATE.0 | Modifiers::PROTECTED.0) == 0
    }

    pub const fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    pub const fn is_final(self) -> bool {
        self.contains(Modifiers::FINAL)
    }

    pub const fn is_varargs(self) -> bool {
        self.contains(Modifiers::VARARGS)
    }

    pub const fn is_interface(self) -> bool {
        self.contains(Modifiers::INTERFACE)
    }

    pub const fn is_abstract(self) -> bool {
        self.contains(Modifiers::ABSTRACT)
    }

    pub const fn is_synthetic(self) -> bool {
        self.contains(Modifiers::SYNTHETIC)
    }

    pub const fn is_annotation(self) -> bool {
        self.contains(Modifiers::ANNOTATION)
    }

    pub const fn is_enum(self) -> bool {
        self.contains(Modifiers::ENUM)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modifiers(0x{:04x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_private_means_no_access_bits() {
        assert!(Modifiers::empty().is_package_private());
        assert!((Modifiers::STATIC | Modifiers::FINAL).is_package_private());
        assert!(!Modifiers::PUBLIC.is_package_private());
        assert!(!Modifiers::PROTECTED.is_package_private());
        assert!(!Modifiers::PRIVATE.is_package_private());
    }

    #[test]
    fn combined_flags_query_individually() {
        let m = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL;
        assert!(m.is_public());
        assert!(m.is_static());
        assert!(m.is_final());
        assert!(!m.is_abstract());
    }
}
