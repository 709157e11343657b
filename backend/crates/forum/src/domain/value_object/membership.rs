//! Membership Tier Value Object
//!
//! Coarse role flag on a user. Stored as text ("regular" / "admin") to match
//! the persisted layout; no route restricts access by tier, the flag only
//! gates the promotion message.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    #[default]
    Regular,
    Admin,
}

impl Membership {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Membership::Regular => "regular",
            Membership::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Membership::Admin)
    }

    /// Parse the stored text form. Unknown values fall back to regular
    /// rather than failing the whole row.
    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => Membership::Admin,
            "regular" => Membership::Regular,
            other => {
                tracing::warn!(code = other, "Unknown membership code, treating as regular");
                Membership::Regular
            }
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_codes() {
        assert_eq!(Membership::Regular.code(), "regular");
        assert_eq!(Membership::Admin.code(), "admin");
    }

    #[test]
    fn test_membership_from_code() {
        assert_eq!(Membership::from_code("regular"), Membership::Regular);
        assert_eq!(Membership::from_code("admin"), Membership::Admin);
        assert_eq!(Membership::from_code("garbage"), Membership::Regular);
    }

    #[test]
    fn test_membership_default_is_regular() {
        assert_eq!(Membership::default(), Membership::Regular);
        assert!(!Membership::default().is_admin());
        assert!(Membership::Admin.is_admin());
    }

    #[test]
    fn test_membership_display() {
        assert_eq!(Membership::Regular.to_string(), "regular");
        assert_eq!(Membership::Admin.to_string(), "admin");
    }
}
