//! Well-known role names and role comparison.
//!
//! Role strings come from the external session provider and are not
//! normalised at the source, so every comparison here is case-insensitive.

/// The privileged role. Grants access to the waitlist and diagnostics.
pub const ROLE_ADMIN: &str = "admin";

/// Role reported for a session whose token carries no role claim.
pub const ROLE_NONE: &str = "none";

/// Case-insensitive role equality.
pub fn role_matches(role: &str, expected: &str) -> bool {
    role.trim().eq_ignore_ascii_case(expected)
}

/// Whether a session role grants admin access.
///
/// A missing role claim is treated as non-admin rather than as an error.
pub fn is_admin(role: Option<&str>) -> bool {
    role.is_some_and(|r| role_matches(r, ROLE_ADMIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_any_case() {
        assert!(is_admin(Some("admin")));
        assert!(is_admin(Some("ADMIN")));
        assert!(is_admin(Some("Admin")));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert!(is_admin(Some(" admin ")));
    }

    #[test]
    fn missing_role_is_not_admin() {
        assert!(!is_admin(None));
        assert!(!is_admin(Some("")));
    }

    #[test]
    fn other_roles_are_not_admin() {
        assert!(!is_admin(Some("customer")));
        assert!(!is_admin(Some("administrator")));
    }
}
