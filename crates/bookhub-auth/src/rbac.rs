//! Role-based access control.

use std::collections::HashSet;

use bookhub_core::error::AppError;
use bookhub_entity::user::UserRole;

/// Gates an endpoint behind an allowed set of roles.
///
/// Purely a set-membership check; gates are built once at router
/// construction and shared across requests.
#[derive(Debug, Clone)]
pub struct RoleGate {
    /// Roles permitted through this gate.
    allowed: HashSet<UserRole>,
}

impl RoleGate {
    /// Creates a gate allowing the given roles.
    pub fn new(allowed: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Creates a gate that admits only administrators.
    pub fn admin_only() -> Self {
        Self::new([UserRole::Admin])
    }

    /// Creates a gate that admits any authenticated account.
    pub fn any_role() -> Self {
        Self::new([UserRole::Admin, UserRole::User])
    }

    /// Checks whether the given role passes this gate.
    pub fn allows(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }

    /// Requires the given role to pass, or returns a permission error.
    pub fn authorize(&self, role: UserRole) -> Result<(), AppError> {
        if self.allows(role) {
            Ok(())
        } else {
            Err(AppError::insufficient_permission(format!(
                "Role '{role}' is not permitted to perform this action"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use bookhub_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_admin_only_gate() {
        let gate = RoleGate::admin_only();
        assert!(gate.authorize(UserRole::Admin).is_ok());

        let err = gate.authorize(UserRole::User).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InsufficientPermission);
    }

    #[test]
    fn test_any_role_gate() {
        let gate = RoleGate::any_role();
        assert!(gate.allows(UserRole::Admin));
        assert!(gate.allows(UserRole::User));
    }

    #[test]
    fn test_empty_gate_denies_everyone() {
        let gate = RoleGate::new([]);
        assert!(gate.authorize(UserRole::Admin).is_err());
        assert!(gate.authorize(UserRole::User).is_err());
    }
}
