use std::collections::BTreeSet;

use crate::error::AuthError;
use crate::roles::{Permission, Role};

/// Answers "may the current user do this?".
pub trait Authorizer {
    fn has_permission(&self, permission: Permission) -> bool;

    /// `Ok(())` if granted, [`AuthError::Forbidden`] otherwise.
    fn require(&self, permission: Permission) -> Result<(), AuthError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            tracing::warn!(%permission, "permission denied");
            Err(AuthError::Forbidden { permission })
        }
    }
}

/// Grants the union of the permissions of a user's roles.
#[derive(Debug, Clone, Default)]
pub struct RoleAuthorizer {
    granted: BTreeSet<Permission>,
}

impl RoleAuthorizer {
    /// Resolve `role_ids` against `roles`. Every id must exist.
    pub fn for_roles<S: AsRef<str>>(roles: &[Role], role_ids: &[S]) -> Result<Self, AuthError> {
        let mut granted = BTreeSet::new();
        for role_id in role_ids {
            let role_id = role_id.as_ref();
            let role = roles
                .iter()
                .find(|r| r.id == role_id)
                .ok_or_else(|| AuthError::UnknownRole(role_id.to_string()))?;
            granted.extend(role.permissions.iter().copied());
        }
        tracing::debug!(roles = role_ids.len(), permissions = granted.len(), "authorizer resolved");
        Ok(Self { granted })
    }

    pub fn permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        self.granted.iter().copied()
    }
}

impl Authorizer for RoleAuthorizer {
    fn has_permission(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }
}
