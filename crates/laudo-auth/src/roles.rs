use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Permission {
    ViewReports,
    CreateReports,
    EditReports,
    DeleteReports,
    ManageUsers,
    ManageRoles,
    ManageSettings,
}

impl Permission {
    pub const ALL: [Permission; 7] = [
        Permission::ViewReports,
        Permission::CreateReports,
        Permission::EditReports,
        Permission::DeleteReports,
        Permission::ManageUsers,
        Permission::ManageRoles,
        Permission::ManageSettings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewReports => "view_reports",
            Permission::CreateReports => "create_reports",
            Permission::EditReports => "edit_reports",
            Permission::DeleteReports => "delete_reports",
            Permission::ManageUsers => "manage_users",
            Permission::ManageRoles => "manage_roles",
            Permission::ManageSettings => "manage_settings",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AuthError::UnknownPermission(s.to_string()))
    }
}

/// A named bundle of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
}

impl Role {
    fn new(id: &str, name: &str, description: &str, permissions: &[Permission]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            permissions: permissions.to_vec(),
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

pub const ADMIN_ROLE: &str = "role-admin";
pub const DOCTOR_ROLE: &str = "role-doctor";
pub const USER_ROLE: &str = "role-user";

static DEFAULT_ROLES: LazyLock<Vec<Role>> = LazyLock::new(|| {
    vec![
        Role::new(
            ADMIN_ROLE,
            "Administrador",
            "Acesso total ao sistema",
            &Permission::ALL,
        ),
        Role::new(
            DOCTOR_ROLE,
            "Médico",
            "Pode criar e visualizar laudos",
            &[
                Permission::ViewReports,
                Permission::CreateReports,
                Permission::EditReports,
            ],
        ),
        Role::new(
            USER_ROLE,
            "Usuário",
            "Apenas visualizar laudos",
            &[Permission::ViewReports],
        ),
    ]
});

/// Built-in roles.
pub fn default_roles() -> &'static [Role] {
    &DEFAULT_ROLES
}
