use thiserror::Error;

use crate::roles::Permission;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("permission denied: {permission} required")]
    Forbidden { permission: Permission },

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown permission: {0}")]
    UnknownPermission(String),
}
