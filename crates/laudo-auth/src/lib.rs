//! laudo-auth
//!
//! Role-based authorization for report operations. Report assembly itself
//! never checks permissions; callers gate the operations that touch the
//! report history.

pub mod authorizer;
pub mod error;
pub mod roles;
