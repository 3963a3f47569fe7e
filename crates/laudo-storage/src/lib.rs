//! laudo-storage
//!
//! Local report history. One JSON file per data directory, written
//! atomically.

pub mod error;
pub mod fs;
pub mod history;
