//! laudo-core
//!
//! Pure domain types for ultrasound report assembly. No I/O; this is the
//! shared vocabulary of the laudo system: knowledge-base definitions,
//! per-session finding state, report headers and collaborator contracts.

pub mod error;
pub mod models;
