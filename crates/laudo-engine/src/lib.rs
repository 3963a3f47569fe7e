//! laudo-engine
//!
//! The finding-selection state machine and report assembly. Synchronous and
//! side-effect free apart from `tracing` events: the rules engine is the only
//! writer of a [`store::FindingStateStore`], the assembler only reads it.

pub mod action;
pub mod assemble;
pub mod error;
pub mod narrative;
pub mod rules;
pub mod session;
pub mod store;
