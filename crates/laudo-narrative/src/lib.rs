//! laudo-narrative
//!
//! Optional free-text report generation through a local Ollama server.
//! Synchronous HTTP via ureq. Prompt building and response parsing are pure
//! and live in their own modules.

pub mod error;
pub mod ollama;
pub mod parse;
pub mod prompt;
