//! laudo-export
//!
//! DOCX generation, letterhead templates and plain-text pagination for
//! assembled reports.

pub mod docx;
pub mod error;
pub mod paginate;
pub mod render;
pub mod styles;
