pub mod finding;
pub mod narrative;
pub mod report;
pub mod selection;
