//! Edge-list input for bulk graph construction.

pub mod reader;

pub use reader::{EdgeListFormat, EdgeListReader};
