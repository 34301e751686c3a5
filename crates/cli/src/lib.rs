//! fontvar CLI library.

pub mod cli;
pub mod report;
