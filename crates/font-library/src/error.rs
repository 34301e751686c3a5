//! Error types for building a font library.

use std::result;

use glob::PatternError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Font(#[from] font_variations::Error),

    #[error("invalid font directory pattern: {0}")]
    Pattern(#[from] PatternError),
}

pub type Result<T> = result::Result<T, Error>;
