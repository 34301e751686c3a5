//! Error types for variation catalog lookups.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

/// Errors that can occur while building axis or named instance catalogs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("variation tag must be exactly 4 characters, got {len}: {tag:?}")]
    InvalidTag { tag: String, len: usize },

    #[error("font not found: {0}")]
    UnresolvedFont(String),

    #[error("named instance in {font} references axis {tag:?} not reported by the font system")]
    UnresolvedAxis { font: String, tag: String },

    #[error("failed to read font file {}: {source}", .path.display())]
    FontFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font file {}: {source}", .path.display())]
    FontParse {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("failed to instantiate {font}: {reason}")]
    Instantiate { font: String, reason: String },
}

impl Error {
    /// True for errors raised while opening or parsing a font file.
    pub fn is_font_file_error(&self) -> bool {
        matches!(self, Self::FontFile { .. } | Self::FontParse { .. })
    }
}

pub type Result<T> = result::Result<T, Error>;
