//! The font system collaborator: name resolution, axis metadata and instantiation.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::Result;

/// A variation axis as reported by a font system.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRecord {
    /// Packed axis tag (see [`decode_tag`](crate::decode_tag)).
    pub identifier: u32,
    /// Display name of the axis, e.g. "Weight".
    pub name: String,
    pub min_value: f64,
    pub max_value: f64,
    pub default_value: f64,
}

/// The file backing a font, and which face of it when the file is a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSource {
    pub path: PathBuf,
    /// Face index within the file; 0 for single-face files.
    pub index: u32,
}

impl FaceSource {
    pub fn new(path: impl Into<PathBuf>, index: u32) -> Self {
        Self { path: path.into(), index }
    }
}

/// Axis values keyed by display name, as passed to [`FontSystem::instantiate`].
pub type VariationRequest = IndexMap<String, f64>;

/// A source of fonts that knows about variation axes.
///
/// `Font` is whatever handle the system hands out; it is dropped when no
/// longer needed, so implementations release resources in `Drop`.
pub trait FontSystem {
    type Font;

    /// Resolve a font by name at a nominal size.
    ///
    /// `Ok(None)` means the system produced no handle. Names the system does
    /// not know should fail with [`Error::UnresolvedFont`](crate::Error::UnresolvedFont).
    fn resolve_font(&self, name: &str, size: f64) -> Result<Option<Self::Font>>;

    /// Variation axes of `font` in the order the system reports them, or
    /// `None` for fonts without variation support.
    fn variation_axes(&self, font: &Self::Font) -> Result<Option<Vec<AxisRecord>>>;

    /// File and face index backing `font`, if any.
    fn font_file(&self, font: &Self::Font) -> Option<FaceSource>;

    /// Create a copy of `font` at the given display-name keyed coordinates.
    fn instantiate(&self, font: &Self::Font, variations: &VariationRequest) -> Result<Self::Font>;

    /// The PostScript name of `font`.
    fn postscript_name(&self, font: &Self::Font) -> Result<String>;
}
