//! The font file collaborator: named instance coordinate tables.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;

/// Coordinates of one named instance, keyed by packed axis tag in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceCoordinates {
    pub coordinates: IndexMap<u32, f64>,
}

impl InstanceCoordinates {
    pub fn new(coordinates: impl IntoIterator<Item = (u32, f64)>) -> Self {
        Self { coordinates: coordinates.into_iter().collect() }
    }
}

/// Reads named instances out of font files.
///
/// An opened `File` owns whatever resources back it; dropping it releases them.
pub trait FontFileParser {
    type File;

    /// Open face `index` of the file at `path`.
    fn open(&self, path: &Path, index: u32) -> Result<Self::File>;

    /// Named instance records, or `None` when the file has no instance table.
    fn named_instances(&self, file: &Self::File) -> Result<Option<Vec<InstanceCoordinates>>>;

    /// Release an opened file. Called exactly once for every successful
    /// [`open`](Self::open), whatever the outcome of reading it.
    fn close(&self, file: Self::File) {
        drop(file);
    }
}
