//! Catalog configuration.

/// Size at which fonts are resolved; only axis metadata is read, so any size works.
pub const NOMINAL_FONT_SIZE: f64 = 12.0;

/// What to do when a named instance uses an axis tag the font system did not report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedAxisPolicy {
    /// Fail the whole catalog with `Error::UnresolvedAxis`.
    #[default]
    Fail,
    /// Leave the axis out of the instantiation request and keep going.
    Skip,
}

/// Options for [`VariationCatalog`](crate::VariationCatalog).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub nominal_size: f64,
    pub unmatched_axes: UnmatchedAxisPolicy,
    /// Maximum cached fonts per catalog kind; `None` keeps everything.
    pub cache_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nominal_size: NOMINAL_FONT_SIZE,
            unmatched_axes: UnmatchedAxisPolicy::default(),
            cache_capacity: None,
        }
    }
}

impl Config {
    pub fn with_nominal_size(mut self, size: f64) -> Self {
        self.nominal_size = size;
        self
    }

    pub fn with_unmatched_axes(mut self, policy: UnmatchedAxisPolicy) -> Self {
        self.unmatched_axes = policy;
        self
    }

    pub fn skip_unmatched_axes(self) -> Self {
        self.with_unmatched_axes(UnmatchedAxisPolicy::Skip)
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }
}
