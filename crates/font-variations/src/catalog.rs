//! Memoized catalog lookups over a font system and a font file parser.

use std::sync::Arc;

use crate::{
    axes::{AxisCatalog, build_axis_catalog},
    cache::Memo,
    config::Config,
    error::Result,
    fvar::FvarReader,
    instances::{NamedInstanceCatalog, resolve_named_instances},
    parser::FontFileParser,
    system::FontSystem,
};

/// Axis and named instance catalogs, cached per font name.
///
/// The two caches are independent: warming one never fills the other.
/// Failed lookups are not cached.
#[derive(Debug)]
pub struct VariationCatalog<S, P = FvarReader> {
    system: S,
    parser: P,
    config: Config,
    axes: Memo<Arc<AxisCatalog>>,
    instances: Memo<Arc<NamedInstanceCatalog>>,
}

impl<S: FontSystem> VariationCatalog<S> {
    /// Catalog over `system`, reading instance tables with [`FvarReader`].
    pub fn new(system: S) -> Self {
        Self::with_parser(system, FvarReader, Config::default())
    }
}

impl<S: FontSystem, P: FontFileParser> VariationCatalog<S, P> {
    pub fn with_parser(system: S, parser: P, config: Config) -> Self {
        let capacity = config.cache_capacity;
        Self {
            system,
            parser,
            config,
            axes: Memo::new(capacity),
            instances: Memo::new(capacity),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.axes = Memo::new(config.cache_capacity);
        self.instances = Memo::new(config.cache_capacity);
        self.config = config;
        self
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Variation axes of `font_name`, keyed by tag in reported order.
    pub fn axis_catalog(&self, font_name: &str) -> Result<Arc<AxisCatalog>> {
        self.axes.get_or_try_insert_with(font_name, || {
            build_axis_catalog(&self.system, font_name, self.config.nominal_size).map(Arc::new)
        })
    }

    /// Named instances of `font_name`, keyed by PostScript name.
    pub fn named_instances(&self, font_name: &str) -> Result<Arc<NamedInstanceCatalog>> {
        self.instances.get_or_try_insert_with(font_name, || {
            resolve_named_instances(
                &self.system,
                &self.parser,
                font_name,
                self.config.nominal_size,
                self.config.unmatched_axes,
            )
            .map(Arc::new)
        })
    }

    /// Drop the cached results for one font.
    pub fn forget(&self, font_name: &str) {
        self.axes.remove(font_name);
        self.instances.remove(font_name);
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.axes.clear();
        self.instances.clear();
    }

    /// Number of fonts cached as (axis catalogs, named instance catalogs).
    pub fn cached(&self) -> (usize, usize) {
        (self.axes.len(), self.instances.len())
    }
}
