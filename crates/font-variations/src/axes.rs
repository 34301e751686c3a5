//! Axis catalog: tag -> axis metadata, in the order the font system reports axes.

use indexmap::IndexMap;
use log::debug;

use crate::{error::Result, system::FontSystem, tag::decode_tag};

/// Metadata for one variation axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDescriptor {
    pub tag: String,
    pub name: String,
    pub min_value: f64,
    pub max_value: f64,
    pub default_value: f64,
}

/// Axes keyed by tag in reported order. Empty for fonts without variations.
pub type AxisCatalog = IndexMap<String, AxisDescriptor>;

/// Query `system` for the variation axes of `font_name`.
///
/// # Errors
///
/// Whatever the font system reports when it cannot resolve `font_name`.
pub fn build_axis_catalog<S: FontSystem>(
    system: &S,
    font_name: &str,
    size: f64,
) -> Result<AxisCatalog> {
    let mut catalog = AxisCatalog::new();

    let Some(font) = system.resolve_font(font_name, size)? else {
        debug!("{font_name}: no font handle");
        return Ok(catalog);
    };
    let Some(axes) = system.variation_axes(&font)? else {
        debug!("{font_name}: not a variable font");
        return Ok(catalog);
    };

    for axis in axes {
        let tag = decode_tag(axis.identifier);
        catalog.insert(
            tag.clone(),
            AxisDescriptor {
                tag,
                name: axis.name,
                min_value: axis.min_value,
                max_value: axis.max_value,
                default_value: axis.default_value,
            },
        );
    }

    debug!("{font_name}: {} axes", catalog.len());
    Ok(catalog)
}
