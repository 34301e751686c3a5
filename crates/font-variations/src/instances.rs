//! Named instance catalog: PostScript name -> tag-keyed coordinates.
//!
//! Instance coordinates come from the font file, keyed by axis tag. The font
//! system only understands display names, so each record is translated
//! through the axis list the system reports before asking it to instantiate
//! and name the font. The catalog keeps the tag-keyed coordinates from the file.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::{
    config::UnmatchedAxisPolicy,
    error::{Error, Result},
    parser::{FontFileParser, InstanceCoordinates},
    system::{FontSystem, VariationRequest},
    tag::decode_tag,
};

/// Axis values keyed by tag, e.g. `{"wght": 700.0}`.
pub type Coordinates = IndexMap<String, f64>;

/// Named instances keyed by PostScript name, in file order.
pub type NamedInstanceCatalog = IndexMap<String, Coordinates>;

/// Resolve every named instance of `font_name` to its PostScript name.
///
/// Fonts without a handle, a backing file, variation axes or an instance
/// table yield an empty catalog. Once opened, the font file is handed back
/// to [`FontFileParser::close`] before returning, on error paths too.
///
/// # Errors
///
/// - `Error::UnresolvedAxis` if an instance uses an axis the font system did
///   not report and `policy` is [`UnmatchedAxisPolicy::Fail`]
/// - font file, parse and instantiation errors from the collaborators
pub fn resolve_named_instances<S, P>(
    system: &S,
    parser: &P,
    font_name: &str,
    size: f64,
    policy: UnmatchedAxisPolicy,
) -> Result<NamedInstanceCatalog>
where
    S: FontSystem,
    P: FontFileParser,
{
    let Some(font) = system.resolve_font(font_name, size)? else {
        return Ok(NamedInstanceCatalog::new());
    };
    let Some(source) = system.font_file(&font) else {
        debug!("{font_name}: no backing file");
        return Ok(NamedInstanceCatalog::new());
    };
    let axes = match system.variation_axes(&font)? {
        Some(axes) if !axes.is_empty() => axes,
        _ => return Ok(NamedInstanceCatalog::new()),
    };
    let axis_names: HashMap<String, String> =
        axes.into_iter().map(|axis| (decode_tag(axis.identifier), axis.name)).collect();

    let file = parser.open(&source.path, source.index)?;
    let catalog = collect_instances(system, parser, &font, &file, font_name, &axis_names, policy);
    parser.close(file);

    let catalog = catalog?;
    debug!("{font_name}: {} named instances", catalog.len());
    Ok(catalog)
}

/// Name every instance record in an opened file.
fn collect_instances<S, P>(
    system: &S,
    parser: &P,
    font: &S::Font,
    file: &P::File,
    font_name: &str,
    axis_names: &HashMap<String, String>,
    policy: UnmatchedAxisPolicy,
) -> Result<NamedInstanceCatalog>
where
    S: FontSystem,
    P: FontFileParser,
{
    let mut catalog = NamedInstanceCatalog::new();
    let Some(records) = parser.named_instances(file)? else {
        return Ok(catalog);
    };

    for record in records {
        let coordinates = tag_keyed(&record);
        let request = translate(font_name, &coordinates, axis_names, policy)?;
        let instance = system.instantiate(font, &request)?;
        let postscript_name = system.postscript_name(&instance)?;
        if catalog.insert(postscript_name.clone(), coordinates).is_some() {
            debug!("{font_name}: duplicate instance {postscript_name}, keeping the later one");
        }
    }
    Ok(catalog)
}

fn tag_keyed(record: &InstanceCoordinates) -> Coordinates {
    record.coordinates.iter().map(|(&tag, &value)| (decode_tag(tag), value)).collect()
}

/// Re-key tag-keyed coordinates by the font system's axis display names.
fn translate(
    font_name: &str,
    coordinates: &Coordinates,
    axis_names: &HashMap<String, String>,
    policy: UnmatchedAxisPolicy,
) -> Result<VariationRequest> {
    let mut request = VariationRequest::with_capacity(coordinates.len());
    for (tag, &value) in coordinates {
        match (axis_names.get(tag), policy) {
            (Some(name), _) => {
                request.insert(name.clone(), value);
            }
            (None, UnmatchedAxisPolicy::Skip) => {
                warn!("{font_name}: skipping axis {tag:?} not reported by the font system");
            }
            (None, UnmatchedAxisPolicy::Fail) => {
                return Err(Error::UnresolvedAxis { font: font_name.to_owned(), tag: tag.clone() });
            }
        }
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> HashMap<String, String> {
        [("wght", "Weight"), ("wdth", "Width")]
            .into_iter()
            .map(|(tag, name)| (tag.to_owned(), name.to_owned()))
            .collect()
    }

    fn coords(pairs: &[(&str, f64)]) -> Coordinates {
        pairs.iter().map(|&(tag, value)| (tag.to_owned(), value)).collect()
    }

    #[test]
    fn translate_uses_display_names() {
        let request = translate(
            "Test",
            &coords(&[("wght", 700.0), ("wdth", 75.0)]),
            &names(),
            UnmatchedAxisPolicy::Fail,
        )
        .unwrap();
        assert_eq!(request.get("Weight"), Some(&700.0));
        assert_eq!(request.get("Width"), Some(&75.0));
        assert_eq!(request.len(), 2);
    }

    #[test]
    fn translate_strict_rejects_unknown_axis() {
        let err = translate("Test", &coords(&[("opsz", 12.0)]), &names(), UnmatchedAxisPolicy::Fail)
            .unwrap_err();
        match err {
            Error::UnresolvedAxis { font, tag } => {
                assert_eq!(font, "Test");
                assert_eq!(tag, "opsz");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn translate_skip_drops_unknown_axis() {
        let request = translate(
            "Test",
            &coords(&[("opsz", 12.0), ("wght", 300.0)]),
            &names(),
            UnmatchedAxisPolicy::Skip,
        )
        .unwrap();
        assert_eq!(request.len(), 1);
        assert_eq!(request.get("Weight"), Some(&300.0));
    }

    #[test]
    fn tag_keyed_decodes_in_file_order() {
        let record = InstanceCoordinates::new([
            (u32::from_be_bytes(*b"wdth"), 100.0),
            (u32::from_be_bytes(*b"wght"), 400.0),
        ]);
        let keys: Vec<_> = tag_keyed(&record).into_keys().collect();
        assert_eq!(keys, ["wdth", "wght"]);
    }
}
