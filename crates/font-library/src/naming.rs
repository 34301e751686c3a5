//! PostScript names for variable font instances.
//!
//! A location that matches a named instance takes that instance's name: its
//! `postScriptNameID` string when present, otherwise `Prefix-Subfamily`.
//! Other locations are named `Prefix_<value><tag>` over the non-default axes.

use read_fonts::{
    FontRef,
    types::{NameId, Tag},
};
use skrifa::MetadataProvider;

/// Coordinates closer than this are treated as equal.
const COORD_EPSILON: f32 = 1.0 / 1024.0;

/// English (or first available) string for `id`.
pub(crate) fn localized(font: &FontRef, id: NameId) -> Option<String> {
    font.localized_strings(id).english_or_first().map(|s| s.to_string())
}

/// Keep only ASCII letters and digits.
fn postscript_safe(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Name ID 6, or `fallback` when the font has none.
pub(crate) fn base_name(font: &FontRef, fallback: &str) -> String {
    localized(font, NameId::POSTSCRIPT_NAME).unwrap_or_else(|| fallback.to_owned())
}

/// Variations PostScript name prefix (name ID 25), else the family name
/// made PostScript-safe, else the base PostScript name.
fn prefix(font: &FontRef, fallback: &str) -> String {
    if let Some(prefix) = localized(font, NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX) {
        return prefix;
    }
    [NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME]
        .into_iter()
        .filter_map(|id| localized(font, id))
        .map(|family| postscript_safe(&family))
        .find(|family| !family.is_empty())
        .unwrap_or_else(|| base_name(font, fallback))
}

fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

/// PostScript name of `font` at `location` (user coordinates by axis tag;
/// axes not listed sit at their default).
pub(crate) fn postscript_name(font: &FontRef, fallback: &str, location: &[(Tag, f32)]) -> String {
    let axes = font.axes();
    if axes.is_empty() {
        return base_name(font, fallback);
    }

    let coords: Vec<(Tag, f32, f32)> = axes
        .iter()
        .map(|axis| {
            let value = location
                .iter()
                .rev()
                .find(|(tag, _)| *tag == axis.tag())
                .map_or(axis.default_value(), |&(_, value)| value);
            (axis.tag(), value, axis.default_value())
        })
        .collect();

    let named = font.named_instances().iter().find(|instance| {
        instance.user_coords().count() == coords.len()
            && instance
                .user_coords()
                .zip(&coords)
                .all(|(a, &(_, b, _))| (a - b).abs() < COORD_EPSILON)
    });

    if let Some(instance) = named {
        if let Some(name) = instance.postscript_name_id().and_then(|id| localized(font, id)) {
            return name;
        }
        if let Some(subfamily) = localized(font, instance.subfamily_name_id()) {
            return format!("{}-{}", prefix(font, fallback), postscript_safe(&subfamily));
        }
    }

    let moved: Vec<String> = coords
        .iter()
        .filter(|(_, value, default)| (value - default).abs() >= COORD_EPSILON)
        .map(|(tag, value, _)| format!("{}{tag}", format_value(*value)))
        .collect();

    if moved.is_empty() {
        base_name(font, fallback)
    } else {
        format!("{}_{}", prefix(font, fallback), moved.join("_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_values() {
        assert_eq!(format_value(700.0), "700");
        assert_eq!(format_value(-12.0), "-12");
        assert_eq!(format_value(87.5), "87.5");
        assert_eq!(format_value(0.125), "0.125");
    }

    #[test]
    fn postscript_safe_strips_everything_else() {
        assert_eq!(postscript_safe("Condensed Light"), "CondensedLight");
        assert_eq!(postscript_safe("Noto Sans (Mono) 2"), "NotoSansMono2");
        assert_eq!(postscript_safe("Caf\u{E9}"), "Caf");
    }

    #[test]
    fn static_font_uses_base_name() {
        let font = FontRef::new(font_test_data::CMAP12_FONT1).unwrap();
        let name = postscript_name(&font, "cmap12", &[(Tag::new(b"wght"), 700.0)]);
        assert_eq!(name, base_name(&font, "cmap12"));
    }

    #[test]
    fn vazirmatn_named_instances_use_subfamily() {
        let font = FontRef::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let wght = Tag::new(b"wght");
        let bold = postscript_name(&font, "vazirmatn", &[(wght, 700.0)]);
        let thin = postscript_name(&font, "vazirmatn", &[(wght, 100.0)]);
        assert!(bold.ends_with("-Bold"), "{bold}");
        assert!(thin.ends_with("-Thin"), "{thin}");
        assert_eq!(bold.trim_end_matches("-Bold"), thin.trim_end_matches("-Thin"));
    }

    #[test]
    fn vazirmatn_arbitrary_location_lists_axis_values() {
        let font = FontRef::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let name = postscript_name(&font, "vazirmatn", &[(Tag::new(b"wght"), 650.0)]);
        assert!(name.ends_with("_650wght"), "{name}");
    }
}
