//! Plain-text rendering of catalogs.

use std::fmt::Write;

use font_variations::{AxisCatalog, NamedInstanceCatalog};

pub fn axes_report(axes: &AxisCatalog) -> String {
    if axes.is_empty() {
        return "Not a variable font\n".to_owned();
    }
    let width = axes.values().map(|axis| axis.name.len()).max().unwrap_or(0);
    let mut out = String::from("Variable font axes:\n");
    for (tag, axis) in axes {
        let _ = writeln!(
            out,
            "  {tag:4}  {:width$}  {:6} .. {:6} (default: {})",
            axis.name, axis.min_value, axis.max_value, axis.default_value,
        );
    }
    out
}

pub fn instances_report(instances: &NamedInstanceCatalog) -> String {
    if instances.is_empty() {
        return "No named instances\n".to_owned();
    }
    let width = instances.keys().map(String::len).max().unwrap_or(0);
    let mut out = String::from("Named instances:\n");
    for (name, coordinates) in instances {
        let location: Vec<String> =
            coordinates.iter().map(|(tag, value)| format!("{tag}={value}")).collect();
        let _ = writeln!(out, "  {name:width$}  {}", location.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use font_variations::{AxisDescriptor, Coordinates};

    use super::*;

    #[test]
    fn empty_catalogs() {
        assert_eq!(axes_report(&AxisCatalog::new()), "Not a variable font\n");
        assert_eq!(instances_report(&NamedInstanceCatalog::new()), "No named instances\n");
    }

    #[test]
    fn axes_in_catalog_order() {
        let mut axes = AxisCatalog::new();
        for (tag, name, min, default, max) in
            [("wght", "Weight", 100.0, 400.0, 900.0), ("wdth", "Width", 75.0, 100.0, 125.0)]
        {
            axes.insert(
                tag.to_owned(),
                AxisDescriptor {
                    tag: tag.to_owned(),
                    name: name.to_owned(),
                    min_value: min,
                    max_value: max,
                    default_value: default,
                },
            );
        }
        let report = axes_report(&axes);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Variable font axes:");
        assert_eq!(lines[1], "  wght  Weight     100 ..    900 (default: 400)");
        assert_eq!(lines[2], "  wdth  Width       75 ..    125 (default: 100)");
    }

    #[test]
    fn instances_list_tag_keyed_coordinates() {
        let mut instances = NamedInstanceCatalog::new();
        let bold: Coordinates =
            [("wght".to_owned(), 700.0), ("wdth".to_owned(), 87.5)].into_iter().collect();
        instances.insert("TestSans-Bold".to_owned(), bold);
        assert_eq!(
            instances_report(&instances),
            "Named instances:\n  TestSans-Bold  wght=700 wdth=87.5\n"
        );
    }
}
