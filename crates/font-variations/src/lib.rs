//! # Font Variations
//!
//! Variation axes and named instances of variable fonts, looked up by font
//! name and cached per name.
//!
//! The font system (name resolution, axis metadata, instantiation) and the
//! font file parser (named instance tables) are traits, so the lookups work
//! against any backend. [`FvarReader`] reads instance tables with read-fonts.
//!
//! ## Example
//!
//! ```no_run
//! # fn run<S: font_variations::FontSystem>(system: S) -> font_variations::Result<()> {
//! use font_variations::VariationCatalog;
//!
//! let catalog = VariationCatalog::new(system);
//! for (tag, axis) in catalog.axis_catalog("Skia-Regular")?.iter() {
//!     println!("{tag}: {} {}..{}", axis.name, axis.min_value, axis.max_value);
//! }
//! for (name, location) in catalog.named_instances("Skia-Regular")?.iter() {
//!     println!("{name}: {location:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod axes;
mod cache;
mod catalog;
mod config;
mod error;
mod fvar;
mod instances;
mod parser;
mod system;
mod tag;

pub use axes::{AxisCatalog, AxisDescriptor, build_axis_catalog};
pub use cache::Memo;
pub use catalog::VariationCatalog;
pub use config::{Config, NOMINAL_FONT_SIZE, UnmatchedAxisPolicy};
pub use error::{Error, Result};
pub use fvar::{FontFile, FvarReader};
pub use instances::{Coordinates, NamedInstanceCatalog, resolve_named_instances};
pub use parser::{FontFileParser, InstanceCoordinates};
pub use system::{AxisRecord, FaceSource, FontSystem, VariationRequest};
pub use tag::{TAG_LEN, decode_tag, encode_tag};
