//! # Font Library
//!
//! A [`FontSystem`] over font files on disk.
//!
//! Faces are indexed by PostScript name, full name and file stem. Axis
//! metadata comes from `fvar` and `name`; instantiated fonts are named the
//! way variable font PostScript names are usually derived.
//!
//! ## Example
//!
//! ```no_run
//! use font_library::FontLibrary;
//! use font_variations::VariationCatalog;
//!
//! let library = FontLibrary::with_dirs(["/Library/Fonts"]).unwrap();
//! let catalog = VariationCatalog::new(library);
//! let axes = catalog.axis_catalog("Skia-Regular").unwrap();
//! ```

mod error;
mod naming;

use std::{
    collections::{BTreeSet, HashMap},
    env,
    fs::read,
    path::{Path, PathBuf},
    sync::Arc,
};

use font_variations::{AxisRecord, FaceSource, FontSystem, VariationRequest};
use glob::{MatchOptions, Pattern, glob_with};
use log::{debug, warn};
use read_fonts::{
    FileRef, FontRef,
    types::{NameId, Tag},
};
use skrifa::MetadataProvider;

pub use error::{Error, Result};

/// File extensions scanned by [`FontLibrary::add_dir`].
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

#[derive(Debug)]
struct FaceEntry {
    path: PathBuf,
    index: u32,
    stem: String,
}

/// A resolved face, optionally moved to a location in its design space.
#[derive(Debug, Clone)]
pub struct LibraryFont {
    face: Arc<FaceEntry>,
    data: Arc<Vec<u8>>,
    size: f64,
    location: Vec<(Tag, f32)>,
}

impl LibraryFont {
    pub fn path(&self) -> &Path {
        &self.face.path
    }

    /// Index of the face within its file (non-zero only for collections).
    pub fn index(&self) -> u32 {
        self.face.index
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// User-space coordinates this font was instantiated at.
    pub fn location(&self) -> &[(Tag, f32)] {
        &self.location
    }

    fn font_ref(&self) -> font_variations::Result<FontRef<'_>> {
        FontRef::from_index(&self.data, self.face.index).map_err(|source| {
            font_variations::Error::FontParse { path: self.face.path.clone(), source }
        })
    }
}

/// Font files indexed by name.
#[derive(Debug, Default)]
pub struct FontLibrary {
    faces: Vec<Arc<FaceEntry>>,
    names: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every font under `dirs`.
    pub fn with_dirs<I, P>(dirs: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut library = Self::new();
        for dir in dirs {
            library.add_dir(dir.as_ref())?;
        }
        Ok(library)
    }

    /// Index the platform's usual font directories.
    pub fn system() -> Result<Self> {
        Self::with_dirs(default_font_dirs())
    }

    /// Index every font file below `dir`, returning the number of faces added.
    ///
    /// Files that cannot be read or parsed are skipped with a warning.
    pub fn add_dir(&mut self, dir: &Path) -> Result<usize> {
        let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
        let root = Pattern::escape(&dir.to_string_lossy());
        let mut added = 0;
        for ext in FONT_EXTENSIONS {
            let pattern = Path::new(&root).join("**").join(format!("*.{ext}"));
            for path in glob_with(&pattern.to_string_lossy(), options)?.filter_map(|p| p.ok()) {
                match self.add_file(&path) {
                    Ok(count) => added += count,
                    Err(e) => warn!("Skipping {}: {e}", path.display()),
                }
            }
        }
        debug!("Indexed {added} faces from {}", dir.display());
        Ok(added)
    }

    /// Index every face in a font file, returning the number of faces added.
    ///
    /// Nothing is indexed unless every face in the file parses.
    pub fn add_file(&mut self, path: &Path) -> Result<usize> {
        let data = read(path)
            .map_err(|source| font_variations::Error::FontFile { path: path.into(), source })?;
        let parse_error =
            |source| font_variations::Error::FontParse { path: path.to_path_buf(), source };
        let file = FileRef::new(&data).map_err(parse_error)?;

        let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let mut pending = Vec::new();
        for (index, font) in file.fonts().enumerate() {
            let font = font.map_err(parse_error)?;
            let mut keys = Vec::new();
            keys.extend(naming::localized(&font, NameId::POSTSCRIPT_NAME));
            keys.extend(naming::localized(&font, NameId::FULL_NAME));
            if index == 0 && !stem.is_empty() {
                keys.push(stem.clone());
            }
            let entry =
                FaceEntry { path: path.to_path_buf(), index: index as u32, stem: stem.clone() };
            pending.push((entry, keys));
        }

        let added = pending.len();
        for (entry, keys) in pending {
            let id = self.faces.len();
            for key in keys {
                self.folded.entry(key.to_ascii_lowercase()).or_insert(id);
                self.names.entry(key).or_insert(id);
            }
            self.faces.push(Arc::new(entry));
        }
        Ok(added)
    }

    /// Number of indexed faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Every name that resolves to a face, sorted.
    pub fn font_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.names.keys().map(String::as_str).collect();
        names.into_iter().collect()
    }

    /// Exact match first, then ASCII case-insensitive.
    fn lookup(&self, name: &str) -> Option<&Arc<FaceEntry>> {
        self.names
            .get(name)
            .or_else(|| self.folded.get(&name.to_ascii_lowercase()))
            .map(|&id| &self.faces[id])
    }
}

/// Display name of an axis, falling back to its tag.
fn axis_name(font: &FontRef, name_id: NameId, tag: Tag) -> String {
    naming::localized(font, name_id).unwrap_or_else(|| tag.to_string())
}

impl FontSystem for FontLibrary {
    type Font = LibraryFont;

    fn resolve_font(&self, name: &str, size: f64) -> font_variations::Result<Option<LibraryFont>> {
        let face = self
            .lookup(name)
            .ok_or_else(|| font_variations::Error::UnresolvedFont(name.to_owned()))?;
        let data = read(&face.path).map_err(|source| font_variations::Error::FontFile {
            path: face.path.clone(),
            source,
        })?;
        debug!("Resolved {name} to {}#{}", face.path.display(), face.index);
        Ok(Some(LibraryFont {
            face: Arc::clone(face),
            data: Arc::new(data),
            size,
            location: Vec::new(),
        }))
    }

    fn variation_axes(
        &self,
        font: &LibraryFont,
    ) -> font_variations::Result<Option<Vec<AxisRecord>>> {
        let font_ref = font.font_ref()?;
        let axes = font_ref.axes();
        if axes.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            axes.iter()
                .map(|axis| AxisRecord {
                    identifier: u32::from_be_bytes(axis.tag().to_be_bytes()),
                    name: axis_name(&font_ref, axis.name_id(), axis.tag()),
                    min_value: f64::from(axis.min_value()),
                    max_value: f64::from(axis.max_value()),
                    default_value: f64::from(axis.default_value()),
                })
                .collect(),
        ))
    }

    fn font_file(&self, font: &LibraryFont) -> Option<FaceSource> {
        Some(FaceSource::new(font.face.path.clone(), font.face.index))
    }

    /// Unknown axis names are ignored; values are clamped to the axis range.
    fn instantiate(
        &self,
        font: &LibraryFont,
        variations: &VariationRequest,
    ) -> font_variations::Result<LibraryFont> {
        let font_ref = font.font_ref()?;
        let mut location = font.location.clone();
        for axis in font_ref.axes().iter() {
            let name = axis_name(&font_ref, axis.name_id(), axis.tag());
            let Some(&value) = variations.get(&name) else {
                continue;
            };
            let (min, max) = (axis.min_value(), axis.max_value().max(axis.min_value()));
            let value = (value as f32).clamp(min, max);
            location.retain(|(tag, _)| *tag != axis.tag());
            location.push((axis.tag(), value));
        }
        Ok(LibraryFont { location, ..font.clone() })
    }

    fn postscript_name(&self, font: &LibraryFont) -> font_variations::Result<String> {
        let font_ref = font.font_ref()?;
        Ok(naming::postscript_name(&font_ref, &font.face.stem, &font.location))
    }
}

/// Conventional font directories for the current platform.
pub fn default_font_dirs() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();
    if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.extend(home.map(|h| h.join("Library/Fonts")));
    } else if cfg!(windows) {
        let windir =
            env::var_os("WINDIR").map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from);
        dirs.push(windir.join("Fonts"));
        dirs.extend(
            env::var_os("LOCALAPPDATA").map(|p| PathBuf::from(p).join(r"Microsoft\Windows\Fonts")),
        );
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = home {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
    }
    dirs
}
