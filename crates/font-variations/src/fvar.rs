//! [`FontFileParser`] backed by the `fvar` table, read with read-fonts.

use std::{
    fs::read,
    path::{Path, PathBuf},
};

use log::debug;
use read_fonts::{FontRef, ReadError, TableProvider};

use crate::{
    error::{Error, Result},
    parser::{FontFileParser, InstanceCoordinates},
};

/// Font file contents held in memory while its instances are read.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
    index: u32,
    data: Vec<u8>,
}

impl FontFile {
    /// Wrap font data that has already been loaded from `path`.
    pub fn from_data(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self { path: path.into(), index: 0, data }
    }

    /// Select which face of a collection to read.
    pub fn with_index(self, index: u32) -> Self {
        Self { index, ..self }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Reads named instances from the `fvar` table of one face in a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FvarReader;

impl FontFileParser for FvarReader {
    type File = FontFile;

    fn open(&self, path: &Path, index: u32) -> Result<FontFile> {
        let data = read(path).map_err(|source| Error::FontFile { path: path.into(), source })?;
        debug!("Opened {}#{index} ({} bytes)", path.display(), data.len());
        Ok(FontFile::from_data(path, data).with_index(index))
    }

    fn named_instances(&self, file: &FontFile) -> Result<Option<Vec<InstanceCoordinates>>> {
        let parse_error = |source| Error::FontParse { path: file.path.clone(), source };

        let font = FontRef::from_index(&file.data, file.index).map_err(parse_error)?;
        let fvar = match font.fvar() {
            Ok(fvar) => fvar,
            Err(ReadError::TableIsMissing(_)) => return Ok(None),
            Err(e) => return Err(parse_error(e)),
        };

        let tags: Vec<u32> = fvar
            .axes()
            .map_err(parse_error)?
            .iter()
            .map(|axis| u32::from_be_bytes(axis.axis_tag().to_be_bytes()))
            .collect();

        let instances = fvar.instances().map_err(parse_error)?;
        let mut records = Vec::with_capacity(instances.len());
        for instance in instances.iter() {
            let instance = instance.map_err(parse_error)?;
            let values = instance.coordinates.iter().map(|value| value.get().to_f64());
            records.push(InstanceCoordinates::new(tags.iter().copied().zip(values)));
        }

        debug!("{}: {} axes, {} named instances", file.path.display(), tags.len(), records.len());
        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_tag;

    /// Pack fonts into a TrueType collection, rebasing each table directory.
    fn collection(fonts: &[&[u8]]) -> Vec<u8> {
        let mut out = b"ttcf".to_vec();
        out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        out.extend_from_slice(&(fonts.len() as u32).to_be_bytes());
        let mut bases = Vec::new();
        let mut base = 12 + 4 * fonts.len();
        for font in fonts {
            bases.push(base as u32);
            base += font.len().next_multiple_of(4);
        }
        for base in &bases {
            out.extend_from_slice(&base.to_be_bytes());
        }
        for (font, base) in fonts.iter().zip(bases) {
            let mut font = font.to_vec();
            let num_tables = u16::from_be_bytes([font[4], font[5]]) as usize;
            for i in 0..num_tables {
                let at = 12 + 16 * i + 8;
                let offset = u32::from_be_bytes(font[at..at + 4].try_into().unwrap());
                font[at..at + 4].copy_from_slice(&(offset + base).to_be_bytes());
            }
            font.resize(font.len().next_multiple_of(4), 0);
            out.extend_from_slice(&font);
        }
        out
    }

    #[test]
    fn reads_vazirmatn_instances() {
        let file = FontFile::from_data("vazirmatn.ttf", font_test_data::VAZIRMATN_VAR.to_vec());
        let instances = FvarReader.named_instances(&file).unwrap().unwrap();
        let wght = encode_tag("wght").unwrap();

        assert_eq!(instances.len(), 9);
        for (i, instance) in instances.iter().enumerate() {
            assert_eq!(instance.coordinates.len(), 1);
            assert_eq!(instance.coordinates[&wght], 100.0 * (i + 1) as f64);
        }
    }

    #[test]
    fn static_font_has_no_instance_table() {
        let file = FontFile::from_data("cmap12.ttf", font_test_data::CMAP12_FONT1.to_vec());
        assert!(FvarReader.named_instances(&file).unwrap().is_none());
    }

    #[test]
    fn reads_the_selected_collection_face() {
        let data = collection(&[font_test_data::CMAP12_FONT1, font_test_data::VAZIRMATN_VAR]);

        let first = FontFile::from_data("pair.ttc", data.clone());
        assert!(FvarReader.named_instances(&first).unwrap().is_none());

        let second = FontFile::from_data("pair.ttc", data).with_index(1);
        assert_eq!(FvarReader.named_instances(&second).unwrap().unwrap().len(), 9);
    }

    #[test]
    fn face_index_past_the_end_is_a_parse_error() {
        let file = FontFile::from_data("vazirmatn.ttf", font_test_data::VAZIRMATN_VAR.to_vec())
            .with_index(1);
        assert!(matches!(FvarReader.named_instances(&file), Err(Error::FontParse { .. })));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let file = FontFile::from_data("junk.ttf", b"definitely not a font".to_vec());
        let err = FvarReader.named_instances(&file).unwrap_err();
        assert!(err.is_font_file_error());
        assert!(matches!(err, Error::FontParse { .. }));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = FvarReader.open(Path::new("/nonexistent/fontvar/missing.ttf"), 0).unwrap_err();
        assert!(matches!(err, Error::FontFile { .. }));
    }
}
