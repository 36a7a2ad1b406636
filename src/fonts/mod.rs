//! This module contains everything that helps us dealing with fonts.

pub mod manager;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use freetype::{face, Face, Library};
use printpdf::types::plugins::graphics::two_dimensional::font::IndirectFontRef;
use printpdf::{PdfDocumentReference, Pt};

use crate::{Error, Result};

/// The raw content of a font file.
#[derive(Debug, Clone)]
pub struct FontData {
    /// The name of the font, used for logging.
    pub name: String,

    /// The bytes of the font file.
    pub bytes: Vec<u8>,
}

impl FontData {
    /// Reads a font file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FontData> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|_| Error::FontNotFound(PathBuf::from(path)))?;

        Ok(FontData {
            name: path.display().to_string(),
            bytes,
        })
    }
}

/// A font that contains the printpdf object font needed to render text and the freetype font
/// needed to measure text.
#[derive(Debug)]
pub struct Font {
    /// The freetype face.
    freetype: Face,

    /// The printpdf font.
    printpdf: IndirectFontRef,
}

impl Font {
    /// Creates a font from a byte array.
    pub fn from_bytes(
        bytes: &[u8],
        library: &Library,
        document: &mut PdfDocumentReference,
    ) -> Result<Font> {
        let cursor = Cursor::new(bytes);
        Ok(Font {
            freetype: library.new_memory_face(bytes.to_vec(), 0)?,
            printpdf: document.add_external_font(cursor)?,
        })
    }

    /// Computes the text width of the font at a specified size.
    pub fn text_width(&self, text: &str, scale: Pt) -> Pt {
        let scale = scale.0;

        // vertical scale for the space character
        let vert_scale = {
            if self
                .freetype
                .load_char(0x0020, face::LoadFlag::NO_SCALE)
                .is_ok()
            {
                self.freetype.glyph().metrics().vertAdvance
            } else {
                1000
            }
        };

        // calculate the width of the text in unscaled units
        let sum_width = text.chars().fold(0, |acc, ch| {
            let is_ok = self
                .freetype
                .load_char(ch as usize, face::LoadFlag::NO_SCALE)
                .is_ok();

            if is_ok {
                acc + self.freetype.glyph().metrics().horiAdvance
            } else {
                acc
            }
        });

        Pt(sum_width as f64 / (vert_scale as f64 / scale))
    }

    /// Returns a reference to the printpdf font.
    pub fn printpdf(&self) -> &IndirectFontRef {
        &self.printpdf
    }

    /// Returns the family and style of the font, if the file declares them.
    pub fn name(&self) -> Option<String> {
        match (self.freetype.family_name(), self.freetype.style_name()) {
            (Some(family), Some(style)) => Some(format!("{} {}", family, style)),
            _ => None,
        }
    }
}
