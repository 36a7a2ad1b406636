//! Holds the fonts of a document.

use std::collections::HashMap;

use freetype::Library;
use printpdf::PdfDocumentReference;

use crate::fonts::{Font, FontData};
use crate::{Error, Result};

/// This struct holds the fonts of a document.
pub struct FontManager {
    /// The hashmap that associates names of fonts with fonts.
    fonts: HashMap<String, Font>,

    /// The name of the font used for captions.
    default: String,

    /// The freetype library, needed to be able to measure texts.
    ///
    /// It must be dropped after the fonts.
    library: Library,
}

impl FontManager {
    /// Creates a new font manager holding the given fonts.
    ///
    /// The first font is the default one.
    pub fn init(data: &[FontData], document: &mut PdfDocumentReference) -> Result<FontManager> {
        let first = data
            .first()
            .ok_or_else(|| Error::FontNotFound("<no font given>".into()))?;

        let mut font_manager = FontManager {
            fonts: HashMap::new(),
            default: first.name.clone(),
            library: Library::init()?,
        };

        for font in data {
            font_manager.add_font(font, document)?;
        }

        Ok(font_manager)
    }

    /// Adds a new font to the font manager.
    pub fn add_font(&mut self, data: &FontData, document: &mut PdfDocumentReference) -> Result<()> {
        let font = Font::from_bytes(&data.bytes, &self.library, document)?;
        match font.name() {
            Some(name) => debug!("loaded font {} from {}", name, data.name),
            None => warn!("font {} has no name or no style", data.name),
        }
        self.fonts.insert(data.name.clone(), font);
        Ok(())
    }

    /// Returns the font used for captions.
    pub fn default_font(&self) -> &Font {
        match self.fonts.get(&self.default) {
            Some(font) => font,
            None => unreachable!("the default font is inserted by init"),
        }
    }
}
