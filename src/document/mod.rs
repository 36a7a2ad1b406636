//! This module renders blocks into a pdf document.

pub mod configuration;

use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Cursor};

use printpdf::image::codecs::png::PngDecoder;
use printpdf::{Image, PdfDocument, PdfDocumentReference, PdfLayerReference, Pt};

use crate::fonts::manager::FontManager;
use crate::fonts::{Font, FontData};
use crate::layout::constants::{IMAGE_GUTTER, LINE_SPREAD};
use crate::layout::{Block, Cell, ColumnsBlock, TextAlign};
use crate::signs::Directory;
use crate::{Error, Result};

/// The resolution at which images are embedded.
const DPI: f64 = 300.0;

/// Number of points in an inch.
const PT_PER_INCH: f64 = 72.0;

/// The window that is the part of the page on which we're allowed to write.
#[derive(Copy, Clone, Debug)]
pub struct Window {
    /// The x coordinate of the window, in pt.
    pub x: Pt,

    /// The y coordinate of the window, in pt.
    pub y: Pt,

    /// The width of the window, in pt.
    pub width: Pt,

    /// The height of the window, in pt.
    pub height: Pt,
}

/// Everything the renderer needs to produce a document.
#[derive(Debug, Clone)]
pub struct DocumentDefinition {
    /// The fonts of the document, the first one is used for the captions.
    pub fonts: Vec<FontData>,

    /// The blocks, in the order they must be rendered.
    pub content: Vec<Block>,
}

/// Loads the images referenced by the blocks.
struct Images {
    /// Where the images are read from.
    store: Directory,

    /// The content of the files that were already read.
    cache: HashMap<String, Vec<u8>>,
}

impl Images {
    /// Decodes the image at a path of the store.
    fn decode(&mut self, path: &str) -> Result<Image> {
        if !self.cache.contains_key(path) {
            let file = self.store.path(path);
            let bytes = fs::read(&file).map_err(|_| Error::AssetNotFound(file))?;
            self.cache.insert(path.to_owned(), bytes);
        }

        let bytes = &self.cache[path];
        let decoder = PngDecoder::new(Cursor::new(bytes.as_slice()))?;
        Ok(Image::try_from(decoder)?)
    }
}

/// Returns the scale that makes an image of `width` x `height` pixels fit in a square of `side`.
fn fit(width: usize, height: usize, side: Pt) -> f64 {
    let largest = width.max(height).max(1) as f64 * PT_PER_INCH / DPI;
    side.0.max(0.0) / largest
}

/// Returns true if some cell of the block is an image.
fn has_images(block: &ColumnsBlock) -> bool {
    block.columns.iter().any(|c| match c {
        Cell::Image(_) => true,
        Cell::Text(_) => false,
    })
}

/// Returns the height taken by a block, including its padding.
fn block_height(block: &ColumnsBlock, width: Pt, font_size: Pt) -> Pt {
    let content = if block.columns.is_empty() {
        0.0
    } else if has_images(block) {
        width.0 / block.columns.len() as f64
    } else {
        font_size.0 * LINE_SPREAD
    };

    Pt(content + block.padding.bottom.0)
}

/// Returns the height that must be free on the page before writing the block at `index`.
///
/// A row of images is kept with the row of captions that follows it, so the room for both is
/// needed before the images are placed.
fn keep_height(blocks: &[Block], index: usize, width: Pt, font_size: Pt) -> Pt {
    let block = match blocks.get(index) {
        Some(Block::Columns(block)) => block,
        Some(Block::PageBreak) | None => return Pt(0.0),
    };

    let mut height = block_height(block, width, font_size).0;

    if has_images(block) {
        if let Some(Block::Columns(next)) = blocks.get(index + 1) {
            if !has_images(next) {
                height += block_height(next, width, font_size).0;
            }
        }
    }

    Pt(height)
}

/// Returns true if `needed` points can be written below `top` without going under `bottom`.
///
/// Anything fits on a blank page: a block taller than the window overflows instead of leaving
/// empty pages behind.
fn fits(blank: bool, top: Pt, needed: Pt, bottom: Pt) -> bool {
    blank || top.0 - needed.0 >= bottom.0
}

/// Returns true if the block at `index` starts a new page.
///
/// A break after the last block would only leave a blank page.
fn breaks_page(blocks: &[Block], index: usize) -> bool {
    match blocks.get(index) {
        Some(Block::PageBreak) => index + 1 < blocks.len(),
        Some(Block::Columns(_)) | None => false,
    }
}

/// This struct contains the pdf document.
pub struct Document {
    /// The inner document from printpdf.
    document: PdfDocumentReference,

    /// The current layer.
    layer: PdfLayerReference,

    /// The window on which we're allowed to write on the page.
    window: Window,

    /// The cursor, the position where we supposed to write next.
    cursor: (Pt, Pt),

    /// The current page size, in pt.
    page_size: (Pt, Pt),

    /// Whether nothing was written on the current page yet.
    blank: bool,

    /// The size of the captions.
    font_size: Pt,

    /// The images of the signs.
    images: Images,
}

impl Document {
    /// Creates a new pdf document from its name and its size in pt.
    pub fn new<T: Into<Pt>, U: Into<Pt>>(
        name: &str,
        width: T,
        height: U,
        window: Window,
        font_size: Pt,
        store: Directory,
    ) -> Document {
        let width: Pt = width.into();
        let height: Pt = height.into();

        let (document, page, layer) = PdfDocument::new(name, width.into(), height.into(), "");

        let layer = document.get_page(page).get_layer(layer);

        Document {
            document,
            layer,
            window,
            cursor: (window.x, window.height + window.y),
            page_size: (width, height),
            blank: true,
            font_size,
            images: Images {
                store,
                cache: HashMap::new(),
            },
        }
    }

    /// Renders the blocks of a definition and returns the bytes of the pdf.
    pub fn render(mut self, definition: &DocumentDefinition) -> Result<Vec<u8>> {
        let fonts = FontManager::init(&definition.fonts, &mut self.document)?;
        let font = fonts.default_font();

        let blocks = &definition.content;
        let mut pages = 1;

        for (index, block) in blocks.iter().enumerate() {
            match block {
                Block::Columns(columns) => {
                    let needed = keep_height(blocks, index, self.window.width, self.font_size);

                    if !fits(self.blank, self.cursor.1, needed, self.window.y) {
                        debug!("block {} does not fit, starting a new page", index);
                        self.new_page();
                        pages += 1;
                    }

                    self.write_columns(columns, font)?;
                }

                Block::PageBreak => {
                    if breaks_page(blocks, index) {
                        self.new_page();
                        pages += 1;
                    }
                }
            }
        }

        info!("rendered {} blocks on {} pages", blocks.len(), pages);

        self.save()
    }

    /// Writes a block of columns at the cursor and moves the cursor below it.
    fn write_columns(&mut self, block: &ColumnsBlock, font: &Font) -> Result<()> {
        let height = block_height(block, self.window.width, self.font_size);

        if block.columns.is_empty() {
            self.cursor.1 -= block.padding.bottom;
            return Ok(());
        }

        let cell_width = self.window.width.0 / block.columns.len() as f64;

        for (i, cell) in block.columns.iter().enumerate() {
            let x = self.window.x.0 + i as f64 * cell_width;

            match cell {
                Cell::Image(path) => self.write_image(path, x, cell_width)?,
                Cell::Text(text) => self.write_text(text, x, cell_width, block.text_align, font),
            }
        }

        self.cursor.1 -= height;
        self.blank = false;

        Ok(())
    }

    /// Writes an image centered in a square cell whose top left corner is at `x` and the cursor.
    fn write_image(&mut self, path: &str, x: f64, side: f64) -> Result<()> {
        let image = self.images.decode(path)?;

        let inner = side - 2.0 * IMAGE_GUTTER.0;
        let scale = fit(image.image.width.0, image.image.height.0, Pt(inner));

        let width = image.image.width.0 as f64 * PT_PER_INCH / DPI * scale;
        let height = image.image.height.0 as f64 * PT_PER_INCH / DPI * scale;

        let left = x + (side - width) / 2.0;
        let bottom = self.cursor.1 .0 - side + (side - height) / 2.0;

        image.add_to_layer(
            self.layer.clone(),
            Some(Pt(left).into()),
            Some(Pt(bottom).into()),
            None,
            Some(scale),
            Some(scale),
            Some(DPI),
        );

        Ok(())
    }

    /// Writes a caption in a cell whose left side is at `x`.
    fn write_text(&mut self, text: &str, x: f64, width: f64, align: TextAlign, font: &Font) {
        if text.is_empty() {
            return;
        }

        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + (width - font.text_width(text, self.font_size).0) / 2.0,
        };

        let baseline = self.cursor.1 - self.font_size;

        self.layer.use_text(
            text.to_owned(),
            self.font_size.0,
            Pt(left).into(),
            baseline.into(),
            font.printpdf(),
        );
    }

    /// Creates a new page and append it to the document.
    pub fn new_page(&mut self) {
        let (page, layer) =
            self.document
                .add_page(self.page_size.0.into(), self.page_size.1.into(), "");
        self.layer = self.document.get_page(page).get_layer(layer);
        self.cursor.1 = self.window.height + self.window.y;
        self.blank = true;
    }

    /// Saves the document into a byte buffer.
    fn save(self) -> Result<Vec<u8>> {
        let mut writer = BufWriter::new(Cursor::new(Vec::new()));
        self.document.save(&mut writer)?;

        let cursor = writer.into_inner().map_err(|e| Error::IoError(e.into_error()))?;
        Ok(cursor.into_inner())
    }
}
