//! This module turns the lines of a script into blocks that can be put on pages.
//!
//! Each line is cut into rows of a fixed number of signs. A row gives two blocks: one with the
//! images of the signs, and one with the words, centered under their image.

pub mod blocks;
pub mod constants;
pub mod rows;

use printpdf::Pt;

pub use blocks::build;
pub use rows::{chunk, Row};

/// The horizontal alignment of the content of a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    /// The content starts at the left of the cell.
    Left,

    /// The content is centered in the cell.
    Center,
}

/// The space around a block.
#[derive(Debug, Copy, Clone)]
pub struct Padding {
    /// The space below the block.
    pub bottom: Pt,
}

// printpdf's `Pt` only compares normal floats, so `Pt(0.0) != Pt(0.0)`.
impl PartialEq for Padding {
    fn eq(&self, other: &Padding) -> bool {
        self.bottom.0 == other.bottom.0
    }
}

impl Padding {
    /// No padding at all.
    pub fn none() -> Padding {
        Padding { bottom: Pt(0.0) }
    }

    /// Padding below the block only.
    pub fn bottom(bottom: Pt) -> Padding {
        Padding { bottom }
    }
}

/// The content of a column of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// The path to an image.
    Image(String),

    /// Some text.
    Text(String),
}

/// A horizontal sequence of cells sharing the same style.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnsBlock {
    /// The cells, from left to right.
    pub columns: Vec<Cell>,

    /// How the content is aligned in the cells.
    pub text_align: TextAlign,

    /// The space around the block.
    pub padding: Padding,
}

/// A unit of layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A row of cells.
    Columns(ColumnsBlock),

    /// Forces the next block to start on a new page.
    PageBreak,
}

impl Block {
    /// Returns true if the block is a page break.
    pub fn is_page_break(&self) -> bool {
        match self {
            Block::PageBreak => true,
            Block::Columns(_) => false,
        }
    }
}
