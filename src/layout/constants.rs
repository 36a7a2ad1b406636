//! Various constants used for laying out the signs of a script.

use printpdf::Pt;

/// The default number of signs on a row.
pub const ROW_WIDTH: usize = 5;

/// The default space below a row of captions.
pub const CAPTION_PADDING: Pt = Pt(50.0);

/// The default size of the captions.
pub const FONT_SIZE: Pt = Pt(12.0);

/// The space kept free around an image in its cell.
pub const IMAGE_GUTTER: Pt = Pt(4.0);

/// The height of a line of text, relative to the font size.
pub const LINE_SPREAD: f64 = 1.2;
