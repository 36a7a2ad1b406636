//! Turns rows of signs into blocks.

use crate::layout::rows::Row;
use crate::layout::{Block, Cell, ColumnsBlock, Padding, TextAlign};

/// Returns the block holding the images of a row.
fn images(row: &Row) -> Block {
    Block::Columns(ColumnsBlock {
        columns: row.iter().map(|s| Cell::Image(s.image.clone())).collect(),
        text_align: TextAlign::Left,
        padding: Padding::none(),
    })
}

/// Returns the block holding the captions of a row.
fn captions(row: &Row, padding: Padding) -> Block {
    Block::Columns(ColumnsBlock {
        columns: row.iter().map(|s| Cell::Text(s.word.clone())).collect(),
        text_align: TextAlign::Center,
        padding,
    })
}

/// Builds the blocks of the rows of a line.
///
/// Every row gives a block of images followed by a block of captions, padded below with
/// `padding`. No page break is added here.
pub fn build(rows: &[Row], padding: Padding) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(2 * rows.len());

    for row in rows {
        blocks.push(images(row));
        blocks.push(captions(row, padding));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::layout::blocks::build;
    use crate::layout::{Block, Cell, ColumnsBlock, Padding, TextAlign};
    use crate::signs::WordSign;

    fn sign(word: &str) -> WordSign {
        WordSign {
            word: word.into(),
            image: format!("images/{}.png", word),
        }
    }

    #[test]
    fn images_then_captions() {
        let rows = vec![
            vec![sign("red"), sign("dog"), WordSign::pad()],
            vec![sign("cat"), WordSign::pad(), WordSign::pad()],
        ];
        let blocks = build(&rows, Padding::bottom(Pt(50.0)));

        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| !b.is_page_break()));

        assert_eq!(
            blocks[0],
            Block::Columns(ColumnsBlock {
                columns: vec![
                    Cell::Image("images/red.png".into()),
                    Cell::Image("images/dog.png".into()),
                    Cell::Image("images/_placeholder.png".into()),
                ],
                text_align: TextAlign::Left,
                padding: Padding::none(),
            })
        );

        assert_eq!(
            blocks[3],
            Block::Columns(ColumnsBlock {
                columns: vec![
                    Cell::Text("cat".into()),
                    Cell::Text("".into()),
                    Cell::Text("".into()),
                ],
                text_align: TextAlign::Center,
                padding: Padding::bottom(Pt(50.0)),
            })
        );
    }

    #[test]
    fn zero_paddings_are_equal() {
        assert_eq!(Padding::none(), Padding::none());
        assert_eq!(Padding::bottom(Pt(0.0)), Padding::none());
        assert_ne!(Padding::bottom(Pt(50.0)), Padding::none());

        let rows = vec![vec![sign("cat")]];
        assert_eq!(build(&rows, Padding::none()), build(&rows, Padding::none()));
    }

    #[test]
    fn no_rows() {
        assert!(build(&[], Padding::none()).is_empty());
    }
}
