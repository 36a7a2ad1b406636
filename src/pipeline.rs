//! This module chains the steps that turn a script into blocks.

use printpdf::Pt;

use crate::layout::{build, chunk, Block, Padding};
use crate::script::{extract_lines, Line};
use crate::signs::{AssetStore, Resolver, WordSign};
use crate::warning::{Position, Warning, WarningType};
use crate::{Error, Result};

/// What the pipeline produces from a script.
#[derive(Debug)]
pub struct Output {
    /// The blocks, in the order they must be rendered.
    pub blocks: Vec<Block>,

    /// The words that have no sign.
    pub warnings: Vec<Warning>,
}

/// Turns scripts into blocks.
pub struct Pipeline<'a, S: AssetStore + ?Sized> {
    resolver: Resolver<'a, S>,
    row_width: usize,
    caption_padding: Pt,
}

impl<'a, S: AssetStore + ?Sized> Pipeline<'a, S> {
    /// Creates a pipeline that looks signs up in a store and puts `row_width` signs per row.
    pub fn new(store: &'a S, row_width: usize, caption_padding: Pt) -> Result<Pipeline<'a, S>> {
        if row_width == 0 {
            return Err(Error::InvalidRowWidth(row_width));
        }

        Ok(Pipeline {
            resolver: Resolver::new(store),
            row_width,
            caption_padding,
        })
    }

    /// Runs the pipeline on a whole script.
    ///
    /// Every line gives the blocks of its rows, followed by a single page break.
    pub fn run(&self, content: &str) -> Output {
        let mut blocks = vec![];
        let mut warnings = vec![];

        let lines = extract_lines(content);
        info!("{} lines to lay out", lines.len());

        for line in &lines {
            let rows = chunk(line, self.row_width, &self.resolver);
            warnings.extend(missing(line, rows.iter().flatten()));

            blocks.extend(build(&rows, Padding::bottom(self.caption_padding)));
            blocks.push(Block::PageBreak);
        }

        Output { blocks, warnings }
    }
}

/// Returns the warnings for the signs of a line that have no image.
///
/// The signs must come in the order of the words, pads can only follow them.
fn missing<'b, I>(line: &'b Line, signs: I) -> impl Iterator<Item = Warning> + 'b
where
    I: Iterator<Item = &'b WordSign> + 'b,
{
    let mut column = 1;
    let mut offset = line.offset;

    line.words().zip(signs).filter_map(move |(word, sign)| {
        let position = Position {
            line: line.number,
            column,
            offset,
        };

        column += word.chars().count() + 1;
        offset += word.len() + 1;

        if sign.is_missing() {
            Some(Warning {
                position,
                ty: WarningType::MissingImage(word.to_owned()),
            })
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use printpdf::Pt;

    use crate::layout::{Block, Cell, ColumnsBlock};
    use crate::pipeline::Pipeline;
    use crate::signs::{MISSING, PLACEHOLDER};
    use crate::warning::{Position, WarningType};
    use crate::Error;

    fn store(paths: &[&str]) -> HashSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    fn cells(block: &Block) -> &[Cell] {
        match block {
            Block::Columns(ColumnsBlock { columns, .. }) => columns,
            Block::PageBreak => panic!("expected columns, got a page break"),
        }
    }

    #[test]
    fn red_big_dog() {
        let store = store(&["images/red.png", "images/big.png", "images/dog.png"]);
        let pipeline = Pipeline::new(&store, 5, Pt(50.0)).unwrap();
        let output = pipeline.run("red big dog\n");

        assert_eq!(output.blocks.len(), 3);
        assert_eq!(
            cells(&output.blocks[0]),
            &[
                Cell::Image("images/red.png".into()),
                Cell::Image("images/big.png".into()),
                Cell::Image("images/dog.png".into()),
                Cell::Image(PLACEHOLDER.into()),
                Cell::Image(PLACEHOLDER.into()),
            ]
        );
        assert_eq!(
            cells(&output.blocks[1]),
            &[
                Cell::Text("red".into()),
                Cell::Text("big".into()),
                Cell::Text("dog".into()),
                Cell::Text("".into()),
                Cell::Text("".into()),
            ]
        );
        assert!(output.blocks[2].is_page_break());
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn one_page_break_per_line() {
        let store = store(&[]);
        let pipeline = Pipeline::new(&store, 5, Pt(50.0)).unwrap();
        let script = "# title\none two three four five six seven\n\nshort line\n";
        let output = pipeline.run(script);

        // 2 rows then 1 row, each row giving 2 blocks.
        assert_eq!(output.blocks.len(), 2 * 2 + 1 + 2 + 1);

        let breaks = output
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_page_break())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        assert_eq!(breaks, vec![4, 7]);

        for (i, block) in output.blocks.iter().enumerate() {
            if block.is_page_break() {
                continue;
            }
            let is_image = cells(block).iter().all(|c| match c {
                Cell::Image(_) => true,
                Cell::Text(_) => false,
            });
            let position = if i < 5 { i } else { i - 5 };
            assert_eq!(is_image, position % 2 == 0);
        }
    }

    #[test]
    fn empty_script() {
        let store = store(&[]);
        let pipeline = Pipeline::new(&store, 5, Pt(50.0)).unwrap();
        let output = pipeline.run("# nothing here\n\n");
        assert!(output.blocks.is_empty());
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn warns_about_missing_signs() {
        let store = store(&["images/cat.png"]);
        let pipeline = Pipeline::new(&store, 2, Pt(50.0)).unwrap();
        let output = pipeline.run("# comment\ncats  and dogs.\n");

        let warnings = output
            .warnings
            .iter()
            .map(|w| (w.position, w.ty.clone()))
            .collect::<Vec<_>>();

        assert_eq!(
            warnings,
            vec![
                (
                    Position {
                        line: 2,
                        column: 7,
                        offset: 16,
                    },
                    WarningType::MissingImage("and".into()),
                ),
                (
                    Position {
                        line: 2,
                        column: 11,
                        offset: 20,
                    },
                    WarningType::MissingImage("dogs.".into()),
                ),
            ]
        );

        let images = output
            .blocks
            .iter()
            .step_by(2)
            .filter(|b| !b.is_page_break())
            .flat_map(|b| cells(b).to_vec())
            .collect::<Vec<_>>();
        assert_eq!(
            images,
            vec![
                Cell::Image("images/cat.png".into()),
                Cell::Image(PLACEHOLDER.into()),
                Cell::Image(MISSING.into()),
                Cell::Image(MISSING.into()),
            ]
        );
    }

    #[test]
    fn rejects_empty_rows() {
        let store = store(&[]);
        match Pipeline::new(&store, 0, Pt(50.0)) {
            Err(Error::InvalidRowWidth(0)) => (),
            _ => panic!("a zero row width should be rejected"),
        }
    }
}
