//! This module extracts the usable lines of a script.
//!
//! A script is plain text where every line is a sentence that will end up on its own page.
//! Blank lines and lines starting with `#` are ignored.

/// The char that starts a comment line.
pub const COMMENT: char = '#';

/// A line of the script that holds content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The number of the line in the script, starting at 1.
    pub number: usize,

    /// The offset of the first byte of the line in the script.
    pub offset: usize,

    /// The content of the line, without its line ending.
    pub content: String,
}

impl Line {
    /// Returns the words of the line.
    ///
    /// Words are separated by a single space, so two consecutive spaces give an empty word.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.content.split(' ')
    }
}

/// Returns true if the char should be trimmed before deciding if a line is blank.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Returns true if a line carries content.
fn is_valid(line: &str) -> bool {
    match line.trim_matches(is_trimmable).chars().next() {
        Some(c) => c != COMMENT,
        None => false,
    }
}

/// Extracts the content lines of a script.
///
/// # Example
///
/// ```
/// # use signsheet::script::extract_lines;
/// let lines = extract_lines("# a comment\r\nred big dog\r\n\r\nsmall cat\n");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].content, "red big dog");
/// assert_eq!(lines[1].number, 4);
/// ```
pub fn extract_lines(content: &str) -> Vec<Line> {
    let mut lines = vec![];
    let mut offset = 0;

    for (index, piece) in content.split('\n').enumerate() {
        let line = piece.strip_suffix('\r').unwrap_or(piece);

        if is_valid(line) {
            lines.push(Line {
                number: index + 1,
                offset,
                content: line.to_owned(),
            });
        }

        offset += piece.len() + 1;
    }

    lines
}
