//! Cuts a line into rows of signs.

use crate::script::Line;
use crate::signs::{AssetStore, Resolver, WordSign};

/// A sequence of signs that are rendered side by side.
pub type Row = Vec<WordSign>;

/// Cuts a line into rows of exactly `width` signs.
///
/// The last row is padded with placeholder signs so that all the rows of a line are aligned.
/// A line of `k` words gives `ceil(k / width)` rows.
///
/// # Panics
///
/// Panics if `width` is zero.
pub fn chunk<S: AssetStore + ?Sized>(
    line: &Line,
    width: usize,
    resolver: &Resolver<S>,
) -> Vec<Row> {
    assert!(width > 0, "rows must hold at least one sign");

    let mut rows = vec![];
    let mut buffer = Vec::with_capacity(width);

    for word in line.words() {
        buffer.push(resolver.sign(word));

        if buffer.len() == width {
            rows.push(buffer);
            buffer = Vec::with_capacity(width);
        }
    }

    if !buffer.is_empty() {
        buffer.resize(width, WordSign::pad());
        rows.push(buffer);
    }

    rows
}
