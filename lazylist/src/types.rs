use alloc::format;
use alloc::string::String;

/// A half-open range `[start, end)` of dataset rows to materialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl LoadRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty range anchored at `at` (produced by a terminal `load_chunk`).
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// The scrollbar handle, expressed as fractions of the *total* scrollable range.
///
/// Both ends are clamped to `[0, 1]`. `end - start` is the page size; in degenerate cases
/// (tiny datasets, oversized viewports) `start + page_size` can exceed `1`, which is why the
/// clamp lives here rather than in every caller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollThumb {
    pub start: f64,
    pub end: f64,
}

impl ScrollThumb {
    /// Builds a thumb from a start fraction and a page size fraction, clamping both ends.
    pub fn from_start_and_page(start: f64, page_size: f64) -> Self {
        let start = start.clamp(0.0, 1.0);
        let end = (start + page_size.max(0.0)).clamp(0.0, 1.0);
        Self { start, end }
    }

    /// The thumb for an empty dataset.
    pub const fn zero() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
        }
    }

    pub fn size(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// A synthetic placeholder row.
///
/// The dataset is generated on demand and never mutated: row `i` is always
/// `("Item {i}", "Value {i}")`. Real hosts replace this with their own data source behind the
/// same `MaterializeRows` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub index: usize,
}

impl Row {
    pub fn label(&self) -> String {
        format!("Item {}", self.index)
    }

    pub fn value(&self) -> String {
        format!("Value {}", self.index)
    }
}

/// Iterator over the placeholder rows of a [`LoadRange`], ascending.
#[derive(Clone, Debug)]
pub struct Rows {
    next: usize,
    end: usize,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.end {
            return None;
        }
        let row = Row { index: self.next };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rows {}

/// Returns the placeholder rows of `range` in ascending index order.
pub fn rows(range: LoadRange) -> Rows {
    Rows {
        next: range.start,
        end: range.end.max(range.start),
    }
}
