use crate::{LoadRange, Row};

/// Helper to build correct `MaterializeRows` handlers without allocations.
///
/// It enforces the materialization contract:
/// - Rows are emitted in ascending index order, exactly once each.
/// - Out-of-bounds indexes are ignored (and debug-asserted).
/// - Overlapping ranges are deduplicated (and debug-asserted).
/// - Gaps are debug-asserted; the emitter then resumes at the range's start.
pub struct RowEmitter<'a> {
    total_count: usize,
    next: usize,
    emit: &'a mut dyn FnMut(Row),
}

impl<'a> RowEmitter<'a> {
    pub fn new(total_count: usize, emit: &'a mut dyn FnMut(Row)) -> Self {
        Self {
            total_count,
            next: 0,
            emit,
        }
    }

    /// The next index this emitter expects to materialize.
    pub fn next_index(&self) -> usize {
        self.next
    }

    pub fn emit_range(&mut self, range: LoadRange) {
        if range.is_empty() {
            return;
        }

        if range.end > self.total_count {
            lwarn!(
                end = range.end,
                total_count = self.total_count,
                "RowEmitter: out-of-bounds range"
            );
            debug_assert!(
                range.end <= self.total_count,
                "RowEmitter: out-of-bounds range (end={}, total_count={})",
                range.end,
                self.total_count
            );
        }

        if range.start != self.next {
            lwarn!(
                expected = self.next,
                start = range.start,
                "RowEmitter: ranges must be contiguous and ascending"
            );
            debug_assert!(
                range.start == self.next,
                "RowEmitter: ranges must be contiguous and ascending (expected={}, start={})",
                self.next,
                range.start
            );
        }

        let start = core::cmp::max(range.start, self.next);
        let end = core::cmp::min(range.end, self.total_count);
        for index in start..end {
            (self.emit)(Row { index });
        }
        self.next = core::cmp::max(self.next, end);
    }
}
