//! Gap filling between two processed rows.
//!
//! Pointer sampling is coarser than row height during a fast swipe, so a
//! single sample can jump several rows.  [`between`] yields every row that
//! was skipped, in the direction of travel.

use std::iter::FusedIterator;

use super::geometry::RowIndex;

/// Rows strictly after `last` up to and including `new`, ascending or
/// descending depending on the direction of travel.  Empty when the two are
/// equal.
pub fn between(last: RowIndex, new: RowIndex) -> RowSpan {
    RowSpan {
        next: last.0,
        end: new.0,
    }
}

/// Iterator returned by [`between`].  Cheap to clone, so a span can be
/// replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpan {
    /// Last row yielded (or the starting row, which is never yielded).
    next: usize,
    end: usize,
}

impl Iterator for RowSpan {
    type Item = RowIndex;

    fn next(&mut self) -> Option<RowIndex> {
        use std::cmp::Ordering::*;
        match self.next.cmp(&self.end) {
            Equal => None,
            Less => {
                self.next += 1;
                Some(RowIndex(self.next))
            }
            Greater => {
                self.next -= 1;
                Some(RowIndex(self.next))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.abs_diff(self.end);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RowSpan {}
impl FusedIterator for RowSpan {}
