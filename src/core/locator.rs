//! Point → row resolution.
//!
//! Pure function of the point and the current geometry.  Never cache the
//! result across a scroll: the same viewport point lands on a different row
//! once the offset moves.

use super::geometry::{Point, RowIndex, RowMetrics, ViewportGeometry};

/// Return the row under `point` (viewport-relative), or `None` when the
/// point sits above the first row or below the last one.
pub fn locate(point: Point, geometry: &ViewportGeometry) -> Option<RowIndex> {
    let y = geometry.content_y(point.y);
    if !y.is_finite() || y < 0.0 || y >= geometry.rows.content_height() {
        return None;
    }

    match &geometry.rows {
        RowMetrics::Uniform { height, count } => {
            let idx = (y / height).floor() as usize;
            // Float rounding at the very bottom edge.
            Some(RowIndex(idx.min(count.saturating_sub(1))))
        }
        RowMetrics::Variable { tops } => {
            // First top strictly greater than y, minus one.  Zero-height
            // rows are never returned because their top equals the next.
            let upper = tops.partition_point(|&top| top <= y);
            let idx = upper.checked_sub(1)?;
            (idx < tops.len() - 1).then_some(RowIndex(idx))
        }
    }
}
