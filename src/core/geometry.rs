//! Geometry snapshots supplied by the host.
//!
//! Points are expressed relative to the top-left corner of the *visible*
//! viewport.  Adding the scroll offset turns a viewport `y` into a content
//! `y`, which is what rows are laid out against.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

// ───────────────────────────────────────── rows ──────────────

/// Position of a row within the full, unfiltered row list.
///
/// Stable across scrolling, meaningless after a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(pub usize);

impl RowIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How rows are laid out along the content axis.
#[derive(Debug, Clone, PartialEq)]
pub enum RowMetrics {
    /// Every row has the same height.
    Uniform { height: f64, count: usize },
    /// Rows have individual heights.  `tops` holds `count + 1` prefix
    /// offsets: row `i` spans `tops[i]..tops[i + 1]`.
    Variable { tops: Arc<[f64]> },
}

impl RowMetrics {
    pub fn uniform(height: f64, count: usize) -> Self {
        Self::Uniform {
            height: height.max(f64::MIN_POSITIVE),
            count,
        }
    }

    /// Build variable metrics from per-row heights.  Negative heights are
    /// treated as zero.
    pub fn variable(heights: impl IntoIterator<Item = f64>) -> Self {
        let mut tops = vec![0.0];
        let mut acc = 0.0;
        for h in heights {
            acc += h.max(0.0);
            tops.push(acc);
        }
        Self::Variable { tops: tops.into() }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Uniform { count, .. } => *count,
            Self::Variable { tops } => tops.len().saturating_sub(1),
        }
    }

    /// Total height of all rows.
    pub fn content_height(&self) -> f64 {
        match self {
            Self::Uniform { height, count } => height * *count as f64,
            Self::Variable { tops } => tops.last().copied().unwrap_or(0.0),
        }
    }
}

// ───────────────────────────────────────── viewport ──────────

/// Read-only snapshot of the list's viewport, refreshed by the host on every
/// touch sample and every scroll notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportGeometry {
    /// Content offset of the first visible pixel/line.
    pub scroll_offset: f64,
    /// Height of the visible area.
    pub visible_height: f64,
    pub rows: RowMetrics,
}

impl ViewportGeometry {
    pub fn new(scroll_offset: f64, visible_height: f64, rows: RowMetrics) -> Self {
        Self {
            scroll_offset,
            visible_height: visible_height.max(0.0),
            rows,
        }
    }

    /// Largest scroll offset that still keeps content on screen.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.rows.content_height() - self.visible_height).max(0.0)
    }

    /// Pull `point` vertically into the visible area.  The bottom edge is
    /// exclusive.
    pub fn clamp_to_viewport(&self, point: Point) -> Point {
        let bottom = (self.visible_height - VIEWPORT_EDGE_EPSILON).max(0.0);
        Point {
            x: point.x,
            y: point.y.clamp(0.0, bottom),
        }
    }

    /// Convert a viewport-relative `y` into a content `y`.
    pub fn content_y(&self, viewport_y: f64) -> f64 {
        viewport_y + self.scroll_offset
    }
}

const VIEWPORT_EDGE_EPSILON: f64 = 1e-6;

// ───────────────────────────────────────── touches ───────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// One raw pointer sample.  Consumed immediately, never stored.
#[derive(Debug, Clone, Copy)]
pub struct TouchSample {
    pub position: Point,
    pub phase: TouchPhase,
    pub timestamp: Instant,
}

impl TouchSample {
    pub fn new(position: Point, phase: TouchPhase) -> Self {
        Self {
            position,
            phase,
            timestamp: Instant::now(),
        }
    }
}
