//! Gesture tuning knobs.

use std::time::Duration;

use super::geometry::Point;

/// Horizontal band a touch must begin in to start a stroke.  Touches that
/// begin elsewhere are left to the host's own scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationBand {
    pub min_x: f64,
    pub max_x: f64,
}

impl ActivationBand {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x && point.x < self.max_x
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutoScrollConfig {
    /// Edge zone as a fraction of the visible height.
    pub edge_margin_fraction: f64,
    /// Lower bound for the edge zone, in content units.
    pub min_edge_margin: f64,
    pub tick_interval: Duration,
    /// Content units scrolled per tick.
    pub scroll_step: f64,
}

impl AutoScrollConfig {
    pub fn edge_margin(&self, visible_height: f64) -> f64 {
        (self.edge_margin_fraction * visible_height).max(self.min_edge_margin)
    }
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            edge_margin_fraction: 0.1,
            min_edge_margin: 1.0,
            tick_interval: Duration::from_millis(50),
            scroll_step: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorConfig {
    pub auto_scroll: AutoScrollConfig,
    /// Query every newly reached row and skip the command when it already
    /// matches the stroke mode.  The anchor row is always applied.
    pub skip_unchanged_rows: bool,
    pub activation_band: Option<ActivationBand>,
}
