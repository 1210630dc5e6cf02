//! Shared fixtures: a recording host and a hand-driven timer.

#![allow(dead_code)]

use std::collections::HashSet;
use std::time::Duration;

use paint_select::core::{
    AutoScrollConfig, BridgeError, GestureStateMachine, Point, RepeatingTimer, RowIndex,
    RowMetrics, ScrollHost, SelectionBridge, SelectorConfig, TickId, ViewportGeometry,
};

pub const ROW_HEIGHT: f64 = 10.0;

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub selected: Vec<bool>,
    /// Every `set_selected` call, in order.
    pub calls: Vec<(usize, bool)>,
    pub scroll_requests: Vec<f64>,
    /// Rows whose `is_selected` query fails.
    pub failing_rows: HashSet<usize>,
    pub queries: usize,
}

impl RecordingHost {
    pub fn with_rows(count: usize) -> Self {
        Self {
            selected: vec![false; count],
            ..Self::default()
        }
    }

    pub fn preselect(mut self, rows: &[usize]) -> Self {
        for &row in rows {
            self.selected[row] = true;
        }
        self
    }

    pub fn call_rows(&self) -> Vec<usize> {
        self.calls.iter().map(|(row, _)| *row).collect()
    }

    pub fn selected_rows(&self) -> Vec<usize> {
        (0..self.selected.len()).filter(|&r| self.selected[r]).collect()
    }

    /// Sum and clear pending scroll requests.
    pub fn drain_scroll(&mut self) -> f64 {
        self.scroll_requests.drain(..).sum()
    }
}

impl SelectionBridge for RecordingHost {
    fn is_selected(&self, row: RowIndex) -> Result<bool, BridgeError> {
        if self.failing_rows.contains(&row.get()) {
            return Err(BridgeError::Unavailable("store locked".into()));
        }
        self.selected
            .get(row.get())
            .copied()
            .ok_or(BridgeError::UnknownRow(row))
    }

    fn set_selected(&mut self, row: RowIndex, selected: bool) {
        self.calls.push((row.get(), selected));
        self.selected[row.get()] = selected;
    }
}

impl ScrollHost for RecordingHost {
    fn request_scroll(&mut self, by: f64) {
        self.scroll_requests.push(by);
    }
}

#[derive(Debug, Default)]
pub struct ManualTimer {
    pub starts: Vec<TickId>,
    pub cancels: usize,
    pub running: Option<TickId>,
}

impl RepeatingTimer for ManualTimer {
    fn start(&mut self, id: TickId, _interval: Duration) {
        self.starts.push(id);
        self.running = Some(id);
    }

    fn cancel(&mut self) {
        self.cancels += 1;
        self.running = None;
    }
}

pub type Machine = GestureStateMachine<RecordingHost, ManualTimer>;

pub fn config() -> SelectorConfig {
    SelectorConfig {
        auto_scroll: AutoScrollConfig {
            edge_margin_fraction: 0.1,
            min_edge_margin: 1.0,
            tick_interval: Duration::from_millis(30),
            scroll_step: ROW_HEIGHT,
        },
        ..SelectorConfig::default()
    }
}

pub fn machine(host: RecordingHost) -> Machine {
    GestureStateMachine::new(host, ManualTimer::default(), config())
}

pub fn machine_with(host: RecordingHost, config: SelectorConfig) -> Machine {
    GestureStateMachine::new(host, ManualTimer::default(), config)
}

/// Uniform rows of [`ROW_HEIGHT`].
pub fn geometry(offset: f64, visible_height: f64, rows: usize) -> ViewportGeometry {
    ViewportGeometry::new(offset, visible_height, RowMetrics::uniform(ROW_HEIGHT, rows))
}

/// Viewport point at the middle of `row`, given the current offset.
pub fn at_row(row: usize, offset: f64) -> Point {
    Point::new(5.0, row as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0 - offset)
}
