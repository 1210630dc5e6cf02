//! Edge auto-scroll while a stroke is held near the top or bottom of the
//! viewport.
//!
//! The controller owns the repeating timer and guarantees at most one run is
//! active.  It never scrolls anything itself: each matching tick yields a
//! step, which the state machine forwards to the host as a scroll request.

use super::bridge::{RepeatingTimer, TickId};
use super::config::AutoScrollConfig;
use super::geometry::{Point, ViewportGeometry};

/// Below this a step is treated as "already at the bound".
const MIN_STEP: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
struct ActiveRun {
    id: TickId,
    direction: ScrollDirection,
}

#[derive(Debug)]
pub struct AutoScrollController<T> {
    timer: T,
    config: AutoScrollConfig,
    active: Option<ActiveRun>,
    next_id: u64,
}

impl<T: RepeatingTimer> AutoScrollController<T> {
    pub fn new(timer: T, config: AutoScrollConfig) -> Self {
        Self {
            timer,
            config,
            active: None,
            next_id: 0,
        }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.active.map(|run| run.direction)
    }

    /// Id of the run currently ticking, if any.
    pub fn active_tick(&self) -> Option<TickId> {
        self.active.map(|run| run.id)
    }

    /// Which edge zone `point` sits in, if any.  Points beyond the viewport
    /// count as inside the nearer zone.
    pub fn edge_direction(&self, point: Point, geometry: &ViewportGeometry) -> Option<ScrollDirection> {
        let height = geometry.visible_height;
        if height <= 0.0 {
            return None;
        }
        let margin = self.config.edge_margin(height);
        if point.y < margin {
            Some(ScrollDirection::Up)
        } else if point.y > height - margin {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }

    /// Start scrolling towards `direction`.  An active run just switches
    /// direction; a second timer is never started.
    pub fn begin(&mut self, direction: ScrollDirection, geometry: &ViewportGeometry) {
        if self.step(direction, geometry).is_none() {
            self.stop();
            return;
        }

        if let Some(run) = self.active.as_mut() {
            if run.direction != direction {
                tracing::debug!(?direction, "auto-scroll reversed");
                run.direction = direction;
            }
            return;
        }

        self.next_id = self.next_id.wrapping_add(1);
        let id = TickId(self.next_id);
        self.timer.start(id, self.config.tick_interval);
        self.active = Some(ActiveRun { id, direction });
        tracing::debug!(?direction, tick = id.0, "auto-scroll started");
    }

    /// Re-evaluate the touch position: start, keep or stop the run.
    pub fn update(&mut self, point: Point, geometry: &ViewportGeometry) {
        match self.edge_direction(point, geometry) {
            Some(direction) => self.begin(direction, geometry),
            None => self.stop(),
        }
    }

    pub fn stop(&mut self) {
        if let Some(run) = self.active.take() {
            self.timer.cancel();
            tracing::debug!(tick = run.id.0, "auto-scroll stopped");
        }
    }

    /// Handle one timer tick.  Returns the scroll delta to request, or
    /// `None` for a stale tick or when the content bound has been reached
    /// (which also stops the run).
    pub fn tick(&mut self, id: TickId, geometry: &ViewportGeometry) -> Option<f64> {
        let run = self.active?;
        if run.id != id {
            tracing::trace!(tick = id.0, active = run.id.0, "stale auto-scroll tick");
            return None;
        }
        match self.step(run.direction, geometry) {
            Some(step) => Some(step),
            None => {
                self.stop();
                None
            }
        }
    }

    /// Signed step towards `direction`, clamped to the content bounds.
    fn step(&self, direction: ScrollDirection, geometry: &ViewportGeometry) -> Option<f64> {
        let step = self.config.scroll_step.max(0.0);
        let delta = match direction {
            ScrollDirection::Up => -step.min(geometry.scroll_offset.max(0.0)),
            ScrollDirection::Down => {
                step.min((geometry.max_scroll_offset() - geometry.scroll_offset).max(0.0))
            }
        };
        (delta.abs() > MIN_STEP).then_some(delta)
    }
}
