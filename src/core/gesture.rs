//! The paint-select state machine.
//!
//! Consumes touch samples, scroll notifications, reload notifications and
//! auto-scroll ticks, all on one serialized event stream, and turns them into
//! an ordered sequence of `set_selected` commands on the host.
//!
//! A stroke's mode is decided once, from the anchor row, and applied to
//! every row the touch reaches.  Rows skipped between two samples are filled
//! in by [`between`], so a fast swipe still reaches every row it crossed.

use std::mem;
use std::time::Instant;

use super::autoscroll::AutoScrollController;
use super::bridge::{RepeatingTimer, SelectorHost, TickId};
use super::config::SelectorConfig;
use super::error::BridgeError;
use super::geometry::{Point, RowIndex, TouchPhase, TouchSample, ViewportGeometry};
use super::interpolator::between;
use super::locator::locate;

// ───────────────────────────────────────── stroke ────────────

/// The single operation a stroke performs on every row it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    Select,
    Deselect,
}

impl StrokeMode {
    /// Touching an unselected anchor selects; a selected one deselects.
    pub fn from_anchor(anchor_selected: bool) -> Self {
        if anchor_selected {
            Self::Deselect
        } else {
            Self::Select
        }
    }

    /// The value sent to the host.
    pub fn selects(self) -> bool {
        self == Self::Select
    }
}

/// The active drag session.
#[derive(Debug, Clone)]
pub struct Stroke {
    anchor_row: RowIndex,
    mode: StrokeMode,
    last_processed_row: RowIndex,
    /// Last known touch point, re-resolved on scroll.
    last_point: Point,
    /// Geometry seen with the last sample or scroll notification.
    geometry: ViewportGeometry,
    /// Auto-scroll requested but not yet reflected in `geometry`.
    unreported_scroll: f64,
    started_at: Instant,
    commands: usize,
}

impl Stroke {
    pub fn anchor_row(&self) -> RowIndex {
        self.anchor_row
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn last_processed_row(&self) -> RowIndex {
        self.last_processed_row
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Number of `set_selected` calls issued so far, anchor included.
    pub fn commands(&self) -> usize {
        self.commands
    }
}

// ───────────────────────────────────────── machine ───────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Tracking,
}

/// Why the previous stroke stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeEnd {
    /// Touch lifted.
    Ended,
    /// Touch cancelled by the platform or the host.
    Cancelled,
    /// Row identities were invalidated mid-stroke.
    Reloaded,
    /// The host failed to answer a selection query.
    HostFailure,
}

#[derive(Debug)]
enum GestureState {
    Idle,
    Tracking(Stroke),
}

/// One instance per list.  Owns its host handle and its auto-scroll timer.
#[derive(Debug)]
pub struct GestureStateMachine<H, T> {
    host: H,
    autoscroll: AutoScrollController<T>,
    config: SelectorConfig,
    state: GestureState,
    last_end: Option<StrokeEnd>,
}

impl<H: SelectorHost, T: RepeatingTimer> GestureStateMachine<H, T> {
    pub fn new(host: H, timer: T, config: SelectorConfig) -> Self {
        Self {
            host,
            autoscroll: AutoScrollController::new(timer, config.auto_scroll.clone()),
            config,
            state: GestureState::Idle,
            last_end: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access between events.  Mutating row identities here
    /// requires [`on_list_reloaded`](Self::on_list_reloaded) first.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn autoscroll(&self) -> &AutoScrollController<T> {
        &self.autoscroll
    }

    pub fn phase(&self) -> GesturePhase {
        match self.state {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Tracking(_) => GesturePhase::Tracking,
        }
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        match &self.state {
            GestureState::Tracking(stroke) => Some(stroke),
            GestureState::Idle => None,
        }
    }

    pub fn last_end(&self) -> Option<StrokeEnd> {
        self.last_end
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.autoscroll.is_active()
    }

    // ── touch input ─────────────────────────────────────────────

    /// Dispatch one raw sample by phase.  `geometry` is ignored for
    /// `Ended` and `Cancelled`.
    pub fn on_touch(&mut self, sample: TouchSample, geometry: &ViewportGeometry) {
        match sample.phase {
            TouchPhase::Began => self.begin_stroke(sample.position, geometry, sample.timestamp),
            TouchPhase::Moved => self.on_touch_moved(sample.position, geometry),
            TouchPhase::Ended => self.on_touch_ended(),
            TouchPhase::Cancelled => self.on_touch_cancelled(),
        }
    }

    pub fn on_touch_began(&mut self, point: Point, geometry: &ViewportGeometry) {
        self.begin_stroke(point, geometry, Instant::now());
    }

    pub fn on_touch_moved(&mut self, point: Point, geometry: &ViewportGeometry) {
        if self.phase() == GesturePhase::Tracking {
            self.track(point, geometry);
        }
    }

    pub fn on_touch_ended(&mut self) {
        if self.phase() == GesturePhase::Tracking {
            self.finish(StrokeEnd::Ended);
        }
    }

    pub fn on_touch_cancelled(&mut self) {
        if self.phase() == GesturePhase::Tracking {
            self.finish(StrokeEnd::Cancelled);
        }
    }

    // ── list notifications ──────────────────────────────────────

    /// Any scroll offset change, whoever caused it.  While tracking, the
    /// last touch point is re-resolved against the new geometry exactly as
    /// if the finger had moved.
    pub fn on_list_scrolled(&mut self, geometry: &ViewportGeometry) {
        let GestureState::Tracking(stroke) = &self.state else {
            return;
        };
        let point = stroke.last_point;
        self.track(point, geometry);
    }

    /// Row identities may have changed.  Must be called before the host
    /// applies the data change.  Rows already committed stay committed.
    pub fn on_list_reloaded(&mut self) {
        match self.state {
            GestureState::Tracking(_) => self.finish(StrokeEnd::Reloaded),
            GestureState::Idle => self.autoscroll.stop(),
        }
    }

    /// A tick from the auto-scroll timer.  Ticks from a stopped run, or
    /// arriving after the stroke ended, are dropped.
    pub fn on_auto_scroll_tick(&mut self, tick: TickId) {
        let GestureState::Tracking(stroke) = &mut self.state else {
            tracing::trace!(tick = tick.0, "auto-scroll tick while idle");
            return;
        };
        // Clamp against where the host will be once earlier requests land.
        let mut projected = stroke.geometry.clone();
        projected.scroll_offset += stroke.unreported_scroll;
        if let Some(step) = self.autoscroll.tick(tick, &projected) {
            tracing::trace!(step, "auto-scroll request");
            stroke.unreported_scroll += step;
            self.host.request_scroll(step);
        }
    }

    // ── transitions ─────────────────────────────────────────────

    fn begin_stroke(&mut self, point: Point, geometry: &ViewportGeometry, at: Instant) {
        if self.phase() == GesturePhase::Tracking {
            tracing::debug!("additional touch ignored while a stroke is active");
            return;
        }
        if let Some(band) = self.config.activation_band {
            if !band.contains(point) {
                tracing::trace!(x = point.x, "touch outside activation band");
                return;
            }
        }
        let on_screen = point.y >= 0.0 && point.y < geometry.visible_height;
        let Some(anchor) = locate(point, geometry).filter(|_| on_screen) else {
            tracing::trace!(y = point.y, "touch began outside rows");
            return;
        };

        let anchor_selected = match self.host.is_selected(anchor) {
            Ok(selected) => selected,
            Err(err) => {
                tracing::warn!(%anchor, error = %err, "selection query failed, stroke not started");
                self.last_end = Some(StrokeEnd::HostFailure);
                return;
            }
        };
        let mode = StrokeMode::from_anchor(anchor_selected);
        self.host.set_selected(anchor, mode.selects());

        tracing::debug!(%anchor, ?mode, "stroke started");
        self.state = GestureState::Tracking(Stroke {
            anchor_row: anchor,
            mode,
            last_processed_row: anchor,
            last_point: point,
            geometry: geometry.clone(),
            unreported_scroll: 0.0,
            started_at: at,
            commands: 1,
        });
    }

    /// Shared body of Moved and scroll re-resolution.
    fn track(&mut self, point: Point, geometry: &ViewportGeometry) {
        match self.advance(point, geometry) {
            Ok(()) => self.autoscroll.update(point, geometry),
            Err(err) => {
                tracing::warn!(error = %err, "selection query failed, aborting stroke");
                self.finish(StrokeEnd::HostFailure);
            }
        }
    }

    fn advance(&mut self, point: Point, geometry: &ViewportGeometry) -> Result<(), BridgeError> {
        let GestureState::Tracking(stroke) = &mut self.state else {
            return Ok(());
        };
        let moved = geometry.scroll_offset - stroke.geometry.scroll_offset;
        stroke.unreported_scroll = outstanding(stroke.unreported_scroll, moved);
        stroke.last_point = point;
        stroke.geometry = geometry.clone();

        let Some(current) = locate(geometry.clamp_to_viewport(point), geometry) else {
            return Ok(());
        };
        if current == stroke.last_processed_row {
            return Ok(());
        }

        let selected = stroke.mode.selects();
        for row in between(stroke.last_processed_row, current) {
            if self.config.skip_unchanged_rows && self.host.is_selected(row)? == selected {
                stroke.last_processed_row = row;
                continue;
            }
            self.host.set_selected(row, selected);
            stroke.commands += 1;
            stroke.last_processed_row = row;
            tracing::trace!(%row, selected, "row applied");
        }
        Ok(())
    }

    /// Stop auto-scroll, drop the stroke, back to Idle.
    fn finish(&mut self, end: StrokeEnd) {
        self.autoscroll.stop();
        if let GestureState::Tracking(stroke) = mem::replace(&mut self.state, GestureState::Idle) {
            tracing::debug!(
                ?end,
                anchor = %stroke.anchor_row,
                commands = stroke.commands,
                elapsed = ?stroke.started_at.elapsed(),
                "stroke finished"
            );
        }
        self.last_end = Some(end);
    }
}

/// What is left of a requested scroll after the offset moved by `moved`.
/// Movement against the request leaves it untouched.
fn outstanding(requested: f64, moved: f64) -> f64 {
    if requested > 0.0 {
        (requested - moved).clamp(0.0, requested)
    } else {
        (requested - moved).clamp(requested, 0.0)
    }
}
