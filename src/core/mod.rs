//! Core gesture logic – row resolution, gap filling, auto-scroll and the
//! paint-select state machine.
//!
//! Nothing in this module depends on any TUI, rendering or async crate.
//! The host plugs in through the traits in [`bridge`].

pub mod autoscroll;
pub mod bridge;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod interpolator;
pub mod locator;

pub use autoscroll::{AutoScrollController, ScrollDirection};
pub use bridge::{RepeatingTimer, ScrollHost, SelectionBridge, SelectorHost, TickId};
pub use config::{ActivationBand, AutoScrollConfig, SelectorConfig};
pub use error::BridgeError;
pub use geometry::{Point, RowIndex, RowMetrics, TouchPhase, TouchSample, ViewportGeometry};
pub use gesture::{GesturePhase, GestureStateMachine, Stroke, StrokeEnd, StrokeMode};
