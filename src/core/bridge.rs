//! Seams between the gesture core and the host application.
//!
//! The host owns the selection store, the scroll position and the timing
//! source.  The core only asks questions and issues commands through these
//! traits; it is never re-entered from inside one of these calls.

use std::time::Duration;

use super::error::BridgeError;
use super::geometry::RowIndex;

/// Query and command access to the host's selection store.
pub trait SelectionBridge {
    fn is_selected(&self, row: RowIndex) -> Result<bool, BridgeError>;

    /// Apply `selected` to `row`.  Must be idempotent: the same value may be
    /// sent more than once for a row during one stroke.
    fn set_selected(&mut self, row: RowIndex, selected: bool);
}

/// Lets the core ask the host to move the list.  The host applies the change
/// on its own schedule and reports it back through
/// [`GestureStateMachine::on_list_scrolled`](super::gesture::GestureStateMachine::on_list_scrolled).
pub trait ScrollHost {
    fn request_scroll(&mut self, by: f64);
}

/// Everything a [`GestureStateMachine`](super::gesture::GestureStateMachine)
/// needs from its host.
pub trait SelectorHost: SelectionBridge + ScrollHost {}

impl<T: SelectionBridge + ScrollHost> SelectorHost for T {}

/// Identifies one run of a repeating timer.  Ticks from a cancelled run
/// carry a stale id and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(pub u64);

/// A cancellable repeating task.
///
/// Implementations must deliver every tick as
/// [`GestureStateMachine::on_auto_scroll_tick`](super::gesture::GestureStateMachine::on_auto_scroll_tick)
/// on the same serialized event stream as touch and scroll notifications,
/// never concurrently with them.
pub trait RepeatingTimer {
    /// Start ticking every `interval`.  Any previous run is replaced.
    fn start(&mut self, id: TickId, interval: Duration);
    fn cancel(&mut self);
}

impl<T: SelectionBridge + ?Sized> SelectionBridge for &mut T {
    fn is_selected(&self, row: RowIndex) -> Result<bool, BridgeError> {
        (**self).is_selected(row)
    }

    fn set_selected(&mut self, row: RowIndex, selected: bool) {
        (**self).set_selected(row, selected)
    }
}

impl<T: ScrollHost + ?Sized> ScrollHost for &mut T {
    fn request_scroll(&mut self, by: f64) {
        (**self).request_scroll(by)
    }
}

impl<T: RepeatingTimer + ?Sized> RepeatingTimer for &mut T {
    fn start(&mut self, id: TickId, interval: Duration) {
        (**self).start(id, interval)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}
