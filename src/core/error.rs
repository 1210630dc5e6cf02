use thiserror::Error;

use super::geometry::RowIndex;

/// Failures a host can report while the state machine queries it.
///
/// Any of these is fatal to the current stroke but never to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("row {0} is not known to the selection store")]
    UnknownRow(RowIndex),
    #[error("selection store unavailable: {0}")]
    Unavailable(String),
}
