//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::GestureStateMachine;

use super::list::ListModel;
use super::ticker::TokioTicker;

/// The selector owns the list model: it is the host of the gesture.
pub type Selector = GestureStateMachine<ListModel, TokioTicker>;

/// Top-level application state.
pub struct AppState {
    pub selector: Selector,
    /// Row area of the list (inside the border), refreshed every frame.
    pub list_area: Rect,
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(selector: Selector, config: AppConfig) -> Self {
        Self {
            selector,
            list_area: Rect::default(),
            config,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn list(&self) -> &ListModel {
        self.selector.host()
    }
}
