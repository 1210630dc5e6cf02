//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Rendering only reads the list model and the selector's stroke; it never
//! feeds events back.

pub mod layout;
pub mod list_widget;
pub mod theme;
