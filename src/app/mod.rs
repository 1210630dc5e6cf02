//! Demo host orchestration — list model, timers, state and input handling.

pub mod event;
pub mod handler;
pub mod list;
pub mod state;
pub mod ticker;
