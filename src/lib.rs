//! Paint-select: press on a row and drag across others to select (or
//! deselect) all of them in one continuous gesture.
//!
//! [`core`] is the embeddable part.  [`app`], [`ui`] and [`config`] make up
//! the terminal demo host shipped as the `paint-select` binary.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
