//! Counter display unit in two component styles, hosted in a terminal UI.

pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
