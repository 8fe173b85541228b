//! Logging setup and diagnostics shared by the library and the CLI

pub mod debug;
pub mod logging;
