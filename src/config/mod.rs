//! Configuration management
//!
//! A small JSON file selects the display and tunes how atoms are interned
//! and what desktop mode does beyond the EWMH state hints.

pub mod bridge;

pub use bridge::{AtomSettings, BridgeConfig, DesktopModeConfig};
