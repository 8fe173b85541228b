//! Native X11 helpers for a desktop host application
//!
//! Two window-manager requests, available as a Rust API, as JNI symbols
//! (`libxlibwrapper.so`) and through the `x11-desktop-bridge` command:
//! lowering a window out of window-manager control, and putting a window
//! into desktop mode through EWMH `_NET_WM_STATE` hints.
#![deny(unsafe_code)]

pub mod bridge;
pub mod common;
pub mod config;
pub mod constants;
pub mod error;
pub mod ffi;
pub mod handle;
pub mod x11;

pub use bridge::{Bridge, WindowReport};
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
