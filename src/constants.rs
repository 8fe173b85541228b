//! Application-wide constants
//!
//! Protocol values, atom names and file locations used by the bridge.

/// X11 protocol constants
pub mod x11 {
    /// Override redirect flag for unmanaged windows
    pub const OVERRIDE_REDIRECT: u32 = 1;

    /// Client message payload format (32-bit longs)
    pub const CLIENT_MESSAGE_FORMAT: u8 = 32;

    /// _NET_WM_STATE action: remove/unset property (0)
    pub const NET_WM_STATE_REMOVE: u32 = 0;

    /// _NET_WM_STATE action: add/set property (1)
    pub const NET_WM_STATE_ADD: u32 = 1;

    /// _NET_WM_STATE action: toggle property (2)
    pub const NET_WM_STATE_TOGGLE: u32 = 2;

    /// Source indication for client messages (1 = normal application)
    pub const SOURCE_APPLICATION: u32 = 1;

    /// Upper bound (in 32-bit units) when reading title properties
    pub const TITLE_PROPERTY_LENGTH: u32 = 1024;

    /// Upper bound (in 32-bit units) when reading _NET_WM_STATE
    pub const STATE_PROPERTY_LENGTH: u32 = 64;
}

/// EWMH atom names
pub mod atoms {
    pub const WM_NAME: &str = "WM_NAME";
    pub const UTF8_STRING: &str = "UTF8_STRING";
    pub const NET_WM_NAME: &str = "_NET_WM_NAME";

    pub const NET_WM_STATE: &str = "_NET_WM_STATE";
    pub const NET_WM_STATE_BELOW: &str = "_NET_WM_STATE_BELOW";
    pub const NET_WM_STATE_STICKY: &str = "_NET_WM_STATE_STICKY";
    pub const NET_WM_STATE_SKIP_PAGER: &str = "_NET_WM_STATE_SKIP_PAGER";
    pub const NET_WM_STATE_SKIP_TASKBAR: &str = "_NET_WM_STATE_SKIP_TASKBAR";
    pub const NET_WM_STATE_FULLSCREEN: &str = "_NET_WM_STATE_FULLSCREEN";

    pub const NET_WM_WINDOW_TYPE: &str = "_NET_WM_WINDOW_TYPE";
    pub const NET_WM_WINDOW_TYPE_DESKTOP: &str = "_NET_WM_WINDOW_TYPE_DESKTOP";
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "x11-desktop-bridge";

    /// Configuration filename
    pub const FILENAME: &str = "config.json";
}

/// Logging defaults
pub mod logging {
    /// Filter used when RUST_LOG is unset
    pub const DEFAULT_FILTER: &str = "info";

    /// Filter used with --verbose
    pub const VERBOSE_FILTER: &str = "debug";
}
