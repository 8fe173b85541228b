//! Error type shared by every bridge operation

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};
use x11rb::protocol::ErrorKind;
use x11rb::protocol::xproto::Window;

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("cannot connect to X display {display}: {source}")]
    ConnectionUnavailable {
        display: String,
        #[source]
        source: ConnectError,
    },

    #[error("X server has no screen {0}")]
    NoScreen(usize),

    #[error("window handle {0} does not fit a 32-bit X11 window id")]
    InvalidWindowId(i64),

    #[error("window {0:#x} does not exist")]
    WindowNotFound(Window),

    #[error("atom {0} is not known to the X server")]
    AtomNotFound(String),

    #[error("X server rejected client message for window {window:#x}: {kind:?}")]
    SendRejected { window: Window, kind: ErrorKind },

    #[error("{request} failed for window {window:#x}: {kind:?}")]
    RequestFailed {
        request: &'static str,
        window: Window,
        kind: ErrorKind,
    },

    #[error("X11 connection error: {0}")]
    Connection(#[from] ConnectionError),
}

impl BridgeError {
    /// Classify the outcome of a checked request against `window`
    pub(crate) fn from_reply(request: &'static str, window: Window, err: ReplyError) -> Self {
        match err {
            ReplyError::ConnectionError(err) => Self::Connection(err),
            ReplyError::X11Error(err) => Self::from_error_kind(request, window, err.error_kind),
        }
    }

    /// Classify a failed SendEvent
    pub(crate) fn from_send(window: Window, err: ReplyError) -> Self {
        match err {
            ReplyError::ConnectionError(err) => Self::Connection(err),
            ReplyError::X11Error(err) if err.error_kind == ErrorKind::Window => {
                Self::WindowNotFound(window)
            }
            ReplyError::X11Error(err) => Self::SendRejected {
                window,
                kind: err.error_kind,
            },
        }
    }

    pub(crate) fn from_error_kind(request: &'static str, window: Window, kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Window => Self::WindowNotFound(window),
            kind => Self::RequestFailed {
                request,
                window,
                kind,
            },
        }
    }

    /// True when the failure means there is no X server to talk to
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Self::ConnectionUnavailable { .. } | Self::Connection(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_window_maps_to_window_not_found() {
        let err = BridgeError::from_error_kind("ChangeWindowAttributes", 0x1e00004, ErrorKind::Window);
        assert!(matches!(err, BridgeError::WindowNotFound(0x1e00004)));
        assert_eq!(err.to_string(), "window 0x1e00004 does not exist");
    }

    #[test]
    fn test_other_errors_keep_request_name() {
        let err = BridgeError::from_error_kind("ConfigureWindow", 42, ErrorKind::Value);
        match err {
            BridgeError::RequestFailed { request, window, kind } => {
                assert_eq!(request, "ConfigureWindow");
                assert_eq!(window, 42);
                assert_eq!(kind, ErrorKind::Value);
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_connection_failures() {
        let err = BridgeError::Connection(ConnectionError::UnknownError);
        assert!(err.is_connection_failure());

        assert!(!BridgeError::WindowNotFound(1).is_connection_failure());
        assert!(!BridgeError::AtomNotFound("_NET_WM_STATE".into()).is_connection_failure());
    }

    #[test]
    fn test_invalid_window_id_message() {
        let err = BridgeError::InvalidWindowId(-1);
        assert_eq!(
            err.to_string(),
            "window handle -1 does not fit a 32-bit X11 window id"
        );
    }
}
