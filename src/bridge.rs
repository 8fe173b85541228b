//! Entry-point operations
//!
//! Each call opens its own X11 session, runs a fixed sequence of requests
//! and drops the session before returning.

use tracing::info;
use x11rb::protocol::xproto::{Atom, Window};

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::x11::{self, X11Session};

/// Snapshot of a window's title and `_NET_WM_STATE` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowReport {
    pub window: Window,
    pub title: Option<String>,
    pub states: Vec<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Bridge {
    config: BridgeConfig,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn session(&self) -> Result<X11Session> {
        X11Session::open(&self.config)
    }

    /// Mark the window override-redirect and lower it below its siblings
    pub fn lower_and_detach(&self, window: Window) -> Result<()> {
        let session = self.session()?;
        x11::lower_and_detach(&session, window)?;
        info!(window = window, "Lowered and detached window");
        Ok(())
    }

    /// Request BELOW, STICKY, SKIP_PAGER and SKIP_TASKBAR from the window manager
    pub fn apply_desktop_hints(&self, window: Window) -> Result<()> {
        let session = self.session()?;
        x11::apply_desktop_hints(&session, window)?;
        info!(window = window, "Applied desktop hints");
        Ok(())
    }

    /// Desktop hints plus the optional steps enabled in the config
    pub fn enter_desktop_mode(&self, window: Window) -> Result<()> {
        let session = self.session()?;
        x11::enter_desktop_mode(&session, window, &self.config.desktop_mode)?;
        info!(
            window = window,
            override_redirect = self.config.desktop_mode.override_redirect,
            window_type_desktop = self.config.desktop_mode.window_type_desktop,
            "Entered desktop mode"
        );
        Ok(())
    }

    pub fn set_fullscreen(&self, window: Window, enabled: bool) -> Result<()> {
        let session = self.session()?;
        x11::set_fullscreen(&session, window, enabled)?;
        info!(window = window, enabled = enabled, "Requested fullscreen change");
        Ok(())
    }

    pub fn set_window_state(
        &self,
        window: Window,
        action: x11::StateAction,
        first: Atom,
        second: Atom,
    ) -> Result<()> {
        let session = self.session()?;
        x11::set_window_state(&session, window, action, first, second)
    }

    pub fn is_fullscreen(&self, window: Window) -> Result<bool> {
        let session = self.session()?;
        x11::is_fullscreen(&session, window)
    }

    pub fn set_window_type_desktop(&self, window: Window) -> Result<()> {
        let session = self.session()?;
        x11::set_window_type_desktop(&session, window)
    }

    pub fn window_title(&self, window: Window) -> Result<Option<String>> {
        let session = self.session()?;
        x11::window_title(&session, window)
    }

    /// Read-only summary used by the `state` command
    pub fn report(&self, window: Window) -> Result<WindowReport> {
        let session = self.session()?;
        crate::common::debug::log_session_info(&session);

        let title = x11::window_title(&session, window)?;
        let states = x11::window_states(&session, window)?
            .into_iter()
            .map(|atom| session.atom_name(atom))
            .collect::<Result<Vec<_>>>()?;
        let focused = x11::input_focus(&session)? == window;

        Ok(WindowReport {
            window,
            title,
            states,
            focused,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    fn unreachable_display() -> Bridge {
        Bridge::new(BridgeConfig {
            display: Some("no-such-display".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_lower_without_display_is_a_typed_error() {
        let err = unreachable_display().lower_and_detach(0x3a00007).unwrap_err();
        assert!(matches!(err, BridgeError::ConnectionUnavailable { .. }));
        assert!(err.is_connection_failure());
        assert!(err.to_string().contains("no-such-display"));
    }

    #[test]
    fn test_hints_without_display_is_a_typed_error() {
        let err = unreachable_display().apply_desktop_hints(0x3a00007).unwrap_err();
        assert!(matches!(err, BridgeError::ConnectionUnavailable { .. }));
    }

    #[test]
    fn test_desktop_mode_without_display_is_a_typed_error() {
        let bridge = unreachable_display();
        assert!(bridge.enter_desktop_mode(1).is_err());
        assert!(bridge.set_fullscreen(1, true).is_err());
        assert!(bridge.report(1).is_err());
    }
}
