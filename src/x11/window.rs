//! Core window requests: title lookup, focus query, override-redirect and
//! stacking

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;

use super::X11Session;
use crate::constants::{atoms, x11};
use crate::error::{BridgeError, Result};

/// Read the window title without touching any window state.
///
/// Prefers the UTF-8 `_NET_WM_NAME` and falls back to the ICCCM `WM_NAME`.
pub fn window_title<C: Connection>(session: &X11Session<C>, window: Window) -> Result<Option<String>> {
    if let Some(net_wm_name) = session.lookup(atoms::NET_WM_NAME)?
        && let Some(utf8_string) = session.lookup(atoms::UTF8_STRING)?
        && let Some(title) = read_text_property(session, window, net_wm_name, utf8_string)?
    {
        return Ok(Some(title));
    }

    read_text_property(
        session,
        window,
        AtomEnum::WM_NAME.into(),
        AtomEnum::STRING.into(),
    )
}

fn read_text_property<C: Connection>(
    session: &X11Session<C>,
    window: Window,
    property: Atom,
    type_: Atom,
) -> Result<Option<String>> {
    let reply = session
        .connection()
        .get_property(false, window, property, type_, 0, x11::TITLE_PROPERTY_LENGTH)?
        .reply()
        .map_err(|err| BridgeError::from_reply("GetProperty", window, err))?;

    if reply.value.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&reply.value).into_owned()))
}

/// Window currently holding the input focus
pub fn input_focus<C: Connection>(session: &X11Session<C>) -> Result<Window> {
    let reply = session
        .connection()
        .get_input_focus()?
        .reply()
        .map_err(|err| BridgeError::from_reply("GetInputFocus", session.root(), err))?;
    Ok(reply.focus)
}

pub fn set_override_redirect<C: Connection>(
    session: &X11Session<C>,
    window: Window,
    enabled: bool,
) -> Result<()> {
    let value = if enabled { x11::OVERRIDE_REDIRECT } else { 0 };
    session
        .connection()
        .change_window_attributes(window, &ChangeWindowAttributesAux::new().override_redirect(value))?
        .check()
        .map_err(|err| BridgeError::from_reply("ChangeWindowAttributes", window, err))
}

/// Move the window to the bottom of its siblings' stacking order
pub fn lower_window<C: Connection>(session: &X11Session<C>, window: Window) -> Result<()> {
    session
        .connection()
        .configure_window(window, &ConfigureWindowAux::new().stack_mode(StackMode::BELOW))?
        .check()
        .map_err(|err| BridgeError::from_reply("ConfigureWindow", window, err))
}

/// Take the window out of window-manager control and drop it below its
/// siblings.
pub fn lower_and_detach<C: Connection>(session: &X11Session<C>, window: Window) -> Result<()> {
    let focus = input_focus(session)?;
    debug!(window = window, focus = focus, "Current input focus");

    if let Some(title) = window_title(session, window)? {
        info!(window = window, title = %title, "Window name");
    }

    set_override_redirect(session, window, true)?;
    lower_window(session, window)?;

    debug!(window = window, "Window detached and lowered");
    Ok(())
}
