//! EWMH `_NET_WM_STATE` requests and window type changes
//!
//! State changes are client messages addressed to the target window but
//! delivered to the root window, where the window manager picks them up.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;
use x11rb::wrapper::ConnectionExt as _;

use super::{X11Session, set_override_redirect};
use crate::config::DesktopModeConfig;
use crate::constants::{atoms, x11};
use crate::error::{BridgeError, Result};

/// `_NET_WM_STATE` action code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAction {
    Remove,
    Add,
    Toggle,
}

impl StateAction {
    pub fn code(self) -> u32 {
        match self {
            StateAction::Remove => x11::NET_WM_STATE_REMOVE,
            StateAction::Add => x11::NET_WM_STATE_ADD,
            StateAction::Toggle => x11::NET_WM_STATE_TOGGLE,
        }
    }
}

/// Atoms needed to put a window into desktop mode, interned per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopAtoms {
    pub net_wm_state: Atom,
    pub below: Atom,
    pub sticky: Atom,
    pub skip_pager: Atom,
    pub skip_taskbar: Atom,
}

impl DesktopAtoms {
    pub const NAMES: [&'static str; 5] = [
        atoms::NET_WM_STATE,
        atoms::NET_WM_STATE_BELOW,
        atoms::NET_WM_STATE_STICKY,
        atoms::NET_WM_STATE_SKIP_PAGER,
        atoms::NET_WM_STATE_SKIP_TASKBAR,
    ];

    pub fn intern<C: Connection>(session: &X11Session<C>) -> Result<Self> {
        let [net_wm_state, below, sticky, skip_pager, skip_taskbar] =
            session.intern_all(Self::NAMES)?;
        Ok(Self {
            net_wm_state,
            below,
            sticky,
            skip_pager,
            skip_taskbar,
        })
    }

    /// Hint atoms in the order they are requested
    pub fn hints(&self) -> [Atom; 4] {
        [self.below, self.sticky, self.skip_pager, self.skip_taskbar]
    }
}

/// Build a `_NET_WM_STATE` request for `window` touching up to two states
pub fn state_message(
    window: Window,
    net_wm_state: Atom,
    action: StateAction,
    first: Atom,
    second: Atom,
) -> ClientMessageEvent {
    ClientMessageEvent {
        response_type: CLIENT_MESSAGE_EVENT,
        format: x11::CLIENT_MESSAGE_FORMAT,
        sequence: 0,
        window,
        type_: net_wm_state,
        data: ClientMessageData::from([
            action.code(),
            first,
            second,
            x11::SOURCE_APPLICATION,
            0,
        ]),
    }
}

/// One "add" request per desktop hint: BELOW, STICKY, SKIP_PAGER, SKIP_TASKBAR
pub fn desktop_hint_messages(window: Window, atoms: &DesktopAtoms) -> [ClientMessageEvent; 4] {
    atoms
        .hints()
        .map(|hint| state_message(window, atoms.net_wm_state, StateAction::Add, hint, x11rb::NONE))
}

/// Deliver a client message to the root window for the window manager
pub fn send_to_root<C: Connection>(session: &X11Session<C>, event: ClientMessageEvent) -> Result<()> {
    let window = event.window;
    session
        .connection()
        .send_event(
            false,
            session.root(),
            EventMask::SUBSTRUCTURE_NOTIFY | EventMask::SUBSTRUCTURE_REDIRECT,
            event,
        )?
        .check()
        .map_err(|err| BridgeError::from_send(window, err))
}

/// Ask the window manager to treat the window as part of the desktop
pub fn apply_desktop_hints<C: Connection>(session: &X11Session<C>, window: Window) -> Result<()> {
    let atoms = DesktopAtoms::intern(session)?;
    session.ensure_window(window)?;

    for event in desktop_hint_messages(window, &atoms) {
        debug!(window = window, hint = event.data.as_data32()[1], "Sending _NET_WM_STATE add");
        send_to_root(session, event)?;
    }

    session.flush()
}

/// Generic `_NET_WM_STATE` change for one or two named states
pub fn set_window_state<C: Connection>(
    session: &X11Session<C>,
    window: Window,
    action: StateAction,
    first: Atom,
    second: Atom,
) -> Result<()> {
    let [net_wm_state] = session.intern_all([atoms::NET_WM_STATE])?;
    session.ensure_window(window)?;

    send_to_root(session, state_message(window, net_wm_state, action, first, second))?;
    session.flush()
}

pub fn set_fullscreen<C: Connection>(session: &X11Session<C>, window: Window, enabled: bool) -> Result<()> {
    let [fullscreen] = session.intern_all([atoms::NET_WM_STATE_FULLSCREEN])?;
    let action = if enabled { StateAction::Add } else { StateAction::Remove };
    debug!(window = window, ?action, "Requesting fullscreen change");

    set_window_state(session, window, action, fullscreen, x11rb::NONE)
}

/// Atoms currently listed in the window's `_NET_WM_STATE` property
pub fn window_states<C: Connection>(session: &X11Session<C>, window: Window) -> Result<Vec<Atom>> {
    let Some(net_wm_state) = session.lookup(atoms::NET_WM_STATE)? else {
        return Ok(Vec::new());
    };

    let reply = session
        .connection()
        .get_property(
            false,
            window,
            net_wm_state,
            AtomEnum::ATOM,
            0,
            x11::STATE_PROPERTY_LENGTH,
        )?
        .reply()
        .map_err(|err| BridgeError::from_reply("GetProperty", window, err))?;

    Ok(reply.value32().map(|values| values.collect()).unwrap_or_default())
}

pub fn is_fullscreen<C: Connection>(session: &X11Session<C>, window: Window) -> Result<bool> {
    let Some(fullscreen) = session.lookup(atoms::NET_WM_STATE_FULLSCREEN)? else {
        return Ok(false);
    };
    Ok(window_states(session, window)?.contains(&fullscreen))
}

/// Replace `_NET_WM_WINDOW_TYPE` with `_NET_WM_WINDOW_TYPE_DESKTOP`
pub fn set_window_type_desktop<C: Connection>(session: &X11Session<C>, window: Window) -> Result<()> {
    let [window_type, desktop] =
        session.intern_all([atoms::NET_WM_WINDOW_TYPE, atoms::NET_WM_WINDOW_TYPE_DESKTOP])?;

    session
        .connection()
        .change_property32(PropMode::REPLACE, window, window_type, AtomEnum::ATOM, &[desktop])?
        .check()
        .map_err(|err| BridgeError::from_reply("ChangeProperty", window, err))
}

/// Desktop mode with the optional extra steps from the config
pub fn enter_desktop_mode<C: Connection>(
    session: &X11Session<C>,
    window: Window,
    options: &DesktopModeConfig,
) -> Result<()> {
    if options.override_redirect {
        set_override_redirect(session, window, true)?;
    }
    if options.window_type_desktop {
        set_window_type_desktop(session, window)?;
    }
    apply_desktop_hints(session, window)
}
