//! Scoped X11 display session
//!
//! A session owns one connection for the duration of a single bridge call.
//! Dropping it closes the connection, so every exit path releases it.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};

pub struct X11Session<C: Connection = RustConnection> {
    conn: C,
    screen_num: usize,
    root: Window,
    intern_missing: bool,
}

impl X11Session<RustConnection> {
    /// Connect to the configured display, or to $DISPLAY when none is set
    pub fn open(config: &BridgeConfig) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(config.display.as_deref()).map_err(|source| {
            BridgeError::ConnectionUnavailable {
                display: config.display_label(),
                source,
            }
        })?;
        debug!(display = %config.display_label(), screen = screen_num, "Opened X11 session");

        Self::with_connection(conn, screen_num, config.atoms.intern_missing)
    }
}

impl<C: Connection> X11Session<C> {
    /// Wrap an already established connection
    pub fn with_connection(conn: C, screen_num: usize, intern_missing: bool) -> Result<Self> {
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or(BridgeError::NoScreen(screen_num))?;

        Ok(Self {
            conn,
            screen_num,
            root,
            intern_missing,
        })
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn screen_num(&self) -> usize {
        self.screen_num
    }

    pub fn root(&self) -> Window {
        self.root
    }

    /// Intern a batch of atoms with a single round of replies.
    ///
    /// Unless the session was opened with `intern_missing`, an atom the
    /// server has never seen yields `AtomNotFound` instead of being created.
    pub fn intern_all<const N: usize>(&self, names: [&'static str; N]) -> Result<[Atom; N]> {
        let only_if_exists = !self.intern_missing;
        let cookies = names.map(|name| self.conn.intern_atom(only_if_exists, name.as_bytes()));

        let mut atoms = [x11rb::NONE; N];
        for ((slot, name), cookie) in atoms.iter_mut().zip(names).zip(cookies) {
            let atom = cookie?
                .reply()
                .map_err(|err| BridgeError::from_reply("InternAtom", self.root, err))?
                .atom;
            if atom == x11rb::NONE {
                return Err(BridgeError::AtomNotFound(name.to_string()));
            }
            *slot = atom;
        }
        Ok(atoms)
    }

    /// Look an atom up without ever creating it
    pub fn lookup(&self, name: &str) -> Result<Option<Atom>> {
        let atom = self
            .conn
            .intern_atom(true, name.as_bytes())?
            .reply()
            .map_err(|err| BridgeError::from_reply("InternAtom", self.root, err))?
            .atom;
        Ok((atom != x11rb::NONE).then_some(atom))
    }

    pub fn atom_name(&self, atom: Atom) -> Result<String> {
        let reply = self
            .conn
            .get_atom_name(atom)?
            .reply()
            .map_err(|err| BridgeError::from_reply("GetAtomName", self.root, err))?;
        Ok(String::from_utf8_lossy(&reply.name).into_owned())
    }

    /// Fail with `WindowNotFound` unless `window` exists on the server
    pub fn ensure_window(&self, window: Window) -> Result<()> {
        self.conn
            .get_window_attributes(window)?
            .reply()
            .map_err(|err| BridgeError::from_reply("GetWindowAttributes", window, err))?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}

impl<C: Connection> Drop for X11Session<C> {
    fn drop(&mut self) {
        debug!(screen = self.screen_num, "Closing X11 session");
    }
}

/// Session on the display named by $DISPLAY, or `None` when there is none
#[cfg(test)]
pub(crate) fn test_session(intern_missing: bool) -> Option<X11Session> {
    std::env::var_os("DISPLAY")?;
    let config = BridgeConfig {
        atoms: crate::config::AtomSettings { intern_missing },
        ..Default::default()
    };
    X11Session::open(&config).ok()
}

/// Unmapped 64x64 child of the root window
#[cfg(test)]
pub(crate) fn create_test_window<C: Connection>(session: &X11Session<C>) -> Window {
    let conn = session.connection();
    let window = conn.generate_id().unwrap();
    conn.create_window(
        x11rb::COPY_DEPTH_FROM_PARENT,
        window,
        session.root(),
        0,
        0,
        64,
        64,
        0,
        WindowClass::INPUT_OUTPUT,
        x11rb::COPY_FROM_PARENT,
        &CreateWindowAux::new(),
    )
    .unwrap()
    .check()
    .unwrap();
    window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_never_creates_atoms() {
        let Some(session) = test_session(false) else {
            return;
        };
        let name = "_X11_DESKTOP_BRIDGE_UNUSED_ATOM";
        assert_eq!(session.lookup(name).unwrap(), None);
    }

    #[test]
    fn test_intern_all_reports_unknown_atom() {
        let Some(session) = test_session(false) else {
            return;
        };
        let err = session
            .intern_all(["_NET_WM_STATE_BELOW_BRIDGE_UNKNOWN"])
            .unwrap_err();
        assert!(matches!(err, BridgeError::AtomNotFound(name) if name == "_NET_WM_STATE_BELOW_BRIDGE_UNKNOWN"));
    }

    #[test]
    fn test_ensure_window_on_unallocated_id() {
        let Some(session) = test_session(false) else {
            return;
        };
        let unused = session.connection().generate_id().unwrap();
        assert!(matches!(
            session.ensure_window(unused),
            Err(BridgeError::WindowNotFound(w)) if w == unused
        ));
        session.ensure_window(session.root()).unwrap();
    }
}
