//! X11 session handling and window-manager requests

mod ewmh;
mod session;
mod window;

pub use ewmh::{
    DesktopAtoms,
    StateAction,
    apply_desktop_hints,
    desktop_hint_messages,
    enter_desktop_mode,
    is_fullscreen,
    send_to_root,
    set_fullscreen,
    set_window_state,
    set_window_type_desktop,
    state_message,
    window_states,
};
pub use session::X11Session;
#[cfg(test)]
pub(crate) use session::{create_test_window, test_session};
pub use window::{
    input_focus,
    lower_and_detach,
    lower_window,
    set_override_redirect,
    window_title,
};
