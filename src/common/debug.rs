use tracing::debug;
use x11rb::connection::Connection;

use crate::x11::X11Session;

/// Log display and X server details for debugging purposes
pub fn log_session_info<C: Connection>(session: &X11Session<C>) {
    debug!("=== Session Information ===");

    if let Ok(display_env) = std::env::var("DISPLAY") {
        debug!("DISPLAY: {}", display_env);
    }
    if let Ok(session_type) = std::env::var("XDG_SESSION_TYPE") {
        debug!("Session Type: {}", session_type);
    }
    if let Ok(desktop) = std::env::var("XDG_CURRENT_DESKTOP") {
        debug!("Desktop Environment: {}", desktop);
    }

    let setup = session.connection().setup();
    debug!(
        "X Server: {} (release {})",
        String::from_utf8_lossy(&setup.vendor),
        setup.release_number
    );
    debug!(
        "Protocol: {}.{}",
        setup.protocol_major_version, setup.protocol_minor_version
    );
    debug!("Screen: {} (root {:#x})", session.screen_num(), session.root());

    debug!("===========================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_session_info_on_live_display() {
        let Some(session) = crate::x11::test_session(false) else {
            return;
        };
        log_session_info(&session);
    }
}
