//! JNI entry points for `com.phoenixpen.desktop.application.X11Wrapper`
//!
//! The Java side declares these as `void` natives, so failures cannot be
//! reported back. They are logged instead, and panics are stopped here
//! rather than unwinding into the JVM.
#![allow(unsafe_code)]

use std::ffi::c_void;
use std::panic;

use tracing::{debug, error, warn};
use x11rb::protocol::xproto::Window;

use crate::bridge::Bridge;
use crate::common::logging;
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::handle::window_from_handle;

type Operation = fn(&Bridge, Window) -> Result<()>;

fn run_entry_point(name: &'static str, handle: i64, operation: Operation) {
    logging::init_for_host();

    let outcome = panic::catch_unwind(|| {
        let window = window_from_handle(handle)?;
        let config = BridgeConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable config, using defaults");
            BridgeConfig::default()
        });
        operation(&Bridge::new(config), window)
    });

    match outcome {
        Ok(Ok(())) => debug!(entry_point = name, handle = handle, "Native call finished"),
        Ok(Err(err)) => error!(entry_point = name, handle = handle, error = %err, "Native call failed"),
        Err(_) => error!(entry_point = name, handle = handle, "Native call panicked"),
    }
}

/// `native void raiseWindow(long window)`: lowers the window and marks it
/// override-redirect
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_phoenixpen_desktop_application_X11Wrapper_raiseWindow(
    _env: *mut c_void,
    _this: *mut c_void,
    window: i64,
) {
    run_entry_point("raiseWindow", window, Bridge::lower_and_detach);
}

/// `native static void enableDesktopMode(long window)`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_phoenixpen_desktop_application_X11Wrapper_enableDesktopMode(
    _env: *mut c_void,
    _class: *mut c_void,
    window: i64,
) {
    run_entry_point("enableDesktopMode", window, Bridge::apply_desktop_hints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_out_of_range_handles_return_quietly() {
        Java_com_phoenixpen_desktop_application_X11Wrapper_raiseWindow(
            ptr::null_mut(),
            ptr::null_mut(),
            -1,
        );
        Java_com_phoenixpen_desktop_application_X11Wrapper_enableDesktopMode(
            ptr::null_mut(),
            ptr::null_mut(),
            i64::MAX,
        );
    }

    #[test]
    fn test_panicking_operation_is_contained() {
        fn explode(_: &Bridge, _: Window) -> Result<()> {
            panic!("boom");
        }
        run_entry_point("test", 1, explode);
    }
}
