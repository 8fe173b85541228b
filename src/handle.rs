//! Conversions from host-side window handles to X11 window ids

use x11rb::protocol::xproto::Window;

use crate::error::{BridgeError, Result};

/// Narrow a 64-bit host handle (a JVM `long`) to an X11 window id
pub fn window_from_handle(handle: i64) -> Result<Window> {
    Window::try_from(handle).map_err(|_| BridgeError::InvalidWindowId(handle))
}

/// Parse a window id as printed by `xwininfo`/`xprop` (`0x3a00007`) or in decimal
pub fn parse_window_id(input: &str) -> Result<Window, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => Window::from_str_radix(hex, 16),
        None => input.parse::<Window>(),
    };
    parsed.map_err(|e| format!("invalid window id '{}': {}", input, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_from_handle() {
        assert_eq!(window_from_handle(0x3a00007).unwrap(), 0x3a00007);
        assert_eq!(window_from_handle(u32::MAX as i64).unwrap(), u32::MAX);

        assert!(matches!(
            window_from_handle(-5),
            Err(BridgeError::InvalidWindowId(-5))
        ));
        assert!(matches!(
            window_from_handle(1 << 40),
            Err(BridgeError::InvalidWindowId(_))
        ));
    }

    #[test]
    fn test_parse_window_id_formats() {
        assert_eq!(parse_window_id("0x3a00007"), Ok(0x3a00007));
        assert_eq!(parse_window_id("0X1E00004"), Ok(0x1e00004));
        assert_eq!(parse_window_id("60817415"), Ok(60817415));
        assert_eq!(parse_window_id(" 12 "), Ok(12));
    }

    #[test]
    fn test_parse_window_id_rejects_garbage() {
        assert!(parse_window_id("").is_err());
        assert!(parse_window_id("0x").is_err());
        assert!(parse_window_id("window").is_err());
        assert!(parse_window_id("-1").is_err());
        assert!(parse_window_id("0x1ffffffff").is_err());
    }
}
