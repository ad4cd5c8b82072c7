//! CEC user-control (remote key) code names.
//!
//! Sparse table over the 256-code space; the formatter falls back to raw
//! hex for anything unnamed. Key-to-HID bindings are configuration and
//! live in [`platform::config::Keymap`].

/// Name of a CEC user-control code, if one is assigned.
#[must_use]
pub const fn name(code: u8) -> Option<&'static str> {
    match code {
        0x00 => Some("Select"),
        0x01 => Some("Up"),
        0x02 => Some("Down"),
        0x03 => Some("Left"),
        0x04 => Some("Right"),
        0x05 => Some("Right-Up"),
        0x06 => Some("Right-Down"),
        0x07 => Some("Left-Up"),
        0x08 => Some("Left-Down"),
        0x09 => Some("Root Menu"),
        0x0A => Some("Setup Menu"),
        0x0B => Some("Contents Menu"),
        0x0C => Some("Favorite Menu"),
        0x0D => Some("Exit"),
        0x20 => Some("0"),
        0x21 => Some("1"),
        0x22 => Some("2"),
        0x23 => Some("3"),
        0x24 => Some("4"),
        0x25 => Some("5"),
        0x26 => Some("6"),
        0x27 => Some("7"),
        0x28 => Some("8"),
        0x29 => Some("9"),
        0x2A => Some("Dot"),
        0x2B => Some("Enter"),
        0x2C => Some("Clear"),
        0x30 => Some("Channel Up"),
        0x31 => Some("Channel Down"),
        0x32 => Some("Previous Channel"),
        0x35 => Some("Display Information"),
        0x40 => Some("Power"),
        0x41 => Some("Volume Up"),
        0x42 => Some("Volume Down"),
        0x43 => Some("Mute"),
        0x44 => Some("Play"),
        0x45 => Some("Stop"),
        0x46 => Some("Pause"),
        0x47 => Some("Record"),
        0x48 => Some("Rewind"),
        0x49 => Some("Fast Forward"),
        0x4A => Some("Eject"),
        0x4B => Some("Forward"),
        0x4C => Some("Backward"),
        0x71 => Some("F1 (Blue)"),
        0x72 => Some("F2 (Red)"),
        0x73 => Some("F3 (Green)"),
        0x74 => Some("F4 (Yellow)"),
        0x75 => Some("F5"),
        _ => None,
    }
}
