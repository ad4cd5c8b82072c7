//! Configuration snapshot and the non-volatile store contract.
//!
//! The snapshot is loaded once before the responder's main loop starts and
//! is read-only afterwards; no synchronization is required.

use num_enum::TryFromPrimitive;

use crate::hid;

/// CEC device type, as carried in `REPORT_PHYSICAL_ADDRESS`.
///
/// The wire value doubles as the row index into the logical-address
/// allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceType {
    /// Television (root of the HDMI topology).
    Tv = 0,
    /// Recording device.
    RecordingDevice = 1,
    /// Reserved type; never allocates a logical address.
    Reserved = 2,
    /// Tuner.
    Tuner = 3,
    /// Playback device (the role this responder masquerades as).
    PlaybackDevice = 4,
    /// Audio system.
    AudioSystem = 5,
}

/// A remote-control key bound to a HID usage code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCommand {
    /// Human-readable key name, for configuration dumps.
    pub name: &'static str,
    /// HID keyboard usage code sent to the host.
    pub key: u8,
}

/// Sparse 256-entry map from CEC user-control code to [`KeyCommand`].
///
/// Unmapped codes are absent; a `USER_CONTROL_PRESSED` for an absent code
/// is logged but produces no keystroke.
#[derive(Clone)]
pub struct Keymap([Option<KeyCommand>; 256]);

impl Keymap {
    /// A keymap with no bindings.
    pub const EMPTY: Keymap = Keymap([None; 256]);

    /// Look up the binding for a user-control code.
    #[must_use]
    pub fn get(&self, code: u8) -> Option<KeyCommand> {
        self.0.get(usize::from(code)).copied().flatten()
    }

    /// Bind a user-control code to a command, replacing any previous
    /// binding.
    pub fn set(&mut self, code: u8, command: KeyCommand) {
        if let Some(slot) = self.0.get_mut(usize::from(code)) {
            *slot = Some(command);
        }
    }

    /// Number of bound codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` when no code is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// The standard keymap: navigation, digits, volume and transport keys
    /// bound the way a media-center host expects them.
    #[must_use]
    pub fn standard() -> Keymap {
        let mut map = Keymap::EMPTY;
        for (code, name, key) in [
            (0x00, "Select", hid::KEY_ENTER),
            (0x01, "Up", hid::KEY_ARROW_UP),
            (0x02, "Down", hid::KEY_ARROW_DOWN),
            (0x03, "Left", hid::KEY_ARROW_LEFT),
            (0x04, "Right", hid::KEY_ARROW_RIGHT),
            (0x09, "Root Menu", hid::KEY_C),
            (0x0D, "Exit", hid::KEY_ESCAPE),
            (0x20, "0", hid::KEY_0),
            (0x21, "1", hid::KEY_1),
            (0x22, "2", hid::KEY_2),
            (0x23, "3", hid::KEY_3),
            (0x24, "4", hid::KEY_4),
            (0x25, "5", hid::KEY_5),
            (0x26, "6", hid::KEY_6),
            (0x27, "7", hid::KEY_7),
            (0x28, "8", hid::KEY_8),
            (0x29, "9", hid::KEY_9),
            (0x2B, "Enter", hid::KEY_ENTER),
            (0x41, "Volume Up", hid::KEY_VOLUME_UP),
            (0x42, "Volume Down", hid::KEY_VOLUME_DOWN),
            (0x43, "Mute", hid::KEY_MUTE),
            (0x44, "Play", hid::KEY_SPACE),
            (0x45, "Stop", hid::KEY_X),
            (0x46, "Pause", hid::KEY_SPACE),
            (0x48, "Rewind", hid::KEY_R),
            (0x49, "Fast Forward", hid::KEY_F),
        ] {
            map.set(code, KeyCommand { name, key });
        }
        map
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap::standard()
    }
}

/// The running CEC configuration, immutable after responder startup.
#[derive(Clone)]
pub struct CecConfig {
    /// Role to assume on the bus.
    pub device_type: DeviceType,
    /// Preferred logical address; `0x00` or `0x0F` mean auto-allocate.
    pub logical_address: u8,
    /// Preferred physical address; `0x0000` means derive from EDID.
    pub physical_address: u16,
    /// Delay before touching the bus, letting downstream EDID settle.
    pub edid_delay_ms: u64,
    /// Remote-key to HID-usage bindings.
    pub keymap: Keymap,
}

impl Default for CecConfig {
    fn default() -> Self {
        CecConfig {
            device_type: DeviceType::PlaybackDevice,
            logical_address: 0x00,
            physical_address: 0x0000,
            edid_delay_ms: 5000,
            keymap: Keymap::standard(),
        }
    }
}

/// Non-volatile configuration store contract.
pub trait ConfigStore {
    /// Error produced when the stored configuration cannot be read.
    type Error: core::fmt::Debug;

    /// Load the configuration snapshot.
    ///
    /// # Errors
    ///
    /// Returns the store's error when no valid snapshot exists; callers
    /// fall back to [`CecConfig::default`].
    fn load(&mut self) -> Result<CecConfig, Self::Error>;
}
