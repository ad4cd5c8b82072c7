//! CEC opcode and operand tables.
//!
//! One enum per wire table; the same [`Opcode`] drives both the responder
//! dispatch and the formatter mnemonics, so the two can never drift.

use num_enum::TryFromPrimitive;

/// CEC opcodes this responder recognizes (CEC 1.3a).
///
/// Anything not listed here is answered with a feature abort when directed
/// at us and rendered as `(undecoded)` in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Reject a message, naming the offending opcode and a reason.
    FeatureAbort = 0x00,
    /// Source entering the active state; wakes the TV.
    ImageViewOn = 0x04,
    /// As Image View On, but also clears text/menus from the display.
    TextViewOn = 0x0D,
    /// Switch the destination (or everyone, broadcast) to standby.
    Standby = 0x36,
    /// Remote-control key down. Operand: user-control code.
    UserControlPressed = 0x44,
    /// Remote-control key up.
    UserControlReleased = 0x45,
    /// Ask a device for its on-screen display name.
    GiveOsdName = 0x46,
    /// Report the on-screen display name. Operands: ASCII octets.
    SetOsdName = 0x47,
    /// Ask the audio system to enter System Audio Mode.
    SystemAudioModeRequest = 0x70,
    /// Ask the audio system for volume and mute state.
    GiveAudioStatus = 0x71,
    /// Set System Audio Mode on or off. Operand: 1 = on.
    SetSystemAudioMode = 0x72,
    /// Volume and mute state. Operand: mute flag + volume percent.
    ReportAudioStatus = 0x7A,
    /// Ask for the current System Audio Mode.
    GiveSystemAudioModeStatus = 0x7D,
    /// Current System Audio Mode. Operand: 1 = on.
    SystemAudioModeStatus = 0x7E,
    /// A switch rerouted; operands: old then new physical address.
    RoutingChange = 0x80,
    /// Broadcast by the device now presenting video. Operand: its
    /// physical address.
    ActiveSource = 0x82,
    /// Ask a device to broadcast its physical address.
    GivePhysicalAddress = 0x83,
    /// Broadcast mapping of physical address to device type.
    ReportPhysicalAddress = 0x84,
    /// Ask whoever is the active source to announce itself.
    RequestActiveSource = 0x85,
    /// TV requests streaming from the given physical address.
    SetStreamPath = 0x86,
    /// Broadcast the 24-bit IEEE OUI of the device vendor.
    DeviceVendorId = 0x87,
    /// Ask a device to broadcast its vendor ID.
    GiveDeviceVendorId = 0x8C,
    /// Activate, deactivate or query the device menu. Operand:
    /// [`MenuRequest`].
    MenuRequest = 0x8D,
    /// Current menu state. Operand: 1 = active.
    MenuStatus = 0x8E,
    /// Ask a device for its power status.
    GiveDevicePowerStatus = 0x8F,
    /// Power status reply. Operand: [`PowerStatus`].
    ReportPowerStatus = 0x90,
    /// Ask the TV for its menu language.
    GetMenuLanguage = 0x91,
    /// The active source stopped presenting video.
    InactiveSource = 0x9D,
    /// CEC version reply. Operand: version code.
    CecVersion = 0x9E,
    /// Ask a device for its CEC version.
    GetCecVersion = 0x9F,
    /// Vendor-specific command prefixed with the vendor OUI.
    VendorCommandWithId = 0xA0,
    /// Ask the TV to initiate an audio return channel.
    RequestArcInitiation = 0xC0,
    /// Blind request that any device must refuse.
    Abort = 0xFF,
}

impl Opcode {
    /// Human-readable mnemonic for the debug log.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::FeatureAbort => "Feature Abort",
            Opcode::ImageViewOn => "Image View On",
            Opcode::TextViewOn => "Text View On",
            Opcode::Standby => "Standby",
            Opcode::UserControlPressed => "User Control Pressed",
            Opcode::UserControlReleased => "User Control Released",
            Opcode::GiveOsdName => "Give OSD Name",
            Opcode::SetOsdName => "Set OSD Name",
            Opcode::SystemAudioModeRequest => "System Audio Mode Request",
            Opcode::GiveAudioStatus => "Give Audio Status",
            Opcode::SetSystemAudioMode => "Set System Audio Mode",
            Opcode::ReportAudioStatus => "Report Audio Status",
            Opcode::GiveSystemAudioModeStatus => "Give System Audio Mode",
            Opcode::SystemAudioModeStatus => "System Audio Mode Status",
            Opcode::RoutingChange => "Routing Change",
            Opcode::ActiveSource => "Active Source",
            Opcode::GivePhysicalAddress => "Give Physical Address",
            Opcode::ReportPhysicalAddress => "Report Physical Address",
            Opcode::RequestActiveSource => "Request Active Source",
            Opcode::SetStreamPath => "Set Stream Path",
            Opcode::DeviceVendorId => "Device Vendor ID",
            Opcode::GiveDeviceVendorId => "Give Device Vendor ID",
            Opcode::MenuRequest => "Menu Request",
            Opcode::MenuStatus => "Menu Status",
            Opcode::GiveDevicePowerStatus => "Give Device Power Status",
            Opcode::ReportPowerStatus => "Report Power Status",
            Opcode::GetMenuLanguage => "Get Menu Language",
            Opcode::InactiveSource => "Inactive Source",
            Opcode::CecVersion => "CEC Version",
            Opcode::GetCecVersion => "Get CEC Version",
            Opcode::VendorCommandWithId => "Vendor Command With ID",
            Opcode::RequestArcInitiation => "Request ARC Initiation",
            Opcode::Abort => "Abort",
        }
    }
}

/// Feature-abort reason codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AbortReason {
    /// The opcode is not recognized.
    Unrecognized = 0,
    /// Not in the correct mode to respond.
    IncorrectMode = 1,
    /// Cannot provide the requested source.
    NoSource = 2,
    /// An operand is invalid.
    Invalid = 3,
    /// The request is understood but refused.
    Refused = 4,
    /// Unable to determine.
    Undetermined = 5,
}

impl AbortReason {
    /// Human-readable reason for the debug log.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            AbortReason::Unrecognized => "Unrecognized opcode",
            AbortReason::IncorrectMode => "Not in correct mode to respond",
            AbortReason::NoSource => "Cannot provide source",
            AbortReason::Invalid => "Invalid operand",
            AbortReason::Refused => "Refused",
            AbortReason::Undetermined => "Undetermined",
        }
    }
}

/// `MENU_REQUEST` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MenuRequest {
    /// Activate the device menu.
    Activate = 0,
    /// Deactivate the device menu.
    Deactivate = 1,
    /// Query the current menu state.
    Query = 2,
}

/// `REPORT_POWER_STATUS` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerStatus {
    /// Powered on.
    On = 0,
    /// In standby.
    Standby = 1,
    /// Waking up.
    StandbyToOn = 2,
    /// Going to standby.
    OnToStandby = 3,
}

impl PowerStatus {
    /// Human-readable status for the debug log.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PowerStatus::On => "On",
            PowerStatus::Standby => "Standby",
            PowerStatus::StandbyToOn => "In transition Standby to On",
            PowerStatus::OnToStandby => "In transition On to Standby",
        }
    }
}
