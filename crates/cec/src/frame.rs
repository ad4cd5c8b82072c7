//! CEC frame type and outbound frame construction.
//!
//! A frame is 1–16 octets. Octet 0 carries the initiator in the high
//! nibble and the destination in the low nibble; octet 1, when present, is
//! the opcode; the rest are opcode-specific operands. A single-octet frame
//! is a polling message.
//!
//! The named constructors below produce the bit-exact payloads this
//! responder puts on the wire; [`CecFrame::from_rx`] wraps what the line
//! driver delivered. Operand accessors are length-checked — a frame is
//! never read beyond its reported length.


// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

use platform::config::DeviceType;
use platform::driver::{RawFrame, RxFrame};

use crate::opcode::{AbortReason, Opcode, PowerStatus};

/// Broadcast destination and the unregistered logical address.
pub const BROADCAST: u8 = 0x0F;

/// The TV's fixed logical address.
pub const TV_ADDRESS: u8 = 0x00;

/// 24-bit IEEE OUI reported in `DEVICE_VENDOR_ID`.
pub const VENDOR_ID: u32 = 0x0010_FA;

/// `CEC_VERSION` operand for CEC 1.3a.
pub const CEC_VERSION_1_3A: u8 = 0x04;

/// Fixed `REPORT_AUDIO_STATUS` operand: volume 50 %, unmuted.
pub const AUDIO_STATUS_UNMUTED_50: u8 = 0x32;

/// On-screen display name, 8 ASCII octets.
pub const OSD_NAME: &[u8] = b"Pico-CEC";

/// Address header octet: initiator high nibble, destination low nibble.
const fn header0(initiator: u8, destination: u8) -> u8 {
    ((initiator & 0x0F) << 4) | (destination & 0x0F)
}

// ─────────────────────────────────────────────────────────────────────────────
// CecFrame
// ─────────────────────────────────────────────────────────────────────────────

/// A CEC frame plus its acknowledge state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CecFrame {
    data: RawFrame,
    ack: bool,
}

impl CecFrame {
    /// Wrap a frame delivered by the line driver.
    #[must_use]
    pub fn from_rx(rx: RxFrame) -> Self {
        CecFrame {
            data: rx.data,
            ack: rx.ack,
        }
    }

    fn build(initiator: u8, destination: u8, body: &[u8]) -> Self {
        let mut data = RawFrame::new();
        // Builders stay within the 16-octet frame bound.
        let _ = data.push(header0(initiator, destination));
        let _ = data.extend_from_slice(body);
        CecFrame { data, ack: false }
    }

    /// Payload length in octets, header included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for the empty frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A polling message: no opcode, only the address header (or nothing).
    #[must_use]
    pub fn is_poll(&self) -> bool {
        self.data.len() <= 1
    }

    /// Initiator logical address (high nibble of octet 0).
    #[must_use]
    pub fn initiator(&self) -> u8 {
        self.data.first().map_or(0, |header| header >> 4)
    }

    /// Destination logical address (low nibble of octet 0).
    #[must_use]
    pub fn destination(&self) -> u8 {
        self.data.first().map_or(0, |header| header & 0x0F)
    }

    /// Raw opcode octet, if present.
    #[must_use]
    pub fn opcode_raw(&self) -> Option<u8> {
        self.data.get(1).copied()
    }

    /// Decoded opcode, if present and recognized.
    #[must_use]
    pub fn opcode(&self) -> Option<Opcode> {
        self.opcode_raw()
            .and_then(|raw| Opcode::try_from(raw).ok())
    }

    /// Operand octet `index` (octet `index + 2`), length-checked.
    #[must_use]
    pub fn operand(&self, index: usize) -> Option<u8> {
        self.data.get(index.checked_add(2)?).copied()
    }

    /// Big-endian 16-bit operand starting at operand octet `index`.
    #[must_use]
    pub fn operand_u16(&self, index: usize) -> Option<u16> {
        let hi = self.operand(index)?;
        let lo = self.operand(index.checked_add(1)?)?;
        Some(u16::from_be_bytes([hi, lo]))
    }

    /// Full payload, header octet first.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the frame was acknowledged on the wire.
    #[must_use]
    pub fn ack(&self) -> bool {
        self.ack
    }

    pub(crate) fn set_ack(&mut self, ack: bool) {
        self.ack = ack;
    }

    // ---- Outbound constructors ----------------------------------------------

    /// Polling message probing `destination`: `(addr << 4) | addr`, no
    /// opcode. An acknowledge means the address is taken.
    #[must_use]
    pub fn poll(destination: u8) -> Self {
        Self::build(destination, destination, &[])
    }

    /// `FEATURE_ABORT` naming the rejected opcode and the reason.
    #[must_use]
    pub fn feature_abort(initiator: u8, destination: u8, opcode: u8, reason: AbortReason) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::FeatureAbort as u8, opcode, reason as u8],
        )
    }

    /// `IMAGE_VIEW_ON`, waking the destination display.
    #[must_use]
    pub fn image_view_on(initiator: u8, destination: u8) -> Self {
        Self::build(initiator, destination, &[Opcode::ImageViewOn as u8])
    }

    /// Broadcast `ACTIVE_SOURCE` claiming `physical_address`.
    #[must_use]
    pub fn active_source(initiator: u8, physical_address: u16) -> Self {
        let [hi, lo] = physical_address.to_be_bytes();
        Self::build(initiator, BROADCAST, &[Opcode::ActiveSource as u8, hi, lo])
    }

    /// Broadcast `REPORT_PHYSICAL_ADDRESS` with our address and role.
    #[must_use]
    pub fn report_physical_address(
        initiator: u8,
        physical_address: u16,
        device_type: DeviceType,
    ) -> Self {
        let [hi, lo] = physical_address.to_be_bytes();
        Self::build(
            initiator,
            BROADCAST,
            &[Opcode::ReportPhysicalAddress as u8, hi, lo, device_type as u8],
        )
    }

    /// Broadcast `DEVICE_VENDOR_ID` (24-bit IEEE OUI, big-endian).
    #[must_use]
    pub fn device_vendor_id(initiator: u8, vendor: u32) -> Self {
        let [_, a, b, c] = vendor.to_be_bytes();
        Self::build(
            initiator,
            BROADCAST,
            &[Opcode::DeviceVendorId as u8, a, b, c],
        )
    }

    /// `SET_SYSTEM_AUDIO_MODE` (1 = on).
    #[must_use]
    pub fn set_system_audio_mode(initiator: u8, destination: u8, on: bool) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::SetSystemAudioMode as u8, u8::from(on)],
        )
    }

    /// `REPORT_AUDIO_STATUS` with the given mute/volume octet.
    #[must_use]
    pub fn report_audio_status(initiator: u8, destination: u8, status: u8) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::ReportAudioStatus as u8, status],
        )
    }

    /// `SYSTEM_AUDIO_MODE_STATUS` (1 = on).
    #[must_use]
    pub fn system_audio_mode_status(initiator: u8, destination: u8, on: bool) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::SystemAudioModeStatus as u8, u8::from(on)],
        )
    }

    /// `SET_OSD_NAME` carrying [`OSD_NAME`].
    #[must_use]
    pub fn set_osd_name(initiator: u8, destination: u8) -> Self {
        let mut frame = Self::build(initiator, destination, &[Opcode::SetOsdName as u8]);
        let _ = frame.data.extend_from_slice(OSD_NAME);
        frame
    }

    /// `CEC_VERSION` reporting 1.3a.
    #[must_use]
    pub fn cec_version(initiator: u8, destination: u8) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::CecVersion as u8, CEC_VERSION_1_3A],
        )
    }

    /// `REPORT_POWER_STATUS`.
    #[must_use]
    pub fn report_power_status(initiator: u8, destination: u8, status: PowerStatus) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::ReportPowerStatus as u8, status as u8],
        )
    }

    /// `MENU_STATUS` (1 = menu active).
    #[must_use]
    pub fn menu_status(initiator: u8, destination: u8, active: bool) -> Self {
        Self::build(
            initiator,
            destination,
            &[Opcode::MenuStatus as u8, u8::from(active)],
        )
    }
}
