//! The CEC responder: address allocation, opcode dispatch, responses.
//!
//! A single sequential task owns the bus: it blocks on the line driver,
//! decodes the frame, updates its private state and emits any responses
//! before consuming the next frame. Remote-control keys become HID usage
//! codes pushed into the key queue with a bounded wait.

use embassy_time::{with_timeout, Duration, Timer};

use platform::config::{CecConfig, ConfigStore, DeviceType};
use platform::ddc::Ddc;
use platform::driver::CecDriver;
use platform::hid::{self, KeySender};
use platform::led::{LedSignal, StatusLed};

use crate::format::Direction;
use crate::frame::{CecFrame, AUDIO_STATUS_UNMUTED_50, BROADCAST, TV_ADDRESS, VENDOR_ID};
use crate::log;
use crate::opcode::{AbortReason, MenuRequest, Opcode, PowerStatus};

/// How long a keystroke may wait on a full HID queue before being dropped.
const HID_SEND_TIMEOUT: Duration = Duration::from_millis(10);

/// Candidate logical addresses to probe, per device type.
///
/// `0x0F` means no further candidate. The TV, Reserved and AudioSystem
/// rows are degenerate on purpose: probing either succeeds on the first
/// candidate or exhausts immediately, leaving the node unregistered.
const fn candidates(device_type: DeviceType) -> &'static [u8; 4] {
    match device_type {
        DeviceType::Tv => &[0x00, 0x00, 0x00, 0x00],
        DeviceType::RecordingDevice => &[0x01, 0x02, 0x09, 0x0F],
        DeviceType::Reserved => &[0x0F, 0x0F, 0x0F, 0x0F],
        DeviceType::Tuner => &[0x03, 0x06, 0x07, 0x0F],
        DeviceType::PlaybackDevice => &[0x04, 0x08, 0x0B, 0x0F],
        DeviceType::AudioSystem => &[0x05, 0x05, 0x05, 0x05],
    }
}

/// Load the configuration snapshot, falling back to defaults when the
/// store has nothing valid.
pub fn load_config<S: ConfigStore>(store: &mut S) -> CecConfig {
    store.load().unwrap_or_default()
}

/// Running state, owned by the responder and mutated only by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResponderState {
    /// Our logical address; `0x0F` (unregistered) until allocated.
    laddr: u8,
    /// Our HDMI physical address.
    paddr: u16,
    /// Last seen active-source physical address.
    active_addr: u16,
    /// System Audio Mode flag.
    audio_status: bool,
    /// Device-menu activation flag.
    menu_state: bool,
    /// Unanswered `REQUEST_ACTIVE_SOURCE` count, for the election
    /// tie-break. Survives across frames.
    no_active: u8,
}

impl ResponderState {
    const fn new() -> Self {
        ResponderState {
            laddr: BROADCAST,
            paddr: 0x0000,
            active_addr: 0x0000,
            audio_status: false,
            menu_state: false,
            no_active: 0,
        }
    }
}

/// The CEC responder task body.
///
/// Owns the line driver, the DDC channel and the status LED; pushes HID
/// usage codes through `keys`. Construct, then either call [`run`] as the
/// task body or drive [`start`]/[`step`] explicitly.
///
/// [`run`]: Responder::run
/// [`start`]: Responder::start
/// [`step`]: Responder::step
pub struct Responder<D, E, L> {
    driver: D,
    ddc: E,
    led: L,
    keys: KeySender,
    config: CecConfig,
    state: ResponderState,
}

impl<D: CecDriver, E: Ddc, L: StatusLed> Responder<D, E, L> {
    /// Create a responder over its collaborators and a loaded snapshot.
    pub fn new(driver: D, ddc: E, led: L, keys: KeySender, config: CecConfig) -> Self {
        Responder {
            driver,
            ddc,
            led,
            keys,
            config,
            state: ResponderState::new(),
        }
    }

    /// Our current logical address.
    #[must_use]
    pub fn logical_address(&self) -> u8 {
        self.state.laddr
    }

    /// Our current physical address.
    #[must_use]
    pub fn physical_address(&self) -> u16 {
        self.state.paddr
    }

    /// Physical address of the last seen active source.
    #[must_use]
    pub fn active_address(&self) -> u16 {
        self.state.active_addr
    }

    /// Whether the bus is in System Audio Mode.
    #[must_use]
    pub fn audio_status(&self) -> bool {
        self.state.audio_status
    }

    /// Whether our device menu is active.
    #[must_use]
    pub fn menu_active(&self) -> bool {
        self.state.menu_state
    }

    /// Bring the responder onto the bus: wait out the EDID settle delay,
    /// initialize the driver, then resolve the physical and logical
    /// addresses.
    pub async fn start(&mut self) {
        Timer::after_millis(self.config.edid_delay_ms).await;
        self.driver.init().await;
        self.state.paddr = self.resolve_physical_address().await;
        self.state.laddr = self.allocate_logical_address().await;
    }

    /// Run forever: [`start`](Responder::start), then process frames.
    pub async fn run(&mut self) -> ! {
        self.start().await;
        loop {
            self.step().await;
        }
    }

    /// Receive and handle exactly one inbound frame.
    pub async fn step(&mut self) {
        let rx = self.driver.recv(self.state.laddr).await;
        let frame = CecFrame::from_rx(rx);
        log::frame(&frame, Direction::Recv).await;
        if !frame.is_poll() {
            self.dispatch(&frame).await;
        }
    }

    /// Transmit a polling message; an acknowledge means `destination` is
    /// already claimed.
    pub async fn ping(&mut self, destination: u8) -> bool {
        self.transmit(CecFrame::poll(destination)).await
    }

    async fn transmit(&mut self, mut frame: CecFrame) -> bool {
        let ack = self.driver.send(frame.data()).await;
        frame.set_ack(ack);
        log::frame(&frame, Direction::Send).await;
        ack
    }

    /// Configured physical address, or the EDID one when unset.
    async fn resolve_physical_address(&mut self) -> u16 {
        if self.config.physical_address == 0x0000 {
            self.ddc.physical_address().await
        } else {
            self.config.physical_address
        }
    }

    /// Configured logical address, or probe the device-type candidates.
    ///
    /// The first candidate whose PING goes unacknowledged is free and is
    /// claimed. When every candidate acks, the last row entry is kept;
    /// on the terminated rows that is `0x0F`, leaving us a broadcast
    /// listener.
    async fn allocate_logical_address(&mut self) -> u8 {
        let configured = self.config.logical_address;
        if configured != 0x00 && configured != BROADCAST {
            return configured;
        }

        let mut claimed = BROADCAST;
        for &candidate in candidates(self.config.device_type) {
            claimed = candidate;
            log::submit(format_args!(
                "Attempting to allocate logical address 0x{candidate:01x}"
            ))
            .await;
            if !self.ping(candidate).await {
                break;
            }
        }
        log::submit(format_args!("Allocated logical address 0x{claimed:02x}")).await;
        claimed
    }

    /// Re-resolve both addresses after a topology change on the bus.
    async fn refresh_addresses(&mut self) {
        self.state.paddr = self.resolve_physical_address().await;
        self.state.laddr = self.allocate_logical_address().await;
    }

    /// Announce ourselves as the active source: wake the TV, broadcast the
    /// claim, and clear the election tie-break counter.
    async fn claim_active_source(&mut self) {
        let laddr = self.state.laddr;
        self.transmit(CecFrame::image_view_on(laddr, TV_ADDRESS)).await;
        self.transmit(CecFrame::active_source(laddr, self.state.paddr)).await;
        self.state.no_active = 0;
    }

    /// Push one HID usage code with a bounded wait; dropping a keystroke
    /// is preferable to stalling the bus loop.
    async fn push_key(&mut self, key: u8) {
        let _ = with_timeout(HID_SEND_TIMEOUT, self.keys.send(key)).await;
    }

    #[allow(clippy::too_many_lines)] // One arm per wire opcode; splitting obscures the table.
    async fn dispatch(&mut self, frame: &CecFrame) {
        let initiator = frame.initiator();
        let destination = frame.destination();
        let laddr = self.state.laddr;

        let Some(raw) = frame.opcode_raw() else {
            return;
        };
        let Ok(opcode) = Opcode::try_from(raw) else {
            if destination == laddr {
                self.transmit(CecFrame::feature_abort(
                    laddr,
                    initiator,
                    raw,
                    AbortReason::Unrecognized,
                ))
                .await;
            }
            return;
        };

        match opcode {
            // Bus traffic we accept without action.
            Opcode::FeatureAbort
            | Opcode::ImageViewOn
            | Opcode::TextViewOn
            | Opcode::SystemAudioModeStatus
            | Opcode::MenuStatus
            | Opcode::ReportPowerStatus
            | Opcode::GetMenuLanguage
            | Opcode::InactiveSource
            | Opcode::CecVersion
            | Opcode::SetOsdName
            | Opcode::VendorCommandWithId => {}

            // Recognized for logging only; a directed use is refused like
            // any unknown opcode.
            Opcode::ReportAudioStatus | Opcode::RequestArcInitiation => {
                if destination == laddr {
                    self.transmit(CecFrame::feature_abort(
                        laddr,
                        initiator,
                        raw,
                        AbortReason::Unrecognized,
                    ))
                    .await;
                }
            }

            Opcode::Standby => {
                if destination == laddr || destination == BROADCAST {
                    self.state.active_addr = 0x0000;
                    self.led.signal(LedSignal::Standby);
                }
            }

            Opcode::SystemAudioModeRequest => {
                if destination == laddr {
                    let on = self.state.audio_status;
                    self.transmit(CecFrame::set_system_audio_mode(laddr, initiator, on))
                        .await;
                }
            }

            Opcode::GiveAudioStatus => {
                if destination == laddr {
                    self.transmit(CecFrame::report_audio_status(
                        laddr,
                        initiator,
                        AUDIO_STATUS_UNMUTED_50,
                    ))
                    .await;
                }
            }

            Opcode::SetSystemAudioMode => {
                if destination == laddr || destination == BROADCAST {
                    if let Some(mode) = frame.operand(0) {
                        self.state.audio_status = mode == 1;
                    }
                }
            }

            Opcode::GiveSystemAudioModeStatus => {
                if destination == laddr {
                    let on = self.state.audio_status;
                    self.transmit(CecFrame::system_audio_mode_status(laddr, initiator, on))
                        .await;
                }
            }

            Opcode::RoutingChange => {
                // Operands: old path (ignored), then the new path.
                if let Some(new_path) = frame.operand_u16(2) {
                    self.state.active_addr = new_path;
                    self.refresh_addresses().await;
                    if self.state.paddr == self.state.active_addr {
                        self.claim_active_source().await;
                    }
                }
            }

            Opcode::ActiveSource => {
                if let Some(addr) = frame.operand_u16(0) {
                    self.state.active_addr = addr;
                    self.state.no_active = 0;
                }
            }

            Opcode::ReportPhysicalAddress => {
                // The TV re-announcing itself means the topology moved:
                // re-resolve and re-announce ourselves too.
                if initiator == TV_ADDRESS && destination == BROADCAST {
                    self.refresh_addresses().await;
                    if self.state.paddr != 0x0000 {
                        let announce = CecFrame::report_physical_address(
                            self.state.laddr,
                            self.state.paddr,
                            self.config.device_type,
                        );
                        self.transmit(announce).await;
                    }
                }
            }

            Opcode::RequestActiveSource => {
                self.state.no_active = self.state.no_active.saturating_add(1);
                if self.state.paddr == self.state.active_addr || self.state.no_active > 2 {
                    self.claim_active_source().await;
                }
            }

            Opcode::SetStreamPath => {
                if frame.operand_u16(0) == Some(self.state.paddr) {
                    self.state.active_addr = self.state.paddr;
                    self.claim_active_source().await;
                    self.state.menu_state = true;
                    let status = CecFrame::menu_status(self.state.laddr, TV_ADDRESS, true);
                    self.transmit(status).await;
                    self.led.signal(LedSignal::Selected);
                }
            }

            Opcode::DeviceVendorId => {
                if initiator == TV_ADDRESS && destination == BROADCAST {
                    self.transmit(CecFrame::device_vendor_id(laddr, VENDOR_ID)).await;
                }
            }

            Opcode::GiveDeviceVendorId => {
                if destination == laddr {
                    self.transmit(CecFrame::device_vendor_id(laddr, VENDOR_ID)).await;
                }
            }

            Opcode::MenuRequest => {
                if destination == laddr {
                    if let Some(request) = frame.operand(0) {
                        match MenuRequest::try_from(request) {
                            Ok(MenuRequest::Activate) => self.state.menu_state = true,
                            Ok(MenuRequest::Deactivate) => self.state.menu_state = false,
                            Ok(MenuRequest::Query) | Err(_) => {}
                        }
                        let status =
                            CecFrame::menu_status(laddr, initiator, self.state.menu_state);
                        self.transmit(status).await;
                    }
                }
            }

            Opcode::GiveDevicePowerStatus => {
                if destination == laddr {
                    let status = if self.state.active_addr == self.state.paddr {
                        PowerStatus::On
                    } else {
                        PowerStatus::Standby
                    };
                    self.transmit(CecFrame::report_power_status(laddr, initiator, status))
                        .await;
                }
            }

            Opcode::GetCecVersion => {
                if destination == laddr {
                    self.transmit(CecFrame::cec_version(laddr, initiator)).await;
                }
            }

            Opcode::GiveOsdName => {
                if destination == laddr {
                    self.transmit(CecFrame::set_osd_name(laddr, initiator)).await;
                }
            }

            Opcode::GivePhysicalAddress => {
                if destination == laddr && self.state.paddr != 0x0000 {
                    let announce = CecFrame::report_physical_address(
                        laddr,
                        self.state.paddr,
                        self.config.device_type,
                    );
                    self.transmit(announce).await;
                }
            }

            Opcode::UserControlPressed => {
                if destination == laddr {
                    self.led.signal(LedSignal::KeyPress);
                    if let Some(code) = frame.operand(0) {
                        if let Some(command) = self.config.keymap.get(code) {
                            self.push_key(command.key).await;
                        }
                    }
                }
            }

            Opcode::UserControlReleased => {
                if destination == laddr {
                    self.led.signal(LedSignal::Idle);
                    self.push_key(hid::KEY_NONE).await;
                }
            }

            Opcode::Abort => {
                if destination == laddr {
                    self.transmit(CecFrame::feature_abort(
                        laddr,
                        initiator,
                        raw,
                        AbortReason::Refused,
                    ))
                    .await;
                }
            }
        }
    }
}
