//! Mock-driven scenarios for the responder state machine.
//!
//! Each test scripts the bus up front, drives the responder one frame at a
//! time, then checks the byte-exact outbound sequence and the visible
//! state. Fixed setup unless stated otherwise: our logical address is
//! `0x4`, our physical address `0x3000`, TV at `0x0`.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use cec::responder::{load_config, Responder};
use platform::config::{CecConfig, DeviceType};
use platform::driver::RawFrame;
use platform::hid::{KeyReceiver, KeySender, KEY_QUEUE_DEPTH, KEY_NONE, KEY_VOLUME_UP};
use platform::led::LedSignal;
use platform::mocks::{MockBus, MockDdc, MockLed, MockStore};

/// Per-test key queue; leaked so the sender half gets the `'static`
/// lifetime the production queue has.
fn key_channel() -> (KeySender, KeyReceiver) {
    let channel: &'static Channel<CriticalSectionRawMutex, u8, KEY_QUEUE_DEPTH> =
        Box::leak(Box::new(Channel::new()));
    (channel.sender(), channel.receiver())
}

/// Fixed addresses, no EDID settle delay, standard keymap.
fn fixed_config() -> CecConfig {
    CecConfig {
        logical_address: 0x04,
        physical_address: 0x3000,
        edid_delay_ms: 0,
        ..CecConfig::default()
    }
}

fn sent(bus: &MockBus) -> Vec<Vec<u8>> {
    bus.sent()
        .iter()
        .map(|frame: &RawFrame| frame.as_slice().to_vec())
        .collect()
}

// ---------------------------------------------------------------------------
// Directed replies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn give_osd_name_returns_set_osd_name() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x46]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(
        sent(&bus),
        vec![vec![0x40, 0x47, b'P', b'i', b'c', b'o', b'-', b'C', b'E', b'C']]
    );
}

#[tokio::test]
async fn get_cec_version_returns_1_3a() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x9F]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(sent(&bus), vec![vec![0x40, 0x9E, 0x04]]);
}

#[tokio::test]
async fn set_stream_path_to_us_claims_active_source() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x86, 0x30, 0x00]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(responder.active_address(), 0x3000);
    assert!(responder.menu_active());
    assert_eq!(
        sent(&bus),
        vec![
            vec![0x40, 0x04],             // IMAGE_VIEW_ON to the TV
            vec![0x4F, 0x82, 0x30, 0x00], // broadcast ACTIVE_SOURCE
            vec![0x40, 0x8E, 0x01],       // MENU_STATUS active to the TV
        ]
    );
    assert_eq!(led.signals(), &[LedSignal::Selected]);
}

#[tokio::test]
async fn set_stream_path_elsewhere_is_ignored() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x86, 0x20, 0x00]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert!(!responder.menu_active());
    assert!(sent(&bus).is_empty());
}

#[tokio::test]
async fn unknown_directed_opcode_gets_feature_abort() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0xAA]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(sent(&bus), vec![vec![0x40, 0x00, 0xAA, 0x00]]);
}

#[tokio::test]
async fn abort_is_refused() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0xFF]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(sent(&bus), vec![vec![0x40, 0x00, 0xFF, 0x04]]);
}

// ---------------------------------------------------------------------------
// Address allocation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn auto_allocation_claims_first_unacknowledged_candidate() {
    let mut bus = MockBus::new();
    bus.script_ack(true); // 0x04 taken
    bus.script_ack(false); // 0x08 free
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();
    let config = CecConfig {
        logical_address: 0x00,
        physical_address: 0x3000,
        edid_delay_ms: 0,
        ..CecConfig::default()
    };

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, config);
    responder.start().await;

    assert_eq!(responder.logical_address(), 0x08);
    assert_eq!(sent(&bus), vec![vec![0x44], vec![0x88]]);
}

#[tokio::test]
async fn auto_allocation_exhaustion_leaves_node_unregistered() {
    let mut bus = MockBus::new(); // every PING acknowledged
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();
    let config = CecConfig {
        logical_address: 0x00,
        physical_address: 0x3000,
        edid_delay_ms: 0,
        ..CecConfig::default()
    };

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, config);
    responder.start().await;

    assert_eq!(responder.logical_address(), 0x0F);
    assert_eq!(
        sent(&bus),
        vec![vec![0x44], vec![0x88], vec![0xBB], vec![0xFF]]
    );
}

#[tokio::test]
async fn configured_logical_address_is_used_verbatim() {
    let mut bus = MockBus::new();
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();
    let config = CecConfig {
        logical_address: 0x01,
        physical_address: 0x3000,
        edid_delay_ms: 0,
        ..CecConfig::default()
    };

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, config);
    responder.start().await;

    assert_eq!(responder.logical_address(), 0x01);
    assert!(sent(&bus).is_empty());
}

#[tokio::test]
async fn physical_address_comes_from_edid_when_unset() {
    let mut bus = MockBus::new();
    let mut ddc = MockDdc::new(0x2100);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();
    let config = CecConfig {
        logical_address: 0x04,
        physical_address: 0x0000,
        edid_delay_ms: 0,
        ..CecConfig::default()
    };

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, config);
    responder.start().await;

    assert_eq!(responder.physical_address(), 0x2100);
    drop(responder);
    assert_eq!(ddc.reads, 1);
    assert_eq!(bus.init_calls(), 1);
}

// ---------------------------------------------------------------------------
// Address filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn directed_only_requests_ignore_broadcast() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x46]); // GIVE_OSD_NAME, broadcast
    bus.push_frame(&[0x0F, 0x9F]); // GET_CEC_VERSION, broadcast
    bus.push_frame(&[0x0F, 0xAA]); // unknown, broadcast
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    responder.step().await;
    responder.step().await;

    assert!(sent(&bus).is_empty());
}

#[tokio::test]
async fn polls_and_accepted_notifications_produce_nothing() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04]); // poll addressed to us
    bus.push_frame(&[0x04, 0x00, 0x44, 0x00]); // inbound FEATURE_ABORT
    bus.push_frame(&[0x04, 0x9E, 0x04]); // CEC_VERSION report
    bus.push_frame(&[0x04, 0x47, b'T', b'V']); // SET_OSD_NAME
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    for _ in 0..4 {
        responder.step().await;
    }

    assert!(sent(&bus).is_empty());
}

// ---------------------------------------------------------------------------
// Remote-control keys
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_control_press_maps_to_hid_usage() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x44, 0x41]); // Volume Up
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(rx.try_receive(), Ok(KEY_VOLUME_UP));
    assert!(sent(&bus).is_empty());
    assert_eq!(led.signals(), &[LedSignal::KeyPress]);
}

#[tokio::test]
async fn press_then_release_keeps_order() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x44, 0x41]);
    bus.push_frame(&[0x04, 0x45]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    responder.step().await;

    assert_eq!(rx.try_receive(), Ok(KEY_VOLUME_UP));
    assert_eq!(rx.try_receive(), Ok(KEY_NONE));
    assert_eq!(led.signals(), &[LedSignal::KeyPress, LedSignal::Idle]);
}

#[tokio::test]
async fn unmapped_key_produces_no_keystroke() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x44, 0x60]); // no binding in the standard map
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert!(rx.try_receive().is_err());
    assert_eq!(led.signals(), &[LedSignal::KeyPress]);
}

#[tokio::test]
async fn full_hid_queue_drops_keystrokes_after_bounded_wait() {
    let mut bus = MockBus::new();
    for _ in 0..9 {
        bus.push_frame(&[0x04, 0x44, 0x41]);
    }
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    for _ in 0..9 {
        responder.step().await;
    }

    // Queue depth is 8; the ninth press waits out the bound and is dropped.
    let mut delivered = 0;
    while rx.try_receive().is_ok() {
        delivered += 1;
    }
    assert_eq!(delivered, 8);
}

// ---------------------------------------------------------------------------
// Standby, audio, menu, power
// ---------------------------------------------------------------------------

#[tokio::test]
async fn standby_clears_the_active_source() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x86, 0x30, 0x00]); // become the active source
    bus.push_frame(&[0x0F, 0x36]); // broadcast standby
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    assert_eq!(responder.active_address(), 0x3000);
    responder.step().await;

    assert_eq!(responder.active_address(), 0x0000);
    assert_eq!(
        led.signals(),
        &[LedSignal::Selected, LedSignal::Standby]
    );
}

#[tokio::test]
async fn system_audio_mode_is_tracked_and_reported() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x72, 0x01]); // broadcast: audio mode on
    bus.push_frame(&[0x04, 0x7D]); // GIVE_SYSTEM_AUDIO_MODE_STATUS
    bus.push_frame(&[0x04, 0x70]); // SYSTEM_AUDIO_MODE_REQUEST
    bus.push_frame(&[0x54, 0x72, 0x00]); // directed: audio mode off
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    assert!(responder.audio_status());
    responder.step().await;
    responder.step().await;
    responder.step().await;
    assert!(!responder.audio_status());

    assert_eq!(
        sent(&bus),
        vec![
            vec![0x40, 0x7E, 0x01], // SYSTEM_AUDIO_MODE_STATUS(on)
            vec![0x40, 0x72, 0x01], // SET_SYSTEM_AUDIO_MODE(on)
        ]
    );
}

#[tokio::test]
async fn give_audio_status_reports_half_volume_unmuted() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x71]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(sent(&bus), vec![vec![0x40, 0x7A, 0x32]]);
}

#[tokio::test]
async fn menu_request_activates_queries_and_deactivates() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x8D, 0x00]); // activate
    bus.push_frame(&[0x04, 0x8D, 0x02]); // query
    bus.push_frame(&[0x04, 0x8D, 0x01]); // deactivate
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    assert!(responder.menu_active());
    responder.step().await;
    assert!(responder.menu_active());
    responder.step().await;
    assert!(!responder.menu_active());

    assert_eq!(
        sent(&bus),
        vec![
            vec![0x40, 0x8E, 0x01],
            vec![0x40, 0x8E, 0x01],
            vec![0x40, 0x8E, 0x00],
        ]
    );
}

#[tokio::test]
async fn power_status_follows_active_source() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x8F]); // not active yet
    bus.push_frame(&[0x0F, 0x86, 0x30, 0x00]); // become active
    bus.push_frame(&[0x04, 0x8F]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    responder.step().await;
    responder.step().await;

    let frames = sent(&bus);
    assert_eq!(frames.first(), Some(&vec![0x40, 0x90, 0x01])); // standby
    assert_eq!(frames.last(), Some(&vec![0x40, 0x90, 0x00])); // on
}

// ---------------------------------------------------------------------------
// Active-source elections and topology changes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_active_source_tie_break_fires_on_third_ask() {
    let mut bus = MockBus::new();
    for _ in 0..3 {
        bus.push_frame(&[0x0F, 0x85]);
    }
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    for _ in 0..3 {
        responder.step().await;
    }

    // The first two requests go unanswered; the third trips the tie-break
    // and exactly one claim goes out.
    assert_eq!(
        sent(&bus),
        vec![vec![0x40, 0x04], vec![0x4F, 0x82, 0x30, 0x00]]
    );
}

#[tokio::test]
async fn request_active_source_answers_at_once_when_we_are_active() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x86, 0x30, 0x00]);
    bus.push_frame(&[0x0F, 0x85]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    responder.step().await;

    // Three frames from the stream-path claim, two more from the answer.
    assert_eq!(sent(&bus).len(), 5);
    assert_eq!(
        sent(&bus)[3..],
        [vec![0x40, 0x04], vec![0x4F, 0x82, 0x30, 0x00]]
    );
}

#[tokio::test]
async fn active_source_broadcast_resets_the_tie_break() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x85]);
    bus.push_frame(&[0x0F, 0x85]);
    bus.push_frame(&[0x5F, 0x82, 0x20, 0x00]); // someone else claims
    bus.push_frame(&[0x0F, 0x85]);
    bus.push_frame(&[0x0F, 0x85]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    for _ in 0..5 {
        responder.step().await;
    }

    // The counter restarted after the broadcast, so no claim went out.
    assert_eq!(responder.active_address(), 0x2000);
    assert!(sent(&bus).is_empty());
}

#[tokio::test]
async fn routing_change_to_us_claims_the_stream() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x80, 0x10, 0x00, 0x30, 0x00]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(responder.active_address(), 0x3000);
    assert_eq!(
        sent(&bus),
        vec![vec![0x40, 0x04], vec![0x4F, 0x82, 0x30, 0x00]]
    );
}

#[tokio::test]
async fn routing_change_elsewhere_is_recorded_only() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x80, 0x30, 0x00, 0x20, 0x00]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(responder.active_address(), 0x2000);
    assert!(sent(&bus).is_empty());
}

#[tokio::test]
async fn tv_announcing_its_address_triggers_our_announcement() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x0F, 0x84, 0x00, 0x00, 0x00]); // TV, broadcast
    bus.push_frame(&[0x5F, 0x84, 0x20, 0x00, 0x05]); // not the TV
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    responder.step().await;

    assert_eq!(sent(&bus), vec![vec![0x4F, 0x84, 0x30, 0x00, 0x04]]);
}

#[tokio::test]
async fn give_physical_address_broadcasts_ours() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x83]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;

    assert_eq!(sent(&bus), vec![vec![0x4F, 0x84, 0x30, 0x00, 0x04]]);
}

#[tokio::test]
async fn give_physical_address_stays_quiet_without_an_address() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x83]);
    let mut ddc = MockDdc::new(0x0000); // EDID unreadable
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();
    let config = CecConfig {
        logical_address: 0x04,
        physical_address: 0x0000,
        edid_delay_ms: 0,
        ..CecConfig::default()
    };

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, config);
    responder.start().await;
    responder.step().await;

    assert!(sent(&bus).is_empty());
}

// ---------------------------------------------------------------------------
// Robustness
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_operands_change_nothing() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x44]); // press without a key code
    bus.push_frame(&[0x0F, 0x82, 0x30]); // truncated active source
    bus.push_frame(&[0x0F, 0x72]); // audio mode without an operand
    bus.push_frame(&[0x04, 0x8D]); // menu request without an operand
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    for _ in 0..4 {
        responder.step().await;
    }

    assert!(rx.try_receive().is_err());
    assert_eq!(responder.active_address(), 0x0000);
    assert!(!responder.audio_status());
    assert!(!responder.menu_active());
    assert!(sent(&bus).is_empty());
}

#[tokio::test]
async fn every_outbound_frame_carries_our_address() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x46]);
    bus.push_frame(&[0x04, 0x9F]);
    bus.push_frame(&[0x0F, 0x86, 0x30, 0x00]);
    bus.push_frame(&[0x04, 0x8C]);
    bus.push_frame(&[0x04, 0xAA]);
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    for _ in 0..5 {
        responder.step().await;
    }

    assert!(!sent(&bus).is_empty());
    for frame in sent(&bus) {
        assert_eq!(frame.first().map(|header| header >> 4), Some(0x04));
    }
}

#[tokio::test]
async fn vendor_id_is_broadcast_on_request_and_on_tv_announcement() {
    let mut bus = MockBus::new();
    bus.push_frame(&[0x04, 0x8C]); // GIVE_DEVICE_VENDOR_ID, directed
    bus.push_frame(&[0x0F, 0x87, 0x00, 0xE0, 0x91]); // TV broadcasts its own
    let mut ddc = MockDdc::new(0);
    let mut led = MockLed::new();
    let (tx, _rx) = key_channel();

    let mut responder = Responder::new(&mut bus, &mut ddc, &mut led, tx, fixed_config());
    responder.start().await;
    responder.step().await;
    responder.step().await;

    assert_eq!(
        sent(&bus),
        vec![
            vec![0x4F, 0x87, 0x00, 0x10, 0xFA],
            vec![0x4F, 0x87, 0x00, 0x10, 0xFA],
        ]
    );
}

// ---------------------------------------------------------------------------
// Configuration loading
// ---------------------------------------------------------------------------

#[test]
fn load_config_falls_back_to_defaults() {
    let mut store = MockStore { config: None };
    let config = load_config(&mut store);
    assert_eq!(config.device_type, DeviceType::PlaybackDevice);
    assert_eq!(config.edid_delay_ms, 5000);

    let mut store = MockStore {
        config: Some(CecConfig {
            logical_address: 0x08,
            ..CecConfig::default()
        }),
    };
    assert_eq!(load_config(&mut store).logical_address, 0x08);
}
