//! USB HID keyboard interface: usage codes and the outbound key queue.
//!
//! The USB HID task is an external consumer; the responder only pushes
//! 8-bit keyboard usage codes into [`KEY_QUEUE`]. [`KEY_NONE`] is the
//! all-keys-released sentinel that terminates a press.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// ---------------------------------------------------------------------------
// Key queue (one sender: responder; one receiver: USB HID task)
// ---------------------------------------------------------------------------

/// Depth of the key queue.
pub const KEY_QUEUE_DEPTH: usize = 8;

/// Bounded FIFO of HID usage codes feeding the USB HID task.
pub static KEY_QUEUE: Channel<CriticalSectionRawMutex, u8, KEY_QUEUE_DEPTH> = Channel::new();

/// Sender half of the key queue.
pub type KeySender = Sender<'static, CriticalSectionRawMutex, u8, KEY_QUEUE_DEPTH>;

/// Receiver half of the key queue.
pub type KeyReceiver = Receiver<'static, CriticalSectionRawMutex, u8, KEY_QUEUE_DEPTH>;

// ---------------------------------------------------------------------------
// Keyboard usage codes (HID Usage Tables, keyboard/keypad page 0x07)
// ---------------------------------------------------------------------------

/// No key pressed (release sentinel).
pub const KEY_NONE: u8 = 0x00;
/// Keyboard `c`.
pub const KEY_C: u8 = 0x06;
/// Keyboard `f`.
pub const KEY_F: u8 = 0x09;
/// Keyboard `r`.
pub const KEY_R: u8 = 0x15;
/// Keyboard `x`.
pub const KEY_X: u8 = 0x1B;
/// Keyboard `1`.
pub const KEY_1: u8 = 0x1E;
/// Keyboard `2`.
pub const KEY_2: u8 = 0x1F;
/// Keyboard `3`.
pub const KEY_3: u8 = 0x20;
/// Keyboard `4`.
pub const KEY_4: u8 = 0x21;
/// Keyboard `5`.
pub const KEY_5: u8 = 0x22;
/// Keyboard `6`.
pub const KEY_6: u8 = 0x23;
/// Keyboard `7`.
pub const KEY_7: u8 = 0x24;
/// Keyboard `8`.
pub const KEY_8: u8 = 0x25;
/// Keyboard `9`.
pub const KEY_9: u8 = 0x26;
/// Keyboard `0`.
pub const KEY_0: u8 = 0x27;
/// Return / Enter.
pub const KEY_ENTER: u8 = 0x28;
/// Escape.
pub const KEY_ESCAPE: u8 = 0x29;
/// Spacebar.
pub const KEY_SPACE: u8 = 0x2C;
/// Right arrow.
pub const KEY_ARROW_RIGHT: u8 = 0x4F;
/// Left arrow.
pub const KEY_ARROW_LEFT: u8 = 0x50;
/// Down arrow.
pub const KEY_ARROW_DOWN: u8 = 0x51;
/// Up arrow.
pub const KEY_ARROW_UP: u8 = 0x52;
/// Keyboard mute.
pub const KEY_MUTE: u8 = 0x7F;
/// Keyboard volume up.
pub const KEY_VOLUME_UP: u8 = 0x80;
/// Keyboard volume down.
pub const KEY_VOLUME_DOWN: u8 = 0x81;
