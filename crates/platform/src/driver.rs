//! CEC line-driver contract.
//!
//! The bit-timing / line-sampling driver that shifts frames on and off the
//! single-wire bus lives in the board layer; the responder only consumes
//! this interface.

use heapless::Vec;

/// Upper bound on a CEC frame payload, header octet included.
pub const MAX_FRAME_LEN: usize = 16;

/// Raw frame payload as it travels on the wire.
///
/// Octet 0 is the address header `(initiator << 4) | destination`; octet 1,
/// when present, is the opcode. A single-octet payload is a polling message.
pub type RawFrame = Vec<u8, MAX_FRAME_LEN>;

/// An inbound frame together with its acknowledge state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxFrame {
    /// Full payload including the header octet.
    pub data: RawFrame,
    /// Whether the frame was acknowledged on the wire.
    ///
    /// Directed frames addressed to us are acknowledged by the driver
    /// itself; observed broadcasts report what the bus did.
    pub ack: bool,
}

/// Contract implemented by the bit-timing line driver.
pub trait CecDriver {
    /// One-time driver bring-up.
    fn init(&mut self) -> impl core::future::Future<Output = ()>;

    /// Block until a frame arrives whose destination is `laddr` or `0x0F`.
    ///
    /// The driver acknowledges directed frames automatically and returns
    /// the full payload including the header octet.
    fn recv(&mut self, laddr: u8) -> impl core::future::Future<Output = RxFrame>;

    /// Transmit a frame, arbitrating for the bus.
    ///
    /// Returns whether the destination acknowledged. Single-octet payloads
    /// are polling messages. The caller never retries; loss recovery is the
    /// driver's business.
    fn send(&mut self, payload: &[u8]) -> impl core::future::Future<Output = bool>;
}

impl<T: CecDriver> CecDriver for &mut T {
    fn init(&mut self) -> impl core::future::Future<Output = ()> {
        (**self).init()
    }

    fn recv(&mut self, laddr: u8) -> impl core::future::Future<Output = RxFrame> {
        (**self).recv(laddr)
    }

    fn send(&mut self, payload: &[u8]) -> impl core::future::Future<Output = bool> {
        (**self).send(payload)
    }
}
