//! Mock implementations for testing
//!
//! This module provides scripted implementations of all contracts for use
//! in unit and integration tests; no hardware required.

#![cfg(any(test, feature = "std"))]

use heapless::{Deque, Vec};

use crate::config::{CecConfig, ConfigStore};
use crate::ddc::Ddc;
use crate::driver::{CecDriver, RawFrame, RxFrame};
use crate::led::{LedSignal, StatusLed};

/// Scripted CEC bus.
///
/// Inbound frames and send acknowledgements are queued up front; every
/// transmitted frame is captured for verification.
pub struct MockBus {
    inbound: Deque<RxFrame, 16>,
    acks: Deque<bool, 32>,
    sent: Vec<RawFrame, 32>,
    init_calls: usize,
}

impl MockBus {
    /// Create a quiet bus: no inbound traffic, every send acknowledged.
    #[must_use]
    pub fn new() -> Self {
        MockBus {
            inbound: Deque::new(),
            acks: Deque::new(),
            sent: Vec::new(),
            init_calls: 0,
        }
    }

    /// Queue an inbound frame, acknowledged on the wire.
    pub fn push_frame(&mut self, payload: &[u8]) {
        self.push_rx(payload, true);
    }

    /// Queue an inbound frame with an explicit acknowledge state.
    pub fn push_rx(&mut self, payload: &[u8], ack: bool) {
        let mut data = RawFrame::new();
        // Scripts stay within the 16-octet frame bound.
        let _ = data.extend_from_slice(payload);
        let _ = self.inbound.push_back(RxFrame { data, ack });
    }

    /// Queue the acknowledge result for the next unscripted send.
    ///
    /// Sends beyond the script are acknowledged.
    pub fn script_ack(&mut self, ack: bool) {
        let _ = self.acks.push_back(ack);
    }

    /// Frames transmitted so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> &[RawFrame] {
        &self.sent
    }

    /// Number of `init` calls observed.
    #[must_use]
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl CecDriver for MockBus {
    async fn init(&mut self) {
        self.init_calls = self.init_calls.saturating_add(1);
    }

    async fn recv(&mut self, _laddr: u8) -> RxFrame {
        match self.inbound.pop_front() {
            Some(frame) => frame,
            // An idle bus never delivers; tests script every frame.
            None => core::future::pending().await,
        }
    }

    async fn send(&mut self, payload: &[u8]) -> bool {
        let mut data = RawFrame::new();
        let _ = data.extend_from_slice(payload);
        let _ = self.sent.push(data);
        self.acks.pop_front().unwrap_or(true)
    }
}

/// DDC stub returning a fixed physical address.
pub struct MockDdc {
    /// Address reported to the caller.
    pub address: u16,
    /// Number of reads observed.
    pub reads: usize,
}

impl MockDdc {
    /// Create a stub reporting `address`.
    #[must_use]
    pub fn new(address: u16) -> Self {
        MockDdc { address, reads: 0 }
    }
}

impl Ddc for MockDdc {
    async fn physical_address(&mut self) -> u16 {
        self.reads = self.reads.saturating_add(1);
        self.address
    }
}

/// LED stub recording every signal in order.
pub struct MockLed {
    signals: Vec<LedSignal, 16>,
}

impl MockLed {
    /// Create a stub with an empty signal log.
    #[must_use]
    pub fn new() -> Self {
        MockLed {
            signals: Vec::new(),
        }
    }

    /// Signals observed so far, oldest first.
    #[must_use]
    pub fn signals(&self) -> &[LedSignal] {
        &self.signals
    }
}

impl Default for MockLed {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLed for MockLed {
    fn signal(&mut self, signal: LedSignal) {
        let _ = self.signals.push(signal);
    }
}

/// Error returned by [`MockStore`] when scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreUnavailable;

/// Configuration store stub.
pub struct MockStore {
    /// Snapshot to hand out; `None` makes every load fail.
    pub config: Option<CecConfig>,
}

impl ConfigStore for MockStore {
    type Error = StoreUnavailable;

    fn load(&mut self) -> Result<CecConfig, Self::Error> {
        self.config.clone().ok_or(StoreUnavailable)
    }
}
