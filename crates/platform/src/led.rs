//! Status LED contract.
//!
//! Fire-and-forget signaling only; the blinker task owns timing and
//! patterns.

/// Protocol events worth showing on the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedSignal {
    /// Nothing in flight (key released).
    Idle,
    /// A remote-control key is held down.
    KeyPress,
    /// The TV sent us into standby.
    Standby,
    /// We were selected as the active stream path.
    Selected,
}

/// Contract implemented by the status LED blinker.
pub trait StatusLed {
    /// Signal a protocol event. Must not block.
    fn signal(&mut self, signal: LedSignal);
}

impl<T: StatusLed> StatusLed for &mut T {
    fn signal(&mut self, signal: LedSignal) {
        (**self).signal(signal);
    }
}
