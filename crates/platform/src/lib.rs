//! Hardware contracts for the HDMI-CEC to USB-HID bridge
//!
//! This crate defines trait-based abstractions for every external
//! collaborator of the CEC responder, enabling development and testing
//! without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Responder / formatter / log emitter (cec crate)
//!         ↓
//! Contracts (this crate - trait abstractions)
//!         ↓
//! Board layer (line driver, DDC, NVS, LED, USB HID)
//! ```
//!
//! # Contracts
//!
//! - [`CecDriver`] - bit-timing line driver (frame receive/send/init)
//! - [`Ddc`] - EDID physical-address query over DDC
//! - [`ConfigStore`] - non-volatile configuration load
//! - [`StatusLed`] - fire-and-forget status LED signaling
//! - [`hid::KEY_QUEUE`] - bounded FIFO feeding the USB HID task
//!
//! # Features
//!
//! - `std`: expose the [`mocks`] module to dependent crates' test suites
//! - `defmt`: enable defmt logging derives on contract types

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod ddc;
pub mod driver;
pub mod hid;
pub mod led;
pub mod mocks;

// Re-export the contract surface
pub use config::{CecConfig, ConfigStore, DeviceType, KeyCommand, Keymap};
pub use ddc::Ddc;
pub use driver::{CecDriver, RawFrame, RxFrame, MAX_FRAME_LEN};
pub use led::{LedSignal, StatusLed};
