//! HDMI-CEC responder core
//!
//! Masquerades as a playback device on the CEC bus, absorbs remote-control
//! key events originating at the TV and forwards them as keystrokes to a
//! USB HID host.
//!
//! # Architecture
//!
//! ```text
//! CEC bus ── CecDriver ──▶ Responder::run ──▶ platform::hid::KEY_QUEUE ──▶ USB HID task
//!                              │
//!                              ▼ (format::render, bounded submit)
//!                          log channel ──▶ log::drain ──▶ sink (serial writer)
//! ```
//!
//! Two task bodies are exported: [`Responder::run`] (the protocol state
//! machine, single consumer of inbound frames) and [`log::drain`] (the
//! emitter decoupling slow sinks from time-critical protocol code). A
//! board crate wraps each in its executor's task macro and provides the
//! `platform` trait implementations.
//!
//! # Features
//!
//! - `std`: standard library support (host-side testing)
//! - `defmt`: enable defmt derives on protocol types

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod format;
pub mod frame;
pub mod log;
pub mod opcode;
pub mod responder;
pub mod user;

// Re-export the protocol surface
pub use format::Direction;
pub use frame::{CecFrame, BROADCAST, OSD_NAME, TV_ADDRESS, VENDOR_ID};
pub use opcode::{AbortReason, MenuRequest, Opcode, PowerStatus};
pub use responder::{load_config, Responder};
