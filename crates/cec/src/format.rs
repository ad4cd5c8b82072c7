//! Protocol-aware frame formatter.
//!
//! Turns a frame into a one-line description for the debug log:
//! zero-padded uptime, local and remote address nibbles, a direction/ack
//! arrow, the opcode mnemonic and decoded operands. Uptime is injected by
//! the caller so lines are reproducible under test.
//!
//! Every write into the fixed 64-byte line buffer may stop short when the
//! buffer fills; truncation is silent by design of the log channel.

use core::fmt::Write;

use crate::frame::CecFrame;
use crate::log::LogLine;
use crate::opcode::{AbortReason, Opcode, PowerStatus};
use crate::user;

/// Which way the frame travelled, relative to this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// We transmitted the frame.
    Send,
    /// The line driver delivered the frame.
    Recv,
}

/// Direction/ack arrow: `->` sent+ack, `~>` sent+noack, `<-` received+ack,
/// `<~` received+noack.
const fn arrow(direction: Direction, ack: bool) -> &'static str {
    match (direction, ack) {
        (Direction::Send, true) => "->",
        (Direction::Send, false) => "~>",
        (Direction::Recv, true) => "<-",
        (Direction::Recv, false) => "<~",
    }
}

/// Render `frame` into `out`.
///
/// The local address nibble prints first in both directions: the initiator
/// for sent frames, the destination for received ones.
pub fn render(out: &mut LogLine, frame: &CecFrame, direction: Direction, uptime_ms: u64) {
    let (local, remote) = match direction {
        Direction::Send => (frame.initiator(), frame.destination()),
        Direction::Recv => (frame.destination(), frame.initiator()),
    };
    let _ = write!(
        out,
        "[{uptime_ms:010}] {local:02x} {} {remote:02x}: ",
        arrow(direction, frame.ack())
    );

    if frame.is_poll() {
        let _ = write!(out, "[Polling Message]");
        return;
    }
    let Some(raw) = frame.opcode_raw() else {
        return;
    };
    match Opcode::try_from(raw) {
        Ok(opcode) => operands(out, opcode, frame),
        Err(_) => {
            let _ = write!(out, "[{raw:x}] (undecoded)");
        }
    }
}

/// Decode the operands the way the wire table defines them.
fn operands(out: &mut LogLine, opcode: Opcode, frame: &CecFrame) {
    let name = opcode.mnemonic();
    match opcode {
        Opcode::FeatureAbort => {
            if let (Some(aborted), Some(reason)) = (frame.operand(0), frame.operand(1)) {
                match AbortReason::try_from(reason) {
                    Ok(reason) => {
                        let _ = write!(out, "[{name}][{aborted:x}][{}]", reason.description());
                    }
                    Err(_) => {
                        let _ = write!(out, "[{name}][{aborted:x}][{reason:02x}]");
                    }
                }
            } else {
                let _ = write!(out, "[{name}]");
            }
        }
        Opcode::Standby => {
            let _ = write!(out, "[{name}][Display OFF]");
        }
        Opcode::RoutingChange => {
            if let (Some(from), Some(to)) = (frame.operand_u16(0), frame.operand_u16(2)) {
                let _ = write!(out, "[{name}][{from:04x} -> {to:04x}]");
            } else {
                let _ = write!(out, "[{name}]");
            }
        }
        Opcode::ActiveSource => {
            if let Some(addr) = frame.operand_u16(0) {
                let _ = write!(out, "[{name}][{addr:04x} Display ON]");
            } else {
                let _ = write!(out, "[{name}]");
            }
        }
        Opcode::ReportPhysicalAddress => {
            if let Some(addr) = frame.operand_u16(0) {
                let _ = write!(out, "[{name}] {addr:04x}");
            } else {
                let _ = write!(out, "[{name}]");
            }
        }
        Opcode::UserControlPressed => match frame.operand(0) {
            Some(key) => match user::name(key) {
                Some(key_name) => {
                    let _ = write!(out, "[{name}][{key_name}]");
                }
                None => {
                    let _ = write!(out, "[{name}] Unknown command: 0x{key:02x}");
                }
            },
            None => {
                let _ = write!(out, "[{name}]");
            }
        },
        Opcode::ReportPowerStatus => {
            let status = frame
                .operand(0)
                .and_then(|raw| PowerStatus::try_from(raw).ok())
                .map_or("unknown", PowerStatus::label);
            let _ = write!(out, "[{name}][{status}]");
        }
        Opcode::MenuStatus | Opcode::MenuRequest => {
            if let Some(state) = frame.operand(0) {
                let _ = write!(out, "[{name}][{state:02x}]");
            } else {
                let _ = write!(out, "[{name}]");
            }
        }
        Opcode::VendorCommandWithId => {
            let _ = write!(out, "[{name}]");
            for octet in frame.data() {
                let _ = write!(out, " {octet:02x}");
            }
        }
        _ => {
            let _ = write!(out, "[{name}]");
        }
    }
}
