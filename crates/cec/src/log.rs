//! Fire-and-forget protocol log channel and the emitter loop.
//!
//! Submitters (the responder, mid-protocol) format a line and push it into
//! a bounded message buffer with a short send timeout; the emitter task
//! drains the buffer and hands complete lines to an installed sink (for
//! example a serial writer). Slow sinks therefore never stall the bus
//! loop: on timeout or overflow the line is dropped, and when logging is
//! disabled submissions are dropped before any formatting happens.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration, Instant};

use crate::format::{self, Direction};
use crate::frame::CecFrame;

/// Maximum log line length in bytes; longer lines truncate silently.
pub const LINE_LEN: usize = 64;

/// A complete, bounded log line.
pub type LogLine = heapless::String<LINE_LEN>;

/// Lines buffered between submitters and the emitter.
const QUEUE_DEPTH: usize = 16;

/// How long a submitter may wait on a full buffer before dropping.
const SUBMIT_TIMEOUT: Duration = Duration::from_millis(20);

/// How long the emitter waits for a line before looping.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(10);

static CHANNEL: Channel<CriticalSectionRawMutex, LogLine, QUEUE_DEPTH> = Channel::new();
static ENABLED: AtomicBool = AtomicBool::new(false);

/// Start accepting log submissions.
pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Drop all further submissions at the source.
pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Whether submissions are currently accepted.
#[must_use]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Submit a formatted line.
///
/// Returns immediately when logging is disabled, before any formatting
/// cost is paid. The line is dropped if the buffer stays full for
/// [`SUBMIT_TIMEOUT`]; protocol correctness never depends on delivery.
pub async fn submit(args: fmt::Arguments<'_>) {
    if !is_enabled() {
        return;
    }
    let mut line = LogLine::new();
    let _ = fmt::write(&mut line, args);
    send(line).await;
}

/// Format and submit a frame, stamped with the current uptime.
pub async fn frame(frame: &CecFrame, direction: Direction) {
    if !is_enabled() {
        return;
    }
    let mut line = LogLine::new();
    format::render(&mut line, frame, direction, Instant::now().as_millis());
    send(line).await;
}

async fn send(line: LogLine) {
    let _ = with_timeout(SUBMIT_TIMEOUT, CHANNEL.sender().send(line)).await;
}

/// Emitter loop: dequeue complete lines and hand them to `sink`.
///
/// Runs forever; spawn it as its own task. The sink must not re-enter
/// logging.
pub async fn drain(mut sink: impl FnMut(&str)) -> ! {
    loop {
        if let Ok(line) = with_timeout(DRAIN_TIMEOUT, CHANNEL.receiver().receive()).await {
            sink(line.as_str());
        }
    }
}
