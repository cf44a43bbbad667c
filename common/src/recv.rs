//! Bounded streaming receiver.
//!
//! Pulls a known number of bytes off a rate-limited channel, or gives up
//! once a wall-clock deadline elapses. The per-call read timeout belongs
//! to the channel itself (a serial port read returns `TimedOut` when no
//! data arrives in time), so a silent channel can never wedge the loop.

use std::io::{self, ErrorKind, Read};
use std::time::{Duration, Instant};

use tracing::info;

/// How often the in-flight byte count is reported
const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

pub struct RecvConfig {
    /// number of bytes the far side is expected to send
    pub expected: usize,
    /// upper bound for a single read call
    pub chunk: usize,
    /// wall-clock budget for the whole transfer
    pub deadline: Duration,
}

/// Everything the loop accumulated, complete or not.
#[derive(Debug)]
pub struct Capture {
    pub data: Vec<u8>,
    pub expected: usize,
    pub elapsed: Duration,
}

impl Capture {
    pub fn complete(&self) -> bool {
        self.data.len() == self.expected
    }
}

/// Read from `channel` until the expected count is reached or the deadline
/// elapses, whichever comes first.
///
/// Each read is capped at the bytes still missing, so the accumulator never
/// overshoots the target. A timeout is an expected outcome: the partial
/// buffer comes back in the `Capture` and the caller checks `complete()`.
/// Only hard channel errors propagate as `Err`.
pub fn capture<R: Read>(channel: &mut R, config: &RecvConfig) -> io::Result<Capture> {
    let mut data = Vec::with_capacity(config.expected);
    let mut buf = vec![0u8; config.chunk];
    let start = Instant::now();
    let mut last_update = start;

    while data.len() < config.expected && start.elapsed() < config.deadline {
        let want = config.chunk.min(config.expected - data.len());
        match channel.read(&mut buf[..want]) {
            Ok(0) => {}
            Ok(n) => data.extend_from_slice(&buf[..n]),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
                ) => {}
            Err(e) => return Err(e),
        }

        if last_update.elapsed() >= PROGRESS_INTERVAL {
            info!("received {}/{} bytes..", data.len(), config.expected);
            last_update = Instant::now();
        }
    }

    Ok(Capture {
        data,
        expected: config.expected,
        elapsed: start.elapsed(),
    })
}
