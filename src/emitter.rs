//! Frame emitter
//!
//! Owns the output frame and the DMX port. Normal frames are built from the
//! channel store on the emit cadence; relay frames are sent as soon as a
//! datagram decodes.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::DmxOutput;
use crate::error::RelayError;
use crate::frame::DmxFrame;
use crate::relay::decode_into;
use crate::store::ChannelStore;

/// Transmit counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterStats {
    /// Frames handed to the port successfully
    pub frames_sent: u32,
    /// Frames the port refused
    pub send_failures: u32,
    /// Waits for the previous frame that ran out of time
    pub wait_timeouts: u32,
}

pub struct FrameEmitter<O: DmxOutput> {
    output: O,
    frame: DmxFrame,
    send_timeout: Duration,
    stats: EmitterStats,
}

impl<O: DmxOutput> FrameEmitter<O> {
    pub const fn new(output: O, send_timeout: Duration) -> Self {
        Self {
            output,
            frame: DmxFrame::new(),
            send_timeout,
            stats: EmitterStats {
                frames_sent: 0,
                send_failures: 0,
                wait_timeouts: 0,
            },
        }
    }

    /// Build a frame from the store and send it
    ///
    /// Blocks for at most the send timeout while the previous frame drains.
    /// Returns the frame length.
    pub fn emit_store<const FIXTURES: usize>(&mut self, store: &ChannelStore<FIXTURES>) -> usize {
        if !self.output.wait_until_sent(self.send_timeout) {
            self.stats.wait_timeouts = self.stats.wait_timeouts.saturating_add(1);
        }
        let len = store.write_frame(&mut self.frame);
        self.transmit(len);
        len
    }

    /// Decode a relay datagram into the frame and send it right away
    ///
    /// A rejected datagram leaves the frame as it was and sends nothing.
    /// Returns the frame length.
    pub fn emit_relay(&mut self, datagram: &[u8]) -> Result<usize, RelayError> {
        let channels = decode_into(datagram, &mut self.frame)?;
        let len = channels + 1;
        self.transmit(len);
        Ok(len)
    }

    fn transmit(&mut self, len: usize) {
        self.output.write(self.frame.head(len));
        match self.output.send(len) {
            Ok(()) => {
                self.stats.frames_sent = self.stats.frames_sent.saturating_add(1);
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[FrameEmitter.transmit] send failed: {}", _error);
                self.stats.send_failures = self.stats.send_failures.saturating_add(1);
            }
        }
    }

    /// Last frame written, start code included
    pub const fn frame(&self) -> &DmxFrame {
        &self.frame
    }

    pub const fn stats(&self) -> EmitterStats {
        self.stats
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
