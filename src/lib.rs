#![no_std]

pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod emitter;
pub mod error;
pub mod fixture;
pub mod frame;
pub mod math;
pub mod relay;
pub mod scene;
pub mod scheduler;
pub mod store;
pub mod transition;

pub use command::{Command, CommandChannel, CommandReceiver, CommandSender, Step};
pub use config::{Cadences, ControllerConfig};
pub use controller::{Controller, RelayStats, RigSnapshot};
pub use emitter::{EmitterStats, FrameEmitter};
pub use error::{CommandError, RelayError, TransmitError};
pub use fixture::{CHANNELS_PER_FIXTURE, ChannelOffset, ChannelState};
pub use frame::{DMX_CHANNELS, DMX_FRAME_LEN, DmxFrame};
pub use scene::{SceneKind, SceneState};
pub use scheduler::{Cadence, Scheduler, TickResult};
pub use store::{ChannelStore, MAX_FIXTURES};
pub use transition::{STEP_COUNT, Transition};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// DMX transmit primitive
///
/// Implement this trait for the UART / RS-485 driver of the target board.
/// The controller is generic over it.
pub trait DmxOutput {
    /// Load `frame` (start code included) into the transmit buffer
    fn write(&mut self, frame: &[u8]);

    /// Start transmitting the first `len` bytes of the loaded frame
    fn send(&mut self, len: usize) -> Result<(), TransmitError>;

    /// Block until the previous frame has left the wire or `timeout`
    /// elapses
    ///
    /// Returns `false` on timeout.
    fn wait_until_sent(&mut self, timeout: Duration) -> bool;
}

/// Non-blocking supplier of inbound relay datagrams
pub trait DatagramSource {
    /// Copy the next pending datagram into `buffer` and return its length
    ///
    /// Returns `None` when nothing is pending. Datagrams longer than the
    /// buffer are truncated.
    fn poll(&mut self, buffer: &mut [u8]) -> Option<usize>;
}

/// Datagram source for rigs without a network relay
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDatagrams;

impl DatagramSource for NoDatagrams {
    fn poll(&mut self, _buffer: &mut [u8]) -> Option<usize> {
        None
    }
}
