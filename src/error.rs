use thiserror::Error;

/// Reasons a command is rejected
///
/// Rejections never change state. The scheduler drops them; they are
/// surfaced so tests and telemetry can tell a no-op from a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("fixture count {0} outside 1..={1}")]
    FixtureCountOutOfRange(usize, usize),
    #[error("channel commands are ignored while relay mode is on")]
    RelayActive,
}

/// Reasons an inbound relay datagram is discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("datagram of {0} bytes is shorter than the ArtDmx header")]
    Truncated(usize),
    #[error("missing Art-Net signature")]
    Signature,
    #[error("unsupported opcode {0:#06x}")]
    Opcode(u16),
}

/// Hardware transmit failure reported by a [`crate::DmxOutput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransmitError {
    #[error("DMX port is busy")]
    Busy,
    #[error("DMX port rejected a frame of {0} bytes")]
    Rejected(usize),
}
