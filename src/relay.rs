//! Art-Net `ArtDmx` relay decoding
//!
//! Only the DMX opcode is understood. The universe fields are parsed for
//! diagnostics but not filtered on: the rig has a single universe and every
//! valid `ArtDmx` packet is relayed.

use crate::error::RelayError;
use crate::frame::{DMX_CHANNELS, DmxFrame};

/// UDP port Art-Net nodes listen on
pub const ARTNET_PORT: u16 = 6454;

/// Packet ID at the start of every Art-Net packet
pub const ARTNET_ID: &[u8; 8] = b"Art-Net\0";

/// `OpDmx`
pub const OP_DMX: u16 = 0x5000;

/// Bytes before the DMX payload in an `ArtDmx` packet
pub const ARTDMX_HEADER_LEN: usize = 18;

/// Largest datagram accepted from the network
pub const MAX_DATAGRAM_LEN: usize = 530;

const OPCODE_OFFSET: usize = 8;
const SEQUENCE_OFFSET: usize = 12;
const UNIVERSE_OFFSET: usize = 14;
const LENGTH_OFFSET: usize = 16;

/// Borrowed view of a validated `ArtDmx` packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtDmx<'a> {
    /// Sequence number, 0 when the sender does not sequence
    pub sequence: u8,
    /// 15-bit port address (net, sub-net, universe)
    pub universe: u16,
    /// Channel data, clamped to 512 bytes and to what the datagram carries
    pub data: &'a [u8],
}

impl<'a> ArtDmx<'a> {
    /// Validate and parse a datagram
    pub fn parse(datagram: &'a [u8]) -> Result<Self, RelayError> {
        if datagram.len() < ARTDMX_HEADER_LEN {
            return Err(RelayError::Truncated(datagram.len()));
        }
        if &datagram[..OPCODE_OFFSET] != ARTNET_ID {
            return Err(RelayError::Signature);
        }
        // Art-Net sends the opcode low byte first
        let opcode = u16::from_le_bytes([datagram[OPCODE_OFFSET], datagram[OPCODE_OFFSET + 1]]);
        if opcode != OP_DMX {
            return Err(RelayError::Opcode(opcode));
        }

        let universe =
            u16::from_le_bytes([datagram[UNIVERSE_OFFSET], datagram[UNIVERSE_OFFSET + 1]]);
        let declared = usize::from(u16::from_be_bytes([
            datagram[LENGTH_OFFSET],
            datagram[LENGTH_OFFSET + 1],
        ]));
        let payload = &datagram[ARTDMX_HEADER_LEN..];
        let len = declared.min(DMX_CHANNELS).min(payload.len());

        Ok(Self {
            sequence: datagram[SEQUENCE_OFFSET],
            universe,
            data: &payload[..len],
        })
    }

    /// Copy the channel data into `frame`
    ///
    /// Channels past the payload are cleared. Returns the number of channels
    /// copied.
    pub fn write_into(&self, frame: &mut DmxFrame) -> usize {
        frame.clear();
        let len = self.data.len();
        frame.channels_mut()[..len].copy_from_slice(self.data);
        len
    }
}

/// Decode a relay datagram straight into the output frame
///
/// On error the frame is left untouched. On success returns the number of
/// channels now in the frame.
pub fn decode_into(datagram: &[u8], frame: &mut DmxFrame) -> Result<usize, RelayError> {
    let packet = ArtDmx::parse(datagram)?;
    Ok(packet.write_into(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(length: u16) -> [u8; ARTDMX_HEADER_LEN] {
        let mut packet = [0u8; ARTDMX_HEADER_LEN];
        packet[..8].copy_from_slice(ARTNET_ID);
        packet[8] = 0x00;
        packet[9] = 0x50;
        packet[11] = 14;
        packet[12] = 7;
        packet[14] = 0x21;
        packet[15] = 0x03;
        packet[16..18].copy_from_slice(&length.to_be_bytes());
        packet
    }

    #[test]
    fn parses_sequence_and_universe() {
        let packet = header(0);
        let parsed = ArtDmx::parse(&packet).unwrap();
        assert_eq!(parsed.sequence, 7);
        assert_eq!(parsed.universe, 0x0321);
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn declared_length_is_clamped_to_datagram() {
        let mut packet = [0u8; ARTDMX_HEADER_LEN + 4];
        packet[..ARTDMX_HEADER_LEN].copy_from_slice(&header(600));
        let parsed = ArtDmx::parse(&packet).unwrap();
        assert_eq!(parsed.data.len(), 4);
    }

    #[test]
    fn opcode_is_reported() {
        let mut packet = header(0);
        packet[8] = 0x00;
        packet[9] = 0x20;
        assert_eq!(ArtDmx::parse(&packet), Err(RelayError::Opcode(0x2000)));
    }
}
