//! DMX512 output frame buffer

/// Channels in one DMX universe
pub const DMX_CHANNELS: usize = 512;

/// Start code plus a full universe
pub const DMX_FRAME_LEN: usize = DMX_CHANNELS + 1;

/// Null start code for dimmer data
pub const START_CODE: u8 = 0;

/// Output frame: slot 0 is the start code, slots `1..=512` the channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmxFrame {
    data: [u8; DMX_FRAME_LEN],
}

impl DmxFrame {
    pub const fn new() -> Self {
        Self {
            data: [START_CODE; DMX_FRAME_LEN],
        }
    }

    /// Zero every channel and restore the start code
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.data[0] = START_CODE;
    }

    /// Whole frame including start code
    pub const fn as_bytes(&self) -> &[u8; DMX_FRAME_LEN] {
        &self.data
    }

    /// First `len` bytes of the frame, clamped to the frame size
    pub fn head(&self, len: usize) -> &[u8] {
        &self.data[..len.min(DMX_FRAME_LEN)]
    }

    /// Channel slots without the start code
    pub fn channels(&self) -> &[u8] {
        &self.data[1..]
    }

    pub(crate) fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.data[1..]
    }
}

impl Default for DmxFrame {
    fn default() -> Self {
        Self::new()
    }
}
