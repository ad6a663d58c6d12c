//! Fixture channel layout and per-channel state

use crate::math::approach8;
use crate::transition::Transition;

/// Number of DMX channels occupied by one fixture
pub const CHANNELS_PER_FIXTURE: usize = 8;

const CHANNEL_NAME_DIMMER: &str = "dimmer";
const CHANNEL_NAME_RED: &str = "red";
const CHANNEL_NAME_GREEN: &str = "green";
const CHANNEL_NAME_BLUE: &str = "blue";
const CHANNEL_NAME_WHITE: &str = "white";
const CHANNEL_NAME_STROBE: &str = "strobe";
const CHANNEL_NAME_FUNCTION: &str = "function";
const CHANNEL_NAME_SPEED: &str = "speed";

/// Channel offset inside a fixture block (1-based, as on the fixture's DIP
/// address sheet)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelOffset {
    Dimmer = 1,
    Red = 2,
    Green = 3,
    Blue = 4,
    White = 5,
    Strobe = 6,
    Function = 7,
    Speed = 8,
}

impl ChannelOffset {
    /// All offsets in wire order
    pub const ALL: [Self; CHANNELS_PER_FIXTURE] = [
        Self::Dimmer,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::White,
        Self::Strobe,
        Self::Function,
        Self::Speed,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Dimmer,
            2 => Self::Red,
            3 => Self::Green,
            4 => Self::Blue,
            5 => Self::White,
            6 => Self::Strobe,
            7 => Self::Function,
            8 => Self::Speed,
            _ => return None,
        })
    }

    /// Zero-based index into a fixture block
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dimmer => CHANNEL_NAME_DIMMER,
            Self::Red => CHANNEL_NAME_RED,
            Self::Green => CHANNEL_NAME_GREEN,
            Self::Blue => CHANNEL_NAME_BLUE,
            Self::White => CHANNEL_NAME_WHITE,
            Self::Strobe => CHANNEL_NAME_STROBE,
            Self::Function => CHANNEL_NAME_FUNCTION,
            Self::Speed => CHANNEL_NAME_SPEED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CHANNEL_NAME_DIMMER => Some(Self::Dimmer),
            CHANNEL_NAME_RED => Some(Self::Red),
            CHANNEL_NAME_GREEN => Some(Self::Green),
            CHANNEL_NAME_BLUE => Some(Self::Blue),
            CHANNEL_NAME_WHITE => Some(Self::White),
            CHANNEL_NAME_STROBE => Some(Self::Strobe),
            CHANNEL_NAME_FUNCTION => Some(Self::Function),
            CHANNEL_NAME_SPEED => Some(Self::Speed),
            _ => None,
        }
    }

    /// Whether a manual write to this channel freezes the running scene
    ///
    /// Dimmer and strobe are master controls layered over a scene.
    pub const fn overrides_scene(self) -> bool {
        !matches!(self, Self::Dimmer | Self::Strobe)
    }
}

/// Live and target value of one channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelState {
    current: u8,
    target: u8,
    pending_ease: bool,
}

impl ChannelState {
    pub const fn new(value: u8) -> Self {
        Self {
            current: value,
            target: value,
            pending_ease: false,
        }
    }

    /// Value currently on the wire
    pub const fn current(&self) -> u8 {
        self.current
    }

    /// Value being approached
    pub const fn target(&self) -> u8 {
        self.target
    }

    /// Whether the channel is mid-transition
    pub const fn is_pending(&self) -> bool {
        self.pending_ease
    }

    /// Jump to `value`, dropping any pending ease
    pub(crate) fn set_immediate(&mut self, value: u8) {
        self.current = value;
        self.target = value;
        self.pending_ease = false;
    }

    /// Start easing toward `value` from wherever `current` is now
    pub(crate) fn retarget(&mut self, value: u8) {
        self.target = value;
        self.pending_ease = true;
    }

    pub(crate) fn ease(&mut self, amount: f32) {
        if self.pending_ease {
            self.current = approach8(self.current, self.target, amount);
        }
    }

    pub(crate) fn settle(&mut self) {
        if self.pending_ease {
            self.current = self.target;
            self.pending_ease = false;
        }
    }
}

/// One 8-channel fixture block with its transition
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixture {
    pub(crate) channels: [ChannelState; CHANNELS_PER_FIXTURE],
    pub(crate) transition: Transition,
}

impl Fixture {
    pub const fn new() -> Self {
        Self {
            channels: [ChannelState::new(0); CHANNELS_PER_FIXTURE],
            transition: Transition::new(),
        }
    }

    pub const fn channel(&self, offset: ChannelOffset) -> ChannelState {
        self.channels[offset.index()]
    }

    pub const fn transition(&self) -> Transition {
        self.transition
    }

    /// Current values in wire order
    pub fn values(&self) -> [u8; CHANNELS_PER_FIXTURE] {
        let mut values = [0; CHANNELS_PER_FIXTURE];
        for (value, channel) in values.iter_mut().zip(self.channels.iter()) {
            *value = channel.current;
        }
        values
    }

    /// Advance the fixture's transition by one step
    pub(crate) fn tick_transition(&mut self) -> bool {
        self.transition.tick(&mut self.channels)
    }
}
