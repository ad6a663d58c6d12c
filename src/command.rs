//! Command surface of the controller
//!
//! Everything outside the control loop (display, network channel) expresses
//! its intent as a [`Command`] and marshals it through a [`CommandChannel`].

use embassy_time::Duration;

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::fixture::ChannelOffset;
use crate::scene::SceneKind;

/// Direction for [`Command::StepFixtureCount`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Closed set of operations on the rig
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Set one channel of one fixture immediately; freezes the scene
    SetChannel {
        fixture: usize,
        offset: ChannelOffset,
        value: u8,
    },
    /// Set one channel on every driven fixture
    ///
    /// Freezes the scene unless the channel is a master control, see
    /// [`ChannelOffset::overrides_scene`].
    SetAll { offset: ChannelOffset, value: u8 },
    /// Set red, green and blue on every driven fixture; freezes the scene
    SetColor(Rgb),
    /// Start a scene from its first frame
    StartScene(SceneKind),
    /// Stop the running scene
    StopScene,
    /// Stop the scene, zero every driven channel and clear manual override
    Reset,
    /// Drive `n` fixtures
    SetFixtureCount(usize),
    /// Drive one more or one fewer fixture
    StepFixtureCount(Step),
    /// Base speed for scene steps
    SetTransitionSpeed(Duration),
    /// Relay inbound Art-Net frames instead of local state
    SetRelayMode(bool),
}

impl Command {
    /// Whether the command writes lighting state (as opposed to settings)
    ///
    /// Lighting commands are ignored while relay mode is on.
    pub const fn targets_lighting(&self) -> bool {
        matches!(
            self,
            Self::SetChannel { .. }
                | Self::SetAll { .. }
                | Self::SetColor(_)
                | Self::StartScene(_)
                | Self::StopScene
                | Self::Reset
        )
    }
}

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> = Sender<'a, Command, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> = Receiver<'a, Command, SIZE>;

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> = Channel<Command, SIZE>;
