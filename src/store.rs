//! Channel state store
//!
//! Fixed arena of fixture blocks sized by the `FIXTURES` parameter. Every lookup goes
//! through [`ChannelStore::fixture_mut`] / [`ChannelStore::fixture`], so an
//! out-of-range fixture is rejected in exactly one place.

use crate::color::Rgb;
use crate::error::CommandError;
use crate::fixture::{CHANNELS_PER_FIXTURE, ChannelOffset, ChannelState, Fixture};
use crate::frame::{DMX_CHANNELS, DmxFrame};

/// Largest rig a single universe can carry
pub const MAX_FIXTURES: usize = DMX_CHANNELS / CHANNELS_PER_FIXTURE;

/// Owned per-channel lighting state of the rig
#[derive(Debug, Clone)]
pub struct ChannelStore<const FIXTURES: usize> {
    fixtures: [Fixture; FIXTURES],
    fixture_count: usize,
}

impl<const FIXTURES: usize> ChannelStore<FIXTURES> {
    const FITS_UNIVERSE: () = assert!(
        FIXTURES >= 1 && FIXTURES * CHANNELS_PER_FIXTURE <= DMX_CHANNELS,
        "rig must hold at least one fixture and fit in one DMX universe"
    );

    /// Create a store with all channels at zero
    ///
    /// `fixture_count` is clamped to `1..=FIXTURES`.
    pub fn new(fixture_count: usize) -> Self {
        let () = Self::FITS_UNIVERSE;
        Self {
            fixtures: [Fixture::new(); FIXTURES],
            fixture_count: fixture_count.clamp(1, FIXTURES),
        }
    }

    /// Number of fixtures being driven
    pub const fn fixture_count(&self) -> usize {
        self.fixture_count
    }

    /// Arena capacity
    pub const fn capacity(&self) -> usize {
        FIXTURES
    }

    /// Change the number of driven fixtures
    ///
    /// State of fixtures beyond the new count is kept but no longer
    /// transmitted or animated.
    pub fn set_fixture_count(&mut self, count: usize) -> Result<(), CommandError> {
        if count == 0 || count > FIXTURES {
            return Err(CommandError::FixtureCountOutOfRange(count, FIXTURES));
        }
        self.fixture_count = count;
        Ok(())
    }

    pub fn fixture(&self, fixture: usize) -> Option<&Fixture> {
        self.fixtures.get(fixture)
    }

    pub(crate) fn fixture_mut(&mut self, fixture: usize) -> Option<&mut Fixture> {
        self.fixtures.get_mut(fixture)
    }

    /// Advance the transition of every driven fixture by one step
    ///
    /// Fixtures past the fixture count are frozen where they are.
    pub fn advance_transitions(&mut self) {
        for fixture in &mut self.fixtures[..self.fixture_count] {
            fixture.tick_transition();
        }
    }

    /// Set a channel now, with no easing
    ///
    /// Overrides any transition in flight for that channel. Out-of-range
    /// fixtures are ignored.
    pub fn set_immediate(&mut self, fixture: usize, offset: ChannelOffset, value: u8) {
        if let Some(block) = self.fixture_mut(fixture) {
            block.channels[offset.index()].set_immediate(value);
        }
    }

    /// Give a channel a new target to ease toward
    ///
    /// Does not start the fixture's transition; see [`Self::ensure_transition`].
    pub fn set_scene_target(&mut self, fixture: usize, offset: ChannelOffset, value: u8) {
        if let Some(block) = self.fixture_mut(fixture) {
            block.channels[offset.index()].retarget(value);
        }
    }

    /// Retarget the color channels of a fixture and make sure they move
    pub fn set_color_target(&mut self, fixture: usize, color: Rgb) {
        self.set_scene_target(fixture, ChannelOffset::Red, color.r);
        self.set_scene_target(fixture, ChannelOffset::Green, color.g);
        self.set_scene_target(fixture, ChannelOffset::Blue, color.b);
        self.ensure_transition(fixture);
    }

    /// Start the fixture's transition unless one is already running
    pub fn ensure_transition(&mut self, fixture: usize) {
        if let Some(block) = self.fixture_mut(fixture) {
            if !block.transition.is_active() {
                block.transition.start();
            }
        }
    }

    /// Restart the fixture's transition from step zero
    pub fn start_transition(&mut self, fixture: usize) {
        if let Some(block) = self.fixture_mut(fixture) {
            block.transition.start();
        }
    }

    pub fn is_transitioning(&self, fixture: usize) -> bool {
        self.fixture(fixture)
            .is_some_and(|block| block.transition.is_active())
    }

    pub fn channel(&self, fixture: usize, offset: ChannelOffset) -> Option<ChannelState> {
        self.fixture(fixture).map(|block| block.channel(offset))
    }

    /// Current values of a fixture in wire order
    pub fn snapshot(&self, fixture: usize) -> Option<[u8; CHANNELS_PER_FIXTURE]> {
        self.fixture(fixture).map(Fixture::values)
    }

    /// Serialize the driven fixtures into `frame`
    ///
    /// Clears the frame first. Returns the frame length including the start
    /// code.
    pub fn write_frame(&self, frame: &mut DmxFrame) -> usize {
        frame.clear();
        let channels = frame.channels_mut();
        for (slot, fixture) in channels
            .chunks_exact_mut(CHANNELS_PER_FIXTURE)
            .zip(self.fixtures[..self.fixture_count].iter())
        {
            slot.copy_from_slice(&fixture.values());
        }
        self.fixture_count * CHANNELS_PER_FIXTURE + 1
    }
}

impl Default for ChannelStore<MAX_FIXTURES> {
    fn default() -> Self {
        Self::new(1)
    }
}
