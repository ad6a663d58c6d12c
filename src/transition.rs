//! Stepped, eased channel transitions
//!
//! A transition runs for a fixed number of steps, one per scheduler
//! iteration, so its wall-clock length follows the loop pacing.

use crate::fixture::ChannelState;
use crate::math::{ease_in_out_quad, progress};

/// Number of steps in one transition
pub const STEP_COUNT: u8 = 50;

/// Per-fixture eased progression
///
/// One transition governs all channels of a fixture, but only the channels
/// marked pending are moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    step: u8,
    active: bool,
}

impl Transition {
    pub const fn new() -> Self {
        Self {
            step: 0,
            active: false,
        }
    }

    /// (Re)start from step zero
    pub fn start(&mut self) {
        self.step = 0;
        self.active = true;
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Advance one step
    ///
    /// Each pending channel closes the eased fraction of its *remaining*
    /// distance, so a target moved mid-transition is followed smoothly. On
    /// the last step every pending channel is snapped onto its target.
    ///
    /// Returns `true` if the transition finished on this step.
    pub fn tick(&mut self, channels: &mut [ChannelState]) -> bool {
        if !self.active {
            return false;
        }

        let eased = ease_in_out_quad(progress(self.step, STEP_COUNT));
        for channel in channels.iter_mut() {
            channel.ease(eased);
        }
        self.step = self.step.saturating_add(1);

        if self.step < STEP_COUNT {
            return false;
        }

        for channel in channels.iter_mut() {
            channel.settle();
        }
        self.step = STEP_COUNT;
        self.active = false;
        true
    }
}
