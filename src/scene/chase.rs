//! Three-color chase scene
//!
//! Neighbouring fixtures show red, green and blue; each step rotates the
//! pattern by one fixture.

use super::Scene;
use crate::{
    color::{BLUE, GREEN, RED, Rgb},
    store::ChannelStore,
};

const CHASE_COLORS: [Rgb; 3] = [RED, GREEN, BLUE];

#[derive(Debug, Clone, Default)]
pub struct ChaseScene {
    position: u8,
}

impl ChaseScene {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Color shown by `fixture` at the current position
    pub fn fixture_color(&self, fixture: usize) -> Rgb {
        let step = (usize::from(self.position) + fixture) % CHASE_COLORS.len();
        CHASE_COLORS[step]
    }
}

impl Scene for ChaseScene {
    fn retarget<const FIXTURES: usize>(&mut self, store: &mut ChannelStore<FIXTURES>) {
        for fixture in 0..store.fixture_count() {
            store.set_color_target(fixture, self.fixture_color(fixture));
        }
        self.position = (self.position + 1) % 3;
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
