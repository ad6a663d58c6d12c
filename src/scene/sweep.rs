//! Hue sweep scene
//!
//! Every fixture shows a fully saturated hue; fixtures are spread evenly
//! around the color wheel and the whole wheel turns slowly.

use super::Scene;
use crate::{
    color::{hue_to_rgb, wrap_unit},
    store::ChannelStore,
};

/// Hue advance per generator step
pub const HUE_STEP: f32 = 0.001;

#[derive(Debug, Clone, Default)]
pub struct SweepScene {
    hue: f32,
}

impl SweepScene {
    pub const fn new() -> Self {
        Self { hue: 0.0 }
    }

    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Hue shown by `fixture` out of `count`
    #[allow(clippy::cast_precision_loss)]
    pub fn fixture_hue(&self, fixture: usize, count: usize) -> f32 {
        wrap_unit(self.hue + fixture as f32 / count.max(1) as f32)
    }
}

impl Scene for SweepScene {
    fn retarget<const FIXTURES: usize>(&mut self, store: &mut ChannelStore<FIXTURES>) {
        let count = store.fixture_count();
        for fixture in 0..count {
            let color = hue_to_rgb(self.fixture_hue(fixture, count));
            store.set_color_target(fixture, color);
        }

        self.hue += HUE_STEP;
        if self.hue >= 1.0 {
            self.hue = 0.0;
        }
    }

    fn reset(&mut self) {
        self.hue = 0.0;
    }
}
