//! Scene generators
//!
//! Scenes are a closed set, so they live in an enum rather than behind a
//! trait object. Each generator only writes color *targets*; the transition
//! engine moves the live values.

mod chase;
mod sweep;

pub use chase::ChaseScene;
pub use sweep::{HUE_STEP, SweepScene};

use crate::store::ChannelStore;

const SCENE_NAME_NONE: &str = "none";
const SCENE_NAME_SWEEP: &str = "sweep";
const SCENE_NAME_CHASE: &str = "chase";

const SCENE_ID_NONE: u8 = 0;
const SCENE_ID_SWEEP: u8 = 1;
const SCENE_ID_CHASE: u8 = 2;

pub trait Scene {
    /// Compute new color targets for every driven fixture
    fn retarget<const FIXTURES: usize>(&mut self, store: &mut ChannelStore<FIXTURES>);

    /// Return to the first frame of the scene
    fn reset(&mut self);
}

/// Known scenes that can be requested
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SceneKind {
    #[default]
    None = SCENE_ID_NONE,
    /// Hue sweep spread evenly across fixtures
    Sweep = SCENE_ID_SWEEP,
    /// Red, green, blue rotating one fixture per step
    Chase = SCENE_ID_CHASE,
}

impl SceneKind {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SCENE_ID_NONE => Self::None,
            SCENE_ID_SWEEP => Self::Sweep,
            SCENE_ID_CHASE => Self::Chase,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => SCENE_NAME_NONE,
            Self::Sweep => SCENE_NAME_SWEEP,
            Self::Chase => SCENE_NAME_CHASE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            SCENE_NAME_NONE => Some(Self::None),
            SCENE_NAME_SWEEP => Some(Self::Sweep),
            SCENE_NAME_CHASE => Some(Self::Chase),
            _ => None,
        }
    }
}

/// Process-wide scene state
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    kind: SceneKind,
    sweep: SweepScene,
    chase: ChaseScene,
    manual_override: bool,
}

impl SceneState {
    pub const fn new() -> Self {
        Self {
            kind: SceneKind::None,
            sweep: SweepScene::new(),
            chase: ChaseScene::new(),
            manual_override: false,
        }
    }

    pub const fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Sweep hue in `[0, 1)`
    pub const fn hue(&self) -> f32 {
        self.sweep.hue()
    }

    /// Chase position in `0..3`
    pub const fn chase_position(&self) -> u8 {
        self.chase.position()
    }

    /// Whether a direct channel write has frozen the generator
    pub const fn manual_override(&self) -> bool {
        self.manual_override
    }

    /// Whether a generator step would change anything
    pub const fn is_generating(&self) -> bool {
        !self.manual_override && !matches!(self.kind, SceneKind::None)
    }

    /// Start `kind` from its first frame
    ///
    /// Also kicks fixture 0's transition so the change is visible before the
    /// first generator step. `SceneKind::None` is a stop.
    pub fn start<const FIXTURES: usize>(
        &mut self,
        kind: SceneKind,
        store: &mut ChannelStore<FIXTURES>,
    ) {
        if kind == SceneKind::None {
            self.stop();
            return;
        }
        self.kind = kind;
        self.sweep.reset();
        self.chase.reset();
        self.manual_override = false;
        store.start_transition(0);
    }

    /// Stop generating; transitions in flight run to completion
    pub fn stop(&mut self) {
        self.kind = SceneKind::None;
    }

    /// Back to `{None, 0, 0, false}`
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Freeze the generator after a direct channel write
    pub fn mark_manual(&mut self) {
        self.manual_override = true;
    }

    /// Run one generator step
    ///
    /// Returns `false` if the generator is stopped or overridden.
    pub fn advance<const FIXTURES: usize>(&mut self, store: &mut ChannelStore<FIXTURES>) -> bool {
        if !self.is_generating() {
            return false;
        }
        match self.kind {
            SceneKind::Sweep => self.sweep.retarget(store),
            SceneKind::Chase => self.chase.retarget(store),
            SceneKind::None => return false,
        }
        true
    }
}
