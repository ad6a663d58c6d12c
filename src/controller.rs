use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{Command, Step};
use crate::config::{CHASE_SPEED_MULTIPLIER, Cadences, ControllerConfig, clamp_transition_speed};
use crate::error::{CommandError, RelayError};
use crate::fixture::{CHANNELS_PER_FIXTURE, ChannelOffset};
use crate::scene::{SceneKind, SceneState};
use crate::store::ChannelStore;

/// Relay packet counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    pub accepted: u32,
    pub rejected: u32,
    /// Arrival time of the last accepted packet
    pub last_packet: Option<Instant>,
}

/// Read-only view of the rig for telemetry and display refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigSnapshot {
    /// Current values of fixture 0
    pub lead: [u8; CHANNELS_PER_FIXTURE],
    pub scene: SceneKind,
    pub manual_override: bool,
    pub fixture_count: usize,
    pub transition_speed: Duration,
    pub relay_enabled: bool,
    pub relay: RelayStats,
}

/// Lighting state and command handling
///
/// Owns the channel store and scene state. It is driven by the scheduler and
/// never shared: external contexts talk to it through commands only.
pub struct Controller<const FIXTURES: usize> {
    store: ChannelStore<FIXTURES>,
    scene: SceneState,
    transition_speed: Duration,
    relay_enabled: bool,
    relay_stats: RelayStats,
}

impl<const FIXTURES: usize> Controller<FIXTURES> {
    pub fn new(config: &ControllerConfig) -> Self {
        let mut controller = Self {
            store: ChannelStore::new(config.fixture_count),
            scene: SceneState::new(),
            transition_speed: clamp_transition_speed(config.transition_speed),
            relay_enabled: config.relay_enabled,
            relay_stats: RelayStats::default(),
        };
        controller.scene.start(config.scene, &mut controller.store);
        controller
    }

    /// Apply one command
    ///
    /// Invalid arguments are clamped or rejected without touching state.
    pub fn handle(&mut self, command: Command) -> Result<(), CommandError> {
        if self.relay_enabled && command.targets_lighting() {
            return Err(CommandError::RelayActive);
        }

        match command {
            Command::SetChannel {
                fixture,
                offset,
                value,
            } => {
                self.scene.mark_manual();
                self.store.set_immediate(fixture, offset, value);
            }
            Command::SetAll { offset, value } => {
                if offset.overrides_scene() {
                    self.scene.mark_manual();
                }
                self.set_all(offset, value);
            }
            Command::SetColor(color) => {
                self.scene.mark_manual();
                self.set_all(ChannelOffset::Red, color.r);
                self.set_all(ChannelOffset::Green, color.g);
                self.set_all(ChannelOffset::Blue, color.b);
            }
            Command::StartScene(kind) => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller.handle] starting scene {}", kind.as_str());
                self.scene.start(kind, &mut self.store);
            }
            Command::StopScene => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller.handle] stopping scene");
                self.scene.stop();
            }
            Command::Reset => {
                self.scene.reset();
                for offset in ChannelOffset::ALL {
                    self.set_all(offset, 0);
                }
            }
            Command::SetFixtureCount(count) => {
                self.store.set_fixture_count(count)?;
            }
            Command::StepFixtureCount(step) => {
                let count = self.store.fixture_count();
                let count = match step {
                    Step::Up => count.saturating_add(1).min(FIXTURES),
                    Step::Down => count.saturating_sub(1).max(1),
                };
                self.store.set_fixture_count(count)?;
            }
            Command::SetTransitionSpeed(speed) => {
                self.transition_speed = clamp_transition_speed(speed);
            }
            Command::SetRelayMode(enabled) => {
                #[cfg(feature = "esp32-log")]
                {
                    if enabled != self.relay_enabled {
                        println!("[Controller.handle] relay mode {}", enabled);
                    }
                }
                self.relay_enabled = enabled;
            }
        }
        Ok(())
    }

    fn set_all(&mut self, offset: ChannelOffset, value: u8) {
        for fixture in 0..self.store.fixture_count() {
            self.store.set_immediate(fixture, offset, value);
        }
    }

    /// Interval between generator steps for the current scene
    ///
    /// Sweep steps on a short fixed interval; chase is tied to the
    /// transition speed. `None` when no scene is selected.
    pub fn scene_interval(&self, cadences: &Cadences) -> Option<Duration> {
        match self.scene.kind() {
            SceneKind::None => None,
            SceneKind::Sweep => Some(cadences.sweep),
            SceneKind::Chase => Some(self.transition_speed * CHASE_SPEED_MULTIPLIER),
        }
    }

    /// Run one generator step if the scene is live
    pub fn advance_scene(&mut self) -> bool {
        self.scene.advance(&mut self.store)
    }

    /// Advance the transition of every driven fixture by one step
    pub fn advance_transitions(&mut self) {
        self.store.advance_transitions();
    }

    pub(crate) fn record_relay(&mut self, outcome: &Result<usize, RelayError>, now: Instant) {
        match outcome {
            Ok(_) => {
                self.relay_stats.accepted = self.relay_stats.accepted.saturating_add(1);
                self.relay_stats.last_packet = Some(now);
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller.record_relay] dropped datagram: {}", _error);
                self.relay_stats.rejected = self.relay_stats.rejected.saturating_add(1);
            }
        }
    }

    pub fn snapshot(&self) -> RigSnapshot {
        RigSnapshot {
            lead: self.store.snapshot(0).unwrap_or_default(),
            scene: self.scene.kind(),
            manual_override: self.scene.manual_override(),
            fixture_count: self.store.fixture_count(),
            transition_speed: self.transition_speed,
            relay_enabled: self.relay_enabled,
            relay: self.relay_stats,
        }
    }

    /// Current values of any fixture
    pub fn fixture_values(&self, fixture: usize) -> Option<[u8; CHANNELS_PER_FIXTURE]> {
        self.store.snapshot(fixture)
    }

    pub const fn store(&self) -> &ChannelStore<FIXTURES> {
        &self.store
    }

    pub const fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub const fn relay_enabled(&self) -> bool {
        self.relay_enabled
    }

    pub const fn transition_speed(&self) -> Duration {
        self.transition_speed
    }

    pub const fn relay_stats(&self) -> RelayStats {
        self.relay_stats
    }
}
