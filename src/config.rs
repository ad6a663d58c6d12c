//! Controller configuration
//!
//! Defaults match the reference rig: one fixture, 250 ms transition speed,
//! a 40 Hz DMX refresh and a 5 ms idle between loop iterations.

use embassy_time::Duration;

use crate::scene::SceneKind;

/// Shortest accepted transition speed
pub const MIN_TRANSITION_SPEED: Duration = Duration::from_millis(10);
/// Longest accepted transition speed
pub const MAX_TRANSITION_SPEED: Duration = Duration::from_millis(1000);
pub const DEFAULT_TRANSITION_SPEED: Duration = Duration::from_millis(250);

/// Chase steps at this multiple of the transition speed
pub const CHASE_SPEED_MULTIPLIER: u32 = 3;

/// Loop pacing and cadence intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadences {
    /// Sweep generator step interval
    pub sweep: Duration,
    /// DMX frame interval
    pub emit: Duration,
    /// Telemetry snapshot interval
    pub status: Duration,
    /// Yield between loop iterations
    pub idle: Duration,
    /// Bound on waiting for the previous frame to leave the wire
    pub send_timeout: Duration,
}

impl Cadences {
    pub const DEFAULT: Self = Self {
        sweep: Duration::from_millis(10),
        emit: Duration::from_millis(25),
        status: Duration::from_millis(1000),
        idle: Duration::from_millis(5),
        send_timeout: Duration::from_millis(30),
    };
}

impl Default for Cadences {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Fixtures driven at start-up, clamped to the rig capacity
    pub fixture_count: usize,
    /// Clamped to `MIN_TRANSITION_SPEED..=MAX_TRANSITION_SPEED`
    pub transition_speed: Duration,
    /// Start in relay mode
    pub relay_enabled: bool,
    /// Scene to start with
    pub scene: SceneKind,
    pub cadences: Cadences,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            fixture_count: 1,
            transition_speed: DEFAULT_TRANSITION_SPEED,
            relay_enabled: false,
            scene: SceneKind::None,
            cadences: Cadences::DEFAULT,
        }
    }
}

/// Clamp a requested transition speed to the accepted range
pub fn clamp_transition_speed(speed: Duration) -> Duration {
    speed.clamp(MIN_TRANSITION_SPEED, MAX_TRANSITION_SPEED)
}
