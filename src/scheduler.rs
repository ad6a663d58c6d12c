//! Cooperative control loop.
//!
//! One [`Scheduler::tick`] is one loop iteration. The caller supplies the
//! clock and yields for [`TickResult::idle`] between iterations; nothing here
//! sleeps except the bounded wait for the previous DMX frame.
//!
//! # Usage
//!
//! ```ignore
//! static COMMANDS: CommandChannel<8> = CommandChannel::new();
//!
//! let controller = Controller::<MAX_FIXTURES>::new(&config);
//! let mut scheduler = Scheduler::new(COMMANDS.receiver(), controller, port, udp, config.cadences);
//!
//! loop {
//!     let result = scheduler.tick(Instant::now());
//!     if result.status_due {
//!         broadcast(scheduler.controller().snapshot());
//!     }
//!     Timer::after(result.idle).await;
//! }
//! ```

use embassy_time::{Duration, Instant};

use crate::command::CommandReceiver;
use crate::config::Cadences;
use crate::controller::Controller;
use crate::emitter::FrameEmitter;
use crate::error::RelayError;
use crate::relay::MAX_DATAGRAM_LEN;
use crate::{DatagramSource, DmxOutput};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Fixed-interval trigger driven by an external clock
///
/// Fires at most once per interval. A late poll fires once and restarts the
/// interval from that poll, so missed intervals are dropped rather than
/// replayed. A clock reading before the last firing never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cadence {
    last_fired: Option<Instant>,
}

impl Cadence {
    pub const fn new() -> Self {
        Self { last_fired: None }
    }

    /// Check the cadence and record a firing if it is due
    ///
    /// A cadence that never fired is due immediately.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        let due = match self.last_fired {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= interval),
        };
        if due {
            self.last_fired = Some(now);
        }
        due
    }

    pub const fn last_fired(&self) -> Option<Instant> {
        self.last_fired
    }

    /// Forget the last firing so the next poll fires
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

/// Named cadences of the loop
#[derive(Debug, Clone, Copy, Default)]
pub struct Timers {
    /// Scene generator steps
    pub scene: Cadence,
    /// DMX frames in normal mode
    pub emit: Cadence,
    /// Telemetry snapshots
    pub status: Cadence,
}

/// What one loop iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// How long to yield before the next iteration
    pub idle: Duration,
    /// Commands applied (including rejected ones)
    pub commands: usize,
    /// A scene generator step ran
    pub scene_advanced: bool,
    /// Length of the frame sent this iteration, start code included
    pub frame_len: Option<usize>,
    /// Outcome of the relay datagram polled this iteration
    pub relay: Option<Result<usize, RelayError>>,
    /// The telemetry layer should publish a snapshot
    pub status_due: bool,
}

impl TickResult {
    const fn idle(idle: Duration) -> Self {
        Self {
            idle,
            commands: 0,
            scene_advanced: false,
            frame_len: None,
            relay: None,
            status_due: false,
        }
    }
}

/// Single-threaded scheduler interleaving command intake, scene steps,
/// transitions, relay decoding and frame output
pub struct Scheduler<
    'a,
    O: DmxOutput,
    D: DatagramSource,
    const FIXTURES: usize,
    const COMMAND_CHANNEL_SIZE: usize,
> {
    commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
    controller: Controller<FIXTURES>,
    emitter: FrameEmitter<O>,
    datagrams: D,
    cadences: Cadences,
    timers: Timers,
    datagram: [u8; MAX_DATAGRAM_LEN],
}

impl<'a, O: DmxOutput, D: DatagramSource, const FIXTURES: usize, const COMMAND_CHANNEL_SIZE: usize>
    Scheduler<'a, O, D, FIXTURES, COMMAND_CHANNEL_SIZE>
{
    pub fn new(
        commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
        controller: Controller<FIXTURES>,
        output: O,
        datagrams: D,
        cadences: Cadences,
    ) -> Self {
        Self {
            commands,
            controller,
            emitter: FrameEmitter::new(output, cadences.send_timeout),
            datagrams,
            cadences,
            timers: Timers::default(),
            datagram: [0; MAX_DATAGRAM_LEN],
        }
    }

    /// Run one loop iteration
    ///
    /// Order within an iteration:
    /// 1. Drain and apply pending commands
    /// 2. In relay mode, poll one datagram and relay it; nothing else runs
    /// 3. Step the scene generator if its cadence is due
    /// 4. Advance every driven fixture's transition
    /// 5. Send a frame if the emit cadence is due
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let mut result = TickResult::idle(self.cadences.idle);

        result.commands = self.process_commands();
        result.status_due = self.timers.status.poll(now, self.cadences.status);

        if self.controller.relay_enabled() {
            result.relay = self.poll_relay(now);
            return result;
        }

        if let Some(interval) = self.controller.scene_interval(&self.cadences) {
            if self.timers.scene.poll(now, interval) {
                result.scene_advanced = self.controller.advance_scene();
            }
        }

        self.controller.advance_transitions();

        if self.timers.emit.poll(now, self.cadences.emit) {
            result.frame_len = Some(self.emitter.emit_store(self.controller.store()));
        }

        result
    }

    /// Apply every queued command
    fn process_commands(&mut self) -> usize {
        let mut applied = 0;
        for command in self.commands.drain() {
            if let Err(_error) = self.controller.handle(command) {
                #[cfg(feature = "esp32-log")]
                println!("[Scheduler.process_commands] {:?} rejected: {}", command, _error);
            }
            applied += 1;
        }
        applied
    }

    fn poll_relay(&mut self, now: Instant) -> Option<Result<usize, RelayError>> {
        let len = self.datagrams.poll(&mut self.datagram)?;
        let datagram = &self.datagram[..len.min(MAX_DATAGRAM_LEN)];
        let outcome = self.emitter.emit_relay(datagram);
        self.controller.record_relay(&outcome, now);
        Some(outcome)
    }

    pub const fn controller(&self) -> &Controller<FIXTURES> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<FIXTURES> {
        &mut self.controller
    }

    pub const fn emitter(&self) -> &FrameEmitter<O> {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut FrameEmitter<O> {
        &mut self.emitter
    }

    pub const fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn datagrams_mut(&mut self) -> &mut D {
        &mut self.datagrams
    }
}
