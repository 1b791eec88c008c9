//! Cooperative control loop
//!
//! One `ControlLoop` instance owns the ECU state and all capability ports
//! and runs an unbounded sequence of ticks. Per tick, in order:
//!
//! 1. Drain all queued inbound frames (zero-wait) and apply commands
//! 2. Refresh each sampler whose interval has elapsed
//! 3. Recompute the fault mask from current state
//! 4. Advance the LED state machine and drive the indicator
//! 5. Broadcast one status frame (bounded send, dropped on timeout)
//! 6. Publish a read-only snapshot to the display port
//!
//! Every step is independently tolerant: a bad reading, a malformed
//! frame, or a send timeout never halts or skips the remaining steps.

use opistho_protocol::Command;

use crate::faults;
use crate::led::ReverseLed;
use crate::sampler::{SampleTimer, SAMPLE_INTERVAL_MS};
use crate::state::EcuState;
use crate::traits::{
    AmbientSensor, CanBus, Clock, LedOutput, ProximitySensor, StatusDisplay,
};

/// The ECU control loop
pub struct ControlLoop<C, B, A, P, L, D> {
    clock: C,
    bus: B,
    ambient: A,
    proximity: P,
    led_output: L,
    display: D,
    state: EcuState,
    ambient_timer: SampleTimer,
    proximity_timer: SampleTimer,
    led: ReverseLed,
}

impl<C, B, A, P, L, D> ControlLoop<C, B, A, P, L, D>
where
    C: Clock,
    B: CanBus,
    A: AmbientSensor,
    P: ProximitySensor,
    L: LedOutput,
    D: StatusDisplay,
{
    /// Create a loop with safe power-on defaults
    pub fn new(clock: C, bus: B, ambient: A, proximity: P, led_output: L, display: D) -> Self {
        Self {
            clock,
            bus,
            ambient,
            proximity,
            led_output,
            display,
            state: EcuState::new(),
            ambient_timer: SampleTimer::new(SAMPLE_INTERVAL_MS),
            proximity_timer: SampleTimer::new(SAMPLE_INTERVAL_MS),
            led: ReverseLed::new(),
        }
    }

    /// Current ECU state (read-only)
    pub fn state(&self) -> &EcuState {
        &self.state
    }

    /// Run one tick
    pub fn tick(&mut self) {
        let now_ms = self.clock.now_ms();

        self.drain_commands();
        self.refresh_samplers(now_ms);

        self.state.fault_flags = faults::evaluate(&self.state);

        let level = self
            .led
            .update(self.state.sensors_enabled, self.state.distance_cm, now_ms);
        self.led_output.set_level(level);

        // Transport-drop policy: a frame that cannot be queued within the
        // send bound is superseded by next tick's broadcast
        let _ = self.bus.send(&self.state.status_report().to_frame());

        self.display.show(&self.state.snapshot());
    }

    fn drain_commands(&mut self) {
        while let Some(frame) = self.bus.try_receive() {
            if let Some(command) = Command::from_frame(&frame) {
                self.state.apply(command);
            }
        }
    }

    fn refresh_samplers(&mut self, now_ms: u32) {
        if self.ambient_timer.poll(now_ms) {
            // Stale-on-failure: only a fully valid conversion is committed
            if let Ok(reading) = self.ambient.read() {
                self.state.ambient = Some(reading);
            }
        }

        // The ranger is not triggered at all while disabled; the stored
        // distance keeps its last value
        if self.state.sensors_enabled && self.proximity_timer.poll(now_ms) {
            self.state.distance_cm = self.proximity.read_distance_cm();
        }
    }
}
