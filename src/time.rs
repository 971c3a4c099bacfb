//! Simulated clock for the orrery.
//!
//! Position is a pure function of absolute simulated time, so the clock only has
//! to track "now". Changing the speed factor never introduces a jump in position.

use bevy::prelude::*;

use crate::render::OrrerySet;
use crate::types::{DAYS_PER_YEAR, SECONDS_PER_DAY, j2000_days_to_julian_date};

/// Default speed factor: one simulated day per real second.
pub const DEFAULT_TIME_SPEED: f64 = SECONDS_PER_DAY;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    #[error("invalid time speed factor {0} (must be finite and positive)")]
    InvalidSpeed(f64),
}

/// Simulated clock shared by every body in the scene.
#[derive(Resource, Clone, Debug)]
pub struct ClockContext {
    /// Current time in seconds since J2000 epoch
    current: f64,
    /// Simulated seconds per real second
    speed: f64,
    /// Whether the clock is frozen
    paused: bool,
    /// Initial time for reset functionality
    initial: f64,
}

impl Default for ClockContext {
    fn default() -> Self {
        Self::at_j2000_seconds(0.0)
    }
}

impl ClockContext {
    /// Create a clock starting at a specific J2000 seconds value
    pub fn at_j2000_seconds(seconds: f64) -> Self {
        Self {
            current: seconds,
            speed: DEFAULT_TIME_SPEED,
            paused: false,
            initial: seconds,
        }
    }

    /// Builder-style speed override.
    pub fn with_speed(mut self, speed: f64) -> Result<Self, ClockError> {
        self.set_speed(speed)?;
        Ok(self)
    }

    /// Advance by `real_seconds` of wall-clock time. No-op while paused.
    pub fn advance(&mut self, real_seconds: f64) {
        if self.paused || !real_seconds.is_finite() || real_seconds <= 0.0 {
            return;
        }
        self.current += real_seconds * self.speed;
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), ClockError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ClockError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Reset to initial time and pause.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.paused = true;
    }

    /// Current time in seconds since J2000
    pub fn seconds(&self) -> f64 {
        self.current
    }

    /// Current time in days since J2000
    pub fn days(&self) -> f64 {
        self.current / SECONDS_PER_DAY
    }

    /// Current time in Julian years since J2000
    pub fn years(&self) -> f64 {
        self.days() / DAYS_PER_YEAR
    }

    /// Current time as a Julian date
    pub fn julian_date(&self) -> f64 {
        j2000_days_to_julian_date(self.days())
    }
}

/// Requests to change the clock from outside the frame loop.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum ClockCommand {
    Pause,
    Resume,
    TogglePause,
    SetSpeed(f64),
    Reset,
}

/// Plugin providing clock advancement and control.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClockContext>()
            .add_message::<ClockCommand>()
            .add_systems(
                Update,
                (apply_clock_commands, advance_clock)
                    .chain()
                    .in_set(OrrerySet::Clock),
            );
    }
}

/// Advance simulated time by the real frame delta times the speed factor.
pub fn advance_clock(mut clock: ResMut<ClockContext>, time: Res<Time>) {
    if clock.is_paused() {
        return;
    }
    clock.advance(time.delta_secs_f64());
}

fn apply_clock_commands(mut clock: ResMut<ClockContext>, mut commands: MessageReader<ClockCommand>) {
    for command in commands.read() {
        match *command {
            ClockCommand::Pause => clock.pause(),
            ClockCommand::Resume => clock.resume(),
            ClockCommand::TogglePause => clock.toggle_pause(),
            ClockCommand::Reset => clock.reset(),
            ClockCommand::SetSpeed(speed) => match clock.set_speed(speed) {
                Ok(()) => info!("Time speed: {}x", speed),
                Err(err) => warn!("Ignoring clock command: {}", err),
            },
        }
        if matches!(
            command,
            ClockCommand::Pause | ClockCommand::Resume | ClockCommand::TogglePause
        ) {
            info!("Simulation {}", if clock.is_paused() { "paused" } else { "running" });
        }
    }
}
