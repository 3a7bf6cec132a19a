//! Roll animation state machine
//!
//! A roll trigger switches the machine from `Idle` to `Rolling`. While rolling,
//! each die mesh gets an extra spin whose speed falls linearly to zero over the
//! roll duration; once the duration has elapsed the machine is `Idle` again.
//! The constant idle spin is applied on top in every state.
//!
//! Time is passed in as the `Duration` since app start, so the machine never
//! reads a clock itself.

use std::time::Duration;

use bevy::prelude::*;

use super::scene::ShapeSlot;

/// How long the roll spin lasts.
pub const ROLL_DURATION: Duration = Duration::from_millis(1500);

/// Idle spin about x and y, in radians per second.
pub const IDLE_SPIN_RATE: f32 = 0.6;

/// Initial roll spin of the primary mesh, in radians per second.
pub const PRIMARY_ROLL_SPIN_RATE: f32 = 14.0;

/// Initial roll spin of the secondary (percentile) mesh, in radians per second.
pub const SECONDARY_ROLL_SPIN_RATE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Idle,
    Rolling,
}

/// Resource driving the cosmetic roll spin.
#[derive(Resource, Debug, Clone)]
pub struct RollAnimation {
    mode: AnimationMode,
    started_at: Duration,
    duration: Duration,
    pub idle_rate: f32,
    pub primary_rate: f32,
    pub secondary_rate: f32,
}

impl Default for RollAnimation {
    fn default() -> Self {
        Self::new(ROLL_DURATION)
    }
}

impl RollAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            mode: AnimationMode::Idle,
            started_at: Duration::ZERO,
            duration,
            idle_rate: IDLE_SPIN_RATE,
            primary_rate: PRIMARY_ROLL_SPIN_RATE,
            secondary_rate: SECONDARY_ROLL_SPIN_RATE,
        }
    }

    pub fn with_idle_rate(mut self, idle_rate: f32) -> Self {
        self.idle_rate = idle_rate;
        self
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn is_rolling(&self) -> bool {
        self.mode == AnimationMode::Rolling
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Idle -> Rolling. A trigger while already rolling restarts the spin.
    pub fn trigger(&mut self, now: Duration) {
        self.mode = AnimationMode::Rolling;
        self.started_at = now;
    }

    /// Rolling -> Idle once the duration has elapsed. Returns the mode after
    /// the check.
    pub fn update(&mut self, now: Duration) -> AnimationMode {
        if self.mode == AnimationMode::Rolling && self.elapsed(now) >= self.duration {
            self.mode = AnimationMode::Idle;
        }
        self.mode
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Fraction of the roll that has elapsed, in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Extra spin speed of a mesh while rolling, decaying linearly to zero.
    pub fn roll_spin_rate(&self, slot: ShapeSlot, now: Duration) -> f32 {
        if !self.is_rolling() {
            return 0.0;
        }
        let base = match slot {
            ShapeSlot::Primary => self.primary_rate,
            ShapeSlot::Secondary => self.secondary_rate,
        };
        base * (1.0 - self.progress(now))
    }

    /// Rotation to apply to a mesh this frame: idle spin plus any roll spin.
    pub fn spin_increment(&self, slot: ShapeSlot, now: Duration, delta_secs: f32) -> f32 {
        (self.idle_rate + self.roll_spin_rate(slot, now)) * delta_secs
    }
}
