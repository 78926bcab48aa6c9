//! Volley - a two-paddle ball-volley simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, particles, match state)
//! - `settings`: Data-driven match configuration
//!
//! Rendering, DOM wiring and raw key capture are external collaborators: they
//! feed [`sim::TickInput`] values in and read [`sim::MatchView`] snapshots out.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 960.0;
    pub const ARENA_HEIGHT: f32 = 540.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 96.0;
    /// Paddle travel per tick while an intent is held
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Distance from the side wall to each paddle's center line
    pub const PADDLE_INSET: f32 = 36.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Scalar speed at every relaunch
    pub const BALL_BASE_SPEED: f32 = 6.0;
    /// Scalar speed gained per honored paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 0.25;
    /// Vertical velocity added per pixel of offset from the paddle center
    pub const PADDLE_DEFLECTION: f32 = 0.04;
    /// Relaunch angle spread (radians, either side of horizontal)
    pub const LAUNCH_SPREAD: f32 = 0.3;
    /// Relaunch up/down bias added on top of the spread (radians)
    pub const LAUNCH_BIAS: f32 = 0.12;
    /// How far past a side wall the ball travels before it counts as a miss
    pub const SCORE_MARGIN: f32 = 40.0;

    /// Particle defaults
    pub const BURST_SIZE: usize = 10;
    /// Max absolute particle velocity on each axis
    pub const PARTICLE_SPREAD: f32 = 1.5;
    /// Per-tick life multiplier
    pub const PARTICLE_DECAY: f32 = 0.92;
    /// Particles at or below this life are pruned
    pub const PARTICLE_MIN_LIFE: f32 = 0.05;

    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 7;

    /// Fixed simulation timestep for wall-clock hosts (one tick per 60 Hz frame)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame gap a host clock will honor (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}

/// Bound `value` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: if `min > max` the result is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}
