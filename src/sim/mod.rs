//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time inside the step
//! - Seeded RNG only
//! - Paddles, then ball, then particles, every tick
//! - No rendering or platform dependencies

pub mod ball;
pub mod clock;
pub mod collision;
pub mod input;
pub mod paddle;
pub mod particles;
pub mod state;
pub mod tick;
pub mod view;

pub use ball::{Ball, BallOutcome, advance_ball, arena_center};
pub use clock::FixedStep;
pub use collision::{PaddleContact, missed_by, paddle_contact, touches_wall};
pub use input::{InputLatch, Intent, TickInput};
pub use paddle::{Paddle, Side};
pub use particles::{Particle, ParticleColor, ParticleField};
pub use state::{GameEvent, MatchPhase, MatchState, Score};
pub use tick::tick;
pub use view::{MatchView, Snapshot, Status};
