//! Ball motion and collision response

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{missed_by, paddle_contact, touches_wall};
use super::paddle::{Paddle, Side};
use super::particles::{ParticleColor, ParticleField};
use crate::consts::*;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed, tracked apart from `vel` so rallies can escalate it.
    /// Only the horizontal component is re-derived from it on a paddle hit.
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: arena_center(),
            vel: Vec2::new(BALL_BASE_SPEED, 2.6),
            radius: BALL_RADIUS,
            speed: BALL_BASE_SPEED,
        }
    }
}

impl Ball {
    /// Recenter at base speed, heading toward `direction` (-1 left, +1 right)
    /// at a small random angle that is never exactly horizontal.
    pub fn relaunch(&mut self, direction: f32, rng: &mut impl Rng) {
        self.pos = arena_center();
        let bias = if rng.random_bool(0.5) {
            LAUNCH_BIAS
        } else {
            -LAUNCH_BIAS
        };
        let angle = rng.random_range(-LAUNCH_SPREAD..LAUNCH_SPREAD) + bias;
        self.speed = BALL_BASE_SPEED;
        self.vel = Vec2::new(
            angle.cos() * self.speed * direction.signum(),
            angle.sin() * self.speed,
        );
    }
}

/// Center of the arena
pub fn arena_center() -> Vec2 {
    Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}

/// What happened to the ball during one advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallOutcome {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    /// Side that won the point, if the ball left the arena
    pub scored: Option<Side>,
}

/// Advance the ball one tick: integrate, bounce off walls and paddles, and
/// relaunch it after a miss. The caller owns the score tally.
pub fn advance_ball(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    particles: &mut ParticleField,
    rng: &mut impl Rng,
) -> BallOutcome {
    let mut outcome = BallOutcome::default();

    ball.pos += ball.vel;

    if touches_wall(ball.pos, ball.radius, ARENA_HEIGHT) {
        ball.vel.y = -ball.vel.y;
        particles.spawn_burst(ball.pos, ParticleColor::Wall, rng);
        outcome.wall_bounce = true;
    }

    for paddle in [left, right] {
        if let Some(contact) = paddle_contact(ball.pos, ball.vel, ball.radius, paddle) {
            ball.vel.x = -ball.vel.x;
            ball.vel.y += contact.offset * PADDLE_DEFLECTION;
            ball.speed += BALL_SPEED_INCREMENT;
            ball.vel.x = ball.vel.x.signum() * ball.speed;
            particles.spawn_burst(contact.point, ParticleColor::for_side(paddle.side), rng);
            outcome.paddle_hit = Some(paddle.side);
        }
    }

    if let Some(scorer) = missed_by(ball.pos, ARENA_WIDTH) {
        // Burst takes the conceding paddle's color
        let conceded = scorer.opponent();
        particles.spawn_burst(arena_center(), ParticleColor::for_side(conceded), rng);
        // Relaunch heads toward the scorer's wall
        ball.relaunch(scorer.direction(), rng);
        outcome.scored = Some(scorer);
    }

    outcome
}
