//! Collision detection for the rectangular arena
//!
//! Pure tests only: nothing here mutates the ball. Response lives in
//! [`super::ball::advance_ball`].

use glam::Vec2;

use super::paddle::{Paddle, Side};
use crate::consts::SCORE_MARGIN;

/// Result of a paddle contact check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Ball y minus paddle center y (negative = above center)
    pub offset: f32,
    /// Where the burst is spawned
    pub point: Vec2,
}

/// True if the ball overlaps the top or bottom wall.
///
/// Evaluated every tick regardless of direction, so a ball still overlapping
/// a wall on the tick after a bounce bounces again.
pub fn touches_wall(pos: Vec2, radius: f32, arena_height: f32) -> bool {
    pos.y - radius <= 0.0 || pos.y + radius >= arena_height
}

/// Check whether the ball strikes `paddle` this tick.
///
/// The leading edge of the ball must have reached the paddle face and the ball
/// center must lie within the paddle's vertical extent. The face test is
/// one-sided, so a fast ball that has already passed the face is still caught.
/// A contact is only reported while the ball moves toward the paddle; this
/// keeps an overlap spanning several ticks from being handled twice.
pub fn paddle_contact(pos: Vec2, vel: Vec2, radius: f32, paddle: &Paddle) -> Option<PaddleContact> {
    let reached_face = match paddle.side {
        Side::Left => pos.x - radius <= paddle.face_x(),
        Side::Right => pos.x + radius >= paddle.face_x(),
    };
    let within_height = pos.y >= paddle.top() && pos.y <= paddle.bottom();
    let approaching = vel.x * paddle.side.direction() > 0.0;

    if reached_face && within_height && approaching {
        Some(PaddleContact {
            offset: pos.y - paddle.y,
            point: pos,
        })
    } else {
        None
    }
}

/// Side that scores if the ball has left the arena horizontally
pub fn missed_by(pos: Vec2, arena_width: f32) -> Option<Side> {
    if pos.x < -SCORE_MARGIN {
        Some(Side::Right)
    } else if pos.x > arena_width + SCORE_MARGIN {
        Some(Side::Left)
    } else {
        None
    }
}
