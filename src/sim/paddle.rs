//! Paddle motion

use serde::{Deserialize, Serialize};

use super::input::Intent;
use crate::clamp;
use crate::consts::*;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing toward this side's wall
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A player paddle. `x` is fixed per side, `y` is the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => ARENA_WIDTH - PADDLE_INSET,
        };
        Self {
            side,
            x,
            y: ARENA_HEIGHT / 2.0,
            vy: 0.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Set velocity from the intent and move, staying inside the arena
    pub fn advance(&mut self, intent: Intent, speed: f32) {
        self.vy = intent.velocity(speed);
        self.y = clamp(self.y + self.vy, self.min_y(), self.max_y());
    }

    /// Back to mid-height, at rest
    pub fn recenter(&mut self) {
        self.y = ARENA_HEIGHT / 2.0;
        self.vy = 0.0;
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.height / 2.0
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        ARENA_HEIGHT - self.height / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// X of the face the ball strikes (toward the arena center)
    #[inline]
    pub fn face_x(&self) -> f32 {
        self.x - self.side.direction() * self.width / 2.0
    }
}
