//! Read-only match view and serializable frame snapshot

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use super::particles::Particle;
use super::state::{MatchPhase, MatchState, Score};

/// Borrowed, immutable window onto a [`MatchState`]
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    state: &'a MatchState,
}

impl<'a> MatchView<'a> {
    pub(crate) fn new(state: &'a MatchState) -> Self {
        Self { state }
    }

    pub fn paddle(&self, side: Side) -> &'a Paddle {
        match side {
            Side::Left => &self.state.left,
            Side::Right => &self.state.right,
        }
    }

    pub fn ball(&self) -> &'a Ball {
        &self.state.ball
    }

    pub fn particles(&self) -> &'a [Particle] {
        self.state.particles.as_slice()
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn winning_score(&self) -> u32 {
        self.state.winning_score
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    /// Started and not finished (a paused match is still running)
    pub fn is_running(&self) -> bool {
        matches!(self.state.phase, MatchPhase::Running | MatchPhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.state.phase == MatchPhase::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state.phase {
            MatchPhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Owned copy of everything a renderer draws
    pub fn snapshot(&self) -> Snapshot {
        let paddle = |p: &Paddle| PaddleSnapshot {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
        };
        let ball = self.ball();
        Snapshot {
            tick: self.ticks(),
            left: paddle(self.paddle(Side::Left)),
            right: paddle(self.paddle(Side::Right)),
            ball: BallSnapshot {
                pos: ball.pos,
                radius: ball.radius,
            },
            particles: self
                .particles()
                .iter()
                .map(|p| ParticleSnapshot {
                    pos: p.pos,
                    life: p.life,
                    color: p.color.hex(),
                })
                .collect(),
            score: self.score(),
            status: Status {
                running: self.is_running(),
                paused: self.is_paused(),
                finished: self.is_finished(),
                winner: self.winner(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub pos: Vec2,
    pub life: f32,
    /// CSS hex color
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub running: bool,
    pub paused: bool,
    pub finished: bool,
    pub winner: Option<Side>,
}

/// One frame of truth for the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub left: PaddleSnapshot,
    pub right: PaddleSnapshot,
    pub ball: BallSnapshot,
    pub particles: Vec<ParticleSnapshot>,
    pub score: Score,
    pub status: Status,
}
