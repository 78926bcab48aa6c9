//! Match state and lifecycle
//!
//! [`MatchState`] is the single owner of every piece of simulation state.
//! Renderers read it through [`MatchState::view`]; only the tick and the
//! lifecycle commands below mutate it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use super::particles::ParticleField;
use super::view::MatchView;
use crate::settings::Settings;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Before the first start, or after a full reset
    Idle,
    /// Active gameplay
    Running,
    /// Running, but the simulation is frozen
    Paused,
    /// A side reached the winning score; terminal until a full reset
    Finished { winner: Side },
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Side with the higher score once either side reaches `winning_score`
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.left >= winning_score || self.right >= winning_score {
            Some(if self.left > self.right {
                Side::Left
            } else {
                Side::Right
            })
        } else {
            None
        }
    }
}

/// Notifications for the score/overlay UI and audio hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side },
    ScoreChanged { side: Side, left: u32, right: u32 },
    MatchFinished { winner: Side },
}

/// Complete simulation context, constructed once at startup
#[derive(Debug, Clone)]
pub struct MatchState {
    pub(crate) phase: MatchPhase,
    pub(crate) score: Score,
    pub(crate) winning_score: u32,
    pub(crate) left: Paddle,
    pub(crate) right: Paddle,
    pub(crate) ball: Ball,
    pub(crate) particles: ParticleField,
    /// Relaunch angles and particle spread
    pub(crate) rng: Pcg32,
    pub(crate) seed: u64,
    /// Ticks in which the simulation actually advanced
    pub(crate) ticks: u64,
}

impl MatchState {
    /// Create an idle match with default settings and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings {
            seed: Some(seed),
            ..Default::default()
        })
    }

    /// Create an idle match from settings
    pub fn with_settings(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        let mut state = Self {
            phase: MatchPhase::Idle,
            score: Score::default(),
            winning_score: settings.effective_winning_score(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            particles: ParticleField::new(settings.max_particles()),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            ticks: 0,
        };
        state.reset_round();
        state
    }

    /// Read-only view for renderers and UI
    pub fn view(&self) -> MatchView<'_> {
        MatchView::new(self)
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Begin (or resume) ticking.
    ///
    /// A finished match is not restarted here: call [`MatchState::full_reset`]
    /// first, otherwise this returns `false` and the match stays finished.
    pub fn start(&mut self) -> bool {
        if let MatchPhase::Finished { winner } = self.phase {
            log::warn!("Ignoring start: match already won by {:?}", winner);
            return false;
        }
        if self.phase != MatchPhase::Running {
            log::info!(
                "Match running ({} - {}, first to {})",
                self.score.left,
                self.score.right,
                self.winning_score
            );
        }
        self.phase = MatchPhase::Running;
        true
    }

    /// Flip between Running and Paused; no-op in any other phase
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            MatchPhase::Running => {
                log::info!("Paused");
                MatchPhase::Paused
            }
            MatchPhase::Paused => {
                log::info!("Resumed");
                MatchPhase::Running
            }
            _ => {
                log::debug!("Pause toggle ignored in {:?}", self.phase);
                return false;
            }
        };
        true
    }

    /// Zero the scores and reset the round. Leaves the match idle.
    pub fn full_reset(&mut self) {
        self.score = Score::default();
        self.reset_round();
        self.phase = MatchPhase::Idle;
        log::info!("Match reset");
    }

    /// Recenter paddles and relaunch the ball in a random direction. Scores are kept.
    pub fn reset_round(&mut self) {
        use rand::Rng;

        self.left.recenter();
        self.right.recenter();
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.relaunch(direction, &mut self.rng);
    }

    /// Finish the match if either side has reached the winning score
    pub(crate) fn check_win(&mut self) -> Option<Side> {
        let winner = self.score.winner(self.winning_score)?;
        self.phase = MatchPhase::Finished { winner };
        log::info!(
            "{:?} wins {} - {}",
            winner,
            self.score.left,
            self.score.right
        );
        Some(winner)
    }
}
