//! Match settings
//!
//! Loaded from an optional JSON file by the native runner. Arena geometry is
//! fixed in [`crate::consts`] and deliberately not configurable here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::WINNING_SCORE;

/// Default cap on live particles
pub const DEFAULT_MAX_PARTICLES: usize = 2000;

/// Match settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Points needed to win a match
    pub winning_score: u32,
    /// RNG seed (None = draw one from entropy at startup)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Particle bursts on impacts and scores
    pub particles: bool,
    /// Upper bound on live particles (oldest dropped first)
    pub max_particles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,
            seed: None,
            particles: true,
            max_particles: DEFAULT_MAX_PARTICLES,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // A struct of plain scalars always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read settings {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Winning score, never below one point
    pub fn effective_winning_score(&self) -> u32 {
        self.winning_score.max(1)
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.max_particles
        }
    }

    /// Seed to build the match RNG from
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
