//! Decorative particle bursts
//!
//! Particles never feed back into gameplay. They are spawned in fixed-size
//! bursts and fade out geometrically.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Side;
use crate::consts::{BURST_SIZE, PARTICLE_DECAY, PARTICLE_MIN_LIFE, PARTICLE_SPREAD};
use crate::settings::DEFAULT_MAX_PARTICLES;

/// Color tag for a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleColor {
    /// Ball hit the top or bottom wall
    Wall,
    /// Left paddle color
    Left,
    /// Right paddle color
    Right,
}

impl ParticleColor {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => ParticleColor::Left,
            Side::Right => ParticleColor::Right,
        }
    }

    /// 0xRRGGBB
    pub fn rgb(self) -> u32 {
        match self {
            ParticleColor::Wall => 0xffd166,
            ParticleColor::Left => 0x3c91ff,
            ParticleColor::Right => 0xff6f3c,
        }
    }

    /// CSS-style hex string for renderers
    pub fn hex(self) -> String {
        format!("#{:06x}", self.rgb())
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// (0, 1], multiplied by the decay factor each tick
    pub life: f32,
    pub color: ParticleColor,
}

impl Particle {
    fn is_alive(&self) -> bool {
        self.life > PARTICLE_MIN_LIFE
    }
}

/// The live particle set
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PARTICLES)
    }
}

impl ParticleField {
    /// `max_particles == 0` disables spawning entirely
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
        }
    }

    /// Spawn [`BURST_SIZE`] particles at `pos`
    pub fn spawn_burst(&mut self, pos: Vec2, color: ParticleColor, rng: &mut impl Rng) {
        if self.max_particles == 0 {
            return;
        }
        for _ in 0..BURST_SIZE {
            let vel = Vec2::new(
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            );
            self.particles.push(Particle {
                pos,
                vel,
                life: 1.0,
                color,
            });
        }

        // Drop oldest to make room
        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
        }
    }

    /// Prune faded particles, then move and fade the survivors
    pub fn advance(&mut self) {
        self.particles.retain(Particle::is_alive);
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.life *= PARTICLE_DECAY;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
