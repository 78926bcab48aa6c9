//! Per-tick input intents
//!
//! The input collaborator turns raw key state into [`Intent`]s once per tick.
//! Hosts that capture input on another thread share an [`InputLatch`].

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// Normalized directional command for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "serde_json::Value")]
pub enum Intent {
    Up,
    Down,
    #[default]
    None,
}

impl Intent {
    /// -1 = up, 1 = down, anything else = none
    pub fn from_axis(dir: i8) -> Self {
        match dir {
            -1 => Intent::Up,
            1 => Intent::Down,
            _ => Intent::None,
        }
    }

    /// Resolve held keys. Down is applied after up, so it wins when both are held.
    pub fn from_held(up: bool, down: bool) -> Self {
        if down {
            Intent::Down
        } else if up {
            Intent::Up
        } else {
            Intent::None
        }
    }

    /// Unrecognized names resolve to `None`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "up" => Intent::Up,
            "down" => Intent::Down,
            _ => Intent::None,
        }
    }

    /// Signed paddle velocity for this intent
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            Intent::Up => -speed,
            Intent::Down => speed,
            Intent::None => 0.0,
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            Intent::None => 0,
            Intent::Up => 1,
            Intent::Down => 2,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            1 => Intent::Up,
            2 => Intent::Down,
            _ => Intent::None,
        }
    }
}

impl From<serde_json::Value> for Intent {
    fn from(value: serde_json::Value) -> Self {
        value.as_str().map(Intent::parse).unwrap_or_default()
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    /// Left paddle intent
    pub left: Intent,
    /// Right paddle intent
    pub right: Intent,
    /// Pause toggle (one-shot)
    pub toggle_pause: bool,
    /// Full reset followed by start (one-shot)
    pub restart: bool,
}

impl TickInput {
    pub fn new(left: Intent, right: Intent) -> Self {
        Self {
            left,
            right,
            ..Default::default()
        }
    }
}

const LEFT_SHIFT: u8 = 0;
const RIGHT_SHIFT: u8 = 2;
const PAUSE_BIT: u8 = 1 << 4;
const RESTART_BIT: u8 = 1 << 5;
const ONE_SHOT_MASK: u8 = PAUSE_BIT | RESTART_BIT;

/// Lock-free input snapshot shared between an input thread and the scheduler.
///
/// Held intents persist until overwritten (last write wins). One-shot commands
/// stay raised until the next [`InputLatch::take`].
#[derive(Debug, Default)]
pub struct InputLatch {
    bits: AtomicU8,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left(&self, intent: Intent) {
        self.set_side(LEFT_SHIFT, intent);
    }

    pub fn set_right(&self, intent: Intent) {
        self.set_side(RIGHT_SHIFT, intent);
    }

    pub fn request_pause_toggle(&self) {
        self.bits.fetch_or(PAUSE_BIT, Ordering::AcqRel);
    }

    pub fn request_restart(&self) {
        self.bits.fetch_or(RESTART_BIT, Ordering::AcqRel);
    }

    /// Read the whole input in one atomic step and clear one-shot commands
    pub fn take(&self) -> TickInput {
        let bits = self.bits.fetch_and(!ONE_SHOT_MASK, Ordering::AcqRel);
        TickInput {
            left: Intent::from_bits(bits >> LEFT_SHIFT),
            right: Intent::from_bits(bits >> RIGHT_SHIFT),
            toggle_pause: bits & PAUSE_BIT != 0,
            restart: bits & RESTART_BIT != 0,
        }
    }

    fn set_side(&self, shift: u8, intent: Intent) {
        let mask = 0b11 << shift;
        let value = intent.to_bits() << shift;
        self.bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                Some((bits & !mask) | value)
            })
            .ok();
    }
}
