//! Wall-clock to tick conversion for hosts that don't run one tick per frame

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed seconds since the last frame, get the number of ticks to run.
    ///
    /// Gaps longer than [`MAX_FRAME_DT`] are clamped, and at most
    /// [`MAX_SUBSTEPS`] ticks are returned; leftover time carries over.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= TICK_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            steps += 1;
        }
        steps
    }

    /// Fraction of a tick carried into the next frame (0..1), for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / TICK_DT).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_one_tick() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(TICK_DT * 1.01), 1);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(TICK_DT * 0.6), 0);
        assert!(clock.alpha() > 0.5);
        assert_eq!(clock.advance(TICK_DT * 0.6), 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(MAX_FRAME_DT), MAX_SUBSTEPS);
        // Leftover time carries into the next frame
        assert!(clock.advance(0.0) > 0);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FixedStep::new();
        let mut total = clock.advance(5.0);
        loop {
            let n = clock.advance(0.0);
            if n == 0 {
                break;
            }
            total += n;
        }
        // A 5 s stall would be 300 ticks; only MAX_FRAME_DT worth is honored
        assert!(total >= MAX_SUBSTEPS);
        assert!(total <= (MAX_FRAME_DT / TICK_DT).ceil() as u32);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
