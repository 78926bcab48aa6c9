//! Fixed-step simulation tick
//!
//! Core game loop that advances the match deterministically.

use super::ball::advance_ball;
use super::input::TickInput;
use super::state::{GameEvent, MatchPhase, MatchState};
use crate::consts::PADDLE_SPEED;

/// Advance the match by one tick and return the events it produced.
///
/// One-shot commands in `input` are applied first. The simulation itself only
/// moves while the match is running and unpaused; otherwise the state is left
/// untouched and the caller simply redraws the current view.
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.full_reset();
        state.start();
    }
    if input.toggle_pause {
        state.toggle_pause();
    }

    if state.phase != MatchPhase::Running {
        return events;
    }

    state.ticks += 1;

    // Paddles, then ball, then particles
    state.left.advance(input.left, PADDLE_SPEED);
    state.right.advance(input.right, PADDLE_SPEED);

    let outcome = advance_ball(
        &mut state.ball,
        &state.left,
        &state.right,
        &mut state.particles,
        &mut state.rng,
    );
    if outcome.wall_bounce {
        events.push(GameEvent::WallBounce);
    }
    if let Some(side) = outcome.paddle_hit {
        events.push(GameEvent::PaddleHit { side });
    }
    if let Some(side) = outcome.scored {
        state.score.award(side);
        log::debug!(
            "{:?} scores ({} - {})",
            side,
            state.score.left,
            state.score.right
        );
        events.push(GameEvent::ScoreChanged {
            side,
            left: state.score.left,
            right: state.score.right,
        });
    }

    state.particles.advance();

    if let Some(winner) = state.check_win() {
        events.push(GameEvent::MatchFinished { winner });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::ball::arena_center;
    use crate::sim::input::Intent;
    use crate::sim::paddle::Side;
    use crate::sim::state::Score;
    use glam::Vec2;
    use proptest::prelude::*;

    fn running(seed: u64) -> MatchState {
        let mut state = MatchState::new(seed);
        state.start();
        state
    }

    /// Put the ball one tick away from leaving past the left wall
    fn about_to_exit_left(state: &mut MatchState) {
        state.ball.pos = Vec2::new(-35.0, 100.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);
    }

    fn about_to_exit_right(state: &mut MatchState) {
        state.ball.pos = Vec2::new(ARENA_WIDTH + 35.0, 100.0);
        state.ball.vel = Vec2::new(6.0, 0.0);
    }

    #[test]
    fn test_idle_tick_does_not_mutate() {
        let mut state = MatchState::new(12345);
        let before = state.view().snapshot();

        let events = tick(&mut state, &TickInput::new(Intent::Up, Intent::Down));

        assert!(events.is_empty());
        assert_eq!(state.view().snapshot(), before);
    }

    #[test]
    fn test_paused_tick_does_not_mutate() {
        let mut state = running(12345);
        tick(&mut state, &TickInput::default());
        tick(
            &mut state,
            &TickInput {
                toggle_pause: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase(), MatchPhase::Paused);
        let before = state.view().snapshot();

        tick(&mut state, &TickInput::new(Intent::Down, Intent::Down));
        assert_eq!(state.view().snapshot(), before);

        // Unpause
        tick(
            &mut state,
            &TickInput {
                toggle_pause: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase(), MatchPhase::Running);
        assert_ne!(state.view().snapshot(), before);
    }

    #[test]
    fn test_running_tick_moves_everything() {
        let mut state = running(12345);
        let ball_before = state.ball.pos;

        tick(&mut state, &TickInput::new(Intent::Up, Intent::Down));

        assert_eq!(state.left.y, ARENA_HEIGHT / 2.0 - PADDLE_SPEED);
        assert_eq!(state.right.y, ARENA_HEIGHT / 2.0 + PADDLE_SPEED);
        assert_ne!(state.ball.pos, ball_before);
        assert_eq!(state.view().ticks(), 1);
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let mut state = running(12345);
        about_to_exit_left(&mut state);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.score(), Score { left: 0, right: 1 });
        assert!(events.contains(&GameEvent::ScoreChanged {
            side: Side::Right,
            left: 0,
            right: 1
        }));
        assert_eq!(state.ball.pos, arena_center());
        assert!(state.ball.vel.x > 0.0);
        // Score burst has already aged one tick
        assert_eq!(state.particles.len(), BURST_SIZE);
        assert!(state.particles.iter().all(|p| p.life < 1.0));
    }

    #[test]
    fn test_seventh_point_finishes_match() {
        let mut state = running(12345);
        state.score = Score { left: 6, right: 0 };
        state.ball.pos = arena_center();
        about_to_exit_right(&mut state);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.score().left, 7);
        assert_eq!(state.phase(), MatchPhase::Finished { winner: Side::Left });
        assert!(!state.view().is_running());
        assert_eq!(state.view().winner(), Some(Side::Left));
        assert_eq!(
            events.last(),
            Some(&GameEvent::MatchFinished { winner: Side::Left })
        );
    }

    #[test]
    fn test_finished_match_is_frozen_until_restart() {
        let mut state = running(12345);
        state.score = Score { left: 0, right: 6 };
        about_to_exit_left(&mut state);
        tick(&mut state, &TickInput::default());
        assert!(state.view().is_finished());

        let frozen = state.view().snapshot();
        for _ in 0..50 {
            assert!(tick(&mut state, &TickInput::new(Intent::Down, Intent::Up)).is_empty());
        }
        assert_eq!(state.view().snapshot(), frozen);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.score(), Score::default());
        assert_eq!(state.phase(), MatchPhase::Running);
    }

    #[test]
    fn test_wall_bounce_event_and_burst() {
        let mut state = running(12345);
        state.ball.pos = Vec2::new(ARENA_WIDTH / 2.0, 14.0);
        state.ball.vel = Vec2::new(6.0, -5.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.vel.y, 5.0);
        assert_eq!(state.particles.len(), BURST_SIZE);
    }

    #[test]
    fn test_wall_then_paddle_events_in_one_tick() {
        let mut state = running(12345);
        state.left.y = PADDLE_HEIGHT / 2.0;
        state.ball.pos = Vec2::new(59.0, 13.0);
        state.ball.vel = Vec2::new(-6.0, -4.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(
            events,
            vec![
                GameEvent::WallBounce,
                GameEvent::PaddleHit { side: Side::Left }
            ]
        );
        assert_eq!(state.ball.vel.x, 6.25);
        assert!((state.ball.vel.y - 2.44).abs() < 1e-5);
        assert_eq!(state.particles.len(), 2 * BURST_SIZE);
    }

    #[test]
    fn test_rally_escalates_speed() {
        let mut state = running(12345);
        state.ball.pos = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        state.ball.vel = Vec2::new(-BALL_BASE_SPEED, 0.0);

        let mut hits = 0;
        for _ in 0..2000 {
            let events = tick(&mut state, &TickInput::default());
            assert!(
                !events
                    .iter()
                    .any(|e| matches!(e, GameEvent::ScoreChanged { .. })),
                "a flat ball at paddle height never misses"
            );
            hits += events
                .iter()
                .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
                .count();
            assert!(
                (state.ball.speed - (BALL_BASE_SPEED + BALL_SPEED_INCREMENT * hits as f32)).abs()
                    < 1e-4
            );
        }
        assert!(hits >= 10);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = running(99999);
        let mut b = running(99999);
        let inputs = [
            TickInput::new(Intent::Up, Intent::None),
            TickInput::new(Intent::Down, Intent::Up),
            TickInput::default(),
        ];

        for i in 0..3000 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(tick(&mut a, input), tick(&mut b, input));
        }
        assert_eq!(a.view().snapshot(), b.view().snapshot());
    }

    proptest! {
        #[test]
        fn prop_scores_only_step_by_one(
            seed in any::<u64>(),
            moves in prop::collection::vec((-1i8..=1, -1i8..=1), 1..600),
        ) {
            let mut state = running(seed);
            let mut last = state.score();

            for (l, r) in moves {
                let input = TickInput::new(Intent::from_axis(l), Intent::from_axis(r));
                let finished_before = state.view().is_finished();
                tick(&mut state, &input);
                let now = state.score();

                prop_assert!(now.left >= last.left && now.right >= last.right);
                prop_assert!((now.left - last.left) + (now.right - last.right) <= 1);
                if finished_before {
                    prop_assert_eq!(now, last);
                }
                last = now;
            }
        }
    }
}
