//! Snake frame step
//!
//! One call per rendered frame: trail, movement, then collision.

use super::collision::point_collision;
use super::input::TickInput;
use super::movement::{MovementConfig, integrate};
use super::state::{GameEvent, SnakeState};
use super::trail::ZeroScoreTrail;
use crate::consts::*;

/// Tunables the frame step reads
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub player_speed: f32,
    pub collision_radius: f32,
    pub zero_score_trail: ZeroScoreTrail,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            collision_radius: COLLISION_RADIUS,
            zero_score_trail: ZeroScoreTrail::default(),
        }
    }
}

impl SimConfig {
    pub fn movement(&self) -> MovementConfig {
        MovementConfig {
            speed: self.player_speed,
            limit: BOUNDS,
        }
    }
}

/// Advance the snake state by one frame of `dt` seconds
pub fn tick(state: &mut SnakeState, input: &TickInput, dt: f32, cfg: &SimConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frames += 1;

    let dir = input.keys.direction();

    // Trail takes the position from the start of the frame
    state.trail.record(state.player, state.score, cfg.zero_score_trail);

    state.player = integrate(state.player, dir, dt, cfg.movement());

    if point_collision(state.player, state.enemy, cfg.collision_radius).hit {
        let respawned_at = state.spawn_enemy();
        state.score += 1;
        events.push(GameEvent::EnemyCaught {
            score: state.score,
            respawned_at,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DirectionKeys;
    use glam::Vec2;
    use proptest::prelude::*;

    fn right() -> TickInput {
        TickInput::new(DirectionKeys {
            right: true,
            ..DirectionKeys::NONE
        })
    }

    /// State with the enemy parked far from the player's path
    fn parked_state() -> SnakeState {
        let mut state = SnakeState::new(12345);
        state.enemy = Vec2::new(-1.0, -1.0);
        state
    }

    #[test]
    fn test_tick_moves_player() {
        let mut state = parked_state();
        let events = tick(&mut state, &right(), 0.5, &SimConfig::default());
        assert!(events.is_empty());
        assert!((state.player.x - 0.5).abs() < 1e-6);
        assert_eq!(state.player.y, 0.0);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_tick_catches_enemy_at_origin() {
        let mut state = SnakeState::new(12345);
        state.enemy = Vec2::ZERO;

        let events = tick(&mut state, &TickInput::default(), 0.016, &SimConfig::default());
        assert_eq!(state.score, 1);
        assert_eq!(events.len(), 1);
        match events[0] {
            GameEvent::EnemyCaught { score, respawned_at } => {
                assert_eq!(score, 1);
                assert_eq!(respawned_at, state.enemy);
            }
        }
        assert!((-1.0..=1.0).contains(&state.enemy.x));
        assert!((-1.0..=1.0).contains(&state.enemy.y));
    }

    #[test]
    fn test_collision_uses_post_move_position() {
        let mut state = SnakeState::new(1);
        state.enemy = Vec2::new(0.5, 0.0);

        // Starts 0.5 away, ends 0.05 away
        tick(&mut state, &right(), 0.45, &SimConfig::default());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_trail_records_pre_move_position() {
        let mut state = parked_state();
        state.score = 3;
        let cfg = SimConfig::default();

        tick(&mut state, &right(), 0.25, &cfg);
        assert_eq!(state.trail.head(), Some(Vec2::ZERO));

        tick(&mut state, &right(), 0.25, &cfg);
        let xs: Vec<f32> = state.trail.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 2);
        assert!((xs[0] - 0.25).abs() < 1e-6);
        assert_eq!(xs[1], 0.0);
    }

    #[test]
    fn test_trail_truncated_to_score() {
        let mut state = parked_state();
        state.score = 2;
        for _ in 0..10 {
            tick(&mut state, &right(), 0.01, &SimConfig::default());
        }
        assert_eq!(state.trail.len(), 2);
    }

    #[test]
    fn test_zero_score_trail_policies() {
        let mut cleared = parked_state();
        let mut kept = parked_state();
        let accumulate = SimConfig {
            zero_score_trail: ZeroScoreTrail::Accumulate,
            ..SimConfig::default()
        };
        for _ in 0..5 {
            tick(&mut cleared, &right(), 0.01, &SimConfig::default());
            tick(&mut kept, &right(), 0.01, &accumulate);
        }
        assert!(cleared.trail.is_empty());
        assert_eq!(kept.trail.len(), 5);
    }

    #[test]
    fn test_idle_frames_do_not_move() {
        let mut state = parked_state();
        state.player = Vec2::new(0.4, -0.2);
        for dt in [0.0, 0.016, 1.0, 30.0, 1.0e6] {
            tick(&mut state, &TickInput::default(), dt, &SimConfig::default());
            assert_eq!(state.player, Vec2::new(0.4, -0.2));
        }
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_score_never_jumps_by_more_than_one() {
        let mut state = SnakeState::new(99);
        let cfg = SimConfig {
            // Radius covering the whole playfield: every frame is a catch
            collision_radius: 10.0,
            ..SimConfig::default()
        };
        for frame in 1..=20 {
            let events = tick(&mut state, &TickInput::default(), 0.016, &cfg);
            assert_eq!(events.len(), 1);
            assert_eq!(state.score, frame);
        }
    }

    proptest! {
        #[test]
        fn step_keeps_invariants(
            seed in any::<u64>(),
            frames in prop::collection::vec(
                (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), 0.0f32..2.0),
                1..80,
            ),
        ) {
            let mut state = SnakeState::new(seed);
            let cfg = SimConfig::default();
            for (up, down, left, right, dt) in frames {
                let before = state.score;
                let input = TickInput::new(DirectionKeys { up, down, left, right });
                let events = tick(&mut state, &input, dt, &cfg);

                prop_assert!((-1.0..=1.0).contains(&state.player.x));
                prop_assert!((-1.0..=1.0).contains(&state.player.y));
                prop_assert!((-1.0..=1.0).contains(&state.enemy.x));
                prop_assert!((-1.0..=1.0).contains(&state.enemy.y));
                prop_assert_eq!(state.score, before + events.len() as u32);
                prop_assert!(events.len() <= 1);
                if state.score >= 1 {
                    prop_assert!(state.trail.len() <= state.score as usize);
                }
            }
        }
    }
}
