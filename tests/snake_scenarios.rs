//! Headless snake scenarios through the public API

use glam::Vec2;
use point_snake::Settings;
use point_snake::sim::{
    DirectionKeys, FrameClock, GameEvent, SimConfig, SnakeState, TickInput, ZeroScoreTrail, tick,
};

fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
    TickInput::new(DirectionKeys {
        up,
        down,
        left,
        right,
    })
}

#[test]
fn enemy_at_origin_is_caught_on_first_frame() {
    let mut state = SnakeState::new(2024);
    state.player = Vec2::ZERO;
    state.enemy = Vec2::ZERO;

    let events = tick(&mut state, &TickInput::default(), 1.0 / 60.0, &SimConfig::default());

    assert_eq!(state.score, 1);
    let [GameEvent::EnemyCaught { score, respawned_at }] = events.as_slice() else {
        panic!("expected exactly one catch, got {:?}", events);
    };
    assert_eq!(*score, 1);
    assert_eq!(*respawned_at, state.enemy);
    assert!(respawned_at.x.abs() <= 1.0 && respawned_at.y.abs() <= 1.0);
}

#[test]
fn idle_player_never_moves() {
    let mut state = SnakeState::new(3);
    state.player = Vec2::new(-0.25, 0.75);
    state.enemy = Vec2::new(1.0, -1.0);
    let cfg = SimConfig::default();

    let mut clock = FrameClock::new(0.0);
    let mut now = 0.0;
    for i in 0..500 {
        // Irregular frame times, including long stalls
        now += if i % 50 == 0 { 3.0 } else { 0.013 };
        let dt = clock.tick(now) as f32;
        tick(&mut state, &TickInput::default(), dt, &cfg);
        assert_eq!(state.player, Vec2::new(-0.25, 0.75));
    }
    assert_eq!(clock.frame_count(), 500);
    assert_eq!(state.frames, 500);
}

#[test]
fn same_seed_same_run() {
    let cfg = SimConfig {
        zero_score_trail: ZeroScoreTrail::Accumulate,
        ..SimConfig::default()
    };
    let script = [
        held(true, false, false, false),
        held(false, false, false, true),
        held(false, true, true, false),
        held(true, true, false, false),
        held(false, false, true, false),
    ];

    let run = |seed: u64| {
        let mut state = SnakeState::new(seed);
        let mut catches = Vec::new();
        for frame in 0..2000 {
            let input = script[(frame / 40) % script.len()];
            catches.extend(tick(&mut state, &input, 0.02, &cfg));
        }
        (state.player, state.enemy, state.score, state.trail.len(), catches)
    };

    assert_eq!(run(77), run(77));
}

#[test]
fn trail_follows_player_after_catches() {
    let mut state = SnakeState::new(11);
    let cfg = SimConfig::default();

    // Two catches in a row
    for _ in 0..2 {
        state.enemy = state.player;
        tick(&mut state, &TickInput::default(), 0.0, &cfg);
    }
    assert_eq!(state.score, 2);

    // Park the enemy away from the player's path
    state.enemy = Vec2::new(-1.0, 1.0);
    let right = held(false, false, false, true);
    for _ in 0..10 {
        tick(&mut state, &right, 0.05, &cfg);
    }

    let trail: Vec<Vec2> = state.trail.iter().collect();
    assert_eq!(trail.len(), 2);
    // Newest entry is the position at the start of the last frame
    assert!((trail[0].x - 0.45).abs() < 1e-5);
    assert!((trail[1].x - 0.40).abs() < 1e-5);
    assert!((state.player.x - 0.5).abs() < 1e-5);
}

#[test]
fn player_pins_to_the_corner() {
    let mut state = SnakeState::new(5);
    state.enemy = Vec2::new(-1.0, -1.0);
    let up_right = held(true, false, false, true);
    for _ in 0..100 {
        tick(&mut state, &up_right, 0.1, &SimConfig::default());
        assert!(state.player.x <= 1.0 && state.player.y <= 1.0);
    }
    assert_eq!(state.player, Vec2::new(1.0, 1.0));
}

#[test]
fn huge_configured_speed_stays_on_the_playfield() {
    let settings = Settings::from_json(r#"{ "player_speed": 3.0e38 }"#).unwrap();
    let config = settings.sim_config();
    let mut state = SnakeState::new(11);
    state.enemy = Vec2::new(-1.0, -1.0);
    let right = held(false, false, false, true);
    for _ in 0..3 {
        tick(&mut state, &right, 2.0, &config);
        assert!(state.player.is_finite());
        assert!((-1.0..=1.0).contains(&state.player.x));
        assert!((-1.0..=1.0).contains(&state.player.y));
    }
    assert_eq!(state.player, Vec2::new(1.0, 0.0));
}
