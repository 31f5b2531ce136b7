use super::*;

fn run_steps(step_ms: f64, steps: u32) -> PlaybackEngine {
    let mut engine = PlaybackEngine::new(60_000);
    let mut ts = 1_000.0;
    engine.tick(ts);
    for _ in 0..steps {
        ts += step_ms;
        engine.tick(ts);
    }
    engine
}

#[test]
fn starts_playing_at_zero() {
    let engine = PlaybackEngine::new(60_000);
    assert_eq!(engine.progress(), 0.0);
    assert_eq!(engine.state(), PlayState::Playing);
}

#[test]
fn first_tick_only_sets_baseline() {
    let mut engine = PlaybackEngine::new(60_000);
    assert_eq!(engine.tick(123_456.0), TickOutcome::Advanced);
    assert_eq!(engine.progress(), 0.0);
    engine.tick(123_456.0 + 6_000.0);
    assert!((engine.progress() - 0.1).abs() < 1e-12);
}

#[test]
fn advance_is_refresh_rate_independent() {
    // 528ms is a common multiple of both frame intervals.
    let fast = run_steps(16.0, 33);
    let slow = run_steps(33.0, 16);
    assert!((fast.progress() - slow.progress()).abs() < 1e-9);
    assert!((fast.progress() - 528.0 / 60_000.0).abs() < 1e-9);
}

#[test]
fn huge_delta_clamps_to_one_and_pauses() {
    let mut engine = PlaybackEngine::new(60_000);
    assert_eq!(engine.advance(10_000_000.0), TickOutcome::Finished);
    assert_eq!(engine.progress(), 1.0);
    assert_eq!(engine.state(), PlayState::Paused);
    assert_eq!(engine.tick(99_999_999.0), TickOutcome::Idle);
    assert_eq!(engine.progress(), 1.0);
}

#[test]
fn paused_engine_ignores_ticks() {
    let mut engine = PlaybackEngine::new(60_000);
    engine.tick(0.0);
    engine.tick(600.0);
    engine.toggle();
    let frozen = engine.progress();
    assert_eq!(engine.tick(30_000.0), TickOutcome::Idle);
    assert_eq!(engine.progress(), frozen);
}

#[test]
fn resume_does_not_count_time_spent_paused() {
    let mut engine = PlaybackEngine::new(60_000);
    engine.tick(0.0);
    engine.tick(6_000.0);
    engine.toggle();
    engine.toggle();
    // Ten seconds later the first callback after resuming is a new baseline.
    engine.tick(16_000.0);
    assert!((engine.progress() - 0.1).abs() < 1e-12);
    engine.tick(22_000.0);
    assert!((engine.progress() - 0.2).abs() < 1e-12);
}

#[test]
fn seek_clamps_and_keeps_state() {
    let mut engine = PlaybackEngine::new(60_000);
    engine.seek(-0.3);
    assert_eq!(engine.progress(), 0.0);
    engine.seek(1.7);
    assert_eq!(engine.progress(), 1.0);
    assert!(engine.is_playing());

    engine.toggle();
    engine.seek(0.4);
    assert_eq!(engine.progress(), 0.4);
    assert_eq!(engine.state(), PlayState::Paused);
}

#[test]
fn slider_maps_thousandths() {
    let mut engine = PlaybackEngine::new(60_000);
    engine.seek_slider(250);
    assert_eq!(engine.progress(), 0.25);
    engine.seek_slider(5_000);
    assert_eq!(engine.progress(), 1.0);
}

#[test]
fn replay_always_restarts() {
    let mut engine = PlaybackEngine::new(60_000);
    engine.advance(120_000.0);
    assert_eq!(engine.state(), PlayState::Paused);
    engine.replay();
    assert_eq!(engine.progress(), 0.0);
    assert_eq!(engine.state(), PlayState::Playing);

    engine.seek(0.6);
    engine.replay();
    assert_eq!(engine.progress(), 0.0);
    assert!(engine.is_playing());
}

#[test]
fn negative_and_nan_deltas_do_not_rewind() {
    let mut engine = PlaybackEngine::new(60_000);
    engine.tick(10_000.0);
    engine.tick(16_000.0);
    let p = engine.progress();
    engine.tick(5_000.0);
    assert_eq!(engine.progress(), p);
    engine.advance(f64::NAN);
    assert_eq!(engine.progress(), p);
}

#[test]
fn controls_reflect_state() {
    let beats: Vec<SceneBeat> = [0u64, 15_000, 45_000]
        .iter()
        .map(|&time| SceneBeat {
            time,
            label: String::new(),
            description: String::new(),
            focus: String::new(),
        })
        .collect();

    let mut engine = PlaybackEngine::new(60_000);
    engine.seek(0.5);
    let view = engine.controls(&beats);
    assert_eq!(view.toggle_label, "Pause");
    assert_eq!(view.slider_value, 500);
    assert_eq!(view.active_beat, 1);
    assert_eq!(view.timestamp_label(), "00:30 / 01:00");

    engine.toggle();
    assert_eq!(engine.controls(&beats).toggle_label, "Play");

    engine.seek(1.0);
    assert_eq!(engine.controls(&beats).toggle_label, "Resume");
}

#[test]
fn toggle_after_finish_finishes_again() {
    let mut engine = PlaybackEngine::new(1_000);
    engine.advance(5_000.0);
    engine.toggle();
    assert!(engine.is_playing());
    assert_eq!(engine.tick(42.0), TickOutcome::Finished);
    assert_eq!(engine.state(), PlayState::Paused);
}
