use super::*;
use crate::playback::scheduler::SimulatedScheduler;

fn config() -> PlayerConfig {
    PlayerConfig {
        min_height: 36.0,
        container_width: 64.0,
        ..PlayerConfig::default()
    }
}

fn player(hz: f64) -> Player<SimulatedScheduler> {
    Player::new(
        &ContentStore::builtin(),
        &config(),
        SimulatedScheduler::new(hz),
    )
}

fn pump(p: &mut Player<SimulatedScheduler>) -> Option<TickOutcome> {
    let (id, ts) = p.scheduler_mut().fire()?;
    Some(p.on_frame(id, ts))
}

#[test]
fn new_player_requests_one_frame() {
    let p = player(60.0);
    assert!(p.engine().is_playing());
    assert!(p.pending_frame().is_some());
    assert_eq!(p.scheduler().pending(), p.pending_frame());
    assert!(p.surface().is_none());
}

#[test]
fn frames_advance_without_a_surface() {
    let mut p = player(50.0);
    for _ in 0..11 {
        assert_eq!(pump(&mut p), Some(TickOutcome::Advanced));
    }
    // First delivery is the baseline; ten 20ms intervals follow.
    assert!((p.engine().elapsed_ms() - 200.0).abs() < 1e-9);
}

#[test]
fn mounted_surface_is_redrawn_every_frame() {
    let mut p = player(60.0);
    p.mount(64.0, 1.0);
    assert_eq!(p.surface().unwrap().frames_drawn(), 1);
    pump(&mut p);
    pump(&mut p);
    assert_eq!(p.surface().unwrap().frames_drawn(), 3);
}

#[test]
fn pause_cancels_pending_frame_and_resume_skips_the_gap() {
    let mut p = player(50.0);
    pump(&mut p);
    pump(&mut p);
    let before = p.engine().progress();

    assert_eq!(p.toggle(), PlayState::Paused);
    assert!(p.pending_frame().is_none());
    assert_eq!(p.scheduler_mut().fire(), None);
    p.scheduler_mut().idle(10_000.0);

    assert_eq!(p.toggle(), PlayState::Playing);
    pump(&mut p);
    assert_eq!(p.engine().progress(), before);
    pump(&mut p);
    assert!((p.engine().elapsed_ms() - 40.0).abs() < 1e-9);
}

#[test]
fn reaching_the_end_stops_scheduling() {
    let short = ContentStore {
        duration_ms: 100,
        beats: vec![SceneBeat {
            time: 0,
            label: "Only".to_owned(),
            description: String::new(),
            focus: String::new(),
        }],
        facts: vec![],
        notes: vec![],
        narration: vec![],
    };
    let mut p = Player::new(&short, &config(), SimulatedScheduler::new(50.0));
    let mut outcomes = Vec::new();
    while let Some(outcome) = pump(&mut p) {
        outcomes.push(outcome);
    }
    assert_eq!(outcomes.last(), Some(&TickOutcome::Finished));
    assert_eq!(p.engine().progress(), 1.0);
    assert_eq!(p.engine().state(), PlayState::Paused);
    assert!(p.pending_frame().is_none());
    assert_eq!(p.controls().toggle_label, "Resume");

    p.replay();
    assert_eq!(p.engine().progress(), 0.0);
    assert!(p.pending_frame().is_some());
}

#[test]
fn seek_while_paused_redraws_immediately() {
    let mut p = player(60.0);
    p.mount(64.0, 1.0);
    p.toggle();
    let drawn = p.surface().unwrap().frames_drawn();
    p.seek_slider(500);
    assert_eq!(p.surface().unwrap().frames_drawn(), drawn + 1);
    assert_eq!(p.engine().state(), PlayState::Paused);
    assert_eq!(p.controls().timestamp_label(), "00:30 / 01:00");
    assert_eq!(p.active_beat().unwrap().label, "Golden Fruit");
}

#[test]
fn stale_frame_ids_are_ignored() {
    let mut p = player(60.0);
    let (old, ts) = p.scheduler_mut().fire().unwrap();
    p.on_frame(old, ts);
    assert_eq!(p.on_frame(old, ts + 500.0), TickOutcome::Idle);
    assert_eq!(p.engine().progress(), 0.0);
}

#[test]
fn resize_reallocates_and_redraws() {
    let mut p = player(60.0);
    p.resize(128.0, 1.0);
    assert!(p.surface().is_none());

    p.mount(64.0, 1.0);
    p.resize(128.0, 2.0);
    let surface = p.surface().unwrap();
    assert_eq!(surface.size().backing_width, 256);
    assert_eq!(surface.frames_drawn(), 1);
}

#[test]
fn dispose_cancels_and_blocks_further_frames() {
    let mut p = player(60.0);
    p.mount(64.0, 1.0);
    let pending = p.pending_frame().unwrap();
    p.dispose();
    assert!(p.is_disposed());
    assert!(p.surface().is_none());
    assert_eq!(p.scheduler().pending(), None);
    assert_eq!(p.on_frame(pending, 16.0), TickOutcome::Idle);

    p.replay();
    p.toggle();
    assert!(p.pending_frame().is_none());

    let progress = p.engine().progress();
    p.seek(0.75);
    p.seek_slider(900);
    assert_eq!(p.engine().progress(), progress);
}

#[test]
fn short_duration_override_keeps_every_beat_reachable() {
    let mut p = Player::new(
        &ContentStore::builtin(),
        &PlayerConfig {
            total_duration_ms: Some(10_000),
            ..config()
        },
        SimulatedScheduler::new(60.0),
    );
    assert_eq!(p.engine().total_duration_ms(), 52_001);
    p.seek(1.0);
    assert_eq!(p.active_beat().unwrap().label, "Moonlit Rest");
}
