use super::*;

#[test]
fn fire_delivers_pending_once() {
    let mut s = SimulatedScheduler::new(50.0);
    let id = s.request_frame();
    assert_eq!(s.fire(), Some((id, 20.0)));
    assert_eq!(s.fire(), None);
    assert_eq!(s.now_ms(), 40.0);
}

#[test]
fn cancel_drops_only_matching_request() {
    let mut s = SimulatedScheduler::new(60.0);
    let old = s.request_frame();
    s.cancel_frame(old);
    assert_eq!(s.pending(), None);

    let live = s.request_frame();
    s.cancel_frame(old);
    assert_eq!(s.pending(), Some(live));
}

#[test]
fn refresh_rate_is_clamped() {
    assert_eq!(SimulatedScheduler::new(0.0).interval_ms(), 1000.0);
    assert_eq!(SimulatedScheduler::new(1e9).interval_ms(), 1.0);
    assert!((SimulatedScheduler::new(f64::NAN).interval_ms() - 1000.0 / 60.0).abs() < 1e-12);
}

#[test]
fn idle_moves_clock_forward_only() {
    let mut s = SimulatedScheduler::new(10.0);
    s.idle(250.0);
    s.idle(-5.0);
    assert_eq!(s.now_ms(), 250.0);
}
