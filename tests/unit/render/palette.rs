use super::*;

fn distance(a: Rgb8, b: Rgb8) -> i32 {
    (i32::from(a.r) - i32::from(b.r)).abs()
        + (i32::from(a.g) - i32::from(b.g)).abs()
        + (i32::from(a.b) - i32::from(b.b)).abs()
}

#[test]
fn endpoints_are_exact_keyframes() {
    assert_eq!(palette_at(0.0), PALETTE_STOPS[0]);
    assert_eq!(palette_at(1.0), PALETTE_STOPS[5]);
    assert_eq!(palette_at(-2.0), PALETTE_STOPS[0]);
    assert_eq!(palette_at(3.0), PALETTE_STOPS[5]);
    assert_eq!(palette_at(f64::NAN), PALETTE_STOPS[0]);
}

#[test]
fn interior_keyframes_are_hit_exactly() {
    for (i, stop) in PALETTE_STOPS.iter().enumerate() {
        assert_eq!(palette_at(i as f64 / 5.0), *stop, "keyframe {i}");
    }
}

#[test]
fn midpoint_blends_neighbors() {
    let p = palette_at(0.1);
    assert_eq!(p.sky, PALETTE_STOPS[0].sky.mix(PALETTE_STOPS[1].sky, 0.5));
    // 0x1f..0x2b midpoint is 0x25.
    assert_eq!(p.sky.r, 0x25);
}

#[test]
fn small_steps_give_small_color_changes() {
    let steps = 2_000;
    let mut prev = palette_at(0.0);
    for i in 1..=steps {
        let next = palette_at(f64::from(i) / f64::from(steps));
        for (a, b) in [
            (prev.sky, next.sky),
            (prev.canopy, next.canopy),
            (prev.glow, next.glow),
        ] {
            assert!(distance(a, b) <= 6, "jump at step {i}");
        }
        prev = next;
    }
}
