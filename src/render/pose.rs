//! Pure scene geometry as a function of progress.
//!
//! Nothing here touches a raster surface; the scene builder turns these values into paths.

use std::f64::consts::PI;

use crate::foundation::{
    core::{Point, Viewport},
    math::{ease_in_out, lerp},
};

/// Secondary-motion phases shared by the figure and the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillators {
    /// `sin(4πp)`: tail swing, limb swing and the horizontal wobble.
    pub swing: f64,
    /// `sin(6πp)`: vertical bob.
    pub bob: f64,
    /// `sin(πp)`: slow breathing of the figure's scale and the orb's height.
    pub breath: f64,
    /// `sin(12πp)`: blink driver.
    pub blink: f64,
}

impl Oscillators {
    /// Phases at `progress`.
    pub fn at(progress: f64) -> Self {
        Self {
            swing: (progress * PI * 4.0).sin(),
            bob: (progress * PI * 6.0).sin(),
            breath: (progress * PI).sin(),
            blink: (progress * PI * 12.0).sin(),
        }
    }
}

/// Placement and secondary motion of the monky.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonkyPose {
    /// Body center in logical coordinates.
    pub origin: Point,
    /// Unit length every body part is expressed in.
    pub scale: f64,
    /// Tail swing in `[-1, 1]`.
    pub tail_swing: f64,
    /// Arms shift sideways by this many logical pixels.
    pub limb_offset: f64,
    /// Eyes are closed on this frame.
    pub blink: bool,
}

/// Eyes close while the blink oscillator is above this value.
pub const BLINK_THRESHOLD: f64 = 0.94;

impl MonkyPose {
    /// Pose at `progress` inside `viewport`.
    pub fn at(progress: f64, viewport: Viewport) -> Self {
        Self::from_phases(progress, viewport, Oscillators::at(progress))
    }

    /// Pose from precomputed oscillator phases.
    pub fn from_phases(progress: f64, viewport: Viewport, osc: Oscillators) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let eased = ease_in_out(progress);
        let x = lerp(w * 0.2, w * 0.78, eased + 0.05 * osc.swing);
        let y = lerp(h * 0.65, h * 0.4, eased) + osc.bob * 12.0;
        let scale = lerp(w * 0.08, w * 0.11, 0.5 + 0.5 * osc.breath);
        Self {
            origin: Point::new(x, y),
            scale,
            tail_swing: osc.swing,
            limb_offset: osc.swing * scale * 0.3,
            blink: osc.blink > BLINK_THRESHOLD,
        }
    }
}

/// The drifting light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    /// Center in logical coordinates.
    pub center: Point,
    /// Outer radius of the glow.
    pub radius: f64,
}

impl Orb {
    /// Orb at `progress`: eases across the sky, arcs down and pulses in size.
    pub fn at(progress: f64, viewport: Viewport) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let x = lerp(w * 0.2, w * 0.85, ease_in_out(progress));
        let y = lerp(h * 0.18, h * 0.35, (progress * PI).sin());
        let radius = lerp(w * 0.08, w * 0.12, 0.5 + 0.5 * (progress * PI * 2.0).sin());
        Self {
            center: Point::new(x, y),
            radius,
        }
    }
}

/// Number of parallax trees.
pub const TREE_COUNT: usize = 12;

/// One background tree: a triangle standing on the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tree {
    /// Horizontal center of the trunk base.
    pub x: f64,
    /// Height above the bottom edge.
    pub height: f64,
    /// How far the canopy color is pushed toward near-black.
    pub shade: f64,
}

/// Trees swaying with phase offsets across the width.
pub fn trees(progress: f64, viewport: Viewport) -> Vec<Tree> {
    let (w, h) = (viewport.width, viewport.height);
    (0..TREE_COUNT)
        .map(|i| {
            let fraction = i as f64 / TREE_COUNT as f64;
            let sway = (progress * PI * 2.0 + fraction * PI * 2.0).sin() * 20.0;
            Tree {
                x: fraction * w + sway,
                height: lerp(h * 0.35, h * 0.75, (i % 5) as f64 / 5.0 + progress * 0.1),
                shade: 0.35 + (i % 3) as f64 * 0.1,
            }
        })
        .collect()
}

/// Number of vine layers.
pub const VINE_LAYERS: usize = 3;
/// Quadratic segments per vine.
pub const VINE_SEGMENTS: usize = 6;

/// Control and end points of each vine segment, per layer: `(start, [(ctrl, end); SEGMENTS])`.
pub fn vines(progress: f64, viewport: Viewport) -> Vec<(Point, Vec<(Point, Point)>)> {
    let (w, h) = (viewport.width, viewport.height);
    let seg_w = w / VINE_SEGMENTS as f64;
    (0..VINE_LAYERS)
        .map(|layer| {
            let start_y = lerp(h * 0.2, h * 0.45, layer as f64 / (VINE_LAYERS - 1) as f64);
            let segments = (1..=VINE_SEGMENTS)
                .map(|s| {
                    let seg_x = s as f64 * seg_w;
                    let wave = (progress * PI * 2.0 + s as f64 + layer as f64).sin() * 30.0;
                    (
                        Point::new(seg_x - seg_w / 2.0, start_y + wave * 0.3),
                        Point::new(seg_x, start_y + wave),
                    )
                })
                .collect();
            (Point::new(0.0, start_y), segments)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pose.rs"]
mod tests;
