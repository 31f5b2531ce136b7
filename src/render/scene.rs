use std::f64::consts::PI;

use kurbo::{Circle, Ellipse, Shape as _};

use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Rgba8, Viewport},
    render::{
        palette::{Palette, palette_at},
        pose::{MonkyPose, Orb, trees, vines},
    },
};

const TOLERANCE: f64 = 0.1;

const FACE_HIGHLIGHT: Rgb8 = Rgb8::from_hex(0xfff4d8);
const EAR_HIGHLIGHT: Rgb8 = Rgb8::from_hex(0xffe6a6);
const EYE_WHITE: Rgb8 = Rgb8::from_hex(0xfefefe);
const TREE_SHADOW: Rgb8 = Rgb8::from_hex(0x020b0d);
const FOLIAGE_SHADOW: Rgb8 = Rgb8::from_hex(0x010302);

const TREE_OPACITY: f32 = 0.55;
const VINE_WIDTH: f64 = 6.0;

/// How a path is colored.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Two-stop linear gradient between `start` and `end`.
    Linear {
        /// Position of the first stop.
        start: Point,
        /// Position of the second stop.
        end: Point,
        /// Color at `start`.
        from: Rgba8,
        /// Color at `end`.
        to: Rgba8,
    },
    /// Two-stop radial gradient between two concentric circles.
    Radial {
        /// Shared center.
        center: Point,
        /// Radius of the first stop.
        inner_radius: f64,
        /// Radius of the second stop.
        outer_radius: f64,
        /// Color at the inner radius.
        from: Rgba8,
        /// Color at the outer radius.
        to: Rgba8,
    },
}

/// A single drawing command in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a path (non-zero winding).
    FillPath {
        /// Geometry in local space.
        path: BezPath,
        /// Local to logical transform.
        transform: Affine,
        /// Fill paint.
        paint: Paint,
        /// Extra alpha applied to the whole op.
        opacity: f32,
    },
    /// Stroke a path with round caps and joins.
    StrokePath {
        /// Geometry in local space.
        path: BezPath,
        /// Local to logical transform.
        transform: Affine,
        /// Stroke paint.
        paint: Paint,
        /// Stroke width in local units.
        width: f64,
        /// Extra alpha applied to the whole op.
        opacity: f32,
    },
}

/// Everything needed to draw one frame, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Logical size the ops are expressed in.
    pub viewport: Viewport,
    /// Palette the frame was built with.
    pub palette: Palette,
    /// Ops in paint order.
    pub ops: Vec<DrawOp>,
}

struct PlanBuilder {
    ops: Vec<DrawOp>,
    transform: Affine,
}

impl PlanBuilder {
    fn fill(&mut self, path: BezPath, paint: Paint) {
        self.fill_with_opacity(path, paint, 1.0);
    }

    fn fill_with_opacity(&mut self, path: BezPath, paint: Paint, opacity: f32) {
        self.ops.push(DrawOp::FillPath {
            path,
            transform: self.transform,
            paint,
            opacity,
        });
    }

    fn stroke(&mut self, path: BezPath, paint: Paint, width: f64) {
        self.ops.push(DrawOp::StrokePath {
            path,
            transform: self.transform,
            paint,
            width,
            opacity: 1.0,
        });
    }
}

fn solid(c: Rgb8) -> Paint {
    Paint::Solid(c.opaque())
}

fn circles(centers: &[(f64, f64)], radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for &(x, y) in centers {
        path.extend(Circle::new((x, y), radius).path_elements(TOLERANCE));
    }
    path
}

fn ellipses(specs: &[((f64, f64), (f64, f64), f64)]) -> BezPath {
    let mut path = BezPath::new();
    for &(center, radii, rotation) in specs {
        path.extend(Ellipse::new(center, radii, rotation).path_elements(TOLERANCE));
    }
    path
}

/// Build the draw ops for `progress` inside `viewport`.
///
/// Pure: the same inputs always produce the same plan. The first op covers the whole
/// viewport with an opaque gradient, so executing a plan fully overwrites the surface.
pub fn build_frame(progress: f64, viewport: Viewport) -> FramePlan {
    let palette = palette_at(progress);
    let mut b = PlanBuilder {
        ops: Vec::with_capacity(32),
        transform: Affine::IDENTITY,
    };

    draw_background(&mut b, viewport, palette);
    draw_orb(&mut b, progress, viewport, palette);
    draw_trees(&mut b, progress, viewport, palette);
    draw_vines(&mut b, progress, viewport, palette);
    draw_monky(&mut b, MonkyPose::at(progress, viewport), palette);
    draw_foliage(&mut b, viewport, palette);

    FramePlan {
        viewport,
        palette,
        ops: b.ops,
    }
}

fn draw_background(b: &mut PlanBuilder, vp: Viewport, palette: Palette) {
    let rect = Rect::new(0.0, 0.0, vp.width, vp.height);
    b.fill(
        rect.to_path(TOLERANCE),
        Paint::Linear {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, vp.height),
            from: palette.sky.opaque(),
            to: palette.canopy.opaque(),
        },
    );
}

fn draw_orb(b: &mut PlanBuilder, progress: f64, vp: Viewport, palette: Palette) {
    let orb = Orb::at(progress, vp);
    b.fill(
        Circle::new(orb.center, orb.radius).to_path(TOLERANCE),
        Paint::Radial {
            center: orb.center,
            inner_radius: orb.radius * 0.2,
            outer_radius: orb.radius,
            from: palette.glow.with_alpha(0xdd),
            to: palette.glow.with_alpha(0x00),
        },
    );
}

fn draw_trees(b: &mut PlanBuilder, progress: f64, vp: Viewport, palette: Palette) {
    for tree in trees(progress, vp) {
        let mut path = BezPath::new();
        path.move_to((tree.x - 12.0, vp.height));
        path.line_to((tree.x + 12.0, vp.height));
        path.line_to((tree.x, vp.height - tree.height));
        path.close_path();
        b.fill_with_opacity(
            path,
            solid(palette.canopy.mix(TREE_SHADOW, tree.shade)),
            TREE_OPACITY,
        );
    }
}

fn draw_vines(b: &mut PlanBuilder, progress: f64, vp: Viewport, palette: Palette) {
    let color = palette.canopy.mix(palette.glow, 0.25).with_alpha(0xaa);
    for (start, segments) in vines(progress, vp) {
        let mut path = BezPath::new();
        path.move_to(start);
        for (ctrl, end) in segments {
            path.quad_to(ctrl, end);
        }
        b.stroke(path, Paint::Solid(color), VINE_WIDTH);
    }
}

fn draw_monky(b: &mut PlanBuilder, pose: MonkyPose, palette: Palette) {
    let s = pose.scale;
    let sw = pose.tail_swing;
    b.transform = Affine::translate(pose.origin.to_vec2());

    let mut tail = BezPath::new();
    tail.move_to((-s * 0.4, -s * 0.1));
    tail.quad_to(
        (-s * (1.6 + sw * 0.6), -s * (1.0 + sw * 0.4)),
        (-s * (1.8 + sw * 0.4), s * 0.6),
    );
    b.stroke(tail, solid(palette.glow), s * 0.18);

    let body = Ellipse::new((0.0, 0.0), (s * 0.72, s), PI / 8.0).to_path(TOLERANCE);
    b.fill(body, solid(palette.canopy.mix(palette.glow, 0.25)));

    b.fill(
        circles(&[(s * 0.35, -s * 0.75)], s * 0.55),
        solid(palette.glow.mix(FACE_HIGHLIGHT, 0.4)),
    );

    b.fill(
        ellipses(&[((s * 0.43, -s * 0.72), (s * 0.45, s * 0.38), 0.0)]),
        Paint::Solid(Rgba8::black(64)),
    );

    let eyes = [(s * 0.55, -s * 0.78), (s * 0.32, -s * 0.78)];
    b.fill(circles(&eyes, s * 0.12), solid(EYE_WHITE));
    let pupils = if pose.blink {
        ellipses(&[
            (eyes[0], (s * 0.07, s * 0.02), 0.0),
            (eyes[1], (s * 0.07, s * 0.02), 0.0),
        ])
    } else {
        circles(&eyes, s * 0.06)
    };
    b.fill(pupils, solid(palette.glow));

    let mut face = BezPath::new();
    face.move_to((s * 0.42, -s * 0.63));
    face.quad_to((s * 0.45, -s * 0.58), (s * 0.38, -s * 0.56));
    face.move_to((s * 0.42, -s * 0.63));
    face.quad_to((s * 0.39, -s * 0.58), (s * 0.46, -s * 0.56));
    b.stroke(face, solid(palette.glow), s * 0.05);

    b.fill(
        circles(&[(s * 0.02, -s * 0.92), (s * 0.7, -s * 0.92)], s * 0.22),
        solid(palette.glow.mix(EAR_HIGHLIGHT, 0.5)),
    );

    let arm = pose.limb_offset * 0.3;
    b.fill(
        ellipses(&[
            ((s * 0.15, s * 0.8), (s * 0.3, s * 0.4), PI / 12.0),
            ((s * 0.55, s * 0.82), (s * 0.3, s * 0.4), -PI / 12.0),
            ((s * 0.15 + arm, -s * 0.2), (s * 0.22, s * 0.42), PI / 10.0),
            ((s * 0.72 + arm, -s * 0.25), (s * 0.22, s * 0.42), -PI / 10.0),
        ]),
        solid(palette.canopy.mix(palette.glow, 0.2)),
    );

    b.transform = Affine::IDENTITY;
}

fn draw_foliage(b: &mut PlanBuilder, vp: Viewport, palette: Palette) {
    let (w, h) = (vp.width, vp.height);
    let mut path = BezPath::new();
    path.move_to((-50.0, h));
    path.quad_to((w * 0.2, h * 0.82), (w * 0.45, h));
    path.line_to((w * 0.7, h));
    path.quad_to((w * 0.9, h * 0.78), (w + 50.0, h));
    path.close_path();
    b.fill(
        path,
        Paint::Solid(palette.canopy.mix(FOLIAGE_SHADOW, 0.6).with_alpha(0xe6)),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
