use crate::{
    foundation::core::{Affine, BezPath, Point, Rgba8},
    render::{
        scene::{DrawOp, FramePlan, Paint, build_frame},
        surface::SurfaceSize,
    },
};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in device pixels.
    pub width: u32,
    /// Frame height in device pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data, suitable for image encoders.
    pub fn unpremultiplied_data(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Raster target backed by a `vello_cpu` pixmap at device resolution.
pub struct CpuSurface {
    size: SurfaceSize,
    clear: [u8; 4],
    pixmap: vello_cpu::Pixmap,
    frames_drawn: u64,
}

impl CpuSurface {
    /// Allocate a surface; it is cleared to `clear` until the first draw.
    pub fn new(size: SurfaceSize, clear: Rgba8) -> Self {
        let clear = clear.premultiplied();
        let mut pixmap = vello_cpu::Pixmap::new(size.backing_width, size.backing_height);
        clear_pixmap(&mut pixmap, clear);
        Self {
            size,
            clear,
            pixmap,
            frames_drawn: 0,
        }
    }

    /// Current logical and backing size.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Number of completed draws since allocation.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Overwrite the surface with `plan`, scaling logical coordinates to device pixels.
    #[tracing::instrument(level = "trace", skip_all, fields(ops = plan.ops.len()))]
    pub fn draw(&mut self, plan: &FramePlan) {
        clear_pixmap(&mut self.pixmap, self.clear);

        let (sx, sy) = (
            f64::from(self.size.backing_width) / plan.viewport.width,
            f64::from(self.size.backing_height) / plan.viewport.height,
        );
        let device = Affine::scale_non_uniform(sx, sy);

        let mut ctx =
            vello_cpu::RenderContext::new(self.size.backing_width, self.size.backing_height);
        for op in &plan.ops {
            draw_op(&mut ctx, device, op);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        self.frames_drawn += 1;
    }

    /// Copy the current pixels out.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.size.backing_width),
            height: u32::from(self.size.backing_height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

/// Render a single frame at `progress` into a fresh surface.
pub fn render_frame(progress: f64, size: SurfaceSize, clear: Rgba8) -> FrameRGBA {
    let mut surface = CpuSurface::new(size, clear);
    surface.draw(&build_frame(progress, size.logical));
    surface.snapshot()
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, device: Affine, op: &DrawOp) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::FillPath {
            path,
            transform,
            paint,
            opacity,
        } => {
            ctx.set_transform(affine_to_cpu(device * *transform));
            set_paint(ctx, paint);
            let layered = *opacity < 1.0;
            if layered {
                ctx.push_opacity_layer(*opacity);
            }
            ctx.fill_path(&bezpath_to_cpu(path));
            if layered {
                ctx.pop_layer();
            }
        }
        DrawOp::StrokePath {
            path,
            transform,
            paint,
            width,
            opacity,
        } => {
            ctx.set_transform(affine_to_cpu(device * *transform));
            set_paint(ctx, paint);
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(*width)
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round),
            );
            let layered = *opacity < 1.0;
            if layered {
                ctx.push_opacity_layer(*opacity);
            }
            ctx.stroke_path(&bezpath_to_cpu(path));
            if layered {
                ctx.pop_layer();
            }
        }
    }
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, paint: &Paint) {
    match *paint {
        Paint::Solid(c) => ctx.set_paint(color_to_cpu(c)),
        Paint::Linear {
            start,
            end,
            from,
            to,
        } => ctx.set_paint(
            vello_cpu::peniko::Gradient::new_linear(point_to_cpu(start), point_to_cpu(end))
                .with_stops([(0.0_f32, color_to_cpu(from)), (1.0, color_to_cpu(to))]),
        ),
        Paint::Radial {
            center,
            inner_radius,
            outer_radius,
            from,
            to,
        } => ctx.set_paint(
            vello_cpu::peniko::Gradient::new_two_point_radial(
                point_to_cpu(center),
                inner_radius as f32,
                point_to_cpu(center),
                outer_radius as f32,
            )
            .with_stops([(0.0_f32, color_to_cpu(from)), (1.0, color_to_cpu(to))]),
        ),
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
