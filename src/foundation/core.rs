pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Channel-wise linear mix in RGB space, each channel rounded to the nearest integer.
    ///
    /// `t` is clamped to `[0, 1]`, so `mix(a, b, 0) == a` and `mix(a, b, 1) == b`.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: channel(self.r, other.r, t),
            g: channel(self.g, other.g, t),
            b: channel(self.b, other.b, t),
        }
    }

    /// Attach a straight (non-premultiplied) alpha value.
    pub const fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Fully opaque version of this color.
    pub const fn opaque(self) -> Rgba8 {
        self.with_alpha(255)
    }
}

/// 8-bit sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight).
    pub a: u8,
}

impl Rgba8 {
    /// Black with an explicit alpha.
    pub const fn black(a: u8) -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a,
        }
    }

    /// Premultiply the color channels by alpha.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }
        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// Logical (CSS-pixel) viewport the frame is composed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical width.
    pub width: f64,
    /// Logical height.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, clamping non-finite or non-positive sizes to one pixel.
    pub fn new(width: f64, height: f64) -> Self {
        fn sane(v: f64) -> f64 {
            if v.is_finite() { v.max(1.0) } else { 1.0 }
        }
        Self {
            width: sane(width),
            height: sane(height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
