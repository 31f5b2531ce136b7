use crate::foundation::core::Rgb8;

/// One color keyframe: sky (top of the gradient), canopy (bottom) and glow (light accents).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Top of the background gradient.
    pub sky: Rgb8,
    /// Bottom of the background gradient and foliage base.
    pub canopy: Rgb8,
    /// Orb, tail and eye accents.
    pub glow: Rgb8,
}

impl Palette {
    const fn hex(sky: u32, canopy: u32, glow: u32) -> Self {
        Self {
            sky: Rgb8::from_hex(sky),
            canopy: Rgb8::from_hex(canopy),
            glow: Rgb8::from_hex(glow),
        }
    }

    fn mix(self, other: Self, t: f64) -> Self {
        Self {
            sky: self.sky.mix(other.sky, t),
            canopy: self.canopy.mix(other.canopy, t),
            glow: self.glow.mix(other.glow, t),
        }
    }
}

/// Dawn to night, evenly spaced along progress.
pub const PALETTE_STOPS: [Palette; 6] = [
    Palette::hex(0x1f1647, 0x142d37, 0xf7c066),
    Palette::hex(0x2b3a68, 0x1c4838, 0xff9f66),
    Palette::hex(0x374462, 0x215045, 0xfcd85d),
    Palette::hex(0x192b4d, 0x163028, 0xffa45b),
    Palette::hex(0x0d1a35, 0x132417, 0x8fe1ff),
    Palette::hex(0x040915, 0x0b1715, 0xf2c7ff),
];

/// Palette at `progress`, interpolated channel-wise between the surrounding keyframes.
///
/// `progress <= 0` (and NaN) yields the first keyframe exactly, `progress >= 1` the last.
pub fn palette_at(progress: f64) -> Palette {
    let last = PALETTE_STOPS.len() - 1;
    if progress.is_nan() || progress <= 0.0 {
        return PALETTE_STOPS[0];
    }
    if progress >= 1.0 {
        return PALETTE_STOPS[last];
    }
    let scaled = progress * last as f64;
    let index = (scaled.floor() as usize).min(last - 1);
    let t = scaled - index as f64;
    PALETTE_STOPS[index].mix(PALETTE_STOPS[index + 1], t)
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
