use crate::foundation::core::Viewport;

/// Largest backing dimension the CPU surface will allocate.
pub const MAX_BACKING_PX: u16 = 8192;
/// Highest device pixel ratio honored.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 4.0;

/// How the surface follows its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSizing {
    /// Logical height never drops below this.
    pub min_height: f64,
    /// Logical height is `width * aspect` when that exceeds `min_height`.
    pub aspect: f64,
}

impl Default for SurfaceSizing {
    fn default() -> Self {
        Self {
            min_height: 320.0,
            aspect: 9.0 / 16.0,
        }
    }
}

/// Resolved logical and backing sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// Logical size the scene is composed in.
    pub logical: Viewport,
    /// Device pixel ratio after clamping.
    pub device_pixel_ratio: f64,
    /// Backing buffer width in device pixels.
    pub backing_width: u16,
    /// Backing buffer height in device pixels.
    pub backing_height: u16,
}

impl SurfaceSize {
    /// Logical to device pixel scale on each axis.
    ///
    /// Differs from the device pixel ratio when the backing size was floored or capped.
    pub fn scale(&self) -> (f64, f64) {
        (
            f64::from(self.backing_width) / self.logical.width,
            f64::from(self.backing_height) / self.logical.height,
        )
    }
}

impl SurfaceSizing {
    /// Size for a container `container_width` logical pixels wide on a display with
    /// `device_pixel_ratio`. All inputs are clamped rather than rejected.
    pub fn resolve(&self, container_width: f64, device_pixel_ratio: f64) -> SurfaceSize {
        let width = if container_width.is_finite() {
            container_width.max(1.0)
        } else {
            1.0
        };
        let min_height = if self.min_height.is_finite() {
            self.min_height.max(1.0)
        } else {
            1.0
        };
        let aspect = if self.aspect.is_finite() && self.aspect > 0.0 {
            self.aspect
        } else {
            9.0 / 16.0
        };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        };

        let logical = Viewport::new(width, min_height.max(width * aspect));
        fn backing(v: f64) -> u16 {
            v.floor().clamp(1.0, f64::from(MAX_BACKING_PX)) as u16
        }
        SurfaceSize {
            logical,
            device_pixel_ratio: dpr,
            backing_width: backing(logical.width * dpr),
            backing_height: backing(logical.height * dpr),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
