use std::{fs::File, io::BufReader, path::Path};

use crate::{
    content::model::ContentStore,
    foundation::{
        core::Rgba8,
        error::{OdysseyError, OdysseyResult},
    },
    render::surface::SurfaceSizing,
};

/// Player settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Overrides the content store's duration when set.
    pub total_duration_ms: Option<u64>,
    /// Minimum logical surface height.
    pub min_height: f64,
    /// Height to width ratio once the minimum height is exceeded.
    pub aspect: f64,
    /// Device pixel ratio used for the backing buffer.
    pub device_pixel_ratio: f64,
    /// Width of the container the surface is mounted in.
    pub container_width: f64,
    /// Color the surface holds before its first draw.
    pub clear_rgba: [u8; 4],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            total_duration_ms: None,
            min_height: 320.0,
            aspect: 9.0 / 16.0,
            device_pixel_ratio: 1.0,
            container_width: 960.0,
            clear_rgba: [0, 0, 0, 255],
        }
    }
}

impl PlayerConfig {
    /// Reject values that cannot describe a surface or a timeline.
    pub fn validate(&self) -> OdysseyResult<()> {
        if self.total_duration_ms == Some(0) {
            return Err(OdysseyError::validation("total_duration_ms must be > 0"));
        }
        for (name, value) in [
            ("min_height", self.min_height),
            ("aspect", self.aspect),
            ("device_pixel_ratio", self.device_pixel_ratio),
            ("container_width", self.container_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OdysseyError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// [`PlayerConfig::validate`] plus the checks that need the content: a duration override
    /// must leave every beat a positive running time.
    pub fn validate_for(&self, store: &ContentStore) -> OdysseyResult<()> {
        self.validate()?;
        let (Some(total), Some(last)) = (self.total_duration_ms, store.beats.last()) else {
            return Ok(());
        };
        if total <= last.time {
            return Err(OdysseyError::validation(format!(
                "total_duration_ms {total} ends at or before the last beat '{}' ({} ms)",
                last.label, last.time
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn from_json_file(path: &Path) -> OdysseyResult<Self> {
        let f = File::open(path).map_err(|e| {
            OdysseyError::Other(anyhow::Error::new(e).context(format!(
                "open config '{}'",
                path.display()
            )))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| OdysseyError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Surface sizing policy.
    pub fn sizing(&self) -> SurfaceSizing {
        SurfaceSizing {
            min_height: self.min_height,
            aspect: self.aspect,
        }
    }

    /// Duration the engine runs for with `store`.
    ///
    /// An override is raised to just past the last beat, so every beat stays reachable.
    pub fn duration_for(&self, store: &ContentStore) -> u64 {
        let Some(total) = self.total_duration_ms else {
            return store.duration_ms;
        };
        let floor = store.beats.last().map_or(0, |b| b.time.saturating_add(1));
        total.max(floor)
    }

    /// Clear color.
    pub fn clear(&self) -> Rgba8 {
        let [r, g, b, a] = self.clear_rgba;
        Rgba8 { r, g, b, a }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
