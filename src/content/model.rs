use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{OdysseyError, OdysseyResult};

/// A named narrative segment starting at `time` milliseconds into the story.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneBeat {
    /// Start offset from the beginning of the story, in milliseconds.
    pub time: u64,
    /// Short title shown in the overlay.
    pub label: String,
    /// One-sentence description of the beat.
    pub description: String,
    /// Short focus tag.
    pub focus: String,
}

/// A stand-alone fact card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FactCard {
    /// Card title.
    pub title: String,
    /// The fact itself.
    pub fact: String,
    /// What the viewer should take away.
    pub takeaway: String,
}

/// A production note: a heading with ordered bullets.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductionNote {
    /// Note heading.
    pub heading: String,
    /// Ordered bullet points.
    pub bullets: Vec<String>,
}

/// One cue of the narration script.
///
/// `timestamp` is a display string; it lines up with beat offsets by convention only.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NarrationLine {
    /// Display timestamp, conventionally `MM:SS`.
    pub timestamp: String,
    /// Cue title.
    pub title: String,
    /// Narration text.
    pub narration: String,
}

/// Immutable story dataset consumed by the playback engine and the page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentStore {
    /// Total story duration in milliseconds.
    pub duration_ms: u64,
    /// Scene beats, ascending by `time`, first at `0`.
    pub beats: Vec<SceneBeat>,
    /// Fact cards, unordered.
    #[serde(default)]
    pub facts: Vec<FactCard>,
    /// Production notes.
    #[serde(default)]
    pub notes: Vec<ProductionNote>,
    /// Narration script.
    #[serde(default)]
    pub narration: Vec<NarrationLine>,
}

impl ContentStore {
    /// Check the beat ordering invariants.
    ///
    /// Narration alignment is not checked here; see [`crate::narration_misalignments`].
    pub fn validate(&self) -> OdysseyResult<()> {
        if self.duration_ms == 0 {
            return Err(OdysseyError::validation("duration_ms must be > 0"));
        }
        let Some(first) = self.beats.first() else {
            return Err(OdysseyError::validation("at least one scene beat is required"));
        };
        if first.time != 0 {
            return Err(OdysseyError::validation(format!(
                "first beat '{}' must start at 0 (got {})",
                first.label, first.time
            )));
        }
        for pair in self.beats.windows(2) {
            if pair[1].time < pair[0].time {
                return Err(OdysseyError::validation(format!(
                    "beat '{}' starts before preceding beat '{}'",
                    pair[1].label, pair[0].label
                )));
            }
        }
        for beat in &self.beats {
            if beat.time >= self.duration_ms {
                return Err(OdysseyError::validation(format!(
                    "beat '{}' starts at or after the end of the story",
                    beat.label
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a content store from JSON text.
    pub fn from_json_str(json: &str) -> OdysseyResult<Self> {
        let store: Self =
            serde_json::from_str(json).map_err(|e| OdysseyError::serde(e.to_string()))?;
        store.validate()?;
        store.report_misalignments();
        Ok(store)
    }

    /// Load and validate a content store from a JSON file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn from_json_file(path: &Path) -> OdysseyResult<Self> {
        let f = File::open(path).map_err(|e| {
            OdysseyError::Other(anyhow::Error::new(e).context(format!(
                "open content '{}'",
                path.display()
            )))
        })?;
        let store: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| OdysseyError::serde(e.to_string()))?;
        store.validate()?;
        store.report_misalignments();
        tracing::debug!(beats = store.beats.len(), "content loaded");
        Ok(store)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> OdysseyResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OdysseyError::serde(e.to_string()))
    }

    fn report_misalignments(&self) {
        for line in crate::content::timeline::narration_misalignments(self) {
            tracing::warn!(
                timestamp = %line.timestamp,
                title = %line.title,
                "narration cue does not line up with any scene beat"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
