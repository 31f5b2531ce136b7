use crate::content::model::{ContentStore, NarrationLine, SceneBeat};

/// Format a millisecond offset as `MM:SS`, flooring to whole seconds.
///
/// Negative or non-finite inputs format as `00:00`.
pub fn format_timestamp(elapsed_ms: f64) -> String {
    let ms = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    };
    let total_seconds = (ms / 1000.0).floor() as u64;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Duration of each beat: the gap to the next beat, or to the end of the story for the last.
pub fn beat_durations(beats: &[SceneBeat], total_ms: u64) -> Vec<u64> {
    beats
        .iter()
        .enumerate()
        .map(|(i, beat)| {
            let next = beats.get(i + 1).map_or(total_ms, |b| b.time);
            next.saturating_sub(beat.time)
        })
        .collect()
}

/// One row of the storyboard timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Start offset, `MM:SS`.
    pub timestamp: String,
    /// Beat length, `MM:SS`.
    pub duration: String,
    /// Beat title.
    pub label: String,
    /// Beat description.
    pub description: String,
    /// Beat focus tag.
    pub focus: String,
}

/// Storyboard rows for every beat, in order.
pub fn timeline_entries(store: &ContentStore) -> Vec<TimelineEntry> {
    let durations = beat_durations(&store.beats, store.duration_ms);
    store
        .beats
        .iter()
        .zip(durations)
        .map(|(beat, duration)| TimelineEntry {
            timestamp: format_timestamp(beat.time as f64),
            duration: format_timestamp(duration as f64),
            label: beat.label.clone(),
            description: beat.description.clone(),
            focus: beat.focus.clone(),
        })
        .collect()
}

/// Narration cues whose timestamp matches no beat's start offset.
pub fn narration_misalignments(store: &ContentStore) -> Vec<&NarrationLine> {
    let beat_stamps: Vec<String> = store
        .beats
        .iter()
        .map(|b| format_timestamp(b.time as f64))
        .collect();
    store
        .narration
        .iter()
        .filter(|line| !beat_stamps.iter().any(|s| *s == line.timestamp.trim()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/content/timeline.rs"]
mod tests;
