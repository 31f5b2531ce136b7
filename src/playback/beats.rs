use crate::content::model::SceneBeat;

/// Index of the beat active at `progress`: the last beat whose start is `<= elapsed`.
///
/// Beats must be sorted ascending; the scan stops at the first beat that starts later than
/// `elapsed`. Returns `0` when no beat qualifies (including an empty slice).
pub fn active_beat_index(progress: f64, beats: &[SceneBeat], total_duration_ms: u64) -> usize {
    let elapsed = progress * total_duration_ms as f64;
    let mut active = 0;
    for (i, beat) in beats.iter().enumerate() {
        if elapsed >= beat.time as f64 {
            active = i;
        } else {
            break;
        }
    }
    active
}

#[cfg(test)]
#[path = "../../tests/unit/playback/beats.rs"]
mod tests;
