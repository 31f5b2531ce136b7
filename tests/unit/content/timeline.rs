use super::*;

fn beat(time: u64) -> SceneBeat {
    SceneBeat {
        time,
        label: format!("beat@{time}"),
        description: String::new(),
        focus: String::new(),
    }
}

#[test]
fn format_timestamp_floors_to_seconds() {
    assert_eq!(format_timestamp(0.0), "00:00");
    assert_eq!(format_timestamp(30_000.0), "00:30");
    assert_eq!(format_timestamp(59_999.0), "00:59");
    assert_eq!(format_timestamp(60_000.0), "01:00");
    assert_eq!(format_timestamp(754_321.0), "12:34");
}

#[test]
fn format_timestamp_clamps_bad_input() {
    assert_eq!(format_timestamp(-5.0), "00:00");
    assert_eq!(format_timestamp(f64::NAN), "00:00");
}

#[test]
fn last_beat_runs_to_end_of_story() {
    let beats = [beat(0), beat(10_000), beat(25_000), beat(40_000)];
    assert_eq!(
        beat_durations(&beats, 60_000),
        vec![10_000, 15_000, 15_000, 20_000]
    );
}

#[test]
fn timeline_entries_carry_labels() {
    let store = ContentStore {
        duration_ms: 60_000,
        beats: vec![beat(0), beat(15_000), beat(45_000)],
        facts: vec![],
        notes: vec![],
        narration: vec![],
    };
    let rows = timeline_entries(&store);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].timestamp, "00:15");
    assert_eq!(rows[1].duration, "00:30");
    assert_eq!(rows[2].duration, "00:15");
    assert_eq!(rows[2].label, "beat@45000");
}

#[test]
fn misaligned_narration_is_reported() {
    let store = ContentStore {
        duration_ms: 60_000,
        beats: vec![beat(0), beat(15_000)],
        facts: vec![],
        notes: vec![],
        narration: vec![
            NarrationLine {
                timestamp: "00:15".to_owned(),
                title: "ok".to_owned(),
                narration: String::new(),
            },
            NarrationLine {
                timestamp: "00:20".to_owned(),
                title: "drifted".to_owned(),
                narration: String::new(),
            },
        ],
    };
    let off = narration_misalignments(&store);
    assert_eq!(off.len(), 1);
    assert_eq!(off[0].title, "drifted");
}
