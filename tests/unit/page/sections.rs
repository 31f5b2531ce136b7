use super::*;
use crate::content::model::{FactCard, NarrationLine, SceneBeat};

#[test]
fn page_sections_appear_in_order() {
    let page = render_page(&ContentStore::builtin());
    let order = [
        "# Monky Odyssey",
        "## Storyboard Timeline",
        "## Field Notes",
        "## Production Blueprint",
        "## Director's Commentary",
        "Crafted for the web",
    ];
    let mut last = 0;
    for marker in order {
        let at = page[last..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing or out of order: {marker}"));
        last += at;
    }
}

#[test]
fn timeline_lists_every_beat_with_duration() {
    let store = ContentStore::builtin();
    let text = timeline_section(&store);
    assert_eq!(text.matches("Focus: ").count(), store.beats.len());
    assert!(text.contains("1. [00:00] Dawn Over the Canopy (duration 00:08)"));
    assert!(text.contains("[00:52] Moonlit Rest (duration 00:08)"));
}

#[test]
fn notes_render_every_bullet() {
    let store = ContentStore::builtin();
    let text = notes_section(&store);
    let bullets: usize = store.notes.iter().map(|n| n.bullets.len()).sum();
    assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), bullets);
}

#[test]
fn empty_lists_still_render_headings() {
    let mut store = ContentStore::builtin();
    store.facts.clear();
    store.narration.clear();
    assert!(facts_section(&store).starts_with("## Field Notes"));
    assert!(!narration_section(&store).contains('['));
}

#[test]
fn sections_have_exact_line_layout() {
    let store = ContentStore {
        duration_ms: 20_000,
        beats: vec![SceneBeat {
            time: 0,
            label: "Opening".to_owned(),
            description: "Leaves part.".to_owned(),
            focus: "Light".to_owned(),
        }],
        facts: vec![FactCard {
            title: "Tails".to_owned(),
            fact: "Some tails grip.".to_owned(),
            takeaway: "Balance matters.".to_owned(),
        }],
        notes: vec![],
        narration: vec![NarrationLine {
            timestamp: "00:00".to_owned(),
            title: "Hello".to_owned(),
            narration: "We begin.".to_owned(),
        }],
    };
    assert!(timeline_section(&store).ends_with(
        "1. [00:00] Opening (duration 00:20)\n   Leaves part.\n   Focus: Light\n\n"
    ));
    assert!(facts_section(&store).ends_with("### Tails\nSome tails grip.\n> Balance matters.\n\n"));
    assert!(narration_section(&store).ends_with("[00:00] Hello\n    We begin.\n\n"));
    assert_eq!(
        notes_section(&store),
        "## Production Blueprint\n\nThe creative guardrails that keep Kiko's adventure cohesive from storyboard to final render.\n\n"
    );
}
