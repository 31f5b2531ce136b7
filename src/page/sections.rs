//! Plain-text rendition of the page around the player.
//!
//! Every section is a straight enumeration of the content store; the only derived values
//! are the timeline's timestamp and duration labels.

use crate::content::{model::ContentStore, timeline::timeline_entries};

/// Title shown in the hero.
pub const TITLE: &str = "Monky Odyssey";
/// Badge above the title.
pub const BADGE: &str = "Web-Original Wild Docu-Short";
/// Hero blurb.
pub const TAGLINE: &str = "Meet Kiko, the vine-surfing monky whose day-long adventure is \
compressed into a sixty-second cinematic loop. Watch the stylized video, then dive into the \
timeline, science notes, and director commentary.";

fn heading(title: &str, blurb: &str) -> String {
    format!("## {title}\n\n{blurb}\n\n")
}

/// Hero block.
pub fn hero_section() -> String {
    format!("[{BADGE}]\n# {TITLE}\n\n{TAGLINE}\n\n")
}

/// Storyboard timeline: one entry per beat with its start and length.
pub fn timeline_section(store: &ContentStore) -> String {
    let mut out = heading(
        "Storyboard Timeline",
        "Each beat in the video maps to a sensory pivot. Follow along to see how Kiko's world unfolds.",
    );
    for (i, row) in timeline_entries(store).iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}] {} (duration {})\n   {}\n   Focus: {}\n",
            i + 1,
            row.timestamp,
            row.label,
            row.duration,
            row.description,
            row.focus
        ));
    }
    out.push('\n');
    out
}

/// Fact cards.
pub fn facts_section(store: &ContentStore) -> String {
    let mut out = heading("Field Notes", "Every frame is rooted in real primate science.");
    for card in &store.facts {
        out.push_str(&format!(
            "### {}\n{}\n> {}\n\n",
            card.title, card.fact, card.takeaway
        ));
    }
    out
}

/// Production notes with their bullets.
pub fn notes_section(store: &ContentStore) -> String {
    let mut out = heading(
        "Production Blueprint",
        "The creative guardrails that keep Kiko's adventure cohesive from storyboard to final render.",
    );
    for note in &store.notes {
        out.push_str(&format!("### {}\n", note.heading));
        for bullet in &note.bullets {
            out.push_str(&format!("- {bullet}\n"));
        }
        out.push('\n');
    }
    out
}

/// Narration script.
pub fn narration_section(store: &ContentStore) -> String {
    let mut out = heading(
        "Director's Commentary",
        "Narrate the journey live; each timestamp lines up with the player timeline.",
    );
    for line in &store.narration {
        out.push_str(&format!(
            "[{}] {}\n    {}\n",
            line.timestamp, line.title, line.narration
        ));
    }
    out.push('\n');
    out
}

/// Footer line.
pub fn footer() -> String {
    "Crafted for the web · Monky Odyssey Lab\n".to_owned()
}

/// The whole page in reading order.
pub fn render_page(store: &ContentStore) -> String {
    [
        hero_section(),
        timeline_section(store),
        facts_section(store),
        notes_section(store),
        narration_section(store),
        footer(),
    ]
    .concat()
}

#[cfg(test)]
#[path = "../../tests/unit/page/sections.rs"]
mod tests;
