//! The built-in "Monky Odyssey" story: one minute of Kiko's day in the canopy.

use crate::content::model::{ContentStore, FactCard, NarrationLine, ProductionNote, SceneBeat};

/// Total length of the built-in story in milliseconds.
pub const STORY_DURATION_MS: u64 = 60_000;

fn beat(time: u64, label: &str, description: &str, focus: &str) -> SceneBeat {
    SceneBeat {
        time,
        label: label.to_owned(),
        description: description.to_owned(),
        focus: focus.to_owned(),
    }
}

fn fact(title: &str, fact: &str, takeaway: &str) -> FactCard {
    FactCard {
        title: title.to_owned(),
        fact: fact.to_owned(),
        takeaway: takeaway.to_owned(),
    }
}

fn note(heading: &str, bullets: &[&str]) -> ProductionNote {
    ProductionNote {
        heading: heading.to_owned(),
        bullets: bullets.iter().map(|b| (*b).to_owned()).collect(),
    }
}

fn cue(timestamp: &str, title: &str, narration: &str) -> NarrationLine {
    NarrationLine {
        timestamp: timestamp.to_owned(),
        title: title.to_owned(),
        narration: narration.to_owned(),
    }
}

impl ContentStore {
    /// The dataset the page ships with.
    pub fn builtin() -> Self {
        Self {
            duration_ms: STORY_DURATION_MS,
            beats: vec![
                beat(
                    0,
                    "Dawn Over the Canopy",
                    "Violet haze lifts off the treetops as Kiko stretches awake on a mossy branch.",
                    "Atmosphere",
                ),
                beat(
                    8_000,
                    "First Leap",
                    "A testing hop between branches sets the rhythm for the day's journey.",
                    "Movement",
                ),
                beat(
                    18_000,
                    "Vine Surfing",
                    "Kiko rides a chain of swaying vines, tail steering every turn.",
                    "Momentum",
                ),
                beat(
                    30_000,
                    "Golden Fruit",
                    "Sunlight pools around a cluster of ripe figs high in the emergent layer.",
                    "Curiosity",
                ),
                beat(
                    42_000,
                    "Storm Shelter",
                    "The sky darkens and Kiko ducks beneath broad leaves as rain drums overhead.",
                    "Tension",
                ),
                beat(
                    52_000,
                    "Moonlit Rest",
                    "Fireflies trace the branches while Kiko curls up under a pale moon.",
                    "Resolution",
                ),
            ],
            facts: vec![
                fact(
                    "Prehensile Tails",
                    "Many New World monkeys can hang their full body weight from their tails.",
                    "Kiko's tail is animated as a fifth limb that leads every swing.",
                ),
                fact(
                    "Canopy Highways",
                    "Most rainforest life happens 30 metres or more above the forest floor.",
                    "The camera never touches the ground; the whole story lives in the canopy.",
                ),
                fact(
                    "Seed Dispersers",
                    "Fruit-eating primates spread the seeds of hundreds of tree species.",
                    "The fig discovery is a quiet nod to how monkeys replant the forest.",
                ),
                fact(
                    "Storm Instincts",
                    "Primates often go still and seek cover under dense foliage when storms roll in.",
                    "The storm beat slows the pacing rather than speeding it up.",
                ),
            ],
            notes: vec![
                note(
                    "Palette Script",
                    &[
                        "Six colour keyframes move from violet dawn to ink-blue night.",
                        "Glow tones carry the emotional beat; canopy tones stay muted.",
                        "All transitions are linear RGB blends so no frame pops.",
                    ],
                ),
                note(
                    "Motion Language",
                    &[
                        "Primary travel follows a raised-cosine ease: soft start, soft landing.",
                        "Secondary motion (tail, limbs, blinks) oscillates on top of the ease.",
                        "Parallax trees sway slower than the foreground vines.",
                    ],
                ),
                note(
                    "Playback Guardrails",
                    &[
                        "Progress advances on wall-clock time, never on frame count.",
                        "Scrubbing redraws instantly whether the film is playing or paused.",
                        "The film stops on its final frame; replay always starts from dawn.",
                    ],
                ),
            ],
            narration: vec![
                cue(
                    "00:00",
                    "Wake Up",
                    "High above the rainforest floor, the day begins with a yawn.",
                ),
                cue(
                    "00:08",
                    "Testing the Air",
                    "One careful hop, then another. Kiko reads the branches like a map.",
                ),
                cue(
                    "00:18",
                    "Riding the Vines",
                    "Now the canopy becomes a highway, and the tail does the steering.",
                ),
                cue(
                    "00:30",
                    "A Golden Find",
                    "There: figs, warm with sunlight. Breakfast, and a seed for tomorrow's forest.",
                ),
                cue(
                    "00:42",
                    "Weathering the Storm",
                    "Thunder rolls in. Even explorers know when to wait it out.",
                ),
                cue(
                    "00:52",
                    "Night Falls",
                    "Under a pale moon, the canopy hums its lullaby. Until tomorrow, Kiko.",
                ),
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/builtin.rs"]
mod tests;
