//! Monky Odyssey: a sixty-second, procedurally drawn rainforest short and its player.
//!
//! There is no media file. Every frame is a pure function of a normalized progress value,
//! built as a list of draw ops and rasterized on the CPU.
//!
//! # Pipeline overview
//!
//! 1. **Content**: an immutable [`ContentStore`] of scene beats, fact cards, production notes
//!    and narration cues.
//! 2. **Playback**: a [`PlaybackEngine`] advances progress from wall-clock deltas delivered
//!    by a [`FrameScheduler`]; [`Player`] binds both to a surface and the transport controls.
//! 3. **Build**: `progress + Viewport -> FramePlan` ([`build_frame`]), driven by
//!    [`palette_at`], [`MonkyPose`] and friends.
//! 4. **Render**: `FramePlan -> FrameRGBA` on a [`CpuSurface`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: plans and pixels depend only on progress and surface size.
//! - **Clamp, don't fail**: transport inputs are clamped; drawing with no surface is a no-op.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod content;
mod foundation;
mod page;
mod playback;
mod render;

pub use config::PlayerConfig;
pub use content::builtin::STORY_DURATION_MS;
pub use content::model::{ContentStore, FactCard, NarrationLine, ProductionNote, SceneBeat};
pub use content::timeline::{
    TimelineEntry, beat_durations, format_timestamp, narration_misalignments, timeline_entries,
};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Rgba8, Vec2, Viewport};
pub use foundation::error::{OdysseyError, OdysseyResult};
pub use foundation::math::{clamp_unit, ease_in_out, lerp};
pub use page::sections::{
    facts_section, footer, hero_section, narration_section, notes_section, render_page,
    timeline_section,
};
pub use playback::beats::active_beat_index;
pub use playback::engine::{ControlsView, PlayState, PlaybackEngine, SLIDER_MAX, TickOutcome};
pub use playback::player::Player;
pub use playback::scheduler::{FrameRequestId, FrameScheduler, SimulatedScheduler};
pub use render::cpu::{CpuSurface, FrameRGBA, render_frame};
pub use render::palette::{PALETTE_STOPS, Palette, palette_at};
pub use render::pose::{
    BLINK_THRESHOLD, MonkyPose, Orb, Oscillators, TREE_COUNT, Tree, VINE_LAYERS, VINE_SEGMENTS,
    trees, vines,
};
pub use render::scene::{DrawOp, FramePlan, Paint, build_frame};
pub use render::surface::{MAX_BACKING_PX, MAX_DEVICE_PIXEL_RATIO, SurfaceSize, SurfaceSizing};
