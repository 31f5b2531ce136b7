use crate::{
    content::{model::SceneBeat, timeline::format_timestamp},
    foundation::math::clamp_unit,
    playback::beats::active_beat_index,
};

/// Transport state of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// Progress advances on every frame callback.
    Playing,
    /// Progress only moves through `seek`/`replay`.
    Paused,
}

/// What a frame callback did to progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was paused; nothing changed.
    Idle,
    /// Progress advanced (possibly by zero) and playback continues.
    Advanced,
    /// Progress reached `1.0`; the engine is now paused.
    Finished,
}

/// Scrubber range reported by the seek control.
pub const SLIDER_MAX: u32 = 1000;

/// Progress/time state machine.
///
/// Progress is a normalized position in `[0, 1]` over a fixed total duration. Advancing is
/// driven by wall-clock deltas, never by frame counts, so the time to reach the end does not
/// depend on the refresh rate.
#[derive(Clone, Debug)]
pub struct PlaybackEngine {
    total_duration_ms: u64,
    progress: f64,
    state: PlayState,
    last_frame_ts: Option<f64>,
}

impl PlaybackEngine {
    /// New engine at progress `0`, playing. A zero duration is bumped to one millisecond.
    pub fn new(total_duration_ms: u64) -> Self {
        Self {
            total_duration_ms: total_duration_ms.max(1),
            progress: 0.0,
            state: PlayState::Playing,
            last_frame_ts: None,
        }
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current transport state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Shorthand for `state() == PlayState::Playing`.
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Total story duration in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration_ms
    }

    /// Milliseconds elapsed at the current progress.
    pub fn elapsed_ms(&self) -> f64 {
        self.progress * self.total_duration_ms as f64
    }

    /// Flip between playing and paused.
    ///
    /// Entering `Playing` drops the delta reference so time spent paused is never counted.
    pub fn toggle(&mut self) -> PlayState {
        self.state = match self.state {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused => {
                self.last_frame_ts = None;
                PlayState::Playing
            }
        };
        tracing::debug!(state = ?self.state, progress = self.progress, "toggle");
        self.state
    }

    /// Jump to `value`, clamped into `[0, 1]`. Play state is untouched.
    pub fn seek(&mut self, value: f64) {
        self.progress = clamp_unit(value);
        tracing::debug!(progress = self.progress, "seek");
    }

    /// Jump using the integer scrubber scale `0..=SLIDER_MAX`.
    pub fn seek_slider(&mut self, value: u32) {
        self.seek(f64::from(value.min(SLIDER_MAX)) / f64::from(SLIDER_MAX));
    }

    /// Rewind to the start and play.
    pub fn replay(&mut self) {
        self.progress = 0.0;
        self.state = PlayState::Playing;
        self.last_frame_ts = None;
        tracing::debug!("replay");
    }

    /// Handle a frame callback carrying a monotonic timestamp in milliseconds.
    ///
    /// The first callback of a run only records its timestamp as the baseline.
    pub fn tick(&mut self, timestamp_ms: f64) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }
        let delta = match self.last_frame_ts {
            Some(last) if timestamp_ms.is_finite() => (timestamp_ms - last).max(0.0),
            _ => 0.0,
        };
        if timestamp_ms.is_finite() {
            self.last_frame_ts = Some(timestamp_ms);
        }
        self.advance(delta)
    }

    /// Advance by `delta_ms` of wall-clock time, clamping at the end.
    pub fn advance(&mut self, delta_ms: f64) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }
        let delta_ms = if delta_ms.is_finite() {
            delta_ms.max(0.0)
        } else {
            0.0
        };
        let increment = delta_ms / self.total_duration_ms as f64;
        self.progress = (self.progress + increment).min(1.0);
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.state = PlayState::Paused;
            self.last_frame_ts = None;
            tracing::debug!("playback finished");
            return TickOutcome::Finished;
        }
        TickOutcome::Advanced
    }

    /// `MM:SS` label of the elapsed time.
    pub fn elapsed_label(&self) -> String {
        format_timestamp(self.elapsed_ms())
    }

    /// `MM:SS` label of the total duration.
    pub fn total_label(&self) -> String {
        format_timestamp(self.total_duration_ms as f64)
    }

    /// Index of the beat active at the current progress.
    pub fn active_beat(&self, beats: &[SceneBeat]) -> usize {
        active_beat_index(self.progress, beats, self.total_duration_ms)
    }

    /// Snapshot of everything the transport controls and overlay display.
    pub fn controls(&self, beats: &[SceneBeat]) -> ControlsView {
        let toggle_label = if self.is_playing() {
            "Pause"
        } else if self.progress >= 1.0 {
            "Resume"
        } else {
            "Play"
        };
        ControlsView {
            toggle_label,
            slider_value: (self.progress * f64::from(SLIDER_MAX)).round() as u32,
            elapsed_label: self.elapsed_label(),
            total_label: self.total_label(),
            active_beat: self.active_beat(beats),
        }
    }
}

/// Derived display state for the transport bar and the caption overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlsView {
    /// Label of the play/pause button.
    pub toggle_label: &'static str,
    /// Scrubber position, `0..=SLIDER_MAX`.
    pub slider_value: u32,
    /// Elapsed `MM:SS`.
    pub elapsed_label: String,
    /// Total `MM:SS`.
    pub total_label: String,
    /// Index of the beat shown in the overlay.
    pub active_beat: usize,
}

impl ControlsView {
    /// `"MM:SS / MM:SS"`.
    pub fn timestamp_label(&self) -> String {
        format!("{} / {}", self.elapsed_label, self.total_label)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/engine.rs"]
mod tests;
