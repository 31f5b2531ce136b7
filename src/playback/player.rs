use crate::{
    config::PlayerConfig,
    content::model::{ContentStore, SceneBeat},
    foundation::core::Rgba8,
    playback::{
        engine::{ControlsView, PlayState, PlaybackEngine, TickOutcome},
        scheduler::{FrameRequestId, FrameScheduler},
    },
    render::{
        cpu::CpuSurface,
        scene::build_frame,
        surface::SurfaceSizing,
    },
};

/// A mounted view: engine, frame scheduler and (once mounted) a raster surface.
///
/// Keeps at most one frame request outstanding, and only while playing. User actions apply
/// synchronously and redraw immediately; drawing before `mount` is a no-op.
pub struct Player<S: FrameScheduler> {
    engine: PlaybackEngine,
    beats: Vec<SceneBeat>,
    scheduler: S,
    pending: Option<FrameRequestId>,
    surface: Option<CpuSurface>,
    sizing: SurfaceSizing,
    clear: Rgba8,
    active_beat: usize,
    disposed: bool,
}

impl<S: FrameScheduler> Player<S> {
    /// Create a playing view at progress `0` and request its first frame.
    ///
    /// A duration override shorter than the beats is raised to cover them.
    pub fn new(store: &ContentStore, config: &PlayerConfig, scheduler: S) -> Self {
        if let Err(err) = config.validate_for(store) {
            tracing::warn!(%err, "player config does not fit the content; clamping");
        }
        let mut player = Self {
            engine: PlaybackEngine::new(config.duration_for(store)),
            beats: store.beats.clone(),
            scheduler,
            pending: None,
            surface: None,
            sizing: config.sizing(),
            clear: config.clear(),
            active_beat: 0,
            disposed: false,
        };
        player.schedule();
        player
    }

    /// Attach a surface sized for the container and draw the current frame.
    pub fn mount(&mut self, container_width: f64, device_pixel_ratio: f64) {
        if self.disposed {
            return;
        }
        let size = self.sizing.resolve(container_width, device_pixel_ratio);
        tracing::debug!(
            width = size.backing_width,
            height = size.backing_height,
            "mount surface"
        );
        self.surface = Some(CpuSurface::new(size, self.clear));
        self.redraw();
    }

    /// Follow a container resize. Unmounted players ignore it.
    pub fn resize(&mut self, container_width: f64, device_pixel_ratio: f64) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let size = self.sizing.resolve(container_width, device_pixel_ratio);
        if surface.size() != size {
            *surface = CpuSurface::new(size, self.clear);
        }
        self.redraw();
    }

    /// Deliver a scheduled frame. Stale or cancelled ids are ignored.
    pub fn on_frame(&mut self, id: FrameRequestId, timestamp_ms: f64) -> TickOutcome {
        if self.disposed || self.pending != Some(id) {
            return TickOutcome::Idle;
        }
        self.pending = None;
        let outcome = self.engine.tick(timestamp_ms);
        if outcome != TickOutcome::Idle {
            self.redraw();
        }
        if self.engine.is_playing() {
            self.schedule();
        }
        outcome
    }

    /// Play/pause. Pausing cancels the pending frame.
    pub fn toggle(&mut self) -> PlayState {
        if self.disposed {
            return self.engine.state();
        }
        let state = self.engine.toggle();
        match state {
            PlayState::Playing => self.schedule(),
            PlayState::Paused => self.cancel(),
        }
        state
    }

    /// Scrub to `value` (clamped) and redraw.
    pub fn seek(&mut self, value: f64) {
        if self.disposed {
            return;
        }
        self.engine.seek(value);
        self.redraw();
    }

    /// Scrub on the `0..=1000` slider scale and redraw.
    pub fn seek_slider(&mut self, value: u32) {
        if self.disposed {
            return;
        }
        self.engine.seek_slider(value);
        self.redraw();
    }

    /// Restart from the beginning and play.
    pub fn replay(&mut self) {
        if self.disposed {
            return;
        }
        self.engine.replay();
        self.redraw();
        self.schedule();
    }

    /// Tear the view down: cancel the pending frame and drop the surface.
    ///
    /// Idempotent; also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel();
        self.surface = None;
        self.disposed = true;
        tracing::debug!("player disposed");
    }

    /// The underlying engine.
    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    /// The mounted surface, if any.
    pub fn surface(&self) -> Option<&CpuSurface> {
        self.surface.as_ref()
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler, used to drive it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Id of the outstanding frame request.
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Whether `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Transport and overlay state.
    pub fn controls(&self) -> ControlsView {
        self.engine.controls(&self.beats)
    }

    /// Beat shown in the overlay; `None` only for an empty beat list.
    pub fn active_beat(&self) -> Option<&SceneBeat> {
        self.beats.get(self.engine.active_beat(&self.beats))
    }

    fn schedule(&mut self) {
        if self.pending.is_none() && !self.disposed {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }

    fn redraw(&mut self) {
        let beat = self.engine.active_beat(&self.beats);
        if beat != self.active_beat {
            self.active_beat = beat;
            if let Some(b) = self.beats.get(beat) {
                tracing::debug!(index = beat, label = %b.label, "active beat changed");
            }
        }
        if let Some(surface) = self.surface.as_mut() {
            let plan = build_frame(self.engine.progress(), surface.size().logical);
            surface.draw(&plan);
        }
    }
}

impl<S: FrameScheduler> Drop for Player<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
