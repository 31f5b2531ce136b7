/// Handle for one pending "draw the next frame" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// A cooperative, single-threaded "run this before the next repaint" facility.
///
/// Implementations deliver each request at most once, with a monotonic timestamp in
/// milliseconds. Callers keep at most one request outstanding and cancel it when it must
/// not fire any more.
pub trait FrameScheduler {
    /// Register a callback for the next refresh.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Drop a pending request. Unknown or already-delivered ids are ignored.
    fn cancel_frame(&mut self, id: FrameRequestId);
}

/// Headless scheduler with a fixed refresh interval and a virtual clock.
///
/// Holds a single request slot; [`SimulatedScheduler::fire`] moves the clock forward one
/// refresh and delivers whatever is pending.
#[derive(Clone, Debug)]
pub struct SimulatedScheduler {
    interval_ms: f64,
    now_ms: f64,
    next_id: u64,
    pending: Option<FrameRequestId>,
}

impl SimulatedScheduler {
    /// Scheduler refreshing at `refresh_hz`, clamped to `1..=1000` Hz.
    pub fn new(refresh_hz: f64) -> Self {
        let hz = if refresh_hz.is_finite() {
            refresh_hz.clamp(1.0, 1000.0)
        } else {
            60.0
        };
        Self {
            interval_ms: 1000.0 / hz,
            now_ms: 0.0,
            next_id: 0,
            pending: None,
        }
    }

    /// Refresh interval in milliseconds.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// The request that the next refresh would deliver.
    pub fn pending(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Advance one refresh and hand back the pending request with its timestamp.
    ///
    /// The clock moves even when nothing is pending.
    pub fn fire(&mut self) -> Option<(FrameRequestId, f64)> {
        self.now_ms += self.interval_ms;
        self.pending.take().map(|id| (id, self.now_ms))
    }

    /// Let wall-clock time pass without delivering anything.
    pub fn idle(&mut self, ms: f64) {
        if ms.is_finite() && ms > 0.0 {
            self.now_ms += ms;
        }
    }
}

impl FrameScheduler for SimulatedScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId(self.next_id);
        self.pending = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
