use std::time::{Duration, Instant};

/// Coalesces rapid-fire board changes into one projection pass.
///
/// Every mutation notes a change; [`poll`](Self::poll) reports readiness only
/// once a quiescence window has passed with no further changes. A piece
/// dragged across several cells therefore costs a single full-grid scan once
/// the input settles, instead of one per step.
///
/// The scheduler only drives the *routine* recomputation; gates inside the
/// game settle the projection synchronously on their own, so correctness
/// never depends on this timer.
#[derive(Debug)]
pub struct ProjectionScheduler {
    quiescence: Duration,
    last_change: Option<Instant>,
}

impl Default for ProjectionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionScheduler {
    /// Quiescence window used by [`new`](Self::new).
    pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(40);

    #[must_use]
    pub fn new() -> Self {
        Self::with_quiescence(Self::DEFAULT_QUIESCENCE)
    }

    #[must_use]
    pub fn with_quiescence(quiescence: Duration) -> Self {
        Self {
            quiescence,
            last_change: None,
        }
    }

    /// Records a board change at the given time, restarting the window.
    pub fn note_change(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// Returns `true` once per settled change burst.
    ///
    /// Readiness requires a pending change whose quiescence window has fully
    /// elapsed; polling consumes the pending state.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(last) if now.duration_since(last) >= self.quiescence => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending change without reporting readiness.
    ///
    /// Used when the caller has already settled the projection by other
    /// means.
    pub fn clear(&mut self) {
        self.last_change = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(40);

    #[test]
    fn poll_fires_only_after_quiescence() {
        let mut scheduler = ProjectionScheduler::with_quiescence(WINDOW);
        let start = Instant::now();

        scheduler.note_change(start);
        assert!(scheduler.is_pending());
        assert!(!scheduler.poll(start));
        assert!(!scheduler.poll(start + Duration::from_millis(10)));
        assert!(scheduler.poll(start + WINDOW));
    }

    #[test]
    fn poll_fires_once_per_burst() {
        let mut scheduler = ProjectionScheduler::with_quiescence(WINDOW);
        let start = Instant::now();

        scheduler.note_change(start);
        assert!(scheduler.poll(start + WINDOW));
        assert!(!scheduler.is_pending());
        assert!(!scheduler.poll(start + WINDOW * 2));
    }

    #[test]
    fn new_change_restarts_the_window() {
        let mut scheduler = ProjectionScheduler::with_quiescence(WINDOW);
        let start = Instant::now();

        scheduler.note_change(start);
        scheduler.note_change(start + Duration::from_millis(30));
        assert!(!scheduler.poll(start + WINDOW));
        assert!(scheduler.poll(start + Duration::from_millis(70)));
    }

    #[test]
    fn clear_drops_pending_change() {
        let mut scheduler = ProjectionScheduler::with_quiescence(WINDOW);
        let start = Instant::now();

        scheduler.note_change(start);
        scheduler.clear();
        assert!(!scheduler.is_pending());
        assert!(!scheduler.poll(start + WINDOW));
    }
}
