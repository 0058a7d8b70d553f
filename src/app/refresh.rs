use std::time::{Duration, Instant};

/// Repeating refresh handle owned by a page controller. Nothing fires on its
/// own: the controller polls `due()` each frame and re-arms after acting, so
/// dropping the controller (or calling `cancel`) is a complete teardown.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RefreshTimer {
    every: Duration,
    next_due: Option<Instant>,
}

impl RefreshTimer {
    pub(crate) fn new(every: Duration) -> Self {
        Self {
            every,
            next_due: None,
        }
    }

    /// Schedules the next firing one interval from now.
    pub(crate) fn arm(&mut self) {
        self.next_due = Some(Instant::now() + self.every);
    }

    pub(crate) fn due(&self) -> bool {
        matches!(self.next_due, Some(at) if Instant::now() >= at)
    }

    pub(crate) fn cancel(&mut self) {
        self.next_due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_timer_is_never_due() {
        let timer = RefreshTimer::new(Duration::ZERO);
        assert!(!timer.due());
    }

    #[test]
    fn zero_interval_timer_is_due_once_armed() {
        let mut timer = RefreshTimer::new(Duration::ZERO);
        timer.arm();
        assert!(timer.due());
    }

    #[test]
    fn long_interval_timer_is_not_due_yet() {
        let mut timer = RefreshTimer::new(Duration::from_secs(3600));
        timer.arm();
        assert!(!timer.due());
    }

    #[test]
    fn cancel_disarms() {
        let mut timer = RefreshTimer::new(Duration::ZERO);
        timer.arm();
        timer.cancel();
        assert!(!timer.due());
    }
}
