/// One-shot countdown driven by frame time.
///
/// The owner schedules the next tick only after the current one has run,
/// so a slow tick pushes every later tick back. Overshoot past the
/// deadline is dropped rather than carried into the next delay.
#[derive(Clone, Debug, Default)]
pub struct TickTimer {
    remaining_ms: Option<f32>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline
    pub fn schedule(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms as f32);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Let `elapsed_ms` pass. Returns true exactly once when the deadline
    /// is reached, after which the timer is idle until rescheduled.
    pub fn advance(&mut self, elapsed_ms: f32) -> bool {
        let Some(remaining) = self.remaining_ms.as_mut() else {
            return false;
        };
        *remaining -= elapsed_ms;
        if *remaining <= 0.0 {
            self.remaining_ms = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = TickTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.advance(10_000.0));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let mut timer = TickTimer::new();
        timer.schedule(100);
        assert!(!timer.advance(60.0));
        assert!(timer.advance(40.0));
        assert!(!timer.is_pending());
        assert!(!timer.advance(100.0));
    }

    #[test]
    fn test_overshoot_is_not_carried_over() {
        let mut timer = TickTimer::new();
        timer.schedule(100);
        assert!(timer.advance(250.0));
        timer.schedule(100);
        assert!(!timer.advance(99.0));
        assert!(timer.advance(1.0));
    }

    #[test]
    fn test_cancel_drops_deadline() {
        let mut timer = TickTimer::new();
        timer.schedule(50);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.advance(50.0));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut timer = TickTimer::new();
        timer.schedule(500);
        assert!(!timer.advance(400.0));
        timer.schedule(200);
        assert!(!timer.advance(150.0));
        assert!(timer.advance(50.0));
    }
}
