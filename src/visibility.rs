use std::time::{Duration, Instant};

/// How long the transport controls stay up with no activity while the
/// countdown is running.
pub const IDLE_HIDE_AFTER: Duration = Duration::from_secs(3);

/// Auto-hide policy for the transport controls.
///
/// Pure over injected instants so the idle window is testable without
/// sleeping. At most one hide deadline is armed at a time; every
/// qualifying event cancels and re-arms it.
#[derive(Debug)]
pub struct ControlVisibility {
    visible: bool,
    hide_at: Option<Instant>,
}

impl ControlVisibility {
    pub fn new() -> Self {
        Self {
            visible: true,
            hide_at: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Pointer movement, a key press, or a transport operation: show the
    /// controls and restart the idle clock. The clock is only armed while
    /// the countdown runs; paused sessions never auto-hide.
    pub fn note_activity(&mut self, now: Instant, is_running: bool) {
        self.visible = true;
        self.hide_at = if is_running {
            Some(now + IDLE_HIDE_AFTER)
        } else {
            None
        };
    }

    /// Advance the idle clock. Hides once the armed deadline passes while
    /// still running; pausing makes the controls reappear immediately.
    pub fn poll(&mut self, now: Instant, is_running: bool) {
        if !is_running {
            self.visible = true;
            self.hide_at = None;
            return;
        }
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.visible = false;
                self.hide_at = None;
            }
        }
    }
}

impl Default for ControlVisibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_with_no_deadline() {
        let vis = ControlVisibility::new();
        assert!(vis.visible());
    }

    #[test]
    fn hides_after_idle_window_while_running() {
        let t0 = Instant::now();
        let mut vis = ControlVisibility::new();
        vis.note_activity(t0, true);

        vis.poll(t0 + Duration::from_secs(2), true);
        assert!(vis.visible(), "window not elapsed yet");

        vis.poll(t0 + Duration::from_secs(3), true);
        assert!(!vis.visible(), "idle window elapsed");
    }

    #[test]
    fn activity_restarts_the_idle_clock() {
        let t0 = Instant::now();
        let mut vis = ControlVisibility::new();
        vis.note_activity(t0, true);
        vis.poll(t0 + Duration::from_secs(4), true);
        assert!(!vis.visible());

        // A single key press brings the controls back and re-arms.
        let t1 = t0 + Duration::from_secs(4);
        vis.note_activity(t1, true);
        assert!(vis.visible());
        vis.poll(t1 + Duration::from_secs(2), true);
        assert!(vis.visible());
        vis.poll(t1 + Duration::from_secs(3), true);
        assert!(!vis.visible());
    }

    #[test]
    fn never_hides_while_paused() {
        let t0 = Instant::now();
        let mut vis = ControlVisibility::new();
        vis.note_activity(t0, false);
        vis.poll(t0 + Duration::from_secs(60), false);
        assert!(vis.visible());
    }

    #[test]
    fn pausing_cancels_a_pending_hide() {
        let t0 = Instant::now();
        let mut vis = ControlVisibility::new();
        vis.note_activity(t0, true);

        // Run state flips to paused before the deadline; the stale deadline
        // must not fire.
        vis.poll(t0 + Duration::from_secs(10), false);
        assert!(vis.visible());
        vis.poll(t0 + Duration::from_secs(20), true);
        assert!(vis.visible(), "deadline was cancelled by the pause");
    }

    #[test]
    fn only_the_latest_deadline_counts() {
        let t0 = Instant::now();
        let mut vis = ControlVisibility::new();
        vis.note_activity(t0, true);
        vis.note_activity(t0 + Duration::from_secs(2), true);

        // The first deadline (t0+3s) is gone; only t0+5s applies.
        vis.poll(t0 + Duration::from_secs(4), true);
        assert!(vis.visible());
        vis.poll(t0 + Duration::from_secs(5), true);
        assert!(!vis.visible());
    }
}
