//! Delayed-close state machine for hover-triggered dropdowns.

use std::time::{Duration, Instant};

/// How long a dropdown stays open after the pointer leaves its hover region.
///
/// The delay lets the pointer travel from the trigger to the dropdown panel
/// without the panel vanishing underneath it.
pub const CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Open/closed state for one group node's hover dropdown or flyout.
///
/// The machine has two states, `Closed` and `Open`, with a single pending
/// close deadline at most. Entering the hover region always cancels a pending
/// deadline before opening, so a rapid leave/enter sequence never closes a
/// freshly reopened dropdown. Callers pass `Instant`s in rather than reading
/// the clock here, which keeps the transitions deterministic under test.
#[derive(Debug, Default, Clone)]
pub struct HoverDropdown {
    open: bool,
    close_at: Option<Instant>,
}

impl HoverDropdown {
    /// Creates a dropdown in the `Closed` state with no pending deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dropdown panel is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a close deadline is pending. The owning surface uses this to
    /// decide if it still needs fast ticks.
    pub fn has_pending_close(&self) -> bool {
        self.close_at.is_some()
    }

    /// Pointer entered the hover region (trigger or panel): cancel any
    /// pending close, then open.
    pub fn pointer_entered(&mut self) {
        self.close_at = None;
        self.open = true;
    }

    /// Pointer left the hover region: schedule a close `CLOSE_DELAY` from
    /// `now` instead of closing immediately. No-op while closed.
    pub fn pointer_left(&mut self, now: Instant) {
        if self.open {
            self.close_at = Some(now + CLOSE_DELAY);
        }
    }

    /// Fires the pending close if its deadline has elapsed. Returns whether
    /// the state changed, so the owner knows to re-render.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(deadline) if now >= deadline => {
                self.close_at = None;
                self.open = false;
                true
            }
            _ => false,
        }
    }

    /// A child link was selected: close synchronously, before the navigation
    /// effect is issued.
    pub fn select_child(&mut self) {
        self.close_now();
    }

    /// A pointer activation landed outside the trigger/panel region: close
    /// synchronously. No-op while closed.
    pub fn outside_activation(&mut self) {
        self.close_now();
    }

    /// Teardown: close and cancel any pending deadline. Owners call this when
    /// their surface is dismissed or re-created so no stale deadline can fire
    /// against a gone surface.
    pub fn reset(&mut self) {
        self.close_now();
    }

    fn close_now(&mut self) {
        self.close_at = None;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{CLOSE_DELAY, HoverDropdown};
    use std::time::{Duration, Instant};

    #[test]
    fn enter_opens_immediately() {
        let mut dropdown = HoverDropdown::new();
        assert!(!dropdown.is_open());
        dropdown.pointer_entered();
        assert!(dropdown.is_open());
        assert!(!dropdown.has_pending_close());
    }

    #[test]
    fn leave_closes_only_after_the_delay() {
        let mut dropdown = HoverDropdown::new();
        let t0 = Instant::now();
        dropdown.pointer_entered();
        dropdown.pointer_left(t0);

        // Still open right up to the deadline.
        assert!(!dropdown.tick(t0 + CLOSE_DELAY - Duration::from_millis(1)));
        assert!(dropdown.is_open());

        // Closed at and after the deadline.
        assert!(dropdown.tick(t0 + CLOSE_DELAY));
        assert!(!dropdown.is_open());
        assert!(!dropdown.has_pending_close());
    }

    #[test]
    fn reentry_cancels_the_pending_close() {
        let mut dropdown = HoverDropdown::new();
        let t0 = Instant::now();
        dropdown.pointer_entered();
        dropdown.pointer_left(t0);
        dropdown.pointer_entered();

        // The old deadline must not fire, even long after it elapsed.
        assert!(!dropdown.tick(t0 + CLOSE_DELAY * 10));
        assert!(dropdown.is_open());
    }

    #[test]
    fn leave_while_closed_schedules_nothing() {
        let mut dropdown = HoverDropdown::new();
        dropdown.pointer_left(Instant::now());
        assert!(!dropdown.has_pending_close());
        assert!(!dropdown.is_open());
    }

    #[test]
    fn selecting_a_child_closes_synchronously() {
        let mut dropdown = HoverDropdown::new();
        dropdown.pointer_entered();
        dropdown.select_child();
        // Closed before any navigation effect could be observed by a caller.
        assert!(!dropdown.is_open());
        assert!(!dropdown.has_pending_close());
    }

    #[test]
    fn outside_activation_closes_when_open_and_is_noop_when_closed() {
        let mut dropdown = HoverDropdown::new();
        dropdown.outside_activation();
        assert!(!dropdown.is_open());

        dropdown.pointer_entered();
        dropdown.outside_activation();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn reset_cancels_a_pending_deadline() {
        let mut dropdown = HoverDropdown::new();
        let t0 = Instant::now();
        dropdown.pointer_entered();
        dropdown.pointer_left(t0);
        dropdown.reset();

        // Nothing fires after teardown, however late the tick arrives.
        assert!(!dropdown.tick(t0 + CLOSE_DELAY * 100));
        assert!(!dropdown.is_open());
        assert!(!dropdown.has_pending_close());
    }

    #[test]
    fn at_most_one_pending_deadline_exists() {
        let mut dropdown = HoverDropdown::new();
        let t0 = Instant::now();
        dropdown.pointer_entered();
        dropdown.pointer_left(t0);
        // A second leave re-arms the deadline; the earlier one is replaced.
        dropdown.pointer_left(t0 + Duration::from_millis(100));
        assert!(!dropdown.tick(t0 + CLOSE_DELAY));
        assert!(dropdown.is_open());
        assert!(dropdown.tick(t0 + Duration::from_millis(100) + CLOSE_DELAY));
        assert!(!dropdown.is_open());
    }
}
