//! The draggable moon on the landing page.
//!
//! Dragging it far enough, or clicking it three times, shows a hidden
//! message. A press and release that barely moves the pointer counts as a
//! click; a release after a real drag does not. After a release the moon drifts home once the settle timer
//! fires; a new press in the meantime cancels that return.

/// Maximum offset from the resting position, per axis, in pixels
pub const MOON_BOUND: f64 = 50.0;
/// Offset beyond which the surprise appears
pub const SURPRISE_DISTANCE: f64 = 30.0;
/// Clicks needed to show the surprise
pub const SURPRISE_CLICKS: u32 = 3;
/// Pointer travel, per axis, still treated as a click rather than a drag
pub const CLICK_SLOP: f64 = 3.0;

/// Ticket for a pending return-to-rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoonState {
    x: f64,
    y: f64,
    dragging: bool,
    anchor: (f64, f64),
    pressed_at: (f64, f64),
    moved: bool,
    clicks: u32,
    surprise: bool,
    settle_generation: u64,
}

impl MoonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn is_surprise_shown(&self) -> bool {
        self.surprise
    }

    /// Hint is shown after a click until the surprise appears
    pub fn show_hint(&self) -> bool {
        self.clicks > 0 && !self.surprise
    }

    /// CSS transform for the current offset
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }

    /// Pointer pressed on the moon at client coordinates
    pub fn press(&mut self, pointer_x: f64, pointer_y: f64) {
        self.dragging = true;
        self.anchor = (pointer_x - self.x, pointer_y - self.y);
        self.pressed_at = (pointer_x, pointer_y);
        self.moved = false;
        self.settle_generation += 1;
    }

    /// Pointer moved anywhere in the document. Ignored unless dragging.
    pub fn drag(&mut self, pointer_x: f64, pointer_y: f64) {
        if !self.dragging {
            return;
        }
        if (pointer_x - self.pressed_at.0).abs() > CLICK_SLOP
            || (pointer_y - self.pressed_at.1).abs() > CLICK_SLOP
        {
            self.moved = true;
        }
        self.x = (pointer_x - self.anchor.0).clamp(-MOON_BOUND, MOON_BOUND);
        self.y = (pointer_y - self.anchor.1).clamp(-MOON_BOUND, MOON_BOUND);

        if !self.surprise && (self.x.abs() > SURPRISE_DISTANCE || self.y.abs() > SURPRISE_DISTANCE)
        {
            tracing::info!("moon dragged far enough, showing surprise");
            self.surprise = true;
        }
    }

    /// Pointer released. Counts a click unless the pointer travelled past
    /// [`CLICK_SLOP`] since the press. Returns a ticket to pass to
    /// [`settle`](Self::settle) once the settle delay has elapsed.
    pub fn release(&mut self) -> Option<SettleTicket> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        if !self.moved {
            self.click();
        }
        Some(SettleTicket(self.settle_generation))
    }

    /// Return the moon to rest unless it was grabbed again since `ticket`
    pub fn settle(&mut self, ticket: SettleTicket) {
        if ticket.0 == self.settle_generation && !self.dragging {
            self.x = 0.0;
            self.y = 0.0;
        }
    }

    pub fn click(&mut self) {
        self.clicks += 1;
        if self.clicks >= SURPRISE_CLICKS {
            self.surprise = true;
        }
    }

    pub fn dismiss_surprise(&mut self) {
        self.surprise = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_is_clamped() {
        let mut moon = MoonState::new();
        moon.press(100.0, 100.0);
        moon.drag(400.0, 10.0);
        assert_eq!(moon.position(), (MOON_BOUND, -MOON_BOUND));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut moon = MoonState::new();
        moon.drag(40.0, 40.0);
        assert_eq!(moon.position(), (0.0, 0.0));
    }

    #[test]
    fn test_far_drag_shows_surprise() {
        let mut moon = MoonState::new();
        moon.press(0.0, 0.0);
        moon.drag(20.0, 20.0);
        assert!(!moon.is_surprise_shown());
        moon.drag(31.0, 0.0);
        assert!(moon.is_surprise_shown());
    }

    #[test]
    fn test_third_click_shows_surprise() {
        let mut moon = MoonState::new();
        moon.click();
        assert!(moon.show_hint());
        moon.click();
        assert!(!moon.is_surprise_shown());
        moon.click();
        assert!(moon.is_surprise_shown());
        assert!(!moon.show_hint());

        moon.dismiss_surprise();
        assert!(!moon.is_surprise_shown());
    }

    #[test]
    fn test_settle_returns_home() {
        let mut moon = MoonState::new();
        moon.press(0.0, 0.0);
        moon.drag(10.0, -5.0);
        let ticket = moon.release().unwrap();
        assert_eq!(moon.position(), (10.0, -5.0));

        moon.settle(ticket);
        assert_eq!(moon.position(), (0.0, 0.0));
        assert_eq!(moon.transform(), "translate(0px, 0px)");
    }

    #[test]
    fn test_regrab_cancels_pending_settle() {
        let mut moon = MoonState::new();
        moon.press(0.0, 0.0);
        moon.drag(10.0, 10.0);
        let stale = moon.release().unwrap();

        moon.press(10.0, 10.0);
        moon.drag(20.0, 20.0);
        moon.settle(stale);
        assert_eq!(moon.position(), (20.0, 20.0));
    }

    #[test]
    fn test_release_without_drag() {
        let mut moon = MoonState::new();
        assert!(moon.release().is_none());
        assert_eq!(moon.clicks(), 0);
    }

    #[test]
    fn test_still_release_counts_as_click() {
        let mut moon = MoonState::new();
        moon.press(200.0, 150.0);
        moon.drag(201.0, 152.0);
        moon.release();
        assert_eq!(moon.clicks(), 1);
        assert!(moon.show_hint());
    }

    #[test]
    fn test_release_after_drag_is_not_a_click() {
        let mut moon = MoonState::new();
        for _ in 0..SURPRISE_CLICKS {
            moon.press(0.0, 0.0);
            moon.drag(12.0, 0.0);
            moon.drag(0.0, 0.0);
            moon.release();
        }
        assert_eq!(moon.clicks(), 0);
        assert!(!moon.is_surprise_shown());
    }

    #[test]
    fn test_three_still_releases_show_surprise() {
        let mut moon = MoonState::new();
        for _ in 0..SURPRISE_CLICKS {
            moon.press(50.0, 50.0);
            moon.release();
        }
        assert!(moon.is_surprise_shown());
    }
}
