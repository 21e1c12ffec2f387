//! Horizontal swipe detection on the modal image.
//!
//! A gesture is one touch sequence: start, any number of moves, end. The first
//! move sample where vertical travel exceeds horizontal travel abandons the
//! gesture for the rest of the sequence, so vertical scrolling never navigates.

use super::input::Command;

/// Minimum horizontal travel, in logical pixels, for a swipe to navigate.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tracks a single active touch per gesture.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Touch start with the first active touch, if any.
    pub fn touch_start(&mut self, first_touch: Option<TouchPoint>) {
        if let Some(point) = first_touch {
            self.start = Some(point);
        }
    }

    /// Touch move with the first active touch, if any.
    pub fn touch_move(&mut self, first_touch: Option<TouchPoint>) {
        let (Some(start), Some(point)) = (self.start, first_touch) else {
            return;
        };
        let dx = point.x - start.x;
        let dy = point.y - start.y;
        if dy.abs() > dx.abs() {
            tracing::trace!(dx, dy, "Swipe abandoned for vertical scroll");
            self.start = None;
        }
    }

    /// Touch end with the first changed touch, if any.
    ///
    /// Returns the navigation the gesture asks for. Tracking always resets.
    /// A missing end point counts as x = 0.
    pub fn touch_end(&mut self, changed_touch: Option<TouchPoint>) -> Option<Command> {
        let start = self.start.take()?;
        let end_x = changed_touch.map(|p| p.x).unwrap_or(0.0);
        let delta_x = end_x - start.x;

        if delta_x.abs() > SWIPE_THRESHOLD_PX {
            if delta_x < 0.0 {
                Some(Command::Next)
            } else {
                Some(Command::Prev)
            }
        } else {
            None
        }
    }

    /// Touch cancelled by the host; drop the gesture.
    pub fn touch_cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f64, f64), moves: &[(f64, f64)], to: (f64, f64)) -> Option<Command> {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Some(TouchPoint::new(from.0, from.1)));
        for &(x, y) in moves {
            tracker.touch_move(Some(TouchPoint::new(x, y)));
        }
        let cmd = tracker.touch_end(Some(TouchPoint::new(to.0, to.1)));
        assert!(!tracker.is_tracking());
        cmd
    }

    #[test]
    fn test_left_swipe_past_threshold_is_next() {
        assert_eq!(swipe((200.0, 100.0), &[(180.0, 101.0)], (159.0, 102.0)), Some(Command::Next));
    }

    #[test]
    fn test_right_swipe_past_threshold_is_prev() {
        assert_eq!(swipe((100.0, 100.0), &[(130.0, 100.0)], (150.0, 100.0)), Some(Command::Prev));
    }

    #[test]
    fn test_below_threshold_no_navigation() {
        assert_eq!(swipe((100.0, 100.0), &[], (139.0, 100.0)), None);
        assert_eq!(swipe((100.0, 100.0), &[], (60.0, 100.0)), None);
    }

    #[test]
    fn test_vertical_sample_abandons_gesture() {
        // Final horizontal travel would qualify, but one sample was vertical
        let cmd = swipe((200.0, 100.0), &[(198.0, 130.0), (100.0, 130.0)], (100.0, 130.0));
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_abandoned_gesture_not_rearmed() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Some(TouchPoint::new(0.0, 0.0)));
        tracker.touch_move(Some(TouchPoint::new(0.0, 20.0)));
        assert!(!tracker.is_tracking());
        tracker.touch_move(Some(TouchPoint::new(-100.0, 20.0)));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.touch_end(Some(TouchPoint::new(-100.0, 20.0))), None);
    }

    #[test]
    fn test_next_gesture_starts_fresh() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Some(TouchPoint::new(0.0, 0.0)));
        tracker.touch_move(Some(TouchPoint::new(0.0, 50.0)));
        assert_eq!(tracker.touch_end(Some(TouchPoint::new(-80.0, 50.0))), None);

        tracker.touch_start(Some(TouchPoint::new(0.0, 0.0)));
        assert_eq!(tracker.touch_end(Some(TouchPoint::new(-80.0, 0.0))), Some(Command::Next));
    }

    #[test]
    fn test_start_without_touch_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(None);
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.touch_end(Some(TouchPoint::new(-100.0, 0.0))), None);
    }

    #[test]
    fn test_missing_end_point_counts_as_origin() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Some(TouchPoint::new(100.0, 0.0)));
        assert_eq!(tracker.touch_end(None), Some(Command::Next));
    }

    #[test]
    fn test_cancel_resets() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Some(TouchPoint::new(100.0, 0.0)));
        tracker.touch_cancel();
        assert_eq!(tracker.touch_end(Some(TouchPoint::new(0.0, 0.0))), None);
    }
}
