//! Scroll-triggered fade-in of page sections.
//!
//! The host measures section and viewport rectangles; this module decides
//! which sections have entered the viewport. A revealed section stays
//! revealed for the rest of the session.

use std::collections::HashSet;

/// CSS injected alongside the page styles. Sections start hidden and fade in
/// once they receive [`VISIBLE_CLASS`].
pub const FADE_IN_CSS: &str = r#"
section { opacity: 0; transform: translateY(15px); transition: opacity 0.6s ease, transform 0.6s ease; }
section.visible { opacity: 1; transform: translateY(0); }
"#;

pub const VISIBLE_CLASS: &str = "visible";

/// Axis-aligned rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, `None` when the two do not touch.
    fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }
}

/// Margins applied to the viewport before testing; negative values shrink it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    fn apply(&self, viewport: &Rect) -> Rect {
        Rect::new(
            viewport.x - self.left,
            viewport.y - self.top,
            viewport.width + self.left + self.right,
            viewport.height + self.top + self.bottom,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityPolicy {
    /// Fraction of the section that must be inside the viewport
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin {
                bottom: -50.0,
                ..RootMargin::default()
            },
        }
    }
}

impl VisibilityPolicy {
    /// Fraction of `target` inside the margin-adjusted viewport, or `None`
    /// when they do not intersect at all.
    pub fn intersection_ratio(&self, target: &Rect, viewport: &Rect) -> Option<f64> {
        let root = self.root_margin.apply(viewport);
        let overlap = target.intersection(&root)?;
        let area = target.area();
        if area == 0.0 {
            return Some(1.0);
        }
        Some(overlap.area() / area)
    }

    pub fn is_visible(&self, target: &Rect, viewport: &Rect) -> bool {
        self.intersection_ratio(target, viewport)
            .is_some_and(|ratio| ratio >= self.threshold)
    }
}

/// Remembers which sections have been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    policy: VisibilityPolicy,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self {
            policy,
            revealed: HashSet::new(),
        }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.revealed.contains(section_id)
    }

    /// Feed a fresh measurement. Returns `true` when this observation
    /// revealed the section for the first time.
    pub fn observe(&mut self, section_id: &str, target: &Rect, viewport: &Rect) -> bool {
        if self.revealed.contains(section_id) || !self.policy.is_visible(target, viewport) {
            return false;
        }
        tracing::trace!(section = section_id, "Section revealed");
        self.revealed.insert(section_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_fully_inside_is_visible() {
        let policy = VisibilityPolicy::default();
        let section = Rect::new(0.0, 100.0, 800.0, 200.0);
        assert_eq!(policy.intersection_ratio(&section, &viewport()), Some(1.0));
    }

    #[test]
    fn test_below_viewport_not_intersecting() {
        let policy = VisibilityPolicy::default();
        let section = Rect::new(0.0, 700.0, 800.0, 200.0);
        assert_eq!(policy.intersection_ratio(&section, &viewport()), None);
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        let policy = VisibilityPolicy::default();
        // 40px of a 200px section peek in, but the bottom 50px do not count
        let section = Rect::new(0.0, 560.0, 800.0, 200.0);
        assert!(!policy.is_visible(&section, &viewport()));

        // 80px inside the shrunk viewport is 40% of the section
        let section = Rect::new(0.0, 470.0, 800.0, 200.0);
        let ratio = policy.intersection_ratio(&section, &viewport()).unwrap();
        assert!((ratio - 0.4).abs() < 1e-9);
        assert!(policy.is_visible(&section, &viewport()));
    }

    #[test]
    fn test_threshold_boundary() {
        let policy = VisibilityPolicy::default();
        // 20px of 200px inside the shrunk viewport = exactly 10%
        let section = Rect::new(0.0, 530.0, 800.0, 200.0);
        assert!(policy.is_visible(&section, &viewport()));
        let section = Rect::new(0.0, 531.0, 800.0, 200.0);
        assert!(!policy.is_visible(&section, &viewport()));
    }

    #[test]
    fn test_tracker_reveals_once_and_stays() {
        let mut tracker = RevealTracker::default();
        let inside = Rect::new(0.0, 0.0, 800.0, 300.0);
        let outside = Rect::new(0.0, 2000.0, 800.0, 300.0);

        assert!(!tracker.observe("about", &outside, &viewport()));
        assert!(!tracker.is_revealed("about"));

        assert!(tracker.observe("about", &inside, &viewport()));
        assert!(!tracker.observe("about", &inside, &viewport()));

        tracker.observe("about", &outside, &viewport());
        assert!(tracker.is_revealed("about"));
    }

    #[test]
    fn test_taller_viewport_reveals_section() {
        let mut tracker = RevealTracker::default();
        let section = Rect::new(0.0, 700.0, 800.0, 200.0);

        assert!(!tracker.observe("contact", &section, &viewport()));
        let resized = Rect::new(0.0, 0.0, 800.0, 1000.0);
        assert!(tracker.observe("contact", &section, &resized));
    }
}
