#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

/// Page top offset of a registered section anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionAnchor {
    pub id: &'static str,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub direction: ScrollDirection,
    pub past_threshold: bool,
    pub nav_hidden: bool,
    pub active_section: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    hide_threshold: f64,
    nav_height: f64,
    snapshot: ScrollSnapshot,
}

impl ScrollTracker {
    pub fn new(hide_threshold: f64, nav_height: f64) -> Self {
        Self {
            hide_threshold,
            nav_height,
            snapshot: ScrollSnapshot::default(),
        }
    }

    /// Recomputes direction, navbar visibility and the active section for a
    /// new scroll offset. Meant to be called at most once per throttle tick.
    pub fn update(&mut self, offset: f64, anchors: &[SectionAnchor]) -> ScrollSnapshot {
        let previous = self.snapshot.offset;
        let past_threshold = offset > self.hide_threshold;
        let direction = if offset > previous && past_threshold {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };

        self.snapshot = ScrollSnapshot {
            offset,
            direction,
            past_threshold,
            nav_hidden: direction == ScrollDirection::Down,
            active_section: active_section(anchors, offset, self.nav_height),
        };
        self.snapshot
    }
}

/// Last anchor (in document order) whose top, less the nav height, has been
/// scrolled to.
pub fn active_section(
    anchors: &[SectionAnchor],
    offset: f64,
    nav_height: f64,
) -> Option<&'static str> {
    anchors
        .iter()
        .filter(|a| a.top - nav_height <= offset)
        .last()
        .map(|a| a.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchors() -> Vec<SectionAnchor> {
        vec![
            SectionAnchor { id: "hero", top: 0.0 },
            SectionAnchor { id: "problem", top: 900.0 },
            SectionAnchor { id: "stakeholders", top: 1800.0 },
        ]
    }

    #[test]
    fn down_past_threshold_then_up() {
        let mut tracker = ScrollTracker::new(300.0, 80.0);
        for offset in [350.0, 500.0, 800.0] {
            let snap = tracker.update(offset, &[]);
            assert_eq!(snap.direction, ScrollDirection::Down);
            assert!(snap.nav_hidden);
        }
        for offset in [700.0, 600.0, 400.0] {
            let snap = tracker.update(offset, &[]);
            assert_eq!(snap.direction, ScrollDirection::Up);
            assert!(!snap.nav_hidden);
        }
    }

    #[test]
    fn scrolling_down_below_threshold_keeps_nav_visible() {
        let mut tracker = ScrollTracker::new(300.0, 80.0);
        let snap = tracker.update(120.0, &[]);
        assert_eq!(snap.direction, ScrollDirection::Up);
        assert!(!snap.nav_hidden);
        assert!(!snap.past_threshold);
    }

    #[test]
    fn active_section_accounts_for_nav_height() {
        let anchors = anchors();
        assert_eq!(active_section(&anchors, 0.0, 80.0), Some("hero"));
        assert_eq!(active_section(&anchors, 819.0, 80.0), Some("hero"));
        assert_eq!(active_section(&anchors, 820.0, 80.0), Some("problem"));
        assert_eq!(active_section(&anchors, 5000.0, 80.0), Some("stakeholders"));
    }

    #[test]
    fn no_anchors_means_no_active_section() {
        let mut tracker = ScrollTracker::new(300.0, 80.0);
        assert_eq!(tracker.update(1000.0, &[]).active_section, None);
    }

    #[test]
    fn above_first_anchor_means_no_active_section() {
        let anchors = [SectionAnchor { id: "late", top: 2000.0 }];
        assert_eq!(active_section(&anchors, 100.0, 80.0), None);
    }
}
