#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityConfig {
    /// Fraction of the target that must be in view, 0..=1.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -100px 0px"`.
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

impl VisibilityConfig {
    pub fn once(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_root_margin(mut self, margin: &str) -> Self {
        self.root_margin = margin.to_string();
        self
    }

    /// Keeps reporting both directions for as long as it is observed.
    pub fn continuous(threshold: f64) -> Self {
        Self {
            trigger_once: false,
            ..Self::once(threshold)
        }
    }
}

/// Turns raw intersection entries into a visible/hidden signal.
///
/// With `trigger_once` the tracker latches on the first crossing and reports
/// [`VisibilityTracker::is_detached`] so the caller can release the native
/// observer; later entries are ignored.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    config: VisibilityConfig,
    visible: bool,
    detached: bool,
}

impl VisibilityTracker {
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            visible: false,
            detached: false,
        }
    }

    /// Starts hidden where intersections can be observed, otherwise visible
    /// and detached.
    pub fn for_environment(config: VisibilityConfig, observer_supported: bool) -> Self {
        let mut tracker = Self::new(config);
        if !observer_supported {
            tracker.fail_open();
        }
        tracker
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    fn crosses(&self, intersecting: bool, ratio: f64) -> bool {
        intersecting && ratio >= self.config.threshold
    }

    /// Feeds one entry. Returns the new visibility when it changed.
    pub fn on_entry(&mut self, intersecting: bool, ratio: f64) -> Option<bool> {
        if self.detached {
            return None;
        }
        let now_visible = self.crosses(intersecting, ratio);
        if now_visible == self.visible {
            return None;
        }
        if self.config.trigger_once && !now_visible {
            // Latched trackers never report hidden; they were never visible yet.
            return None;
        }
        self.visible = now_visible;
        if self.visible && self.config.trigger_once {
            self.detached = true;
        }
        Some(self.visible)
    }

    /// Used when the environment cannot observe intersections at all.
    pub fn fail_open(&mut self) {
        self.visible = true;
        self.detached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn latches_on_first_crossing() {
        let mut tracker = VisibilityTracker::new(VisibilityConfig::once(0.15));
        assert!(!tracker.is_visible());
        assert_eq!(tracker.on_entry(true, 0.05), None);
        assert_eq!(tracker.on_entry(true, 0.2), Some(true));
        assert!(tracker.is_detached());

        assert_eq!(tracker.on_entry(false, 0.0), None);
        assert!(tracker.is_visible());
    }

    #[test]
    fn continuous_reports_both_directions() {
        let mut tracker = VisibilityTracker::new(VisibilityConfig::continuous(0.5));
        assert_eq!(tracker.on_entry(true, 0.6), Some(true));
        assert_eq!(tracker.on_entry(true, 0.7), None);
        assert_eq!(tracker.on_entry(true, 0.3), Some(false));
        assert_eq!(tracker.on_entry(false, 0.0), None);
        assert_eq!(tracker.on_entry(true, 0.9), Some(true));
        assert!(!tracker.is_detached());
    }

    #[test]
    fn zero_threshold_fires_on_any_intersection() {
        let mut tracker = VisibilityTracker::new(VisibilityConfig::once(0.0));
        assert_eq!(tracker.on_entry(false, 0.0), None);
        assert_eq!(tracker.on_entry(true, 0.0), Some(true));
    }

    #[test]
    fn unsupported_environment_starts_visible() {
        let tracker = VisibilityTracker::for_environment(VisibilityConfig::once(0.15), false);
        assert!(tracker.is_visible());
        assert!(tracker.is_detached());
        assert_eq!(tracker.config().threshold, 0.15);

        let tracker = VisibilityTracker::for_environment(VisibilityConfig::once(0.15), true);
        assert!(!tracker.is_visible());
        assert!(!tracker.is_detached());
    }

    #[test]
    fn fail_open_is_visible_and_detached() {
        let mut tracker = VisibilityTracker::new(VisibilityConfig::default());
        tracker.fail_open();
        assert!(tracker.is_visible());
        assert_eq!(tracker.on_entry(true, 1.0), None);
    }
}
