#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    Run,
    /// Too soon; the caller may schedule a trailing run after `remaining_ms`.
    Defer { remaining_ms: u32 },
}

/// Leading-edge rate limiter keyed on caller-supplied timestamps, with at
/// most one trailing run pending. A leading run supersedes the trailing one.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_run: None,
            trailing: false,
        }
    }

    pub fn poll(&self, now_ms: f64) -> ThrottleDecision {
        match self.last_run {
            None => ThrottleDecision::Run,
            Some(last) => {
                let elapsed = now_ms - last;
                if elapsed >= self.interval_ms {
                    ThrottleDecision::Run
                } else {
                    ThrottleDecision::Defer {
                        remaining_ms: (self.interval_ms - elapsed).ceil().max(0.0) as u32,
                    }
                }
            }
        }
    }

    pub fn mark_run(&mut self, now_ms: f64) {
        self.last_run = Some(now_ms);
    }

    /// Polls and, on `Run`, records the run in one step.
    pub fn try_run(&mut self, now_ms: f64) -> ThrottleDecision {
        let decision = self.poll(now_ms);
        if decision == ThrottleDecision::Run {
            self.mark_run(now_ms);
            self.trailing = false;
        }
        decision
    }

    /// Returns false when a trailing run is already pending.
    pub fn arm_trailing(&mut self) -> bool {
        !std::mem::replace(&mut self.trailing, true)
    }

    /// Consumes the pending trailing run. False if a leading run already
    /// took its place.
    pub fn fire_trailing(&mut self, now_ms: f64) -> bool {
        if !self.trailing {
            return false;
        }
        self.trailing = false;
        self.mark_run(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn burst_within_one_interval_runs_once() {
        let mut throttle = Throttle::new(100);
        let runs = (0..20)
            .map(|i| throttle.try_run(1_000.0 + f64::from(i) * 4.0))
            .filter(|d| *d == ThrottleDecision::Run)
            .count();
        assert_eq!(runs, 1);
    }

    #[test]
    fn defer_reports_time_left() {
        let mut throttle = Throttle::new(100);
        throttle.try_run(0.0);
        assert_eq!(
            throttle.poll(30.0),
            ThrottleDecision::Defer { remaining_ms: 70 }
        );
        assert_eq!(throttle.poll(100.0), ThrottleDecision::Run);
    }

    #[test]
    fn steady_stream_runs_once_per_interval() {
        let mut throttle = Throttle::new(100);
        let runs = (0..100)
            .map(|i| throttle.try_run(f64::from(i) * 10.0))
            .filter(|d| *d == ThrottleDecision::Run)
            .count();
        // 0..990ms at 10ms spacing: runs at 0, 100, ..., 900
        assert_eq!(runs, 10);
    }

    #[test]
    fn only_one_trailing_run_is_pending() {
        let mut throttle = Throttle::new(100);
        throttle.try_run(0.0);
        assert!(throttle.arm_trailing());
        assert!(!throttle.arm_trailing());
        assert!(throttle.fire_trailing(100.0));
        assert!(!throttle.fire_trailing(101.0));
        assert_eq!(
            throttle.poll(150.0),
            ThrottleDecision::Defer { remaining_ms: 50 }
        );
    }

    #[test]
    fn leading_run_cancels_pending_trailing() {
        let mut throttle = Throttle::new(100);
        throttle.try_run(0.0);
        assert_eq!(
            throttle.try_run(30.0),
            ThrottleDecision::Defer { remaining_ms: 70 }
        );
        assert!(throttle.arm_trailing());

        // The deferred timer is late and a fresh event wins the interval.
        assert_eq!(throttle.try_run(120.0), ThrottleDecision::Run);
        assert!(!throttle.fire_trailing(125.0));
        assert_eq!(
            throttle.poll(150.0),
            ThrottleDecision::Defer { remaining_ms: 70 }
        );
        assert!(throttle.arm_trailing());
    }
}
