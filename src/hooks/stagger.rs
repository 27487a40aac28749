use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::use_site_config;
use crate::hooks::motion::use_motion_preference;
use crate::motion::lifecycle::MountGuard;
use crate::motion::reveal::MotionPreference;
use crate::motion::stagger::StaggeredLatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerAction {
    Reveal(usize),
    RevealAll,
}

impl Reducible for StaggeredLatch {
    type Action = StaggerAction;

    fn reduce(self: Rc<Self>, action: StaggerAction) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            StaggerAction::Reveal(index) => next.reveal(index),
            StaggerAction::RevealAll => (0..next.item_count()).fold(false, |acc, i| next.reveal(i) || acc),
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

/// One latch per group of `count` items. Once `visible` turns true each item
/// gets its own timer at `base_delay_ms + index * stagger_step_ms`; under
/// reduced motion everything is revealed at once.
#[hook]
pub fn use_staggered_reveal(
    visible: bool,
    count: usize,
    base_delay_ms: u32,
) -> UseReducerHandle<StaggeredLatch> {
    let config = use_site_config();
    let preference = use_motion_preference();
    let step = config.stagger_step_ms;
    let latch = use_reducer(move || match preference {
        MotionPreference::Reduced => StaggeredLatch::immediate(count),
        MotionPreference::Full => StaggeredLatch::new(count, base_delay_ms, step),
    });

    {
        let dispatcher = latch.dispatcher();
        let schedule = latch.schedule();
        use_effect_with_deps(
            move |visible| {
                let guard = MountGuard::new();
                let mut timers = Vec::new();
                if *visible && !schedule.is_empty() {
                    if schedule.iter().all(|(_, delay)| *delay == 0) {
                        dispatcher.dispatch(StaggerAction::RevealAll);
                    } else {
                        for (index, delay) in schedule {
                            let token = guard.token();
                            let dispatcher = dispatcher.clone();
                            timers.push(Timeout::new(delay, move || {
                                token.run(|| dispatcher.dispatch(StaggerAction::Reveal(index)));
                            }));
                        }
                    }
                }
                move || {
                    guard.teardown();
                    if !timers.is_empty() {
                        debug!("Cancelling {} stagger timers", timers.len());
                    }
                    drop(timers);
                }
            },
            visible,
        );
    }

    latch
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveal_all_marks_every_item() {
        let latch = Rc::new(StaggeredLatch::new(3, 100, 100));
        let latch = latch.reduce(StaggerAction::RevealAll);
        assert!((0..3).all(|i| latch.is_revealed(i)));
        assert!(latch.schedule().is_empty());
    }

    #[test]
    fn timers_fired_in_schedule_order_reveal_by_index() {
        let mut latch = Rc::new(StaggeredLatch::new(4, 150, 100));
        let schedule = latch.schedule();
        assert_eq!(schedule, vec![(0, 150), (1, 250), (2, 350), (3, 450)]);

        let mut seen = Vec::new();
        for (index, _) in schedule {
            latch = latch.reduce(StaggerAction::Reveal(index));
            let revealed: Vec<usize> = (0..4).filter(|i| latch.is_revealed(*i)).collect();
            seen.push(revealed);
        }
        assert_eq!(
            seen,
            vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 1, 2, 3]]
        );
        assert!(latch.schedule().is_empty());
    }

    #[test]
    fn repeated_reveal_keeps_the_same_state() {
        let latch = Rc::new(StaggeredLatch::new(2, 0, 100)).reduce(StaggerAction::Reveal(1));
        let again = latch.clone().reduce(StaggerAction::Reveal(1));
        assert!(Rc::ptr_eq(&latch, &again));
        assert!(!again.is_revealed(0));
    }
}
