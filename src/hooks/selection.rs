use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::motion::lifecycle::MountGuard;
use crate::motion::selection::{Accordion, Carousel, TabGroup};

/// Reducer wrapper so an (unrendered) empty key list needs no special casing
/// in components.
#[derive(Debug, Clone, PartialEq)]
pub struct TabState<K> {
    group: Option<TabGroup<K>>,
}

impl<K: Clone + PartialEq> TabState<K> {
    pub fn active(&self) -> Option<&K> {
        self.group.as_ref().map(TabGroup::active)
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.group.as_ref().is_some_and(|group| group.is_active(key))
    }
}

impl<K: Clone + PartialEq + 'static> Reducible for TabState<K> {
    type Action = K;

    fn reduce(self: Rc<Self>, key: K) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(group) = next.group.as_mut() {
            group.select(&key);
        }
        next.into()
    }
}

#[hook]
pub fn use_tab_group<K>(keys: Vec<K>) -> UseReducerHandle<TabState<K>>
where
    K: Clone + PartialEq + 'static,
{
    use_reducer(move || TabState {
        group: TabGroup::new(keys),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccordionAction<K> {
    Toggle(K),
    Close,
}

impl<K: Clone + PartialEq + 'static> Reducible for Accordion<K> {
    type Action = AccordionAction<K>;

    fn reduce(self: Rc<Self>, action: AccordionAction<K>) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AccordionAction::Toggle(key) => next.select(key),
            AccordionAction::Close => next.close(),
        }
        next.into()
    }
}

#[hook]
pub fn use_accordion<K>() -> UseReducerHandle<Accordion<K>>
where
    K: Clone + PartialEq + 'static,
{
    use_reducer(Accordion::<K>::new)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<K> {
    carousel: Option<Carousel<K>>,
}

impl<K: Clone + PartialEq> CarouselState<K> {
    pub fn active(&self) -> Option<&K> {
        self.carousel.as_ref().map(Carousel::active)
    }

    pub fn epoch(&self) -> u32 {
        self.carousel.as_ref().map(Carousel::epoch).unwrap_or(0)
    }

    pub fn item_count(&self) -> usize {
        self.carousel.as_ref().map(|c| c.keys().len()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Cycle,
    Select(usize),
}

impl<K: Clone + PartialEq + 'static> Reducible for CarouselState<K> {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(carousel) = next.carousel.as_mut() {
            match action {
                CarouselAction::Cycle => carousel.cycle(),
                CarouselAction::Select(index) => carousel.select_index(index),
            }
        }
        next.into()
    }
}

/// Auto-advancing selection. A manual `Select` bumps the epoch, which
/// recreates the interval so the next automatic step is a full period away.
/// The timer only runs while `running` is set.
#[hook]
pub fn use_carousel<K>(keys: Vec<K>, interval_ms: u32, running: bool) -> UseReducerHandle<CarouselState<K>>
where
    K: Clone + PartialEq + 'static,
{
    let state = use_reducer(move || CarouselState {
        carousel: Carousel::new(keys),
    });

    {
        let dispatcher = state.dispatcher();
        let epoch = state.epoch();
        let len = state.item_count();
        use_effect_with_deps(
            move |(_, interval_ms, len, running)| {
                let guard = MountGuard::new();
                let interval = (*running && *len > 1).then(|| {
                    let token = guard.token();
                    Interval::new(*interval_ms, move || {
                        token.run(|| dispatcher.dispatch(CarouselAction::Cycle));
                    })
                });
                move || {
                    guard.teardown();
                    if interval.is_some() {
                        debug!("Carousel timer cancelled");
                    }
                    drop(interval);
                }
            },
            (epoch, interval_ms, len, running),
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_state_reduces_to_selected_key() {
        let state = Rc::new(TabState {
            group: TabGroup::new(vec!["benefits", "challenges"]),
        });
        let state = state.reduce("challenges");
        assert_eq!(state.active(), Some(&"challenges"));
        let state = state.reduce("unknown");
        assert_eq!(state.active(), Some(&"challenges"));
        assert!(state.is_active(&"challenges"));
        assert!(!state.is_active(&"benefits"));
    }

    #[test]
    fn empty_tab_state_has_no_active_key() {
        let state = Rc::new(TabState::<u8> { group: TabGroup::new(vec![]) });
        let state = state.reduce(1);
        assert_eq!(state.active(), None);
        assert!(!state.is_active(&1));
    }

    #[test]
    fn accordion_reducer_toggles() {
        let state = Rc::new(Accordion::new());
        let state = state.reduce(AccordionAction::Toggle(2));
        assert!(state.is_open(&2));
        let state = state.reduce(AccordionAction::Toggle(2));
        assert_eq!(state.open(), None);
        let state = state
            .reduce(AccordionAction::Toggle(1))
            .reduce(AccordionAction::Close);
        assert_eq!(state.open(), None);
    }

    #[test]
    fn carousel_reducer_cycles_and_restarts_on_manual_select() {
        let state = Rc::new(CarouselState {
            carousel: Carousel::new(vec!["97%", "85%", "43%"]),
        });
        let state = state.reduce(CarouselAction::Cycle).reduce(CarouselAction::Cycle);
        assert_eq!(state.active(), Some(&"43%"));
        assert_eq!(state.epoch(), 0);

        let state = state.reduce(CarouselAction::Select(1));
        assert_eq!(state.active(), Some(&"85%"));
        assert_eq!(state.epoch(), 1);
    }
}
