//! Selection state for tab groups, accordions and the auto-rotating carousel.

/// Enter and Space activate a focused control exactly like a click.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Exactly one key is active at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup<K> {
    keys: Vec<K>,
    index: usize,
}

impl<K: Clone + PartialEq> TabGroup<K> {
    /// Starts on the first key. `None` for an empty key list.
    pub fn new(keys: Vec<K>) -> Option<Self> {
        if keys.is_empty() {
            None
        } else {
            Some(Self { keys, index: 0 })
        }
    }

    pub fn active(&self) -> &K {
        &self.keys[self.index]
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active() == key
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Unknown keys leave the selection unchanged.
    pub fn select(&mut self, key: &K) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.keys.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.keys.len();
    }
}

/// Single-open, toggle-closable.
#[derive(Debug, Clone, PartialEq)]
pub struct Accordion<K> {
    open: Option<K>,
}

impl<K: Clone + PartialEq> Default for Accordion<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: Clone + PartialEq> Accordion<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    pub fn select(&mut self, key: K) {
        if self.open.as_ref() == Some(&key) {
            self.open = None;
        } else {
            self.open = Some(key);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Tab group that also advances on a timer. `epoch` bumps on every manual
/// selection so the owner can restart its timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<K> {
    group: TabGroup<K>,
    epoch: u32,
}

impl<K: Clone + PartialEq> Carousel<K> {
    pub fn new(keys: Vec<K>) -> Option<Self> {
        TabGroup::new(keys).map(|group| Self { group, epoch: 0 })
    }

    pub fn active(&self) -> &K {
        self.group.active()
    }

    pub fn keys(&self) -> &[K] {
        self.group.keys()
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn cycle(&mut self) {
        self.group.next();
    }

    pub fn select_index(&mut self, index: usize) {
        if self.group.select_index(index) {
            self.epoch = self.epoch.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_group_defaults_to_first_and_always_has_one() {
        let mut tabs = TabGroup::new(vec!["payers", "providers", "patients"]).unwrap();
        assert_eq!(*tabs.active(), "payers");

        for key in ["providers", "providers", "patients", "payers"] {
            tabs.select(&key);
            assert_eq!(*tabs.active(), key);
        }
    }

    #[test]
    fn tab_group_ignores_unknown_keys() {
        let mut tabs = TabGroup::new(vec![1, 2, 3]).unwrap();
        tabs.select(&2);
        assert!(!tabs.select(&9));
        assert_eq!(*tabs.active(), 2);
    }

    #[test]
    fn empty_tab_group_is_not_constructed() {
        assert!(TabGroup::<u8>::new(vec![]).is_none());
        assert!(Carousel::<u8>::new(vec![]).is_none());
    }

    #[test]
    fn accordion_toggles_and_switches() {
        let mut acc = Accordion::new();
        acc.select(0);
        assert_eq!(acc.open(), Some(&0));
        acc.select(0);
        assert_eq!(acc.open(), None);
        acc.select(1);
        acc.select(2);
        assert_eq!(acc.open(), Some(&2));
        assert!(!acc.is_open(&1));
    }

    #[test]
    fn keyboard_activation_matches_pointer() {
        let mut by_click = Accordion::new();
        let mut by_key = Accordion::new();
        by_click.select("solutions");
        for key in ["Enter", "Tab", "a"] {
            if is_activation_key(key) {
                by_key.select("solutions");
            }
        }
        assert_eq!(by_click, by_key);
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
    }

    #[test]
    fn metrics_carousel_cycles_and_wraps() {
        let mut carousel = Carousel::new(vec!["97%", "85%", "43%"]).unwrap();
        assert_eq!(*carousel.active(), "97%");
        carousel.cycle();
        carousel.cycle();
        assert_eq!(*carousel.active(), "43%");
        carousel.cycle();
        assert_eq!(*carousel.active(), "97%");
    }

    #[test]
    fn manual_selection_bumps_epoch_but_cycle_does_not() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"]).unwrap();
        carousel.cycle();
        assert_eq!(carousel.epoch(), 0);
        carousel.select_index(2);
        assert_eq!(carousel.epoch(), 1);
        assert_eq!(*carousel.active(), "c");
        carousel.select_index(7);
        assert_eq!(carousel.epoch(), 1);
    }
}
