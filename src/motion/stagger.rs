/// Per-item reveal latch. Item `i` becomes visible `base + i * step`
/// milliseconds after the group enters view; nothing ever reverts.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggeredLatch {
    delays: Vec<u32>,
    revealed: Vec<bool>,
}

impl StaggeredLatch {
    pub fn new(count: usize, base_delay_ms: u32, step_ms: u32) -> Self {
        let delays = (0..count as u32)
            .map(|i| base_delay_ms.saturating_add(i.saturating_mul(step_ms)))
            .collect();
        Self {
            delays,
            revealed: vec![false; count],
        }
    }

    /// Same item count with every delay collapsed to zero.
    pub fn immediate(count: usize) -> Self {
        Self::new(count, 0, 0)
    }

    pub fn item_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// `(index, delay_ms)` for every item still hidden, earliest first.
    pub fn schedule(&self) -> Vec<(usize, u32)> {
        let mut pending: Vec<(usize, u32)> = self
            .delays
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.revealed[*i])
            .map(|(i, d)| (i, *d))
            .collect();
        pending.sort_by_key(|(i, d)| (*d, *i));
        pending
    }

    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn delays_grow_by_step_in_index_order() {
        let latch = StaggeredLatch::new(4, 150, 100);
        assert_eq!(latch.schedule(), vec![(0, 150), (1, 250), (2, 350), (3, 450)]);
    }

    #[test]
    fn revealed_items_leave_the_schedule() {
        let mut latch = StaggeredLatch::new(3, 0, 100);
        assert!(latch.reveal(1));
        assert_eq!(latch.schedule(), vec![(0, 0), (2, 200)]);
        assert!(latch.reveal(0));
        assert!(latch.reveal(2));
        assert!(latch.schedule().is_empty());
    }

    #[test]
    fn reveal_is_one_way() {
        let mut latch = StaggeredLatch::new(2, 0, 100);
        assert!(latch.reveal(1));
        assert!(!latch.reveal(1));
        assert!(latch.is_revealed(1));
        assert!(!latch.is_revealed(0));
        assert!(!latch.reveal(5));
        assert!(!latch.is_revealed(5));
    }

    #[test]
    fn immediate_schedules_everything_at_zero() {
        let latch = StaggeredLatch::immediate(3);
        assert_eq!(latch.schedule(), vec![(0, 0), (1, 0), (2, 0)]);
    }
}
