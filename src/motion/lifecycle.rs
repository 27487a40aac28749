use std::cell::Cell;
use std::rc::Rc;

/// Owned by a component's effect. Callbacks registered with the browser hold a
/// [`MountToken`] and must go through it before writing any state.
#[derive(Debug)]
pub struct MountGuard {
    alive: Rc<Cell<bool>>,
}

#[derive(Debug, Clone)]
pub struct MountToken {
    alive: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            alive: self.alive.clone(),
        }
    }

    pub fn teardown(&self) {
        self.alive.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl MountToken {
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Runs `f` if the owner is still mounted. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self.alive.get() {
            f();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_runs_while_mounted() {
        let guard = MountGuard::new();
        let token = guard.token();
        let writes = Cell::new(0);
        assert!(token.run(|| writes.set(writes.get() + 1)));
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn callbacks_after_teardown_write_nothing() {
        let guard = MountGuard::new();
        let token = guard.token();
        let writes = Rc::new(Cell::new(0));

        let callback = {
            let writes = writes.clone();
            move || {
                token.run(|| writes.set(writes.get() + 1));
            }
        };

        callback();
        drop(guard);
        callback();
        callback();

        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn explicit_teardown_is_visible_to_clones() {
        let guard = MountGuard::new();
        let a = guard.token();
        let b = a.clone();
        guard.teardown();
        assert!(!a.is_alive());
        assert!(!b.is_alive());
    }
}
