use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: usize,
    listeners: Vec<(usize, Listener<T>)>,
}

/// Single-writer, many-reader value. Readers subscribe and get notified after
/// every change; dropping the returned [`Subscription`] unsubscribes.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores `value` and notifies subscribers. Returns false when nothing
    /// changed, in which case nobody is notified.
    pub fn set(&self, value: T) -> bool {
        let listeners: Vec<Listener<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Borrow released so listeners may read or subscribe.
        for listener in listeners {
            listener(&value);
        }
        true
    }

    pub fn subscribe<F: Fn(&T) + 'static>(&self, f: F) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(f)));

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

}

pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn subscribers_see_every_change() {
        let store = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            store.subscribe(move |v| seen.borrow_mut().push(*v))
        };

        store.set(1);
        store.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let store = Observable::new("a".to_string());
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };

        assert!(!store.set("a".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let store = Observable::new(0);
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };
        store.set(1);
        drop(sub);
        store.set(2);

        assert_eq!(calls.get(), 1);
        assert!(store.inner.borrow().listeners.is_empty());
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = Observable::new(0);
        let sub = store.subscribe(|_| {});
        drop(store);
        drop(sub);
    }
}
