// ============================================================================
// REACTIVITY - Shared value + subscriber notifications
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Reactive value. Clones share the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Callback)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Copy of the current value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Reads the value without cloning it
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutates the value in place and notifies subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Same underlying value?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    fn notify(&self) {
        // Callbacks may (un)subscribe, so call them on a snapshot of the list
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_every_subscriber() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }
        state.set(5);
        assert_eq!(state.get(), 5);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn unsubscribed_callbacks_stay_quiet() {
        let state = ReactiveState::new(String::new());
        let hits = Rc::new(Cell::new(0));
        let id = {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1))
        };
        state.unsubscribe(id);
        state.update(|s| s.push('x'));
        assert_eq!(hits.get(), 0);
        assert_eq!(state.subscriber_count(), 0);
        assert_eq!(state.with(|s| s.len()), 1);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }
        let other = state.clone();
        other.set(2);
        assert_eq!(state.get(), 2);
        assert_eq!(hits.get(), 1);
        assert!(state.ptr_eq(&other));
    }

    #[test]
    fn callback_may_subscribe_during_notification() {
        let state = ReactiveState::new(0);
        let inner = state.clone();
        state.subscribe(move || {
            inner.subscribe(|| {});
        });
        state.set(1);
        assert_eq!(state.subscriber_count(), 2);
    }
}
