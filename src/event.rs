//! Listener registry for layout change notification
//!
//! Listeners are invoked in subscription order and unsubscribed by handle.
//! Single-threaded by design: callbacks run on the caller's stack during
//! the operation that triggered them.

use std::fmt;

/// Handle returned by [`EventEmitter::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Ordered list of boxed listeners for events of type `T`
pub struct EventEmitter<T> {
    next_id: u64,
    listeners: Vec<(u64, Box<dyn FnMut(&T)>)>,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener; it stays active until unsubscribed
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Remove a listener; unknown or already-removed handles are ignored
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription.0);
    }

    /// Invoke every listener in subscription order
    pub fn emit(&mut self, event: &T) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::new();

        let log = Rc::clone(&order);
        emitter.subscribe(move |_: &()| log.borrow_mut().push("first"));
        let log = Rc::clone(&order);
        emitter.subscribe(move |_: &()| log.borrow_mut().push("second"));

        emitter.emit(&());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(Cell::new(0));
        let mut emitter = EventEmitter::new();

        let counter = Rc::clone(&count);
        let sub = emitter.subscribe(move |_: &()| counter.set(counter.get() + 1));

        emitter.emit(&());
        assert_eq!(count.get(), 1);

        emitter.unsubscribe(sub);
        emitter.emit(&());
        assert_eq!(count.get(), 1);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_handle_is_ignored() {
        let mut emitter: EventEmitter<()> = EventEmitter::new();
        let sub = emitter.subscribe(|_| {});
        emitter.unsubscribe(sub);
        emitter.unsubscribe(sub);
    }
}
