//! Ownership of pending timer callbacks.

use std::collections::HashMap;

/// Callbacks for scheduled timers, keyed by the host's timer handle.
///
/// A callback must outlive the timer that calls it, so it is kept here
/// until the timer is cancelled or has fired. A fired callback cannot free
/// itself while running; it is marked and dropped on the next `insert`.
#[derive(Debug)]
pub struct TimerSlots<C> {
    live: HashMap<i32, C>,
    fired: Vec<i32>,
}

impl<C> Default for TimerSlots<C> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
            fired: Vec::new(),
        }
    }
}

impl<C> TimerSlots<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `callback` alive for timer `id`, dropping callbacks that already ran.
    pub fn insert(&mut self, id: i32, callback: C) {
        for done in self.fired.drain(..) {
            self.live.remove(&done);
        }
        self.live.insert(id, callback);
    }

    /// Record that timer `id` has run its callback.
    pub fn mark_fired(&mut self, id: i32) {
        if self.live.contains_key(&id) {
            self.fired.push(id);
        }
    }

    /// Release the callback for `id`. Unknown or already released ids give `None`.
    pub fn cancel(&mut self, id: i32) -> Option<C> {
        self.fired.retain(|&done| done != id);
        self.live.remove(&id)
    }

    /// Callbacks currently held, fired ones included until reaped.
    pub fn len(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts drops of the callback it stands in for.
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_cancel_releases_callback() {
        let drops = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::new();
        slots.insert(1, Tracked(drops.clone()));
        slots.insert(2, Tracked(drops.clone()));

        drop(slots.cancel(1));
        assert_eq!(drops.get(), 1);
        assert_eq!(slots.len(), 1);
        assert!(slots.cancel(1).is_none());
    }

    #[test]
    fn test_fired_callback_dropped_on_next_insert() {
        let drops = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::new();
        slots.insert(1, Tracked(drops.clone()));

        slots.mark_fired(1);
        assert_eq!(drops.get(), 0);
        assert_eq!(slots.len(), 1);

        slots.insert(2, Tracked(drops.clone()));
        assert_eq!(drops.get(), 1);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_cancel_after_fire_is_not_reaped_twice() {
        let drops = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::new();
        slots.insert(1, Tracked(drops.clone()));
        slots.mark_fired(1);

        drop(slots.cancel(1));
        assert_eq!(drops.get(), 1);

        slots.insert(1, Tracked(drops.clone()));
        slots.insert(2, Tracked(drops.clone()));
        assert_eq!(drops.get(), 1);
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_repeated_cancels_do_not_accumulate() {
        let drops = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::new();
        for id in 1..=10 {
            slots.insert(id, Tracked(drops.clone()));
            drop(slots.cancel(id));
        }
        assert_eq!(slots.len(), 0);
        assert_eq!(drops.get(), 10);
    }

    #[test]
    fn test_mark_fired_unknown_id_is_ignored() {
        let mut slots: TimerSlots<()> = TimerSlots::new();
        slots.mark_fired(7);
        slots.insert(7, ());
        slots.insert(8, ());
        assert_eq!(slots.len(), 2);
    }
}
