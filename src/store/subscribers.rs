//! Subscriber registry for table change notifications.
//!
//! Generalizes the usual toolkit signal/slot wiring as a plain callback
//! registry: any number of subscribers, synchronous delivery, no queuing.

use crate::types::TableEvent;

/// Handle returned by [`crate::store::TableStore::on_event`]; keep it to
/// unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Box<dyn FnMut(&TableEvent) + 'static>;

/// Ordered set of event callbacks.
///
/// Delivery order is registration order. Callbacks may not re-enter the
/// store (they receive only the event), which keeps delivery borrow-safe
/// in the single-threaded scope this crate targets.
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Subscribers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, callback: Callback) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        SubscriberId(id)
    }

    /// Remove a subscriber; returns false if the id was already gone
    pub(crate) fn remove(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id.0);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &TableEvent) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
