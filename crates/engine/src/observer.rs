//! Observer registry - "something changed" notifications
//!
//! Observers receive no payload. After a notification they re-read whatever
//! they need from the engine (usually a snapshot). Delivery is synchronous and
//! in subscription order.

use std::fmt;

/// Zero-argument change listener
///
/// Any `FnMut() + Send` closure is an observer.
pub trait Observer: Send {
    fn on_change(&mut self);
}

impl<F> Observer for F
where
    F: FnMut() + Send,
{
    fn on_change(&mut self) {
        self()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn Observer>)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify_all(&mut self) {
        for (_, observer) in self.entries.iter_mut() {
            observer.on_change();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
