//! Change notifications for [graphs](crate::Graph).
//!
//! Observers are plain callbacks, registered with
//! [`Graph::subscribe`](crate::Graph::subscribe).
//! They are invoked synchronously, after the change is committed,
//! and never for operations that left the graph unchanged.

use std::fmt;
use std::sync::Arc;

use tessel_term::{GraphId, Triple};

/// A change in a [graph](crate::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphEvent<'a> {
    /// A triple was added to the graph.
    TripleAsserted(&'a Triple),
    /// A triple was removed from the graph.
    TripleRetracted(&'a Triple),
    /// The graph changed; follows every other event except [`Cleared`](GraphEvent::Cleared)
    /// on an empty graph and [`Merged`](GraphEvent::Merged).
    Changed,
    /// The graph was cleared.
    Cleared,
    /// Another graph was merged into this one.
    Merged {
        /// The graph that was merged.
        from: GraphId,
        /// How many triples were actually added.
        added: usize,
    },
}

/// A callback receiving [`GraphEvent`]s.
pub type Observer = dyn Fn(&GraphEvent) + Send + Sync;

/// Returned by [`Graph::subscribe`](crate::Graph::subscribe),
/// to [unsubscribe](crate::Graph::unsubscribe) later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

#[derive(Default)]
pub(crate) struct Observers {
    list: Vec<(ObserverHandle, Arc<Observer>)>,
    next: u64,
}

impl Observers {
    pub fn subscribe(&mut self, observer: Arc<Observer>) -> ObserverHandle {
        let handle = ObserverHandle(self.next);
        self.next += 1;
        self.list.push((handle, observer));
        handle
    }

    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        let len = self.list.len();
        self.list.retain(|(h, _)| *h != handle);
        self.list.len() != len
    }

    pub fn notify(&self, event: GraphEvent) {
        for (_, observer) in &self.list {
            observer(&event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Observers({})", self.list.len())
    }
}
