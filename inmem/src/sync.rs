//! A [`ThreadSafeGraph`] wraps a [`Graph`] behind a reader/writer lock.

use std::sync::{PoisonError, RwLock};

use tessel_term::Triple;

use crate::{Graph, GraphError, Result};

/// A [`Graph`] that can be shared between threads.
///
/// Queries take a shared lock, mutations an exclusive one.
/// Compound operations should be run inside [`read`](ThreadSafeGraph::read)
/// or [`write`](ThreadSafeGraph::write), which give access to the underlying graph
/// for the whole duration of the closure.
///
/// Poisoned locks are recovered:
/// a panicking observer runs after the mutation is complete.
///
/// The lock is not reentrant:
/// calling any method of a `ThreadSafeGraph` from inside one of its own
/// [`read`](ThreadSafeGraph::read) or [`write`](ThreadSafeGraph::write) closures
/// (or from an observer of the wrapped graph) deadlocks.
/// Use the `&Graph` or `&mut Graph` given to the closure instead.
#[derive(Debug, Default)]
pub struct ThreadSafeGraph {
    inner: RwLock<Graph>,
}

impl ThreadSafeGraph {
    /// Wrap `graph`.
    pub fn new(graph: Graph) -> Self {
        ThreadSafeGraph {
            inner: RwLock::new(graph),
        }
    }

    /// Run `f` with shared access to the graph.
    pub fn read<T, F: FnOnce(&Graph) -> T>(&self, f: F) -> T {
        let g = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&g)
    }

    /// Run `f` with exclusive access to the graph.
    pub fn write<T, F: FnOnce(&mut Graph) -> T>(&self, f: F) -> T {
        let mut g = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut g)
    }

    /// See [`Graph::assert`].
    pub fn assert(&self, triple: Triple) -> Result<bool> {
        self.write(|g| g.assert(triple))
    }

    /// See [`Graph::retract`].
    pub fn retract(&self, triple: &Triple) -> bool {
        self.write(|g| g.retract(triple))
    }

    /// See [`Graph::clear`].
    pub fn clear(&self) {
        self.write(Graph::clear)
    }

    /// See [`Graph::merge`].
    ///
    /// `other` is copied before `self` is locked for writing,
    /// so that concurrent merges in both directions can not deadlock.
    /// Provenance refers to the graph wrapped by `other`, not to the copy.
    pub fn merge(&self, other: &ThreadSafeGraph, keep_original_node_scope: bool) -> Result<usize> {
        if std::ptr::eq(self, other) {
            return Err(self.read(|g| GraphError::SelfMerge(g.graph_id())));
        }
        let (origin, copy) = other.read(|g| (g.graph_id(), g.clone()));
        self.write(|g| g.merge_as(&copy, origin, keep_original_node_scope))
    }

    /// See [`Graph::contains`].
    pub fn contains(&self, triple: &Triple) -> bool {
        self.read(|g| g.contains(triple))
    }

    /// See [`Graph::len`].
    pub fn len(&self) -> usize {
        self.read(Graph::len)
    }

    /// See [`Graph::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.read(Graph::is_empty)
    }

    /// A copy of the current state of the graph (with a fresh blank node scope).
    pub fn snapshot(&self) -> Graph {
        self.read(Graph::clone)
    }

    /// Unwrap the underlying graph.
    pub fn into_inner(self) -> Graph {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Graph> for ThreadSafeGraph {
    fn from(graph: Graph) -> Self {
        ThreadSafeGraph::new(graph)
    }
}
