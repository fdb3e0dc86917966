//! This crate is part of tessel,
//! an in-memory [RDF] graph store.
//!
//! It provides:
//! * [`TripleCollection`], a set of triples indexed by subject, predicate, object,
//!   and by any pair of them;
//! * [`Graph`], a mutable triple collection owning its node factory,
//!   with change notifications;
//! * [`ThreadSafeGraph`], a graph behind a reader/writer lock.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/

mod _error;
pub use _error::*;
pub mod collection;
pub use collection::{IndexConfig, TripleCollection};
pub mod event;
pub use event::{GraphEvent, ObserverHandle};
mod graph;
pub use graph::Graph;
mod sync;
pub use sync::ThreadSafeGraph;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
