//! This crate is part of tessel,
//! an in-memory [RDF] graph store.
//!
//! This crate checks whether two graphs are [isomorphic],
//! whether a graph is a subgraph of another one (up to blank node renaming),
//! and reports the differences between two graphs.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod compare;
pub use compare::GraphCompare;
mod diff;
pub use diff::{GraphDiff, GraphDiffReport};
mod matcher;
pub use matcher::{GraphMatcher, Mapping, MatchMode, MatcherConfig};
mod msg;
pub use msg::compute_msgs;

#[cfg(test)]
mod test;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
