//! An in-memory store for [RDF] graphs,
//! able to compare graphs up to the renaming of their blank nodes.
//!
//! RDF is a data model
//! designed to exchange knowledge on the Web
//! in an interoperable way.
//! Each piece of knowledge in RDF is represented by a [triple](term::Triple),
//! made of three [nodes](term::Node).
//! A set of triples forms an RDF [graph](inmem::Graph).
//!
//! Blank nodes have no global identifier:
//! they only make sense inside the graph they belong to.
//! Two graphs are therefore considered equal if one can rename the blank nodes of
//! the first one to get the second one ([graph isomorphism]).
//! This crate re-exports:
//! * [`tessel_term`] as [`term`]: nodes, triples and node factories;
//! * [`tessel_inmem`] as [`inmem`]: indexed triple collections and graphs;
//! * [`tessel_isomorphism`] as [`isomorphism`]: graph equality, subgraph matching and diff.
//!
//! # Getting Started
//!
//! ```
//! use tessel::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut g1 = Graph::new();
//! let alice = g1.create_blank_node_with_id("alice")?;
//! let name = g1.create_uri_node("http://xmlns.com/foaf/0.1/name")?;
//! let value = g1.create_literal_node("Alice");
//! g1.assert(Triple::new(alice, name, value)?)?;
//!
//! let mut g2 = Graph::new();
//! g2.merge(&g1, false)?;
//! let (equal, mapping) = g1.equals(&g2)?;
//! assert!(equal);
//! assert_eq!(mapping.unwrap().len(), 1);
//!
//! let bob = g2.create_blank_node();
//! let name = g2.create_uri_node("http://xmlns.com/foaf/0.1/name")?;
//! let value = g2.create_literal_node("Bob");
//! g2.assert(Triple::new(bob, name, value)?)?;
//! assert!(g1.is_subgraph_of(&g2)?);
//! assert_eq!(g1.difference(&g2)?.added_msgs().len(), 1);
//! # Ok(()) }
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [graph isomorphism]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
#![deny(missing_docs)]

pub use tessel_inmem as inmem;
pub use tessel_isomorphism as isomorphism;
pub use tessel_term as term;

/// The types and traits needed in most programs using tessel.
pub mod prelude {
    pub use tessel_inmem::{Graph, GraphError, GraphEvent, ThreadSafeGraph};
    pub use tessel_isomorphism::{GraphCompare, GraphDiff, IsoError, Mapping};
    pub use tessel_term::{BlankNode, Iri, Literal, Node, TermError, Triple};
}
