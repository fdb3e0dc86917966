//! This crate is part of tessel,
//! an in-memory [RDF] graph store.
//!
//! It defines the data model shared by the other crates:
//! * [`Node`], a closed union of URIs, literals, blank nodes, variables and graph literals;
//! * [`Triple`], an immutable triple of nodes with a precomputed hash;
//! * [`NodeFactory`], which creates the nodes of a graph,
//!   interning their text and allocating blank node identifiers;
//! * [`NamespaceMap`], to expand QNames.
//!
//! Blank nodes are scoped to the graph that minted them:
//! see [`GraphId`].
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

mod _error;
pub use _error::*;
pub mod blank_node;
pub use blank_node::{BlankNode, GraphId};
pub mod factory;
pub use factory::NodeFactory;
pub mod graph_literal;
pub use graph_literal::GraphLiteral;
pub mod iri;
pub use iri::Iri;
pub mod literal;
pub use literal::{Literal, LiteralKind};
mod node;
pub use node::*;
pub mod ns;
pub mod prefix_map;
pub use prefix_map::NamespaceMap;
mod triple;
pub use triple::*;
pub mod variable;
pub use variable::Variable;

#[cfg(test)]
mod test;
