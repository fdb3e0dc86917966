//! Blank node like specified in [RDF](https://www.w3.org/TR/rdf11-primer/#section-blank-node).
//!
//! A blank node is only meaningful inside the graph that minted it,
//! so its identity is the pair ([local identifier](BlankNode::id), [`GraphId`]).

use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle spec](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BLANK_NODE_LABEL: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies the graph (or rather the [node factory](crate::NodeFactory))
/// that minted a blank node.
///
/// Identifiers are never reused during the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    /// The scope of the blank nodes inside [graph literals](crate::GraphLiteral).
    ///
    /// It is never returned by [`fresh`](GraphId::fresh).
    pub const FORMULA: GraphId = GraphId(0);

    /// Allocate a new, never used, identifier.
    pub fn fresh() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The numeric value of this identifier.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An RDF blank node, scoped to the graph that minted it.
///
/// Two blank nodes are equal iff they have the same identifier
/// *and* belong to the same graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode {
    id: Arc<str>,
    graph: GraphId,
}

impl BlankNode {
    /// Return a new blank node with the given identifier, in the given graph.
    ///
    /// May fail if `id` is not a valid identifier according to
    /// [`BLANK_NODE_LABEL`](https://www.w3.org/TR/n-triples/#grammar-production-BLANK_NODE_LABEL).
    /// This means that it must not include the typical leading `_:`,
    /// and that it can not be empty.
    pub fn new<T: AsRef<str>>(id: T, graph: GraphId) -> Result<Self> {
        check_id(id.as_ref())?;
        Ok(BlankNode {
            id: Arc::from(id.as_ref()),
            graph,
        })
    }

    /// Return a new blank node with the given identifier.
    ///
    /// # Pre-condition
    ///
    /// This function requires that `id` is a valid blank node identifier.
    pub fn new_unchecked(id: Arc<str>, graph: GraphId) -> Self {
        debug_assert!(BLANK_NODE_LABEL.is_match(&id), "invalid bnode label {:?}", id);
        BlankNode { id, graph }
    }

    /// The local identifier of this blank node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The graph this blank node belongs to.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// A blank node with the same identifier, in another graph.
    pub fn rebind(&self, graph: GraphId) -> Self {
        BlankNode {
            id: self.id.clone(),
            graph,
        }
    }
}

/// Check that `id` is a valid blank node identifier.
pub fn check_id(id: &str) -> Result<()> {
    if BLANK_NODE_LABEL.is_match(id) {
        Ok(())
    } else {
        Err(TermError::InvalidBlankNodeId(id.to_string()))
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}
