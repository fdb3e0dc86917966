//! Immutable RDF triples.

use super::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable (subject, predicate, object) triple.
///
/// All the blank nodes of a triple belong to the same graph.
/// The hash of the triple is computed once, at construction time.
#[derive(Clone, Debug)]
pub struct Triple {
    s: Node,
    p: Node,
    o: Node,
    hash: u64,
}

impl Triple {
    /// Build a new triple.
    ///
    /// Fails with [`TermError::MixedScopes`]
    /// if the blank nodes in `s`, `p` and `o` belong to different graphs.
    pub fn new(s: Node, p: Node, o: Node) -> Result<Self> {
        let scopes = [&s, &p, &o].map(Node::scope);
        let mut it = scopes.iter().flatten();
        if let Some(first) = it.next() {
            if it.any(|other| other != first) {
                return Err(TermError::MixedScopes(format!("{} , {} , {}", s, p, o)));
            }
        }
        Ok(Self::new_unchecked(s, p, o))
    }

    /// Build a new triple without checking the scope of its blank nodes.
    ///
    /// # Pre-condition
    ///
    /// All the blank nodes in `s`, `p` and `o` must belong to the same graph.
    pub fn new_unchecked(s: Node, p: Node, o: Node) -> Self {
        let mut state = DefaultHasher::new();
        s.hash(&mut state);
        p.hash(&mut state);
        o.hash(&mut state);
        let hash = state.finish();
        Triple { s, p, o, hash }
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Node {
        &self.s
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Node {
        &self.p
    }

    /// The object of this triple.
    pub fn o(&self) -> &Node {
        &self.o
    }

    /// The three nodes of this triple.
    pub fn spo(&self) -> [&Node; 3] {
        [&self.s, &self.p, &self.o]
    }

    /// Consume this triple into its three nodes.
    pub fn into_spo(self) -> [Node; 3] {
        [self.s, self.p, self.o]
    }

    /// The precomputed hash of this triple.
    pub fn hash_code(&self) -> u64 {
        self.hash
    }

    /// Does this triple contain no blank node?
    pub fn is_ground(&self) -> bool {
        !self.s.is_blank() && !self.p.is_blank() && !self.o.is_blank()
    }

    /// Does `node` occur in any position of this triple?
    pub fn involves(&self, node: &Node) -> bool {
        self.s == *node || self.p == *node || self.o == *node
    }

    /// Does this triple contain a variable?
    pub fn has_variable(&self) -> bool {
        self.s.is_variable() || self.p.is_variable() || self.o.is_variable()
    }

    /// The blank nodes of this triple, in s, p, o order (with repetitions).
    pub fn blank_nodes(&self) -> impl Iterator<Item = &BlankNode> + '_ {
        self.spo().into_iter().filter_map(Node::as_blank)
    }

    /// The graph the blank nodes of this triple belong to, if any.
    pub fn scope(&self) -> Option<GraphId> {
        self.blank_nodes().next().map(BlankNode::graph)
    }

    /// Replace the blank nodes of this triple according to `map`.
    ///
    /// Blank nodes absent from `map` are kept as is.
    /// Fails if the result would mix blank nodes from different graphs.
    pub fn substitute(&self, map: &HashMap<BlankNode, BlankNode>) -> Result<Triple> {
        let sub = |n: &Node| match n {
            Node::Blank(b) => match map.get(b) {
                Some(b2) => Node::Blank(b2.clone()),
                None => n.clone(),
            },
            _ => n.clone(),
        };
        Triple::new(sub(&self.s), sub(&self.p), sub(&self.o))
    }
}

impl PartialEq for Triple {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.s == other.s && self.p == other.p && self.o == other.o
    }
}

impl Eq for Triple {}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash)
    }
}

impl PartialOrd for Triple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Triple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.s
            .cmp(&other.s)
            .then_with(|| self.p.cmp(&other.p))
            .then_with(|| self.o.cmp(&other.o))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} , {} , {}", self.s, self.p, self.o)
    }
}
