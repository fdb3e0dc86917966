//! The [`Node`] type, a closed union of every kind of RDF term
//! this crate supports.

use super::*;
use std::fmt;

/// The kinds of [`Node`], in the order in which they sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// See [`Node::Variable`]
    Variable,
    /// See [`Node::Blank`]
    Blank,
    /// See [`Node::Uri`]
    Uri,
    /// See [`Node::Literal`]
    Literal,
    /// See [`Node::GraphLiteral`]
    GraphLiteral,
}

/// An RDF node.
///
/// Nodes are totally ordered: variables sort first,
/// then blank nodes, URIs, literals and graph literals.
/// Within a kind, nodes are compared field by field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// A variable, only meaningful in patterns.
    Variable(Variable),
    /// A blank node, scoped to the graph that minted it.
    Blank(BlankNode),
    /// A URI (absolute IRI).
    Uri(Iri),
    /// A literal.
    Literal(Literal),
    /// A node whose value is a set of triples (Notation3 formulae).
    GraphLiteral(GraphLiteral),
}

impl Node {
    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Variable(_) => NodeKind::Variable,
            Node::Blank(_) => NodeKind::Blank,
            Node::Uri(_) => NodeKind::Uri,
            Node::Literal(_) => NodeKind::Literal,
            Node::GraphLiteral(_) => NodeKind::GraphLiteral,
        }
    }

    /// Is this node a blank node?
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Is this node a variable?
    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    /// Borrow the blank node wrapped by this node, if any.
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Node::Blank(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the IRI wrapped by this node, if any.
    pub fn as_uri(&self) -> Option<&Iri> {
        match self {
            Node::Uri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Borrow the literal wrapped by this node, if any.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The graph this node is scoped to, if it is a blank node.
    pub fn scope(&self) -> Option<GraphId> {
        self.as_blank().map(BlankNode::graph)
    }
}

impl From<BlankNode> for Node {
    fn from(b: BlankNode) -> Self {
        Node::Blank(b)
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        Node::Uri(iri)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

impl From<Variable> for Node {
    fn from(v: Variable) -> Self {
        Node::Variable(v)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Variable(v) => v.fmt(f),
            Node::Blank(b) => b.fmt(f),
            Node::Uri(iri) => iri.fmt(f),
            Node::Literal(lit) => lit.fmt(f),
            Node::GraphLiteral(gl) => gl.fmt(f),
        }
    }
}
