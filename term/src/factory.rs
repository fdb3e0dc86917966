//! A [`NodeFactory`] creates the nodes of one graph,
//! while preventing the proliferation of duplicate strings.

use super::*;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Prefix of the identifiers generated by [`NodeFactory::create_blank_node`].
pub const AUTO_ID_PREFIX: &str = "autos";

/// Creates nodes scoped to a given graph.
///
/// Text is interned: creating the same IRI twice
/// yields two nodes sharing the same underlying `str`.
///
/// Blank node identifiers are allocated from a monotonic counter
/// (`autos1`, `autos2`...), skipping any identifier already in use.
#[derive(Clone, Debug)]
pub struct NodeFactory {
    graph: GraphId,
    stash: BTreeSet<Arc<str>>,
    used_ids: HashSet<Arc<str>>,
    next_id: u64,
}

impl NodeFactory {
    /// A factory for a fresh graph scope.
    pub fn new() -> Self {
        Self::with_graph_id(GraphId::fresh())
    }

    /// A factory minting blank nodes in the given scope.
    pub fn with_graph_id(graph: GraphId) -> Self {
        NodeFactory {
            graph,
            stash: BTreeSet::new(),
            used_ids: HashSet::new(),
            next_id: 1,
        }
    }

    /// The scope of the blank nodes created by this factory.
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    /// Retrieve a shared copy of `txt`, inserting it if not present.
    pub fn intern(&mut self, txt: &str) -> Arc<str> {
        if let Some(data) = self.stash.get(txt) {
            return data.clone();
        }
        let data: Arc<str> = Arc::from(txt);
        self.stash.insert(data.clone());
        data
    }

    /// How many distinct strings are interned by this factory.
    pub fn stash_len(&self) -> usize {
        self.stash.len()
    }

    /// Create a URI node.
    ///
    /// Fails if `iri` is not an absolute IRI.
    pub fn create_uri_node(&mut self, iri: &str) -> Result<Node> {
        iri::check_absolute(iri)?;
        Ok(Node::Uri(Iri::new_unchecked(self.intern(iri))))
    }

    /// Create a literal node with datatype `xsd:string`.
    pub fn create_literal_node(&mut self, value: &str) -> Node {
        let dt = self.intern_iri(&ns::xsd::string());
        Node::Literal(Literal::from_parts(
            self.intern(value),
            LiteralKind::Datatype(dt),
        ))
    }

    /// Create a typed literal node.
    pub fn create_literal_node_with_datatype(&mut self, value: &str, datatype: &Iri) -> Node {
        let dt = self.intern_iri(datatype);
        Node::Literal(Literal::from_parts(
            self.intern(value),
            LiteralKind::Datatype(dt),
        ))
    }

    /// Create a language-tagged literal node.
    ///
    /// Fails if `lang` is not a valid BCP47 language tag.
    pub fn create_literal_node_with_lang(&mut self, value: &str, lang: &str) -> Result<Node> {
        literal::check_lang(lang)?;
        Ok(Node::Literal(Literal::from_parts(
            self.intern(value),
            LiteralKind::Lang(self.intern(lang)),
        )))
    }

    /// Create a blank node with a fresh identifier.
    pub fn create_blank_node(&mut self) -> Node {
        let id = self.next_blank_id();
        Node::Blank(BlankNode::new_unchecked(id, self.graph))
    }

    /// Create a blank node with the given identifier.
    ///
    /// Calling this twice with the same `id` yields the same node.
    /// Fails if `id` is not a valid blank node identifier
    /// (in particular, if it is empty).
    pub fn create_blank_node_with_id(&mut self, id: &str) -> Result<Node> {
        blank_node::check_id(id)?;
        let id = self.intern(id);
        self.used_ids.insert(id.clone());
        Ok(Node::Blank(BlankNode::new_unchecked(id, self.graph)))
    }

    /// Create a variable node.
    pub fn create_variable_node(&mut self, name: &str) -> Result<Node> {
        variable::check_name(name)?;
        Ok(Node::Variable(Variable::new_unchecked(self.intern(name))))
    }

    /// Create a graph literal node holding the given triples.
    ///
    /// Their blank nodes are relabelled, see [`GraphLiteral`].
    pub fn create_graph_literal_node<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> Node {
        Node::GraphLiteral(GraphLiteral::new(triples))
    }

    /// Copy `node` into the scope of this factory.
    ///
    /// Blank nodes keep their identifier, but are rebound to this factory's graph.
    /// Text is re-interned in this factory.
    pub fn copy_node(&mut self, node: &Node) -> Node {
        match node {
            Node::Blank(b) => {
                let id = self.intern(b.id());
                self.used_ids.insert(id.clone());
                Node::Blank(BlankNode::new_unchecked(id, self.graph))
            }
            Node::Uri(iri) => Node::Uri(self.intern_iri(iri)),
            Node::Literal(lit) => {
                let value = self.intern(lit.value());
                let kind = match lit.kind() {
                    LiteralKind::Datatype(dt) => LiteralKind::Datatype(self.intern_iri(dt)),
                    LiteralKind::Lang(tag) => LiteralKind::Lang(self.intern(tag)),
                };
                Node::Literal(Literal::from_parts(value, kind))
            }
            Node::Variable(v) => Node::Variable(Variable::new_unchecked(self.intern(v.name()))),
            Node::GraphLiteral(_) => node.clone(),
        }
    }

    /// Copy `triple` into the scope of this factory.
    pub fn copy_triple(&mut self, triple: &Triple) -> Triple {
        let [s, p, o] = triple.spo().map(|n| self.copy_node(n));
        Triple::new_unchecked(s, p, o)
    }

    /// Mark `id` as used, so that it is never generated by
    /// [`create_blank_node`](NodeFactory::create_blank_node).
    pub fn reserve_blank_id(&mut self, id: &str) {
        let id = self.intern(id);
        self.used_ids.insert(id);
    }

    fn next_blank_id(&mut self) -> Arc<str> {
        loop {
            let candidate = format!("{}{}", AUTO_ID_PREFIX, self.next_id);
            self.next_id += 1;
            if !self.used_ids.contains(candidate.as_str()) {
                let id = self.intern(&candidate);
                self.used_ids.insert(id.clone());
                return id;
            }
        }
    }

    fn intern_iri(&mut self, iri: &Iri) -> Iri {
        match self.stash.get(iri.as_str()) {
            Some(data) => Iri::new_unchecked(data.clone()),
            None => {
                self.stash.insert(iri.arc().clone());
                iri.clone()
            }
        }
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
