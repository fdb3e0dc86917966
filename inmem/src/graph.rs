//! The [`Graph`] type: a mutable, indexed set of triples,
//! owning the factory that mints its nodes.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use tessel_term::*;

use crate::collection::{IndexConfig, TripleCollection, Triples};
use crate::event::{GraphEvent, ObserverHandle, Observers};
use crate::{GraphError, Result};

/// An in-memory RDF graph.
///
/// A graph owns its triples and the [`NodeFactory`] creating its nodes.
/// Blank nodes are scoped to the graph ([`Graph::graph_id`]):
/// a triple containing blank nodes from another graph must be
/// [copied](Graph::copy_triple) before being asserted.
///
/// Cloning a graph yields an equivalent graph with a fresh blank node scope,
/// and without the observers of the original.
pub struct Graph {
    factory: NodeFactory,
    triples: TripleCollection,
    namespaces: NamespaceMap,
    base: Option<Iri>,
    observers: Observers,
    origins: HashMap<Node, GraphId>,
}

impl Graph {
    /// A new empty graph, with all indexes enabled.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// A new empty graph, with the given index configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self::with_factory(NodeFactory::new(), config)
    }

    fn with_factory(factory: NodeFactory, config: IndexConfig) -> Self {
        Graph {
            factory,
            triples: TripleCollection::with_config(config),
            namespaces: NamespaceMap::new(),
            base: None,
            observers: Observers::default(),
            origins: HashMap::new(),
        }
    }

    /// A new graph containing copies of the given triples.
    ///
    /// Blank nodes keep their identifier, but are rebound to the new graph.
    pub fn from_triples<'a, I>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut g = Graph::new();
        for t in triples {
            let t = g.copy_triple(t);
            g.assert(t)?;
        }
        Ok(g)
    }

    /// A new graph sharing the blank node scope of `self`,
    /// containing the given triples of `self`.
    ///
    /// This is used to materialize parts of a graph (e.g. its isolated sub-graphs)
    /// that can be compared with other graphs.
    /// Triples are not copied, so they must belong to the scope of `self`.
    pub fn scoped_subgraph<'a, I>(&self, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut g = Graph::with_factory(self.factory.clone(), self.triples.config());
        g.namespaces = self.namespaces.clone();
        g.base = self.base.clone();
        for t in triples {
            g.assert(t.clone())?;
        }
        Ok(g)
    }

    /// The blank node scope of this graph.
    pub fn graph_id(&self) -> GraphId {
        self.factory.graph_id()
    }

    /// The base IRI of this graph, if any.
    pub fn base(&self) -> Option<&Iri> {
        self.base.as_ref()
    }

    /// Set the base IRI, against which relative IRIs are resolved.
    pub fn set_base(&mut self, base: Option<Iri>) {
        self.base = base;
    }

    /// The namespace map of this graph.
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// The namespace map of this graph, for modification.
    pub fn namespaces_mut(&mut self) -> &mut NamespaceMap {
        &mut self.namespaces
    }

    /// The node factory of this graph.
    pub fn factory(&mut self) -> &mut NodeFactory {
        &mut self.factory
    }

    /// The underlying triple collection.
    pub fn collection(&self) -> &TripleCollection {
        &self.triples
    }

    // node creation

    /// Create a URI node.
    ///
    /// Relative IRIs are resolved against the [base IRI](Graph::base), if any.
    pub fn create_uri_node(&mut self, iri: &str) -> Result<Node> {
        match &self.base {
            Some(base) => {
                let resolved = base.resolve(iri)?;
                Ok(self.factory.create_uri_node(resolved.as_str())?)
            }
            None => Ok(self.factory.create_uri_node(iri)?),
        }
    }

    /// Create a URI node from a QName, using the namespace map of this graph.
    pub fn create_uri_node_from_qname(&mut self, qname: &str) -> Result<Node> {
        let iri = self.namespaces.resolve_qname(qname)?;
        Ok(self.factory.create_uri_node(iri.as_str())?)
    }

    /// Create a literal node with datatype `xsd:string`.
    pub fn create_literal_node(&mut self, value: &str) -> Node {
        self.factory.create_literal_node(value)
    }

    /// Create a typed literal node.
    pub fn create_literal_node_with_datatype(&mut self, value: &str, datatype: &Iri) -> Node {
        self.factory.create_literal_node_with_datatype(value, datatype)
    }

    /// Create a language-tagged literal node.
    pub fn create_literal_node_with_lang(&mut self, value: &str, lang: &str) -> Result<Node> {
        Ok(self.factory.create_literal_node_with_lang(value, lang)?)
    }

    /// Create a blank node with a fresh identifier.
    pub fn create_blank_node(&mut self) -> Node {
        self.factory.create_blank_node()
    }

    /// Create a blank node with the given identifier.
    pub fn create_blank_node_with_id(&mut self, id: &str) -> Result<Node> {
        Ok(self.factory.create_blank_node_with_id(id)?)
    }

    /// Create a variable node.
    pub fn create_variable_node(&mut self, name: &str) -> Result<Node> {
        Ok(self.factory.create_variable_node(name)?)
    }

    /// Create a graph literal node.
    pub fn create_graph_literal_node<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> Node {
        self.factory.create_graph_literal_node(triples)
    }

    /// Create a triple from nodes of this graph.
    pub fn create_triple(&self, s: Node, p: Node, o: Node) -> Result<Triple> {
        Ok(Triple::new(s, p, o)?)
    }

    /// Copy a node of another graph into this graph.
    pub fn copy_node(&mut self, node: &Node) -> Node {
        self.factory.copy_node(node)
    }

    /// Copy a triple of another graph into this graph.
    pub fn copy_triple(&mut self, triple: &Triple) -> Triple {
        self.factory.copy_triple(triple)
    }

    // mutation

    /// Add `triple` to this graph.
    ///
    /// Return `true` iff it was not already present.
    /// Fails if `triple` contains a variable,
    /// or blank nodes from another graph.
    pub fn assert(&mut self, triple: Triple) -> Result<bool> {
        self.check(&triple)?;
        Ok(self.add_and_notify(triple))
    }

    /// Add all the given triples to this graph.
    ///
    /// Return the number of triples that were actually added.
    /// Stops at the first invalid triple;
    /// the triples before it are kept.
    pub fn assert_all<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> Result<usize> {
        let mut added = 0;
        for t in triples {
            if self.assert(t)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Remove `triple` from this graph.
    ///
    /// Return `true` iff it was present.
    pub fn retract(&mut self, triple: &Triple) -> bool {
        if !self.triples.delete(triple) {
            return false;
        }
        self.observers.notify(GraphEvent::TripleRetracted(triple));
        self.observers.notify(GraphEvent::Changed);
        true
    }

    /// Remove all the given triples from this graph.
    ///
    /// Return the number of triples that were actually removed.
    pub fn retract_all<'a, I: IntoIterator<Item = &'a Triple>>(&mut self, triples: I) -> usize {
        triples.into_iter().filter(|t| self.retract(t)).count()
    }

    /// Remove all triples from this graph.
    ///
    /// The blank node identifier allocator is not reset.
    pub fn clear(&mut self) {
        let was_empty = self.triples.is_empty();
        self.triples.clear();
        self.origins.clear();
        log::debug!("graph {} cleared", self.graph_id());
        self.observers.notify(GraphEvent::Cleared);
        if !was_empty {
            self.observers.notify(GraphEvent::Changed);
        }
    }

    /// Copy every triple of `other` into this graph.
    ///
    /// Namespace declarations of `other` are imported (without overriding existing ones).
    /// If this graph is empty, blank nodes keep their identifier;
    /// otherwise each blank node of `other` is given a fresh identifier.
    /// If `keep_original_node_scope` is set,
    /// every copied node remembers the graph it [originates from](Graph::origin_of).
    ///
    /// Return the number of triples actually added.
    /// Fails if `other` shares the blank node scope of `self`.
    pub fn merge(&mut self, other: &Graph, keep_original_node_scope: bool) -> Result<usize> {
        self.merge_as(other, other.graph_id(), keep_original_node_scope)
    }

    /// Same as [`merge`](Graph::merge), `other` being a copy of the graph `origin`.
    ///
    /// Provenance and the [`Merged`](GraphEvent::Merged) event refer to `origin`.
    pub(crate) fn merge_as(
        &mut self,
        other: &Graph,
        origin: GraphId,
        keep_original_node_scope: bool,
    ) -> Result<usize> {
        if other.graph_id() == self.graph_id() || origin == self.graph_id() {
            return Err(GraphError::SelfMerge(self.graph_id()));
        }
        self.namespaces.import(&other.namespaces);

        let keep_ids = self.triples.is_empty();
        let mut bnodes: HashMap<&BlankNode, Node> = HashMap::new();
        let mut added = 0;
        let mut sorted: Vec<&Triple> = other.triples.iter().collect();
        sorted.sort();
        for t in sorted {
            let [s, p, o] = t.spo().map(|n| match n {
                Node::Blank(b) => bnodes
                    .entry(b)
                    .or_insert_with(|| {
                        if keep_ids {
                            self.factory.copy_node(n)
                        } else {
                            self.factory.create_blank_node()
                        }
                    })
                    .clone(),
                _ => self.factory.copy_node(n),
            });
            if keep_original_node_scope {
                for (old, new) in t.spo().into_iter().zip([&s, &p, &o]) {
                    let from = other.origin_of(old).unwrap_or(origin);
                    self.origins.entry(new.clone()).or_insert(from);
                }
            }
            if self.add_and_notify(Triple::new_unchecked(s, p, o)) {
                added += 1;
            }
        }
        log::debug!(
            "merged {} triples of graph {} into graph {}",
            added,
            origin,
            self.graph_id()
        );
        self.observers.notify(GraphEvent::Merged {
            from: origin,
            added,
        });
        Ok(added)
    }

    /// The graph `node` was merged from,
    /// if it was copied by [`merge`](Graph::merge) with `keep_original_node_scope`.
    pub fn origin_of(&self, node: &Node) -> Option<GraphId> {
        self.origins.get(node).copied()
    }

    fn check(&self, triple: &Triple) -> Result<()> {
        if triple.has_variable() {
            return Err(GraphError::VariableInData(triple.to_string()));
        }
        match triple.scope() {
            Some(scope) if scope != self.graph_id() => Err(GraphError::ForeignTriple {
                triple: triple.to_string(),
                scope,
                graph: self.graph_id(),
            }),
            _ => Ok(()),
        }
    }

    fn add_and_notify(&mut self, triple: Triple) -> bool {
        if self.observers.is_empty() {
            return self.triples.add(triple);
        }
        if !self.triples.add(triple.clone()) {
            return false;
        }
        self.observers.notify(GraphEvent::TripleAsserted(&triple));
        self.observers.notify(GraphEvent::Changed);
        true
    }

    // observers

    /// Register a callback, invoked after every change of this graph.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverHandle
    where
        F: Fn(&GraphEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(Arc::new(observer))
    }

    /// Unregister a callback.
    ///
    /// Return `false` if `handle` was not registered.
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        self.observers.unsubscribe(handle)
    }

    // queries

    /// The number of triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Is this graph empty?
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Is `triple` in this graph?
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// All the triples of this graph, in no particular order.
    pub fn triples(&self) -> Triples<'_> {
        self.triples.iter()
    }

    /// Triples with subject `s`.
    pub fn triples_with_subject<'a>(&'a self, s: &Node) -> Triples<'a> {
        self.triples.with_subject(s)
    }

    /// Triples with predicate `p`.
    pub fn triples_with_predicate<'a>(&'a self, p: &Node) -> Triples<'a> {
        self.triples.with_predicate(p)
    }

    /// Triples with object `o`.
    pub fn triples_with_object<'a>(&'a self, o: &Node) -> Triples<'a> {
        self.triples.with_object(o)
    }

    /// Triples with subject `s` and predicate `p`.
    pub fn triples_with_subject_predicate<'a>(&'a self, s: &Node, p: &Node) -> Triples<'a> {
        self.triples.with_subject_predicate(s, p)
    }

    /// Triples with subject `s` and object `o`.
    pub fn triples_with_subject_object<'a>(&'a self, s: &Node, o: &Node) -> Triples<'a> {
        self.triples.with_subject_object(s, o)
    }

    /// Triples with predicate `p` and object `o`.
    pub fn triples_with_predicate_object<'a>(&'a self, p: &Node, o: &Node) -> Triples<'a> {
        self.triples.with_predicate_object(p, o)
    }

    /// Triples where `node` occurs in any position, each returned once.
    pub fn triples_involving<'a>(&'a self, node: &'a Node) -> Triples<'a> {
        Box::new(
            self.triples
                .with_subject(node)
                .chain(self.triples.with_predicate(node).filter(move |t| t.s() != node))
                .chain(
                    self.triples
                        .with_object(node)
                        .filter(move |t| t.s() != node && t.p() != node),
                ),
        )
    }

    /// The distinct subjects and objects of this graph.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.triples.subject_nodes().chain(
            self.triples
                .object_nodes()
                .filter(|n| !self.triples.has_subject(n)),
        )
    }

    /// The distinct blank nodes of this graph, in any position.
    pub fn blank_nodes(&self) -> BTreeSet<&BlankNode> {
        self.triples
            .subject_nodes()
            .chain(self.triples.predicate_nodes())
            .chain(self.triples.object_nodes())
            .filter_map(Node::as_blank)
            .collect()
    }

    // node selection

    /// The URI node for `iri`, if it is used in this graph.
    pub fn get_uri_node(&self, iri: &str) -> Option<&Node> {
        let probe = Node::Uri(Iri::new(iri).ok()?);
        self.find_node(&probe)
    }

    /// The literal node `"value"^^xsd:string`, if it is used in this graph.
    pub fn get_literal_node(&self, value: &str) -> Option<&Node> {
        self.find_node(&Node::Literal(Literal::new_plain(value)))
    }

    /// The typed literal node `"value"^^datatype`, if it is used in this graph.
    pub fn get_literal_node_with_datatype(&self, value: &str, datatype: &Iri) -> Option<&Node> {
        self.find_node(&Node::Literal(Literal::new_dt(value, datatype.clone())))
    }

    /// The literal node `"value"@lang`, if it is used in this graph.
    pub fn get_literal_node_with_lang(&self, value: &str, lang: &str) -> Option<&Node> {
        let probe = Node::Literal(Literal::new_lang(value, lang).ok()?);
        self.find_node(&probe)
    }

    /// The blank node `_:id` of this graph, if it is used.
    pub fn get_blank_node(&self, id: &str) -> Option<&Node> {
        let probe = Node::Blank(BlankNode::new(id, self.graph_id()).ok()?);
        self.find_node(&probe)
    }

    fn find_node(&self, probe: &Node) -> Option<&Node> {
        self.triples.find_node(probe)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        let mut g = Graph::with_config(self.triples.config());
        g.namespaces = self.namespaces.clone();
        g.base = self.base.clone();
        for t in self.triples.iter() {
            let copy = g.copy_triple(t);
            for (old, new) in t.spo().into_iter().zip(copy.spo()) {
                if let Some(origin) = self.origin_of(old) {
                    g.origins.insert(new.clone(), origin);
                }
            }
            g.triples.add(copy);
        }
        g
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Graph")
            .field("graph_id", &self.graph_id())
            .field("len", &self.len())
            .field("observers", &self.observers)
            .finish()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sorted: Vec<&Triple> = self.triples.iter().collect();
        sorted.sort();
        for t in sorted {
            writeln!(f, "{}", t)?;
        }
        Ok(())
    }
}
