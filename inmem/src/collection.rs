//! A [`TripleCollection`] is a de-duplicated set of triples,
//! indexed by subject, predicate, object, and by any pair of them.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::empty;

use tessel_term::{Node, Triple};

/// Which indexes a [`TripleCollection`] maintains.
///
/// The three simple indexes (by subject, predicate and object) are always built.
/// The compound indexes (by pairs of positions) cost memory,
/// and can be disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    compound: bool,
}

impl IndexConfig {
    /// The default configuration, with compound indexes enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the compound indexing flag.
    pub fn with_compound_indexes(mut self, compound: bool) -> Self {
        self.compound = compound;
        self
    }

    /// Are compound indexes maintained?
    pub fn compound_indexes(&self) -> bool {
        self.compound
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig { compound: true }
    }
}

/// An iterator over the triples of a [`TripleCollection`].
pub type Triples<'a> = Box<dyn Iterator<Item = &'a Triple> + 'a>;

type Bucket = HashSet<Triple>;
type SimpleIndex = HashMap<Node, Bucket>;
type CompoundIndex = HashMap<(Node, Node), Bucket>;

#[derive(Clone, Debug, Default)]
struct CompoundIndexes {
    sp: CompoundIndex,
    so: CompoundIndex,
    po: CompoundIndex,
}

/// A set of triples, indexed to answer lookups
/// by subject, predicate, object, and any pair thereof.
///
/// Every mutation updates the canonical set and all the indexes
/// before returning.
#[derive(Clone, Debug, Default)]
pub struct TripleCollection {
    triples: HashSet<Triple>,
    s: SimpleIndex,
    p: SimpleIndex,
    o: SimpleIndex,
    compound: Option<CompoundIndexes>,
    count: usize,
}

impl TripleCollection {
    /// An empty collection, with all indexes enabled.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// An empty collection, with the given index configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        TripleCollection {
            compound: config.compound.then(CompoundIndexes::default),
            ..Default::default()
        }
    }

    /// The index configuration of this collection.
    pub fn config(&self) -> IndexConfig {
        IndexConfig {
            compound: self.compound.is_some(),
        }
    }

    /// Add `t` to this collection.
    ///
    /// Return `true` iff `t` was not already present.
    pub fn add(&mut self, t: Triple) -> bool {
        if self.triples.contains(&t) {
            return false;
        }
        let [s, p, o] = t.spo().map(Node::clone);
        insert_in_index(&mut self.s, s.clone(), t.clone());
        insert_in_index(&mut self.p, p.clone(), t.clone());
        insert_in_index(&mut self.o, o.clone(), t.clone());
        if let Some(c) = self.compound.as_mut() {
            insert_in_index(&mut c.sp, (s.clone(), p.clone()), t.clone());
            insert_in_index(&mut c.so, (s, o.clone()), t.clone());
            insert_in_index(&mut c.po, (p, o), t.clone());
        }
        self.triples.insert(t);
        self.count += 1;
        true
    }

    /// Remove `t` from this collection.
    ///
    /// Return `true` iff `t` was present.
    pub fn delete(&mut self, t: &Triple) -> bool {
        if !self.triples.remove(t) {
            return false;
        }
        let [s, p, o] = t.spo();
        remove_from_index(&mut self.s, s, t);
        remove_from_index(&mut self.p, p, t);
        remove_from_index(&mut self.o, o, t);
        if let Some(c) = self.compound.as_mut() {
            remove_from_index(&mut c.sp, &(s.clone(), p.clone()), t);
            remove_from_index(&mut c.so, &(s.clone(), o.clone()), t);
            remove_from_index(&mut c.po, &(p.clone(), o.clone()), t);
        }
        self.count -= 1;
        true
    }

    /// Is `t` in this collection?
    pub fn contains(&self, t: &Triple) -> bool {
        self.triples.contains(t)
    }

    /// The number of triples in this collection.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Is this collection empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Remove all triples from this collection.
    pub fn clear(&mut self) {
        *self = Self::with_config(self.config());
    }

    /// Iterate over all the triples of this collection, in no particular order.
    pub fn iter(&self) -> Triples<'_> {
        Box::new(self.triples.iter())
    }

    /// Triples with subject `s`.
    pub fn with_subject<'a>(&'a self, s: &Node) -> Triples<'a> {
        lookup(&self.s, s)
    }

    /// Triples with predicate `p`.
    pub fn with_predicate<'a>(&'a self, p: &Node) -> Triples<'a> {
        lookup(&self.p, p)
    }

    /// Triples with object `o`.
    pub fn with_object<'a>(&'a self, o: &Node) -> Triples<'a> {
        lookup(&self.o, o)
    }

    /// Triples with subject `s` and predicate `p`.
    pub fn with_subject_predicate<'a>(&'a self, s: &Node, p: &Node) -> Triples<'a> {
        match &self.compound {
            Some(c) => lookup(&c.sp, &(s.clone(), p.clone())),
            None => filter_smallest((&self.s, s), (&self.p, p), |t| t.s() == s && t.p() == p),
        }
    }

    /// Triples with subject `s` and object `o`.
    pub fn with_subject_object<'a>(&'a self, s: &Node, o: &Node) -> Triples<'a> {
        match &self.compound {
            Some(c) => lookup(&c.so, &(s.clone(), o.clone())),
            None => filter_smallest((&self.s, s), (&self.o, o), |t| t.s() == s && t.o() == o),
        }
    }

    /// Triples with predicate `p` and object `o`.
    pub fn with_predicate_object<'a>(&'a self, p: &Node, o: &Node) -> Triples<'a> {
        match &self.compound {
            Some(c) => lookup(&c.po, &(p.clone(), o.clone())),
            None => filter_smallest((&self.p, p), (&self.o, o), |t| t.p() == p && t.o() == o),
        }
    }

    /// Is `s` the subject of some triple?
    pub fn has_subject(&self, s: &Node) -> bool {
        self.s.contains_key(s)
    }

    /// Is `p` the predicate of some triple?
    pub fn has_predicate(&self, p: &Node) -> bool {
        self.p.contains_key(p)
    }

    /// Is `o` the object of some triple?
    pub fn has_object(&self, o: &Node) -> bool {
        self.o.contains_key(o)
    }

    /// The node equal to `probe` stored in this collection, in any position.
    pub fn find_node(&self, probe: &Node) -> Option<&Node> {
        [&self.s, &self.p, &self.o]
            .into_iter()
            .find_map(|index| index.get_key_value(probe).map(|(node, _)| node))
    }

    /// The distinct subjects of this collection.
    pub fn subject_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.s.keys()
    }

    /// The distinct predicates of this collection.
    pub fn predicate_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.p.keys()
    }

    /// The distinct objects of this collection.
    pub fn object_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.o.keys()
    }
}

impl<'a> IntoIterator for &'a TripleCollection {
    type Item = &'a Triple;
    type IntoIter = Triples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Triple> for TripleCollection {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for t in iter {
            self.add(t);
        }
    }
}

impl FromIterator<Triple> for TripleCollection {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut c = TripleCollection::new();
        c.extend(iter);
        c
    }
}

/// Scan the smaller of two simple index buckets, keeping the triples matching `filter`.
fn filter_smallest<'a, F>(
    (idx1, key1): (&'a SimpleIndex, &Node),
    (idx2, key2): (&'a SimpleIndex, &Node),
    filter: F,
) -> Triples<'a>
where
    F: Fn(&Triple) -> bool,
{
    let (Some(b1), Some(b2)) = (idx1.get(key1), idx2.get(key2)) else {
        return Box::new(empty());
    };
    let bucket = if b1.len() <= b2.len() { b1 } else { b2 };
    let matching: Vec<&'a Triple> = bucket.iter().filter(|t| filter(t)).collect();
    Box::new(matching.into_iter())
}

fn lookup<'a, K: Eq + Hash>(index: &'a HashMap<K, Bucket>, key: &K) -> Triples<'a> {
    match index.get(key) {
        Some(bucket) => Box::new(bucket.iter()),
        None => Box::new(empty()),
    }
}

/// Insert a triple in the bucket of `key`,
/// creating the bucket if necessary.
fn insert_in_index<K>(index: &mut HashMap<K, Bucket>, key: K, t: Triple)
where
    K: Eq + Hash,
{
    index.entry(key).or_default().insert(t);
}

/// Remove an existing triple from the bucket of `key`,
/// removing the bucket completely if it ends up empty.
fn remove_from_index<K>(index: &mut HashMap<K, Bucket>, key: &K, t: &Triple)
where
    K: Eq + Hash,
{
    let Some(bucket) = index.get_mut(key) else {
        debug_assert!(false, "triple {} missing from index", t);
        return;
    };
    let removed = bucket.remove(t);
    debug_assert!(removed, "triple {} missing from bucket", t);
    if bucket.is_empty() {
        index.remove(key);
    }
}
