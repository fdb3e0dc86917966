//! Graph literals (Notation3 formulae): sets of triples used as nodes.
//!
//! The blank nodes of a graph literal are relabelled when it is built,
//! in a canonical way and in the [`GraphId::FORMULA`] scope.
//! Hence two graph literals are equal iff their triples are equal
//! up to the renaming of their blank nodes.
//!
//! Canonical labels are computed by colour refinement:
//! blank nodes are partitioned by the shape of the triples they appear in,
//! until the partition is stable.
//! Classes that are left with several members (automorphic nodes, or nodes that refinement can not tell apart)
//! are split by giving one member a colour of its own, trying each member in turn,
//! and keeping the relabelling that yields the smallest sequence of triples.

use super::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Prefix of the canonical identifiers of blank nodes in graph literals.
pub const FORMULA_ID_PREFIX: &str = "f";

/// An immutable, ordered set of triples used as a node.
///
/// A graph literal is a self-contained value:
/// its blank nodes belong to the [`GraphId::FORMULA`] scope,
/// and are never rebound when the graph literal is copied into another graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphLiteral(Arc<BTreeSet<Triple>>);

impl GraphLiteral {
    /// Build a graph literal from the given triples.
    ///
    /// Blank nodes are identified by their identifier and scope,
    /// then relabelled canonically.
    pub fn new<I: IntoIterator<Item = Triple>>(triples: I) -> Self {
        let triples: BTreeSet<Triple> = triples.into_iter().collect();
        let triples = match canonical_labels(&triples) {
            None => triples,
            Some(labels) => triples.iter().map(|t| relabel(t, &labels)).collect(),
        };
        GraphLiteral(Arc::new(triples))
    }

    /// The number of triples in this graph literal.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is this graph literal empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the triples of this graph literal, in order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.0.iter()
    }
}

impl fmt::Display for GraphLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for t in self.0.iter() {
            write!(f, " {} .", t)?;
        }
        f.write_str(" }")
    }
}

/// A position in a triple, as seen from one of its blank nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Slot<'a> {
    This,
    Blank(usize),
    Ground(&'a Node),
}

/// The colour of each blank node; colours are ranks, starting at 0.
type Colouring<'a> = BTreeMap<&'a BlankNode, usize>;

/// The triples each blank node appears in.
type Occurrences<'a> = BTreeMap<&'a BlankNode, Vec<&'a Triple>>;

/// Compute the canonical blank node of each blank node in `triples`.
///
/// Return `None` if `triples` contains no blank node.
fn canonical_labels(triples: &BTreeSet<Triple>) -> Option<HashMap<BlankNode, BlankNode>> {
    let mut occurrences = Occurrences::new();
    for t in triples {
        for b in t.blank_nodes() {
            let ts = occurrences.entry(b).or_default();
            if ts.last() != Some(&t) {
                ts.push(t);
            }
        }
    }
    if occurrences.is_empty() {
        return None;
    }
    let uniform = occurrences.keys().map(|b| (*b, 0)).collect();
    let mut best = None;
    individualize(
        triples,
        &occurrences,
        refine(&occurrences, uniform),
        &mut best,
    );
    let (_, colouring) = best?;
    Some(
        colouring
            .into_iter()
            .map(|(b, c)| (b.clone(), canonical_node(c)))
            .collect(),
    )
}

fn canonical_node(colour: usize) -> BlankNode {
    let id = format!("{}{}", FORMULA_ID_PREFIX, colour);
    BlankNode::new_unchecked(Arc::from(id), GraphId::FORMULA)
}

fn relabel(t: &Triple, labels: &HashMap<BlankNode, BlankNode>) -> Triple {
    let [s, p, o] = t.spo().map(|n| match n.as_blank().and_then(|b| labels.get(b)) {
        Some(b) => Node::Blank(b.clone()),
        None => n.clone(),
    });
    Triple::new_unchecked(s, p, o)
}

/// Split colour classes until all blank nodes in a class
/// appear in triples of the same shape.
fn refine<'a>(occurrences: &Occurrences<'a>, mut colouring: Colouring<'a>) -> Colouring<'a> {
    loop {
        let signatures: BTreeMap<&BlankNode, (usize, Vec<[Slot; 3]>)> = occurrences
            .iter()
            .map(|(b, ts)| {
                let mut shapes: Vec<[Slot; 3]> = ts
                    .iter()
                    .map(|t| {
                        t.spo().map(|n| match n {
                            Node::Blank(other) if other == *b => Slot::This,
                            Node::Blank(other) => Slot::Blank(colouring[other]),
                            _ => Slot::Ground(n),
                        })
                    })
                    .collect();
                shapes.sort();
                (*b, (colouring[*b], shapes))
            })
            .collect();
        let ranks: BTreeMap<&(usize, Vec<[Slot; 3]>), usize> = signatures
            .values()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(rank, sig)| (sig, rank))
            .collect();
        let stable = ranks.len() == colour_count(&colouring);
        let next = signatures
            .iter()
            .map(|(b, sig)| (*b, ranks[sig]))
            .collect();
        if stable {
            return next;
        }
        colouring = next;
    }
}

fn colour_count(colouring: &Colouring) -> usize {
    colouring.values().collect::<BTreeSet<_>>().len()
}

/// Explore every way to break the ties left in `colouring`,
/// keeping in `best` the one yielding the smallest relabelled triples.
fn individualize<'a>(
    triples: &BTreeSet<Triple>,
    occurrences: &Occurrences<'a>,
    colouring: Colouring<'a>,
    best: &mut Option<(Vec<Triple>, Colouring<'a>)>,
) {
    let mut classes = BTreeMap::<usize, Vec<&BlankNode>>::new();
    for (b, c) in &colouring {
        classes.entry(*c).or_default().push(*b);
    }
    match classes.into_iter().find(|(_, members)| members.len() > 1) {
        None => {
            let labels: HashMap<BlankNode, BlankNode> = colouring
                .iter()
                .map(|(b, c)| ((*b).clone(), canonical_node(*c)))
                .collect();
            let mut candidate: Vec<Triple> = triples.iter().map(|t| relabel(t, &labels)).collect();
            candidate.sort();
            if best.as_ref().map_or(true, |(smallest, _)| candidate < *smallest) {
                *best = Some((candidate, colouring));
            }
        }
        Some((colour, members)) => {
            log::trace!("graph literal: breaking a tie between {} blank nodes", members.len());
            let mut representatives: Vec<&BlankNode> = vec![];
            for b in members {
                if !representatives
                    .iter()
                    .any(|r| interchangeable(triples, occurrences, r, b))
                {
                    representatives.push(b);
                }
            }
            for chosen in representatives {
                let split = colouring
                    .iter()
                    .map(|(b, c)| {
                        let shifted = *c > colour || (*c == colour && *b != chosen);
                        (*b, if shifted { c + 1 } else { *c })
                    })
                    .collect();
                individualize(triples, occurrences, refine(occurrences, split), best);
            }
        }
    }
}

/// Is exchanging `x` and `y` an automorphism of `triples`?
///
/// If so, individualizing either of them leads to the same relabelling.
fn interchangeable(
    triples: &BTreeSet<Triple>,
    occurrences: &Occurrences,
    x: &BlankNode,
    y: &BlankNode,
) -> bool {
    let swap = |n: &Node| match n {
        Node::Blank(b) if b == x => Node::Blank(y.clone()),
        Node::Blank(b) if b == y => Node::Blank(x.clone()),
        _ => n.clone(),
    };
    occurrences[x]
        .iter()
        .chain(occurrences[y].iter())
        .all(|t| {
            let [s, p, o] = t.spo().map(&swap);
            triples.contains(&Triple::new_unchecked(s, p, o))
        })
}
