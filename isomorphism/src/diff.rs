//! What it takes to turn one graph into another.

use std::fmt;

use tessel_inmem::Graph;
use tessel_term::Triple;

use crate::matcher::{GraphMatcher, Mapping, MatchMode, MatcherConfig};
use crate::msg::compute_msgs;
use crate::Result;

/// The result of [`GraphDiff::run`].
///
/// Ground triples are reported individually,
/// blank node triples are reported by [minimal spanning graph](crate::compute_msgs).
#[derive(Debug, Default)]
pub struct GraphDiffReport {
    are_equal: bool,
    are_different_sizes: bool,
    added_triples: Vec<Triple>,
    removed_triples: Vec<Triple>,
    added_msgs: Vec<Graph>,
    removed_msgs: Vec<Graph>,
    mapping: Mapping,
}

impl GraphDiffReport {
    /// Are both graphs equal (up to blank node renaming)?
    pub fn are_equal(&self) -> bool {
        self.are_equal
    }

    /// Do both graphs have a different number of triples?
    pub fn are_different_sizes(&self) -> bool {
        self.are_different_sizes
    }

    /// Ground triples to add to the first graph.
    pub fn added_triples(&self) -> &[Triple] {
        &self.added_triples
    }

    /// Ground triples to remove from the first graph.
    pub fn removed_triples(&self) -> &[Triple] {
        &self.removed_triples
    }

    /// Minimal spanning graphs of the second graph with no counterpart in the first one.
    pub fn added_msgs(&self) -> &[Graph] {
        &self.added_msgs
    }

    /// Minimal spanning graphs of the first graph with no counterpart in the second one.
    pub fn removed_msgs(&self) -> &[Graph] {
        &self.removed_msgs
    }

    /// The blank nodes of the first graph that have a counterpart in the second one.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Is there nothing to add nor to remove?
    pub fn is_empty(&self) -> bool {
        self.added_triples.is_empty()
            && self.removed_triples.is_empty()
            && self.added_msgs.is_empty()
            && self.removed_msgs.is_empty()
    }
}

impl fmt::Display for GraphDiffReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.are_equal {
            return writeln!(f, "graphs are equal");
        }
        for t in &self.removed_triples {
            writeln!(f, "- {}", t)?;
        }
        for t in &self.added_triples {
            writeln!(f, "+ {}", t)?;
        }
        for (sign, msgs) in [("-", &self.removed_msgs), ("+", &self.added_msgs)] {
            for msg in msgs {
                writeln!(f, "{} [", sign)?;
                write!(f, "{}", msg)?;
                writeln!(f, "]")?;
            }
        }
        Ok(())
    }
}

/// Computes the differences between two (possibly absent) graphs.
///
/// An absent graph differs from every graph, including the empty one.
#[derive(Clone, Debug)]
pub struct GraphDiff<'a> {
    a: Option<&'a Graph>,
    b: Option<&'a Graph>,
    config: MatcherConfig,
}

impl<'a> GraphDiff<'a> {
    /// What must be added to and removed from `a` to get `b`.
    pub fn new(a: Option<&'a Graph>, b: Option<&'a Graph>) -> Self {
        GraphDiff {
            a,
            b,
            config: MatcherConfig::default(),
        }
    }

    /// Use `config` for every comparison.
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Compute the report.
    pub fn run(&self) -> Result<GraphDiffReport> {
        let mut report = GraphDiffReport {
            are_different_sizes: self.a.map_or(0, Graph::len) != self.b.map_or(0, Graph::len),
            ..Default::default()
        };
        let (a, b) = match (self.a, self.b) {
            (None, None) => {
                report.are_equal = true;
                return Ok(report);
            }
            (Some(a), None) => {
                report.removed_triples = ground_triples(a, None);
                report.removed_msgs = compute_msgs(a)?;
                return Ok(report);
            }
            (None, Some(b)) => {
                report.added_triples = ground_triples(b, None);
                report.added_msgs = compute_msgs(b)?;
                return Ok(report);
            }
            (Some(a), Some(b)) => (a, b),
        };

        let equal = GraphMatcher::new(a, b, MatchMode::Equal)
            .with_config(self.config.clone())
            .find_mapping()?;
        if let Some(mapping) = equal {
            log::debug!("graphs {} and {} are equal", a.graph_id(), b.graph_id());
            report.are_equal = true;
            report.mapping = mapping;
            return Ok(report);
        }

        report.removed_triples = ground_triples(a, Some(b));
        report.added_triples = ground_triples(b, Some(a));

        let a_msgs = compute_msgs(a)?;
        let mut b_msgs: Vec<Option<Graph>> = compute_msgs(b)?.into_iter().map(Some).collect();
        for msg in a_msgs {
            let mut matched = false;
            for slot in b_msgs.iter_mut() {
                let Some(candidate) = slot.as_ref() else {
                    continue;
                };
                if candidate.len() != msg.len() {
                    continue;
                }
                let found = GraphMatcher::new(&msg, candidate, MatchMode::Equal)
                    .with_config(self.config.clone())
                    .find_mapping()?;
                if let Some(mapping) = found {
                    if merge_mapping(&mut report.mapping, mapping) {
                        *slot = None;
                        matched = true;
                        break;
                    }
                    log::trace!("conflicting mapping, trying next MSG");
                }
            }
            if !matched {
                report.removed_msgs.push(msg);
            }
        }
        report.added_msgs = b_msgs.into_iter().flatten().collect();
        log::debug!(
            "diff: -{} +{} ground triples, -{} +{} MSGs",
            report.removed_triples.len(),
            report.added_triples.len(),
            report.removed_msgs.len(),
            report.added_msgs.len()
        );
        Ok(report)
    }
}

/// The ground triples of `g` that are not in `other`, sorted.
fn ground_triples(g: &Graph, other: Option<&Graph>) -> Vec<Triple> {
    let mut ret: Vec<Triple> = g
        .triples()
        .filter(|t| t.is_ground() && !other.map_or(false, |o| o.contains(t)))
        .cloned()
        .collect();
    ret.sort();
    ret
}

/// Add `extra` to `global`, unless they disagree on some blank node.
fn merge_mapping(global: &mut Mapping, extra: Mapping) -> bool {
    let conflict = extra.iter().any(|(k, v)| match global.get(k) {
        Some(w) => w != v,
        None => global.values().any(|w| w == v),
    });
    if !conflict {
        global.extend(extra);
    }
    !conflict
}

#[cfg(test)]
mod test {
    use super::*;
    use tessel_term::{BlankNode, GraphId};

    #[test]
    fn merge_mapping_conflicts() {
        let (g1, g2) = (GraphId::fresh(), GraphId::fresh());
        let b = |id: &str, g| BlankNode::new(id, g).unwrap();
        let mut global = Mapping::new();
        assert!(merge_mapping(&mut global, [(b("a", g1), b("x", g2))].into()));
        assert!(merge_mapping(&mut global, [(b("a", g1), b("x", g2))].into()));
        assert!(!merge_mapping(&mut global, [(b("a", g1), b("y", g2))].into()));
        assert!(!merge_mapping(&mut global, [(b("c", g1), b("x", g2))].into()));
        assert!(merge_mapping(&mut global, [(b("c", g1), b("y", g2))].into()));
        assert_eq!(global.len(), 2);
    }

    #[test]
    fn absent_graphs() {
        let report = GraphDiff::new(None, None).run().unwrap();
        assert!(report.are_equal());
        assert!(!report.are_different_sizes());

        let empty = Graph::new();
        let report = GraphDiff::new(Some(&empty), None).run().unwrap();
        assert!(!report.are_equal());
        assert!(!report.are_different_sizes());
        assert!(report.is_empty());
    }
}
