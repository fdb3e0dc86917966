//! Comparison methods for graphs.

use tessel_inmem::{Graph, ThreadSafeGraph};

use crate::diff::{GraphDiff, GraphDiffReport};
use crate::matcher::{GraphMatcher, Mapping, MatchMode};
use crate::Result;

/// Comparison of a graph with another one, blank nodes being compared up to renaming.
///
/// All methods use the default [`MatcherConfig`](crate::MatcherConfig);
/// use [`GraphMatcher`] or [`GraphDiff`] directly to change it.
pub trait GraphCompare {
    /// Are both graphs equal, up to a bijective renaming of blank nodes?
    ///
    /// If they are, the renaming is returned, from the blank nodes of `self`
    /// to those of `other`.
    fn equals(&self, other: &Graph) -> Result<(bool, Option<Mapping>)>;

    /// Is every triple of `self` a triple of `other`,
    /// up to an injective renaming of blank nodes?
    fn is_subgraph_of(&self, other: &Graph) -> Result<bool>;

    /// Is every triple of `other` a triple of `self`,
    /// up to an injective renaming of blank nodes?
    fn has_subgraph(&self, other: &Graph) -> Result<bool>;

    /// What must be added to and removed from `self` to get `other`.
    fn difference(&self, other: &Graph) -> Result<GraphDiffReport>;
}

impl GraphCompare for Graph {
    fn equals(&self, other: &Graph) -> Result<(bool, Option<Mapping>)> {
        let mapping = GraphMatcher::new(self, other, MatchMode::Equal).find_mapping()?;
        Ok((mapping.is_some(), mapping))
    }

    fn is_subgraph_of(&self, other: &Graph) -> Result<bool> {
        let mapping = GraphMatcher::new(self, other, MatchMode::Subgraph).find_mapping()?;
        Ok(mapping.is_some())
    }

    fn has_subgraph(&self, other: &Graph) -> Result<bool> {
        other.is_subgraph_of(self)
    }

    fn difference(&self, other: &Graph) -> Result<GraphDiffReport> {
        GraphDiff::new(Some(self), Some(other)).run()
    }
}

impl GraphCompare for ThreadSafeGraph {
    fn equals(&self, other: &Graph) -> Result<(bool, Option<Mapping>)> {
        self.read(|g| g.equals(other))
    }

    fn is_subgraph_of(&self, other: &Graph) -> Result<bool> {
        self.read(|g| g.is_subgraph_of(other))
    }

    fn has_subgraph(&self, other: &Graph) -> Result<bool> {
        self.read(|g| g.has_subgraph(other))
    }

    fn difference(&self, other: &Graph) -> Result<GraphDiffReport> {
        self.read(|g| g.difference(other))
    }
}
