//! Minimal spanning graphs.
//!
//! The non-ground triples of a graph are partitioned into
//! connected components, two triples being connected when they share a blank node.
//! Each component (MSG) can be compared independently of the others.

use std::collections::{HashSet, VecDeque};

use tessel_inmem::{Graph, Result};
use tessel_term::{Node, Triple};

/// Split the non-ground triples of `graph` into its minimal spanning graphs,
/// smallest first.
///
/// Each MSG shares the blank node scope of `graph`.
pub fn compute_msgs(graph: &Graph) -> Result<Vec<Graph>> {
    let mut msgs = Vec::new();
    for component in components(graph) {
        msgs.push(graph.scoped_subgraph(component)?);
    }
    log::debug!("graph {} has {} MSGs", graph.graph_id(), msgs.len());
    Ok(msgs)
}

/// The connected components of the non-ground triples of `graph`, smallest first.
pub(crate) fn components(graph: &Graph) -> Vec<Vec<&Triple>> {
    let mut seeds: Vec<&Triple> = graph.triples().filter(|t| !t.is_ground()).collect();
    seeds.sort();
    let mut seen: HashSet<&Triple> = HashSet::with_capacity(seeds.len());
    let mut components = Vec::new();
    for seed in seeds {
        if !seen.insert(seed) {
            continue;
        }
        let mut component = vec![];
        let mut queue = VecDeque::from([seed]);
        while let Some(t) = queue.pop_front() {
            component.push(t);
            for n in t.spo().into_iter().filter(|n| n.is_blank()) {
                for t2 in graph.triples_involving(n) {
                    if seen.insert(t2) {
                        queue.push_back(t2);
                    }
                }
            }
        }
        components.push(component);
    }
    components.sort_by_key(Vec::len);
    components
}

/// The distinct blank nodes of `triples`, in order of first occurrence.
pub(crate) fn blank_nodes_of<'a, I>(triples: I) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut seen = HashSet::new();
    triples
        .into_iter()
        .flat_map(|t| t.spo())
        .filter(|n| n.is_blank() && seen.insert(*n))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn build(triples: &[[&str; 3]]) -> Graph {
        let mut g = Graph::new();
        for spo in triples {
            let [s, p, o] = spo.map(|txt| match txt.strip_prefix("_:") {
                Some(id) => g.create_blank_node_with_id(id).unwrap(),
                None => g.create_uri_node(txt).unwrap(),
            });
            g.assert(Triple::new(s, p, o).unwrap()).unwrap();
        }
        g
    }

    #[test]
    fn no_msg_in_ground_graph() {
        let g = build(&[["x:a", "x:p", "x:b"], ["x:b", "x:p", "x:c"]]);
        assert!(compute_msgs(&g).unwrap().is_empty());
    }

    #[test]
    fn msgs_are_connected_components() {
        let g = build(&[
            ["x:a", "x:p", "x:b"],
            ["_:a", "x:p", "_:b"],
            ["_:b", "x:p", "_:c"],
            ["_:c", "x:q", "x:d"],
            ["_:d", "x:p", "x:a"],
            ["x:a", "x:p", "_:e"],
            ["_:e", "x:q", "_:e"],
        ]);
        let msgs = compute_msgs(&g).unwrap();
        assert_eq!(
            msgs.iter().map(Graph::len).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for msg in &msgs {
            assert_eq!(msg.graph_id(), g.graph_id());
        }
        assert_eq!(msgs.iter().map(Graph::len).sum::<usize>(), g.len() - 1);
    }

    #[test]
    fn blank_nodes_in_order() {
        let g = build(&[["_:b", "x:p", "_:a"], ["_:a", "x:p", "_:b"]]);
        let mut triples: Vec<_> = g.triples().collect();
        triples.sort();
        let ids: Vec<_> = blank_nodes_of(triples)
            .into_iter()
            .filter_map(Node::as_blank)
            .map(|b| b.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
