use super::*;
use std::error::Error;
use tessel_inmem::{Graph, ThreadSafeGraph};
use tessel_term::{ns, Node, Triple};
use test_case::test_case;

/// `_:x` is a blank node, `"x"` a literal, anything else a relative IRI.
fn node(g: &mut Graph, txt: &str) -> Node {
    if let Some(id) = txt.strip_prefix("_:") {
        g.create_blank_node_with_id(id).unwrap()
    } else if let Some(lit) = txt.strip_prefix('"') {
        g.create_literal_node(lit.trim_end_matches('"'))
    } else {
        g.create_uri_node(&format!("http://example.org/{}", txt)).unwrap()
    }
}

fn graph(triples: &[[&str; 3]]) -> Graph {
    let mut g = Graph::new();
    for spo in triples {
        let [s, p, o] = spo.map(|txt| node(&mut g, txt));
        g.assert(Triple::new(s, p, o).unwrap()).unwrap();
    }
    g
}

fn foaf(alice: &str, bob: &str) -> Graph {
    graph(&[
        [alice, "name", "\"alice\""],
        [alice, "mbox", "mailto"],
        [alice, "knows", bob],
        [bob, "name", "\"bob\""],
        [bob, "knows", alice],
    ])
}

fn cycle(ids: &[&str]) -> Graph {
    let triples: Vec<[&str; 3]> = ids
        .iter()
        .zip(ids.iter().cycle().skip(1))
        .map(|(a, b)| [*a, "next", *b])
        .collect();
    graph(&triples)
}

/// An RDF list of `n` cells, whose blank node ids are given by `id`.
fn list(n: usize, id: impl Fn(usize) -> String) -> Graph {
    let mut g = Graph::new();
    let first = g.create_uri_node(ns::rdf::FIRST).unwrap();
    let rest = g.create_uri_node(ns::rdf::REST).unwrap();
    let nil = g.create_uri_node(ns::rdf::NIL).unwrap();
    let cells: Vec<Node> = (0..n)
        .map(|i| g.create_blank_node_with_id(&id(i)).unwrap())
        .collect();
    for (i, cell) in cells.iter().enumerate() {
        let value = g.create_literal_node(&format!("v{}", i));
        let next = cells.get(i + 1).unwrap_or(&nil).clone();
        g.assert(Triple::new(cell.clone(), first.clone(), value).unwrap())
            .unwrap();
        g.assert(Triple::new(cell.clone(), rest.clone(), next).unwrap())
            .unwrap();
    }
    let s = node(&mut g, "s");
    let p = node(&mut g, "p");
    g.assert(Triple::new(s, p, cells[0].clone()).unwrap()).unwrap();
    g
}

#[test]
fn reflexivity() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g = foaf("_:a", "_:b");
    let (equal, mapping) = g.equals(&g)?;
    assert!(equal);
    let mapping = mapping.unwrap();
    assert_eq!(mapping.len(), 2);
    for (k, v) in &mapping {
        assert_eq!(k, v);
    }

    let copy = g.clone();
    let mapping = g.equals(&copy)?.1.unwrap();
    for (k, v) in &mapping {
        assert_eq!(k.id(), v.id());
        assert_eq!(v.graph(), copy.graph_id());
    }
    Ok(())
}

#[test]
fn symmetry() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g1 = foaf("_:alice", "_:bob");
    let g2 = foaf("_:b2", "_:b1");
    let m12 = g1.equals(&g2)?.1.unwrap();
    let m21 = g2.equals(&g1)?.1.unwrap();
    assert_eq!(m12.len(), 2);
    for (k, v) in &m12 {
        assert_eq!(m21.get(v), Some(k));
    }
    let alice = g1.get_blank_node("alice").unwrap().as_blank().unwrap();
    assert_eq!(m12[alice].id(), "b2");

    let g3 = foaf("_:x", "bob");
    assert!(!g1.equals(&g3)?.0);
    assert!(!g3.equals(&g1)?.0);
    Ok(())
}

#[test]
fn ground_graphs() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g1 = foaf("alice", "bob");
    assert!(g1.equals(&foaf("alice", "bob"))?.0);
    assert_eq!(g1.equals(&foaf("alice", "bob"))?.1, Some(Mapping::new()));
    assert!(!g1.equals(&foaf("alice", "carol"))?.0);

    // two independently built graphs with the same typed literal
    let typed = || -> Result<Graph, Box<dyn Error>> {
        let mut g = Graph::new();
        let s = g.create_uri_node("http://example.org/s")?;
        let p = g.create_uri_node("http://example.org/p")?;
        let o = g.create_literal_node_with_datatype("42", &tessel_term::Iri::new(ns::xsd::INT)?);
        g.assert(Triple::new(s, p, o)?)?;
        Ok(g)
    };
    assert_eq!(typed()?.equals(&typed()?)?, (true, Some(Mapping::new())));
    Ok(())
}

/// `<s> <p> { _:x <q> o }`, where `_:x` is minted by the outer graph under the id `inner`.
fn quoted(inner: &str, o: &str) -> Graph {
    let mut g = Graph::new();
    let x = node(&mut g, &format!("_:{}", inner));
    let q = node(&mut g, "q");
    let o = node(&mut g, o);
    let formula = g.create_graph_literal_node(vec![Triple::new(x, q, o).unwrap()]);
    let s = node(&mut g, "s");
    let p = node(&mut g, "p");
    g.assert(Triple::new(s, p, formula).unwrap()).unwrap();
    g
}

#[test]
fn graph_literals_with_blank_nodes() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g1 = quoted("x", "o");
    let g2 = quoted("y", "o");
    assert_eq!(g1.equals(&g2)?, (true, Some(Mapping::new())));
    assert!(g1.is_subgraph_of(&g2)?);
    let report = g1.difference(&g2)?;
    assert!(report.are_equal());
    assert!(report.is_empty());

    let g3 = quoted("x", "other");
    assert!(!g1.equals(&g3)?.0);
    let report = g1.difference(&g3)?;
    assert_eq!(report.removed_triples().len(), 1);
    assert_eq!(report.added_triples().len(), 1);
    Ok(())
}

#[test_case(&["a", "b", "c", "d"], &["x", "y", "z", "w"] => true ; "renamed cycle")]
#[test_case(&["a", "b", "c", "d"], &["x", "y", "z"] => false ; "shorter cycle")]
fn cycles(ids1: &[&str], ids2: &[&str]) -> bool {
    let as_blanks = |ids: &[&str]| ids.iter().map(|id| format!("_:{}", id)).collect::<Vec<_>>();
    let (b1, b2) = (as_blanks(ids1), as_blanks(ids2));
    let g1 = cycle(&b1.iter().map(String::as_str).collect::<Vec<_>>());
    let g2 = cycle(&b2.iter().map(String::as_str).collect::<Vec<_>>());
    g1.equals(&g2).unwrap().0
}

#[test]
fn cycle_and_two_cycles() -> Result<(), Box<dyn Error>> {
    test_setup();
    // same size, same degrees, same signatures, but not isomorphic
    let g1 = cycle(&["_:a", "_:b", "_:c", "_:d"]);
    let mut g2 = cycle(&["_:x", "_:y"]);
    g2.merge(&cycle(&["_:z", "_:w"]), false)?;
    assert_eq!(g1.len(), g2.len());
    assert!(!g1.equals(&g2)?.0);
    assert!(!g2.equals(&g1)?.0);
    assert!(!g1.is_subgraph_of(&g2)?);
    Ok(())
}

#[test]
fn divide_and_conquer() -> Result<(), Box<dyn Error>> {
    test_setup();
    let mut g1 = cycle(&["_:a", "_:b", "_:c"]);
    g1.merge(&cycle(&["_:d", "_:e"]), false)?;
    let mut g2 = cycle(&["_:x", "_:y"]);
    g2.merge(&cycle(&["_:z", "_:w", "_:v"]), false)?;
    assert_eq!(compute_msgs(&g1)?.len(), 2);

    for enabled in [true, false] {
        let config = MatcherConfig::new().with_divide_and_conquer(enabled);
        let matcher = GraphMatcher::new(&g1, &g2, MatchMode::Equal).with_config(config);
        let mapping = matcher.find_mapping()?.unwrap();
        assert_eq!(mapping.len(), 5);
        assert!(matcher.check_mapping(&mapping));
    }
    Ok(())
}

#[test]
fn long_lists() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g1 = list(50, |i| format!("c{}", i));
    let g2 = list(50, |i| format!("d{}", 49 - i));
    let mapping = g1.equals(&g2)?.1.unwrap();
    assert_eq!(mapping.len(), 50);
    let c3 = g1.get_blank_node("c3").unwrap().as_blank().unwrap();
    assert_eq!(mapping[c3].id(), "d46");

    let shorter = list(49, |i| format!("c{}", i));
    assert!(!g1.equals(&shorter)?.0);
    assert!(!shorter.is_subgraph_of(&g1)?);
    Ok(())
}

/// An RDF list of `n` cells `_:<prefix><i>`, all holding the same value.
fn uniform_list(n: usize, prefix: &str) -> Graph {
    let ids: Vec<String> = (0..n).map(|i| format!("_:{}{}", prefix, i)).collect();
    let mut triples = vec![["s", "p", ids[0].as_str()]];
    for (i, id) in ids.iter().enumerate() {
        triples.push([id.as_str(), "first", "\"x\""]);
        triples.push([id.as_str(), "rest", ids.get(i + 1).map_or("nil", String::as_str)]);
    }
    graph(&triples)
}

#[test]
fn long_uniform_lists() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g1 = uniform_list(1000, "c");
    let g2 = uniform_list(1000, "d");
    // every blank node is forced from the head of the list, without any search
    let config = MatcherConfig::new().with_search_budget(Some(0));
    let matcher = GraphMatcher::new(&g1, &g2, MatchMode::Equal).with_config(config);
    let mapping = matcher.find_mapping()?.unwrap();
    assert_eq!(mapping.len(), 1000);
    let c7 = g1.get_blank_node("c7").unwrap().as_blank().unwrap();
    assert_eq!(mapping[c7].id(), "d7");

    let shorter = uniform_list(999, "d");
    assert!(!g1.equals(&shorter)?.0);
    Ok(())
}

#[test]
fn many_independent_blank_nodes() -> Result<(), Box<dyn Error>> {
    test_setup();
    let mut t1 = vec![];
    let mut t2 = vec![];
    let values = ["\"a\"", "\"b\"", "\"c\""];
    let (ids1, ids2): (Vec<_>, Vec<_>) = (0..30).map(|i| (format!("_:n{}", i), format!("_:m{}", i))).unzip();
    for i in 0..30 {
        t1.push([ids1[i].as_str(), "p", values[i % 3]]);
        t2.push([ids2[29 - i].as_str(), "p", values[i % 3]]);
    }
    let g1 = graph(&t1);
    let g2 = graph(&t2);
    assert!(g1.equals(&g2)?.0);

    t2[0][2] = "\"b\"";
    let g3 = graph(&t2);
    assert!(!g1.equals(&g3)?.0);
    Ok(())
}

#[test]
fn subgraph_monotonicity() -> Result<(), Box<dyn Error>> {
    test_setup();
    let h = foaf("_:a", "_:b");
    let mut g = Graph::new();
    g.merge(&h, false)?;
    let extra = graph(&[["s", "p", "o"]]);
    g.merge(&extra, false)?;
    assert!(h.is_subgraph_of(&g)?);
    assert!(g.has_subgraph(&h)?);
    assert!(!g.is_subgraph_of(&h)?);
    assert!(!h.has_subgraph(&g)?);
    Ok(())
}

#[test]
fn subgraph_with_blank_nodes() -> Result<(), Box<dyn Error>> {
    test_setup();
    let parent = graph(&[
        ["s", "p", "_:u"],
        ["s", "p", "_:v"],
        ["_:u", "q", "\"z\""],
        ["_:v", "next", "_:v"],
    ]);
    let sub = graph(&[["s", "p", "_:a"], ["s", "p", "_:b"], ["_:b", "q", "\"z\""]]);
    assert!(sub.is_subgraph_of(&parent)?);

    let looping = graph(&[["_:a", "next", "_:a"]]);
    assert!(looping.is_subgraph_of(&parent)?);
    let pair = graph(&[["_:a", "next", "_:b"]]);
    assert!(!pair.is_subgraph_of(&parent)?);
    let three = graph(&[["s", "p", "_:a"], ["s", "p", "_:b"], ["s", "p", "_:c"]]);
    assert!(!three.is_subgraph_of(&parent)?);

    let s = parent.get_uri_node("http://example.org/s").unwrap().clone();
    let part = parent.scoped_subgraph(parent.triples_with_subject(&s))?;
    assert_eq!(part.len(), 2);
    assert!(part.is_subgraph_of(&parent)?);
    Ok(())
}

#[test]
fn all_blank_triple() {
    test_setup();
    let g1 = graph(&[["_:a", "_:b", "_:c"]]);
    let g2 = graph(&[["_:x", "_:y", "_:z"]]);
    assert!(matches!(g1.equals(&g2), Err(IsoError::AllBlankTriple(_))));
    assert!(matches!(g1.difference(&g2), Err(IsoError::AllBlankTriple(_))));
}

#[test]
fn search_budget() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g1 = cycle(&["_:a", "_:b", "_:c", "_:d"]);
    let mut g2 = cycle(&["_:x", "_:y"]);
    g2.merge(&cycle(&["_:z", "_:w"]), false)?;
    let config = MatcherConfig::new().with_search_budget(Some(1));
    let matcher = GraphMatcher::new(&g1, &g2, MatchMode::Equal).with_config(config);
    assert_eq!(matcher.find_mapping(), Err(IsoError::SearchBudgetExceeded(1)));

    let unbounded = GraphMatcher::new(&g1, &g2, MatchMode::Equal);
    assert_eq!(unbounded.find_mapping()?, None);
    Ok(())
}

#[test]
fn check_mapping() -> Result<(), Box<dyn Error>> {
    let g1 = foaf("_:a", "_:b");
    let g2 = foaf("_:x", "_:y");
    let matcher = GraphMatcher::new(&g1, &g2, MatchMode::Equal);
    let mapping = matcher.find_mapping()?.unwrap();
    assert!(matcher.check_mapping(&mapping));

    let swapped: Mapping = mapping
        .iter()
        .map(|(k, v)| {
            let other = mapping.values().find(|w| *w != v).unwrap();
            (k.clone(), other.clone())
        })
        .collect();
    assert!(!matcher.check_mapping(&swapped));

    let mut partial = mapping.clone();
    let a = g1.get_blank_node("a").unwrap().as_blank().unwrap();
    partial.remove(a);
    assert!(!matcher.check_mapping(&partial));
    Ok(())
}

#[test]
fn diff_idempotence() -> Result<(), Box<dyn Error>> {
    test_setup();
    let g = foaf("_:a", "bob");
    let report = g.difference(&g)?;
    assert!(report.are_equal());
    assert!(!report.are_different_sizes());
    assert!(report.is_empty());
    assert_eq!(report.mapping().len(), 1);
    Ok(())
}

#[test]
fn diff_ground_graphs() -> Result<(), Box<dyn Error>> {
    test_setup();
    let a = graph(&[["s", "p", "o1"], ["s", "p", "o2"], ["s", "q", "\"x\""]]);
    let b = graph(&[["s", "p", "o2"], ["s", "q", "\"x\""], ["s", "q", "\"y\""]]);
    let report = a.difference(&b)?;
    assert!(!report.are_equal());
    assert!(!report.are_different_sizes());
    assert_eq!(report.removed_triples().len(), 1);
    assert_eq!(report.added_triples().len(), 1);
    assert!(report.added_msgs().is_empty());

    let mut c = a.clone();
    c.retract_all(report.removed_triples());
    c.assert_all(report.added_triples().iter().cloned())?;
    assert!(c.equals(&b)?.0);
    Ok(())
}

#[test]
fn diff_non_lean_graph() -> Result<(), Box<dyn Error>> {
    test_setup();
    let rob = |ids: &[&str]| -> Result<Graph, Box<dyn Error>> {
        let mut g = Graph::new();
        let label = g.create_uri_node(ns::rdfs::LABEL)?;
        for id in ids {
            let b = g.create_blank_node_with_id(id)?;
            let name = g.create_literal_node("Rob");
            g.assert(Triple::new(b, label.clone(), name)?)?;
        }
        Ok(g)
    };
    let a = rob(&["b1"])?;
    let b = rob(&["b1", "b2"])?;

    let report = a.difference(&b)?;
    assert!(!report.are_equal());
    assert!(report.are_different_sizes());
    assert!(report.added_triples().is_empty());
    assert!(report.removed_triples().is_empty());
    assert!(report.removed_msgs().is_empty());
    assert_eq!(report.added_msgs().len(), 1);
    assert_eq!(report.added_msgs()[0].len(), 1);
    assert_eq!(report.mapping().len(), 1);
    assert!(a.is_subgraph_of(&b)?);
    assert!(!b.is_subgraph_of(&a)?);
    Ok(())
}

#[test]
fn diff_msgs() -> Result<(), Box<dyn Error>> {
    test_setup();
    let a = graph(&[
        ["s", "p", "o"],
        ["_:a", "name", "\"alice\""],
        ["_:a", "knows", "_:b"],
        ["_:c", "name", "\"carol\""],
    ]);
    let b = graph(&[
        ["s", "p", "o"],
        ["_:x", "name", "\"alice\""],
        ["_:x", "knows", "_:y"],
        ["_:z", "name", "\"dave\""],
    ]);
    let report = a.difference(&b)?;
    assert!(!report.are_equal());
    assert!(report.added_triples().is_empty() && report.removed_triples().is_empty());
    assert_eq!(report.removed_msgs().len(), 1);
    assert_eq!(report.added_msgs().len(), 1);
    assert!(report.removed_msgs()[0].get_literal_node("carol").is_some());
    assert!(report.added_msgs()[0].get_literal_node("dave").is_some());
    assert_eq!(report.mapping().len(), 2);
    assert!(report.to_string().contains("\"dave\""));
    Ok(())
}

#[test]
fn diff_absent_graph() -> Result<(), Box<dyn Error>> {
    let g = foaf("_:a", "bob");
    let report = GraphDiff::new(None, Some(&g)).run()?;
    assert!(!report.are_equal());
    assert!(report.are_different_sizes());
    // bob's name is the only ground triple
    assert_eq!(report.added_triples().len(), 1);
    assert_eq!(report.added_msgs().len(), 1);
    assert_eq!(report.added_msgs()[0].len(), 4);

    let report = GraphDiff::new(Some(&g), None).run()?;
    assert_eq!(report.removed_triples().len(), 1);
    assert_eq!(report.removed_msgs().len(), 1);
    Ok(())
}

#[test]
fn thread_safe_graph() -> Result<(), Box<dyn Error>> {
    let shared = ThreadSafeGraph::new(foaf("_:a", "_:b"));
    let other = foaf("_:c", "_:d");
    assert!(shared.equals(&other)?.0);
    assert!(shared.has_subgraph(&graph(&[["_:x", "knows", "_:y"]]))?);
    assert!(shared.difference(&other)?.are_equal());
    Ok(())
}
