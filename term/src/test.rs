use super::*;
use std::collections::HashMap;
use std::error::Error;
use test_case::test_case;

const EX_S: &str = "http://example.org/s";
const EX_P: &str = "http://example.org/p";

#[test]
fn node_kind_order() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    let var = f.create_variable_node("x")?;
    let bn = f.create_blank_node();
    let uri = f.create_uri_node(EX_S)?;
    let lit = f.create_literal_node("a");
    let gl = f.create_graph_literal_node(Vec::<Triple>::new());

    let mut nodes = vec![gl.clone(), lit.clone(), uri.clone(), bn.clone(), var.clone()];
    nodes.sort();
    assert_eq!(nodes, vec![var, bn, uri, lit, gl]);
    Ok(())
}

#[test]
fn order_within_kind() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    assert!(f.create_uri_node("http://a.example/")? < f.create_uri_node("http://b.example/")?);
    assert!(f.create_literal_node("a") < f.create_literal_node("b"));
    // datatyped literals sort before language-tagged ones with the same value
    assert!(f.create_literal_node("a") < f.create_literal_node_with_lang("a", "en")?);
    assert!(f.create_blank_node_with_id("a")? < f.create_blank_node_with_id("b")?);
    Ok(())
}

#[test]
fn interning() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    let n1 = f.create_uri_node(EX_S)?;
    let len = f.stash_len();
    let n2 = f.create_uri_node(EX_S)?;
    assert_eq!(n1, n2);
    assert_eq!(f.stash_len(), len);
    let (Node::Uri(i1), Node::Uri(i2)) = (&n1, &n2) else {
        panic!("expected URIs");
    };
    assert!(std::ptr::eq(i1.as_str(), i2.as_str()));
    Ok(())
}

#[test_case("s"; "no scheme")]
#[test_case("../foo"; "relative path")]
fn relative_uri(iri: &str) {
    let mut f = NodeFactory::new();
    assert_eq!(
        f.create_uri_node(iri),
        Err(TermError::RelativeIri(iri.to_string()))
    );
}

#[test]
fn invalid_uri() {
    let mut f = NodeFactory::new();
    assert!(matches!(
        f.create_uri_node("http://exa mple.org/"),
        Err(TermError::InvalidIri { .. })
    ));
}

#[test]
fn empty_blank_id() {
    let mut f = NodeFactory::new();
    assert_eq!(
        f.create_blank_node_with_id(""),
        Err(TermError::InvalidBlankNodeId("".to_string()))
    );
}

#[test]
fn fresh_blank_ids_skip_used_ones() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    f.create_blank_node_with_id("autos1")?;
    f.reserve_blank_id("autos3");
    let b1 = f.create_blank_node();
    let b2 = f.create_blank_node();
    assert_eq!(b1.as_blank().unwrap().id(), "autos2");
    assert_eq!(b2.as_blank().unwrap().id(), "autos4");
    assert_eq!(b1.scope(), Some(f.graph_id()));
    Ok(())
}

#[test]
fn same_explicit_id_same_node() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    assert_eq!(f.create_blank_node_with_id("b")?, f.create_blank_node_with_id("b")?);
    let mut g = NodeFactory::new();
    assert_ne!(f.create_blank_node_with_id("b")?, g.create_blank_node_with_id("b")?);
    Ok(())
}

#[test]
fn triple_mixed_scopes() -> Result<(), Box<dyn Error>> {
    let mut f1 = NodeFactory::new();
    let mut f2 = NodeFactory::new();
    let b1 = f1.create_blank_node();
    let b2 = f2.create_blank_node();
    let p = f1.create_uri_node(EX_P)?;
    assert!(matches!(
        Triple::new(b1.clone(), p.clone(), b2),
        Err(TermError::MixedScopes(_))
    ));
    // URIs and literals are not scoped
    let o = f2.create_literal_node("o");
    assert!(Triple::new(b1, p, o).is_ok());
    Ok(())
}

#[test]
fn triple_basics() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    let s = f.create_uri_node(EX_S)?;
    let p = f.create_uri_node(EX_P)?;
    let o = f.create_literal_node("o");
    let b = f.create_blank_node_with_id("b")?;

    let t1 = Triple::new(s.clone(), p.clone(), o.clone())?;
    let t2 = Triple::new(s.clone(), p.clone(), o.clone())?;
    assert_eq!(t1, t2);
    assert_eq!(t1.hash_code(), t2.hash_code());
    assert!(t1.is_ground());
    assert_eq!(t1.scope(), None);
    assert!(t1.involves(&o));
    assert!(!t1.involves(&b));
    assert_eq!(
        t1.to_string(),
        r#"<http://example.org/s> , <http://example.org/p> , "o""#
    );

    let t3 = Triple::new(b.clone(), p.clone(), o)?;
    assert!(!t3.is_ground());
    assert_eq!(t3.scope(), Some(f.graph_id()));
    assert!(t3 < t1); // blank nodes sort before URIs
    assert_eq!(t3.to_string(), r#"_:b , <http://example.org/p> , "o""#);
    Ok(())
}

#[test]
fn triple_substitute() -> Result<(), Box<dyn Error>> {
    let mut f1 = NodeFactory::new();
    let mut f2 = NodeFactory::new();
    let a = f1.create_blank_node_with_id("a")?;
    let c = f1.create_blank_node_with_id("c")?;
    let p = f1.create_uri_node(EX_P)?;
    let x = f2.create_blank_node_with_id("x")?;
    let y = f2.create_blank_node_with_id("y")?;

    let mut map = HashMap::new();
    map.insert(a.as_blank().unwrap().clone(), x.as_blank().unwrap().clone());
    map.insert(c.as_blank().unwrap().clone(), y.as_blank().unwrap().clone());

    let t = Triple::new(a.clone(), p.clone(), c.clone())?;
    assert_eq!(t.substitute(&map)?, Triple::new(x.clone(), p.clone(), y)?);

    map.remove(c.as_blank().unwrap());
    assert!(t.substitute(&map).is_err());
    Ok(())
}

#[test]
fn copy_node_rebinds_blank_nodes() -> Result<(), Box<dyn Error>> {
    let mut f1 = NodeFactory::new();
    let mut f2 = NodeFactory::new();
    let b = f1.create_blank_node_with_id("b")?;
    let copied = f2.copy_node(&b);
    assert_ne!(b, copied);
    assert_eq!(copied.as_blank().unwrap().id(), "b");
    assert_eq!(copied.scope(), Some(f2.graph_id()));
    // the copied identifier is now reserved in f2
    let fresh = f2.create_blank_node();
    assert_ne!(fresh, copied);

    let lit = f1.create_literal_node_with_lang("chat", "fr")?;
    assert_eq!(f2.copy_node(&lit), lit);
    Ok(())
}

#[test]
fn graph_literal() -> Result<(), Box<dyn Error>> {
    let mut f = NodeFactory::new();
    let s = f.create_uri_node(EX_S)?;
    let p = f.create_uri_node(EX_P)?;
    let t1 = Triple::new(s.clone(), p.clone(), f.create_literal_node("1"))?;
    let t2 = Triple::new(s, p, f.create_literal_node("2"))?;
    let g1 = f.create_graph_literal_node(vec![t2.clone(), t1.clone()]);
    let g2 = f.create_graph_literal_node(vec![t1, t2]);
    assert_eq!(g1, g2);
    let Node::GraphLiteral(gl) = &g1 else {
        panic!("expected a graph literal");
    };
    assert_eq!(gl.len(), 2);
    assert!(g1.to_string().starts_with("{ <http://example.org/s>"));
    Ok(())
}

/// A graph literal made of `_:s <p> _:o` triples, built in a factory of its own.
fn formula(edges: &[(&str, &str)]) -> Result<Node, Box<dyn Error>> {
    let mut f = NodeFactory::new();
    let p = f.create_uri_node(EX_P)?;
    let mut triples = vec![];
    for (s, o) in edges {
        let s = f.create_blank_node_with_id(s)?;
        let o = f.create_blank_node_with_id(o)?;
        triples.push(Triple::new(s, p.clone(), o)?);
    }
    Ok(f.create_graph_literal_node(triples))
}

#[test]
fn graph_literal_blank_nodes() -> Result<(), Box<dyn Error>> {
    let mut f1 = NodeFactory::new();
    let mut f2 = NodeFactory::new();
    let build = |f: &mut NodeFactory| -> Result<Node, Box<dyn Error>> {
        let b = f.create_blank_node();
        let p = f.create_uri_node(EX_P)?;
        let o = f.create_literal_node("o");
        Ok(f.create_graph_literal_node(vec![Triple::new(b, p, o)?]))
    };
    f2.create_blank_node();
    let g1 = build(&mut f1)?;
    let g2 = build(&mut f2)?;
    assert_eq!(g1, g2);

    let Node::GraphLiteral(gl) = &g1 else {
        panic!("expected a graph literal");
    };
    let t = gl.triples().next().unwrap();
    assert_eq!(t.scope(), Some(GraphId::FORMULA));
    assert_eq!(t.s().as_blank().unwrap().id(), "f0");
    Ok(())
}

#[test_case(&[("a", "b"), ("b", "c"), ("c", "a")], &[("z", "x"), ("x", "y"), ("y", "z")], true; "rotated cycle")]
#[test_case(&[("a", "b"), ("b", "c")], &[("c", "b"), ("b", "a")], true; "reversed chain")]
#[test_case(&[("a", "a"), ("b", "c")], &[("c", "b"), ("b", "b")], true; "loop and edge")]
#[test_case(&[("a", "b"), ("b", "c"), ("c", "a")], &[("a", "b"), ("b", "a"), ("c", "c")], false; "cycle vs short cycle and loop")]
#[test_case(&[("a", "b"), ("b", "c")], &[("a", "b"), ("c", "b")], false; "chain vs converging edges")]
fn graph_literal_isomorphic(
    edges1: &[(&str, &str)],
    edges2: &[(&str, &str)],
    expected: bool,
) -> Result<(), Box<dyn Error>> {
    let g1 = formula(edges1)?;
    let g2 = formula(edges2)?;
    assert_eq!(g1 == g2, expected);
    Ok(())
}

#[test]
fn graph_literal_many_interchangeable_blank_nodes() -> Result<(), Box<dyn Error>> {
    let ids1: Vec<String> = (0..12).map(|i| format!("b{}", i)).collect();
    let ids2: Vec<String> = (0..12).map(|i| format!("x{}", 11 - i)).collect();
    let edges1: Vec<(&str, &str)> = ids1.iter().map(|b| (b.as_str(), "o")).collect();
    let edges2: Vec<(&str, &str)> = ids2.iter().map(|b| (b.as_str(), "o")).collect();
    let g1 = formula(&edges1)?;
    assert_eq!(g1, formula(&edges2)?);
    let Node::GraphLiteral(gl) = &g1 else {
        panic!("expected a graph literal");
    };
    assert_eq!(gl.len(), 12);
    Ok(())
}
