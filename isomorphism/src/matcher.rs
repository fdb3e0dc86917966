//! The matching engine behind [graph comparison](crate::GraphCompare).
//!
//! [`GraphMatcher`] looks for a mapping from the blank nodes of a *source* graph
//! to the blank nodes of a *target* graph,
//! under which every triple of the source is a triple of the target
//! ([`MatchMode::Subgraph`]), or under which both graphs have exactly the same triples
//! ([`MatchMode::Equal`]).
//!
//! The search goes through increasingly expensive stages,
//! each of them deciding as early as it can:
//! 1. trivial cases (sizes, same graph);
//! 2. ground triples, which must be found verbatim in the target;
//! 3. classification of blank nodes by degree and by local signature,
//!    which yields the list of candidates of each source blank node;
//! 4. mapping every blank node to the target blank node with the same identifier;
//! 5. *forced* mappings: blank nodes with a single candidate left,
//!    and triples with a single possible image
//!    (e.g. a blank node between two constants, or a unique dependency pair);
//! 6. *tentative* mappings: single-use, unique-degree and independent blank nodes
//!    are mapped to the first candidate consistent with their triples;
//! 7. (equality only) divide and conquer over the
//!    [minimal spanning graphs](crate::compute_msgs) of both graphs;
//! 8. backtracking search over the remaining candidates.
//!
//! Forced mappings hold in every solution, so they are never revisited.
//! Tentative mappings are only guesses: if they lead to no solution,
//! the search is started again from the forced mappings.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tessel_inmem::collection::Triples;
use tessel_inmem::Graph;
use tessel_term::{BlankNode, Node, Triple};

use crate::msg::{blank_nodes_of, components};
use crate::{IsoError, Result};

/// A mapping from the blank nodes of one graph to the blank nodes of another.
pub type Mapping = HashMap<BlankNode, BlankNode>;

/// What [`GraphMatcher`] is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// The source and the target have the same triples, once mapped.
    Equal,
    /// Every triple of the source is a triple of the target, once mapped.
    Subgraph,
}

/// Options for [`GraphMatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherConfig {
    search_budget: Option<u64>,
    divide_and_conquer: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            search_budget: None,
            divide_and_conquer: true,
        }
    }
}

impl MatcherConfig {
    /// The default configuration: no search budget, divide and conquer enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of assignments tried by the backtracking search.
    ///
    /// When the limit is reached, the search fails with
    /// [`IsoError::SearchBudgetExceeded`].
    /// `None` (the default) means no limit.
    pub fn with_search_budget(mut self, budget: Option<u64>) -> Self {
        self.search_budget = budget;
        self
    }

    /// The maximum number of assignments tried by the backtracking search.
    pub fn search_budget(&self) -> Option<u64> {
        self.search_budget
    }

    /// Enable or disable the comparison of minimal spanning graphs one by one.
    pub fn with_divide_and_conquer(mut self, enabled: bool) -> Self {
        self.divide_and_conquer = enabled;
        self
    }

    /// Whether minimal spanning graphs are compared one by one.
    pub fn divide_and_conquer(&self) -> bool {
        self.divide_and_conquer
    }
}

/// Finds a blank node mapping between two graphs.
///
/// ```
/// # use tessel_inmem::Graph;
/// # use tessel_isomorphism::{GraphMatcher, MatchMode};
/// # use tessel_term::Triple;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut g1 = Graph::new();
/// let s = g1.create_blank_node();
/// let p = g1.create_uri_node("http://example.org/p")?;
/// let o = g1.create_literal_node("o");
/// g1.assert(Triple::new(s, p, o)?)?;
/// let g2 = g1.clone();
///
/// let mapping = GraphMatcher::new(&g1, &g2, MatchMode::Equal).find_mapping()?;
/// assert_eq!(mapping.map(|m| m.len()), Some(1));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct GraphMatcher<'a> {
    source: &'a Graph,
    target: &'a Graph,
    mode: MatchMode,
    config: MatcherConfig,
}

impl<'a> GraphMatcher<'a> {
    /// A matcher from `source` to `target`, with the default configuration.
    pub fn new(source: &'a Graph, target: &'a Graph, mode: MatchMode) -> Self {
        GraphMatcher {
            source,
            target,
            mode,
            config: MatcherConfig::default(),
        }
    }

    /// Replace the configuration of this matcher.
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Look for a mapping from the blank nodes of the source
    /// to the blank nodes of the target.
    ///
    /// Return `None` if there is none.
    ///
    /// # Errors
    /// [`IsoError::AllBlankTriple`] if one of the graphs contains a triple
    /// made of three blank nodes (and the answer is not trivial);
    /// [`IsoError::SearchBudgetExceeded`] if the search gave up.
    pub fn find_mapping(&self) -> Result<Option<Mapping>> {
        let (source, target) = (self.source, self.target);
        if std::ptr::eq(source, target) {
            log::debug!("graph {} compared with itself", source.graph_id());
            let identity: Mapping = source
                .blank_nodes()
                .into_iter()
                .map(|b| (b.clone(), b.clone()))
                .collect();
            return Ok(Some(identity));
        }
        let sizes_ok = match self.mode {
            MatchMode::Equal => source.len() == target.len(),
            MatchMode::Subgraph => source.len() <= target.len(),
        };
        if !sizes_ok {
            log::debug!(
                "sizes rule out {:?}: {} vs {} triples",
                self.mode,
                source.len(),
                target.len()
            );
            return Ok(None);
        }

        // ground triples
        let mut src_triples = vec![];
        for t in source.triples() {
            if !t.is_ground() {
                src_triples.push(t);
            } else if !target.contains(t) {
                log::debug!("ground triple {} not in target", t);
                return Ok(None);
            }
        }
        let mut tgt_triples: Vec<&Triple> = target.triples().filter(|t| !t.is_ground()).collect();
        let counts_ok = match self.mode {
            MatchMode::Equal => src_triples.len() == tgt_triples.len(),
            MatchMode::Subgraph => src_triples.len() <= tgt_triples.len(),
        };
        if !counts_ok {
            log::debug!(
                "non-ground triples rule out {:?}: {} vs {}",
                self.mode,
                src_triples.len(),
                tgt_triples.len()
            );
            return Ok(None);
        }
        if src_triples.is_empty() {
            log::debug!("ground triples decide {:?}", self.mode);
            return Ok(Some(Mapping::new()));
        }
        src_triples.sort();
        tgt_triples.sort();

        // blank node classification
        let src = Side::analyze(source, src_triples)?;
        let tgt = Side::analyze(target, tgt_triples)?;
        let (src_hist, tgt_hist) = (src.histogram(), tgt.histogram());
        let degrees_ok = match self.mode {
            MatchMode::Equal => src_hist == tgt_hist,
            MatchMode::Subgraph => dominated(&src_hist, &tgt_hist),
        };
        if !degrees_ok {
            log::debug!("degree histograms differ: {:?} vs {:?}", src_hist, tgt_hist);
            return Ok(None);
        }
        let Some(candidates) = self.candidates(&src, &tgt) else {
            return Ok(None);
        };

        Search {
            mode: self.mode,
            config: &self.config,
            src,
            tgt,
            candidates,
        }
        .run()
    }

    /// Check that `mapping` maps the source onto the target
    /// (or into the target, for [`MatchMode::Subgraph`]).
    ///
    /// A mapping leaving some blank nodes of the source unmapped is rejected.
    pub fn check_mapping(&self, mapping: &Mapping) -> bool {
        let images: HashSet<&BlankNode> = mapping.values().collect();
        if images.len() != mapping.len() {
            return false;
        }
        let target = self.target.graph_id();
        let maps_into_target = |t: &Triple| match t.substitute(mapping) {
            Ok(image) => image.scope().map_or(true, |g| g == target) && self.target.contains(&image),
            Err(_) => false,
        };
        self.source.triples().all(maps_into_target)
            && (self.mode == MatchMode::Subgraph || self.source.len() == self.target.len())
    }

    fn candidates<'s>(&self, src: &Side<'s>, tgt: &Side<'s>) -> Option<Candidates<'s>> {
        let mut by_signature: BTreeMap<&[Shape], Vec<&Node>> = BTreeMap::new();
        if self.mode == MatchMode::Equal {
            for (c, other) in &tgt.blanks {
                by_signature.entry(&other.signature[..]).or_default().push(*c);
            }
        }
        let mut candidates = BTreeMap::new();
        for (b, info) in &src.blanks {
            let list: Vec<&Node> = match self.mode {
                MatchMode::Equal => by_signature
                    .get(&info.signature[..])
                    .cloned()
                    .unwrap_or_default(),
                MatchMode::Subgraph => tgt
                    .blanks
                    .iter()
                    .filter(|(_, other)| is_sub_multiset(&info.signature, &other.signature))
                    .map(|(c, _)| *c)
                    .collect(),
            };
            if list.is_empty() {
                log::debug!("no candidate for {}", b);
                return None;
            }
            log::trace!("{} has {} candidates", b, list.len());
            candidates.insert(*b, list);
        }
        Some(candidates)
    }
}

/// The candidates of each source blank node, sorted.
type Candidates<'a> = BTreeMap<&'a Node, Vec<&'a Node>>;

/// A triple seen from one of its blank nodes.
type Shape<'a> = [Slot<'a>; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Slot<'a> {
    This,
    Other,
    Ground(&'a Node),
}

#[derive(Debug, Default)]
struct BlankInfo<'a> {
    degree: usize,
    triples: Vec<&'a Triple>,
    signature: Vec<Shape<'a>>,
}

/// The non-ground part of a graph.
struct Side<'a> {
    graph: &'a Graph,
    triples: Vec<&'a Triple>,
    blanks: BTreeMap<&'a Node, BlankInfo<'a>>,
    dependent: BTreeSet<&'a Node>,
}

impl<'a> Side<'a> {
    fn analyze(graph: &'a Graph, triples: Vec<&'a Triple>) -> Result<Self> {
        let mut blanks: BTreeMap<&Node, BlankInfo> = BTreeMap::new();
        let mut pairs = BTreeSet::new();
        for &t in &triples {
            let bns: Vec<&Node> = t.spo().into_iter().filter(|n| n.is_blank()).collect();
            match bns[..] {
                [_, _, _] => return Err(IsoError::AllBlankTriple(t.to_string())),
                [a, b] if a != b => {
                    pairs.insert(if a < b { (a, b) } else { (b, a) });
                }
                _ => {}
            }
            for &n in &bns {
                blanks.entry(n).or_default().degree += 1;
            }
            for n in blank_nodes_of([t]) {
                let info = blanks.entry(n).or_default();
                info.triples.push(t);
                info.signature.push(t.spo().map(|m| {
                    if m == n {
                        Slot::This
                    } else if m.is_blank() {
                        Slot::Other
                    } else {
                        Slot::Ground(m)
                    }
                }));
            }
        }
        for info in blanks.values_mut() {
            info.signature.sort();
        }
        log::debug!(
            "graph {}: {} blank nodes in {} triples, {} dependency pairs",
            graph.graph_id(),
            blanks.len(),
            triples.len(),
            pairs.len()
        );
        let dependent = pairs.into_iter().flat_map(|(a, b)| [a, b]).collect();
        Ok(Side {
            graph,
            triples,
            blanks,
            dependent,
        })
    }

    /// Number of blank nodes per degree.
    fn histogram(&self) -> BTreeMap<usize, usize> {
        let mut hist = BTreeMap::new();
        for info in self.blanks.values() {
            *hist.entry(info.degree).or_insert(0) += 1;
        }
        hist
    }

    fn is_independent(&self, b: &Node) -> bool {
        !self.dependent.contains(b)
    }
}

/// An injective partial mapping, with an undo log.
#[derive(Clone, Debug, Default)]
struct Assignment<'a> {
    map: HashMap<&'a Node, &'a Node>,
    used: HashSet<&'a Node>,
    log: Vec<&'a Node>,
}

impl<'a> Assignment<'a> {
    fn get(&self, b: &Node) -> Option<&'a Node> {
        self.map.get(b).copied()
    }

    fn is_used(&self, c: &Node) -> bool {
        self.used.contains(c)
    }

    fn assign(&mut self, b: &'a Node, c: &'a Node) {
        self.map.insert(b, c);
        self.used.insert(c);
        self.log.push(b);
    }

    fn undo_last(&mut self) {
        if let Some(b) = self.log.pop() {
            if let Some(c) = self.map.remove(b) {
                self.used.remove(c);
            }
        }
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    /// The blank nodes assigned since `self.len()` was `mark`.
    fn since(&self, mark: usize) -> &[&'a Node] {
        &self.log[mark..]
    }

    fn to_mapping(&self) -> Mapping {
        self.map
            .iter()
            .filter_map(|(b, c)| Some((b.as_blank()?.clone(), c.as_blank()?.clone())))
            .collect()
    }
}

struct Search<'a> {
    mode: MatchMode,
    config: &'a MatcherConfig,
    src: Side<'a>,
    tgt: Side<'a>,
    candidates: Candidates<'a>,
}

impl<'a> Search<'a> {
    fn run(&self) -> Result<Option<Mapping>> {
        if let Some(asg) = self.same_ids() {
            log::debug!("blank nodes mapped to their namesakes");
            return Ok(Some(asg.to_mapping()));
        }

        let mut base = Assignment::default();
        if !self.force(&mut base) {
            return Ok(None);
        }
        log::debug!(
            "{} of {} blank nodes forced",
            base.len(),
            self.candidates.len()
        );

        let tentative = self.tentative(&base);
        if tentative.len() == self.candidates.len() && self.verify(&tentative) {
            log::debug!("tentative mapping verified");
            return Ok(Some(tentative.to_mapping()));
        }

        if self.mode == MatchMode::Equal && self.config.divide_and_conquer() {
            let parts = components(self.src.graph);
            if parts.len() > 1 {
                return self.divide_and_conquer(parts);
            }
        }

        if let Some(asg) = self.backtrack(tentative.clone())? {
            return Ok(Some(asg.to_mapping()));
        }
        // in equality mode, tentative mappings are never wrong guesses
        if self.mode == MatchMode::Subgraph && tentative.len() > base.len() {
            log::debug!("tentative mapping dropped");
            if let Some(asg) = self.backtrack(base)? {
                return Ok(Some(asg.to_mapping()));
            }
        }
        Ok(None)
    }

    /// Map every blank node to the target blank node with the same identifier.
    fn same_ids(&self) -> Option<Assignment<'a>> {
        let scope = self.tgt.graph.graph_id();
        let mut asg = Assignment::default();
        for (b, list) in &self.candidates {
            let namesake = Node::Blank(b.as_blank()?.rebind(scope));
            let c = list.iter().find(|c| ***c == namesake)?;
            asg.assign(*b, *c);
        }
        self.verify(&asg).then_some(asg)
    }

    /// Commit the mappings that hold in every solution.
    ///
    /// Triples are re-examined only when one of their blank nodes gets mapped.
    /// Return `false` if there can be no solution.
    fn force(&self, asg: &mut Assignment<'a>) -> bool {
        let mut pending = self.src.triples.clone();
        loop {
            while let Some(t) = pending.pop() {
                let mark = asg.len();
                if !self.force_unique_image(t, asg) {
                    log::debug!("forced mappings lead to a dead end");
                    return false;
                }
                for &b in asg.since(mark) {
                    pending.extend(self.src.blanks[b].triples.iter().copied());
                }
            }
            let mark = asg.len();
            if !self.force_last_candidates(asg) {
                log::debug!("forced mappings lead to a dead end");
                return false;
            }
            if asg.len() == mark {
                return true;
            }
            for &b in asg.since(mark) {
                pending.extend(self.src.blanks[b].triples.iter().copied());
            }
        }
    }

    /// Blank nodes with only one unused candidate left.
    fn force_last_candidates(&self, asg: &mut Assignment<'a>) -> bool {
        for (b, list) in &self.candidates {
            if asg.get(b).is_some() {
                continue;
            }
            let free: Vec<&'a Node> = list
                .iter()
                .copied()
                .filter(|c| !asg.is_used(c))
                .take(2)
                .collect();
            match free[..] {
                [] => return false,
                [c] => {
                    log::trace!("last candidate: {} -> {}", b, c);
                    asg.assign(*b, c);
                }
                _ => {}
            }
        }
        true
    }

    /// Map the blank nodes of `t` if it has only one possible image.
    fn force_unique_image(&self, t: &'a Triple, asg: &mut Assignment<'a>) -> bool {
        match self.images(t, asg, 2)[..] {
            [] => false,
            [image] => {
                for (n, m) in t.spo().into_iter().zip(image.spo()) {
                    if n.is_blank() && asg.get(n).is_none() {
                        log::trace!("unique image of {}: {} -> {}", t, n, m);
                        asg.assign(n, m);
                    }
                }
                true
            }
            _ => true,
        }
    }

    /// Extend `base` with guesses.
    fn tentative(&self, base: &Assignment<'a>) -> Assignment<'a> {
        let mut asg = base.clone();
        let hist = self.src.histogram();
        for (b, info) in &self.src.blanks {
            if info.degree == 1 && self.src.is_independent(b) {
                self.guess(*b, &mut asg, |_| true);
            }
        }
        for (b, info) in &self.src.blanks {
            if hist.get(&info.degree) == Some(&1) {
                let degree = info.degree;
                self.guess(*b, &mut asg, |c| {
                    self.tgt.blanks.get(c).map(|i| i.degree) == Some(degree)
                });
            }
        }
        for b in self.src.blanks.keys() {
            if self.src.is_independent(b) {
                self.guess(*b, &mut asg, |_| true);
            }
        }
        log::debug!("{} blank nodes mapped tentatively", asg.len() - base.len());
        asg
    }

    fn guess<F>(&self, b: &'a Node, asg: &mut Assignment<'a>, accept: F) -> bool
    where
        F: Fn(&Node) -> bool,
    {
        if asg.get(b).is_some() {
            return false;
        }
        for &c in &self.candidates[b] {
            if asg.is_used(c) || !accept(c) {
                continue;
            }
            asg.assign(b, c);
            if self.consistent(b, asg) {
                log::trace!("guess: {} -> {}", b, c);
                return true;
            }
            asg.undo_last();
        }
        false
    }

    /// Match minimal spanning graphs pairwise.
    ///
    /// Isomorphism being an equivalence, the first match of each source MSG
    /// can be kept.
    fn divide_and_conquer(&self, parts: Vec<Vec<&'a Triple>>) -> Result<Option<Mapping>> {
        let mut pool = vec![];
        for part in components(self.tgt.graph) {
            pool.push(Some(self.tgt.graph.scoped_subgraph(part)?));
        }
        log::debug!("comparing {} MSGs with {} MSGs", parts.len(), pool.len());
        if pool.len() != parts.len() {
            return Ok(None);
        }
        let mut mapping = Mapping::new();
        for part in parts {
            let msg = self.src.graph.scoped_subgraph(part)?;
            let mut found = None;
            for slot in pool.iter_mut() {
                let Some(candidate) = slot.as_ref() else {
                    continue;
                };
                if candidate.len() != msg.len() {
                    continue;
                }
                let matcher = GraphMatcher::new(&msg, candidate, MatchMode::Equal)
                    .with_config(self.config.clone());
                if let Some(m) = matcher.find_mapping()? {
                    found = Some(m);
                    *slot = None;
                    break;
                }
            }
            match found {
                Some(m) => mapping.extend(m),
                None => {
                    log::debug!("MSG of {} triples has no counterpart", msg.len());
                    return Ok(None);
                }
            }
        }
        Ok(Some(mapping))
    }

    /// Depth-first search over the candidates of the unmapped blank nodes.
    fn backtrack(&self, mut asg: Assignment<'a>) -> Result<Option<Assignment<'a>>> {
        let mut order: Vec<&'a Node> = self
            .candidates
            .keys()
            .copied()
            .filter(|b| asg.get(b).is_none())
            .collect();
        order.sort_by_key(|b| (self.candidates[b].len(), Reverse(self.src.blanks[b].degree)));
        log::debug!("backtracking over {} blank nodes", order.len());

        let mut cursor = vec![0; order.len()];
        let mut level = 0;
        let mut steps = 0;
        loop {
            if level == order.len() {
                if self.verify(&asg) {
                    log::debug!("mapping found after {} assignments", steps);
                    return Ok(Some(asg));
                }
            } else {
                let b = order[level];
                let list = &self.candidates[b];
                let mut advanced = false;
                while cursor[level] < list.len() {
                    let c = list[cursor[level]];
                    cursor[level] += 1;
                    if asg.is_used(c) {
                        continue;
                    }
                    steps += 1;
                    if let Some(budget) = self.config.search_budget() {
                        if steps > budget {
                            log::debug!("search budget exhausted");
                            return Err(IsoError::SearchBudgetExceeded(budget));
                        }
                    }
                    asg.assign(b, c);
                    if self.consistent(b, &asg) {
                        advanced = true;
                        break;
                    }
                    asg.undo_last();
                }
                if advanced {
                    level += 1;
                    continue;
                }
                cursor[level] = 0;
            }
            if level == 0 {
                log::debug!("no mapping after {} assignments", steps);
                return Ok(None);
            }
            level -= 1;
            asg.undo_last();
        }
    }

    /// Do all the triples of `b` still have a possible image?
    fn consistent(&self, b: &Node, asg: &Assignment<'a>) -> bool {
        self.src.blanks[b]
            .triples
            .iter()
            .all(|&t| !self.images(t, asg, 1).is_empty())
    }

    /// Is `asg` a complete solution?
    fn verify(&self, asg: &Assignment<'a>) -> bool {
        asg.len() == self.candidates.len()
            && self
                .src
                .triples
                .iter()
                .all(|&t| !self.images(t, asg, 1).is_empty())
    }

    /// At most `limit` target triples that `t` could be mapped to, given `asg`.
    fn images(&self, t: &'a Triple, asg: &Assignment<'a>, limit: usize) -> Vec<&'a Triple> {
        let spo = t.spo();
        let probe = spo.map(|n| if n.is_blank() { asg.get(n) } else { Some(n) });
        lookup(self.tgt.graph, probe)
            .filter(|&image| self.fits(spo, image.spo(), asg))
            .take(limit)
            .collect()
    }

    fn fits(&self, spo: [&'a Node; 3], image: [&'a Node; 3], asg: &Assignment<'a>) -> bool {
        for i in 0..3 {
            let (n, m) = (spo[i], image[i]);
            if !n.is_blank() {
                if n != m {
                    return false;
                }
                continue;
            }
            if !m.is_blank() {
                return false;
            }
            if let Some(c) = asg.get(n) {
                if c != m {
                    return false;
                }
                continue;
            }
            let allowed = self
                .candidates
                .get(n)
                .map_or(false, |list| list.binary_search(&m).is_ok());
            if !allowed || asg.is_used(m) {
                return false;
            }
            // unmapped blank nodes repeated in the triple
            for j in (i + 1)..3 {
                if spo[j].is_blank() && asg.get(spo[j]).is_none() && (spo[j] == n) != (image[j] == m) {
                    return false;
                }
            }
        }
        true
    }
}

/// Use the most selective index of `g` for the given constants.
fn lookup<'a>(g: &'a Graph, probe: [Option<&Node>; 3]) -> Triples<'a> {
    match probe {
        [Some(s), Some(p), _] => g.triples_with_subject_predicate(s, p),
        [Some(s), None, Some(o)] => g.triples_with_subject_object(s, o),
        [None, Some(p), Some(o)] => g.triples_with_predicate_object(p, o),
        [Some(s), None, None] => g.triples_with_subject(s),
        [None, Some(p), None] => g.triples_with_predicate(p),
        [None, None, Some(o)] => g.triples_with_object(o),
        [None, None, None] => g.triples(),
    }
}

/// For every degree `d` of `sub`, `sub` has no more blank nodes of degree ≥ `d` than `sup`.
fn dominated(sub: &BTreeMap<usize, usize>, sup: &BTreeMap<usize, usize>) -> bool {
    let at_least = |hist: &BTreeMap<usize, usize>, d: usize| -> usize { hist.range(d..).map(|(_, n)| n).sum() };
    sub.keys().all(|&d| at_least(sub, d) <= at_least(sup, d))
}

/// Is the sorted slice `a` included in the sorted slice `b`, counting repetitions?
fn is_sub_multiset<T: Ord>(a: &[T], b: &[T]) -> bool {
    let mut rest = b.iter();
    'outer: for x in a {
        for y in rest.by_ref() {
            match y.cmp(x) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'outer,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
