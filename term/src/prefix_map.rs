//! A [`NamespaceMap`] associates prefixes to namespace IRIs,
//! in order to expand QNames such as `rdfs:label`.

use super::*;
use std::collections::BTreeMap;

/// An association of prefixes to namespace IRIs.
///
/// The empty prefix is allowed (e.g. `:foo`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    map: BTreeMap<String, Iri>,
}

impl NamespaceMap {
    /// An empty namespace map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `prefix`, replacing any previous declaration.
    pub fn add(&mut self, prefix: &str, namespace: Iri) {
        self.map.insert(prefix.to_string(), namespace);
    }

    /// Remove the declaration of `prefix`, returning it if it existed.
    pub fn remove(&mut self, prefix: &str) -> Option<Iri> {
        self.map.remove(prefix)
    }

    /// The namespace associated with `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&Iri> {
        self.map.get(prefix)
    }

    /// Is `prefix` declared?
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.map.contains_key(prefix)
    }

    /// A prefix declared for `namespace`, if any.
    pub fn prefix_of(&self, namespace: &str) -> Option<&str> {
        self.map
            .iter()
            .find(|(_, ns)| ns.as_str() == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Expand a QName of the form `prefix:local`.
    ///
    /// Fails with [`TermError::UndefinedPrefix`] if `prefix` is not declared,
    /// or if `qname` contains no colon.
    pub fn resolve_qname(&self, qname: &str) -> Result<Iri> {
        let Some((prefix, local)) = qname.split_once(':') else {
            return Err(TermError::UndefinedPrefix(qname.to_string()));
        };
        let ns = self
            .get(prefix)
            .ok_or_else(|| TermError::UndefinedPrefix(prefix.to_string()))?;
        Iri::new(format!("{}{}", ns.as_str(), local))
    }

    /// Add the declarations of `other` whose prefix is not declared yet in `self`.
    pub fn import(&mut self, other: &NamespaceMap) {
        for (prefix, ns) in other.iter() {
            if !self.has_prefix(prefix) {
                self.add(prefix, ns.clone());
            }
        }
    }

    /// Iterate over the declarations of this map, in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Iri)> + '_ {
        self.map.iter().map(|(prefix, ns)| (prefix.as_str(), ns))
    }

    /// The number of declared prefixes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Is this map empty?
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove all declarations.
    pub fn clear(&mut self) {
        self.map.clear()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn map() -> NamespaceMap {
        let mut map = NamespaceMap::new();
        map.add("", Iri::new("http://example.org/").unwrap());
        map.add("rdfs", Iri::new("http://www.w3.org/2000/01/rdf-schema#").unwrap());
        map
    }

    #[test_case(":foo", "http://example.org/foo"; "empty prefix")]
    #[test_case("rdfs:label", ns::rdfs::LABEL)]
    #[test_case("rdfs:", ns::rdfs::PREFIX; "empty suffix")]
    fn resolve(qname: &str, expected: &str) {
        assert_eq!(map().resolve_qname(qname).unwrap().as_str(), expected);
    }

    #[test_case("foaf:name", "foaf")]
    #[test_case("label", "label"; "no colon")]
    fn undefined(qname: &str, prefix: &str) {
        assert_eq!(
            map().resolve_qname(qname),
            Err(TermError::UndefinedPrefix(prefix.to_string()))
        );
    }

    #[test]
    fn import_keeps_existing() {
        let mut m1 = map();
        let mut m2 = NamespaceMap::new();
        m2.add("", Iri::new("http://other.example/").unwrap());
        m2.add("xsd", Iri::new(ns::xsd::PREFIX).unwrap());
        m1.import(&m2);
        assert_eq!(m1.len(), 3);
        assert_eq!(m1.get("").unwrap().as_str(), "http://example.org/");
        assert_eq!(m1.get("xsd").unwrap().as_str(), ns::xsd::PREFIX);
        assert_eq!(m1.prefix_of(ns::xsd::PREFIX), Some("xsd"));
    }
}
