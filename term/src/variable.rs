//! Variables like used in SPARQL or universally quantified variables in
//! Notation3.
//!
//! They only make sense in patterns, and are never asserted in a graph.

use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

lazy_static! {
    /// Production of SPARQL's VARNAME according to the
    /// [SPARQL spec](https://www.w3.org/TR/sparql11-query/#rVARNAME).
    ///
    /// # Rule
    ///
    /// `VARNAME ::= ( PN_CHARS_U | [0-9] ) ( PN_CHARS_U | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040] )*`
    static ref VARNAME: Regex = Regex::new(r#"(?x)
      ^
      [_A-Za-z0-9\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{10000}-\U{EFFFF}]
      [_A-Za-z0-9\u{B7}\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{300}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{10000}-\U{EFFFF}]*
      $
    "#).unwrap();
}

/// A named variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Return a new variable with the given name.
    ///
    /// May fail if `name` is not a valid variable name
    /// (in particular, it must not include the leading `?`).
    pub fn new<T: AsRef<str>>(name: T) -> Result<Self> {
        check_name(name.as_ref())?;
        Ok(Variable(Arc::from(name.as_ref())))
    }

    /// # Pre-condition
    ///
    /// `name` must be a valid variable name.
    pub fn new_unchecked(name: Arc<str>) -> Self {
        debug_assert!(VARNAME.is_match(&name), "invalid variable name {:?}", name);
        Variable(name)
    }

    /// The name of this variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

pub(crate) fn check_name(name: &str) -> Result<()> {
    if VARNAME.is_match(name) {
        Ok(())
    } else {
        Err(TermError::InvalidVariableName(name.to_string()))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}
