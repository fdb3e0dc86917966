//! Absolute IRIs, as held by [URI nodes](crate::Node::Uri)
//! and by the datatype of [literals](crate::Literal).
//!
//! Validation and resolution are delegated to [`oxiri`].

use super::*;
use oxiri::{Iri as Oxiri, IriRef as OxiriRef};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// An absolute IRI, validated according to
/// [RFC 3987](https://tools.ietf.org/html/rfc3987).
///
/// The underlying text is shared, so cloning an `Iri` is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Build a new IRI from `txt`.
    ///
    /// Fails if `txt` is not a valid IRI reference,
    /// or if it is a relative one.
    pub fn new<T: AsRef<str>>(txt: T) -> Result<Self> {
        check_absolute(txt.as_ref())?;
        Ok(Iri(Arc::from(txt.as_ref())))
    }

    /// Build a new IRI from shared text.
    ///
    /// # Pre-condition
    ///
    /// `txt` must be a valid absolute IRI.
    pub fn new_unchecked(txt: Arc<str>) -> Self {
        debug_assert!(Oxiri::parse(&txt[..]).is_ok(), "invalid IRI {:?}", txt);
        Iri(txt)
    }

    /// Resolve `reference` (relative or absolute) against this IRI.
    pub fn resolve(&self, reference: &str) -> Result<Iri> {
        let base = Oxiri::parse(&self.0[..]).map_err(|e| invalid(&self.0, e))?;
        let resolved = base.resolve(reference).map_err(|e| invalid(reference, e))?;
        Ok(Iri(Arc::from(resolved.into_inner())))
    }

    /// The text of this IRI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn arc(&self) -> &Arc<str> {
        &self.0
    }
}

/// Check that `txt` is an absolute IRI.
pub(crate) fn check_absolute(txt: &str) -> Result<()> {
    let iri_ref = OxiriRef::parse(txt).map_err(|e| invalid(txt, e))?;
    if iri_ref.is_absolute() {
        Ok(())
    } else {
        Err(TermError::RelativeIri(txt.to_string()))
    }
}

fn invalid(txt: &str, err: oxiri::IriParseError) -> TermError {
    TermError::InvalidIri {
        iri: txt.to_string(),
        msg: err.to_string(),
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        &self.0[..] == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        &self.0[..] == *other
    }
}
