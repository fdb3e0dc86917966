//! # Standard namespaces
//!
//! This module provides the IRIs of the vocabularies used by this crate,
//! as `&'static str` constants.
//! Use [`Iri::new`](crate::Iri::new) or a
//! [node factory](crate::NodeFactory::create_uri_node) to turn them into nodes.

/// Helper for creating a "namespace module"
/// defining a set of IRIs within a given IRI space.
///
/// # Safety
/// This macro is conceptually unsafe,
/// as it is never checked that the prefix IRI is a valid IRI reference.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($id:ident, $suffix:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            #[doc = concat!("`", $iri_prefix, $suffix, "`")]
            pub const $id: &str = concat!($iri_prefix, $suffix);
        )*
    };
}

/// The standard `xsd:` namespace.
pub mod xsd {
    use crate::Iri;
    use lazy_static::lazy_static;
    use std::sync::Arc;

    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        ANY_URI, "anyURI",
        BOOLEAN, "boolean",
        DATE, "date",
        DATE_TIME, "dateTime",
        DECIMAL, "decimal",
        DOUBLE, "double",
        FLOAT, "float",
        INT, "int",
        INTEGER, "integer",
        LONG, "long",
        STRING, "string"
    );

    lazy_static! {
        static ref XSD_STRING: Iri = Iri::new_unchecked(Arc::from(STRING));
    }

    /// `xsd:string`, the datatype of plain literals.
    pub fn string() -> Iri {
        XSD_STRING.clone()
    }
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        TYPE, "type",
        FIRST, "first",
        REST, "rest",
        NIL, "nil",
        LANG_STRING, "langString"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        LABEL, "label",
        COMMENT, "comment",
        SUB_CLASS_OF, "subClassOf",
        SEE_ALSO, "seeAlso"
    );
}
