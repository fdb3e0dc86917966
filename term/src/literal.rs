//! Literals, as specified in [RDF](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
//!
//! A literal carries either a datatype or a language tag, never both.
//! A literal built with neither is given the datatype `xsd:string`.
//!
//! Comparison is strict: two literals are equal iff their lexical values,
//! datatypes and language tags are identical strings.
//! In particular, `"1"^^xsd:int` and `"1.0"^^xsd:decimal` are different.

use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

lazy_static! {
    /// Match a valid BCP47 language tag
    static ref LANG_TAG: Regex = Regex::new(r"(?xi-u)^
    (
      (?:
        (?: #language
          (?:
            [A-Z]{2,3}
            (?: #extlang
              (?:
                -[A-Z]{3}
              ){0,3}
            )
          )
        |
          [A-Z]{4,8}
        )
        (?: #script
          -[A-Z]{4}
        )?
        (?: #region
          -
          (?:
            [A-Z]{2}
          |
            [0-9]{3}
          )
        )?
        (?: #variant
          -
          (?:
            [A-Z0-9]{5,8}
          |
            [0-9][A-Z0-9]{3}
          )
        )*
        (?: #extension
          -[0-9A-WY-Z]
          (?:
            -[A-Z0-9]{2,8}
          )+
        )*
        (?: #privateUse
          -X
          (?:
            -[A-Z0-9]{1,8}
          )+
        )?
      )
    |
      (?: #privateUse
        X
        (?:
          -[A-Z0-9]{1,8}
        )+
      )
    |
      (?: #grandfathered
        en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE
      )
    )$").unwrap();
}

/// What qualifies the lexical value of a [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralKind {
    /// A typed literal.
    Datatype(Iri),
    /// A language-tagged string.
    Lang(Arc<str>),
}

/// An RDF literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    value: Arc<str>,
    kind: LiteralKind,
}

impl Literal {
    /// A literal with datatype `xsd:string`.
    pub fn new_plain<T: AsRef<str>>(value: T) -> Self {
        Self::new_dt(value, ns::xsd::string())
    }

    /// A typed literal.
    pub fn new_dt<T: AsRef<str>>(value: T, datatype: Iri) -> Self {
        Literal {
            value: Arc::from(value.as_ref()),
            kind: LiteralKind::Datatype(datatype),
        }
    }

    /// A language-tagged string.
    ///
    /// Fails if `lang` is not a valid BCP47 tag.
    pub fn new_lang<T: AsRef<str>, U: AsRef<str>>(value: T, lang: U) -> Result<Self> {
        check_lang(lang.as_ref())?;
        Ok(Literal {
            value: Arc::from(value.as_ref()),
            kind: LiteralKind::Lang(Arc::from(lang.as_ref())),
        })
    }

    pub(crate) fn from_parts(value: Arc<str>, kind: LiteralKind) -> Self {
        Literal { value, kind }
    }

    /// The lexical value of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype or language tag of this literal.
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// The datatype of this literal, if it is not language-tagged.
    pub fn datatype(&self) -> Option<&Iri> {
        match &self.kind {
            LiteralKind::Datatype(dt) => Some(dt),
            LiteralKind::Lang(_) => None,
        }
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Datatype(_) => None,
            LiteralKind::Lang(tag) => Some(tag),
        }
    }
}

pub(crate) fn check_lang(tag: &str) -> Result<()> {
    if LANG_TAG.is_match(tag) {
        Ok(())
    } else {
        Err(TermError::InvalidLanguageTag(tag.to_string()))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.value.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")?;
        match &self.kind {
            LiteralKind::Datatype(dt) if *dt == ns::xsd::STRING => Ok(()),
            LiteralKind::Datatype(dt) => write!(f, "^^{}", dt),
            LiteralKind::Lang(tag) => write!(f, "@{}", tag),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("en")]
    #[test_case("fr-FR")]
    #[test_case("zh-Hant-TW")]
    #[test_case("de-CH-1901")]
    #[test_case("x-private"; "private use")]
    #[test_case("i-klingon"; "grandfathered")]
    fn valid_lang(tag: &str) {
        assert!(Literal::new_lang("hello", tag).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case("e"; "too short")]
    #[test_case("en_US"; "underscore")]
    #[test_case("en-"; "trailing dash")]
    #[test_case("12"; "digits")]
    fn invalid_lang(tag: &str) {
        assert_eq!(
            Literal::new_lang("hello", tag),
            Err(TermError::InvalidLanguageTag(tag.to_string()))
        );
    }

    #[test]
    fn plain_is_xsd_string() {
        let lit = Literal::new_plain("foo");
        assert_eq!(lit.datatype().unwrap(), &ns::xsd::string());
        assert_eq!(lit.language(), None);
        assert_eq!(lit, Literal::new_dt("foo", ns::xsd::string()));
    }

    #[test]
    fn strict_equality() {
        let int = Iri::new(ns::xsd::INT).unwrap();
        let dec = Iri::new(ns::xsd::DECIMAL).unwrap();
        assert_ne!(Literal::new_dt("1", int.clone()), Literal::new_dt("1.0", dec));
        assert_ne!(Literal::new_dt("1", int.clone()), Literal::new_dt("01", int));
        assert_ne!(
            Literal::new_lang("chat", "en").unwrap(),
            Literal::new_lang("chat", "fr").unwrap()
        );
        assert_ne!(
            Literal::new_lang("chat", "en").unwrap(),
            Literal::new_plain("chat")
        );
    }

    #[test]
    fn display() {
        assert_eq!(Literal::new_plain("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Literal::new_lang("chat", "fr").unwrap().to_string(), r#""chat"@fr"#);
        let int = Iri::new(ns::xsd::INT).unwrap();
        assert_eq!(
            Literal::new_dt("42", int).to_string(),
            r#""42"^^<http://www.w3.org/2001/XMLSchema#int>"#
        );
    }
}
