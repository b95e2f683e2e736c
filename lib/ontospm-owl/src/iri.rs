//! IRI capability trait and IRI decomposition helpers.

use oxrdf::{NamedNode, NamedNodeRef};

/// Anything that is identified by an IRI.
///
/// Entities, plain named nodes and the vocabulary enumerations all implement it,
/// so query methods can take any of them where an IRI is expected.
pub trait HasIri {
    /// Returns the IRI identifying `self`.
    fn iri(&self) -> NamedNodeRef<'_>;
}

impl HasIri for NamedNode {
    #[inline]
    fn iri(&self) -> NamedNodeRef<'_> {
        self.as_ref()
    }
}

impl HasIri for NamedNodeRef<'_> {
    #[inline]
    fn iri(&self) -> NamedNodeRef<'_> {
        *self
    }
}

impl<T: HasIri + ?Sized> HasIri for &T {
    #[inline]
    fn iri(&self) -> NamedNodeRef<'_> {
        (**self).iri()
    }
}

/// Compares two IRIs by their full string.
#[inline]
pub fn iri_eq(a: &(impl HasIri + ?Sized), b: &(impl HasIri + ?Sized)) -> bool {
    a.iri().as_str() == b.iri().as_str()
}

/// Splits an IRI into its namespace and its local name.
///
/// The local name is the longest suffix of the IRI that is an XML NCName.
/// When there is none the local name is empty and the namespace is the whole IRI.
///
/// ```
/// use ontospm_owl::split_iri;
///
/// assert_eq!(
///     split_iri("http://purl.obolibrary.org/obo/IAO_0000115"),
///     ("http://purl.obolibrary.org/obo/", "IAO_0000115")
/// );
/// assert_eq!(split_iri("http://example.com/a#"), ("http://example.com/a#", ""));
/// ```
pub fn split_iri(iri: &str) -> (&str, &str) {
    let mut start = iri.len();
    for (i, c) in iri.char_indices().rev() {
        if !is_name_char(c) {
            break;
        }
        start = i;
    }
    let local = iri[start..]
        .char_indices()
        .find(|(_, c)| is_name_start_char(*c))
        .map_or(iri.len(), |(i, _)| start + i);
    iri.split_at(local)
}

/// Returns the namespace part of an IRI (see [`split_iri`]).
#[inline]
pub fn namespace(iri: &str) -> &str {
    split_iri(iri).0
}

/// Returns the local name of an IRI, or the IRI itself if it has none.
pub fn short_form(iri: &str) -> &str {
    match split_iri(iri) {
        (_, "") => iri,
        (_, local) => local,
    }
}

fn is_name_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c) || c.is_ascii_digit() || matches!(c, '-' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hash_iri() {
        assert_eq!(
            split_iri("http://medicis.univ-rennes1.fr/ontologies/ontospm/OntoSPM.owl#scalpel"),
            (
                "http://medicis.univ-rennes1.fr/ontologies/ontospm/OntoSPM.owl#",
                "scalpel"
            )
        );
    }

    #[test]
    fn split_skips_leading_digits() {
        assert_eq!(
            split_iri("http://example.com/ns#12abc"),
            ("http://example.com/ns#12", "abc")
        );
        assert_eq!(split_iri("http://example.com/ns#123"), ("http://example.com/ns#123", ""));
    }

    #[test]
    fn short_form_falls_back_to_iri() {
        assert_eq!(short_form("http://example.com/ns#"), "http://example.com/ns#");
        assert_eq!(short_form("http://example.com/ns#foo-bar.baz"), "foo-bar.baz");
        assert_eq!(namespace("http://example.com/ns/item"), "http://example.com/ns/");
    }

    #[test]
    fn split_keeps_non_ascii_local_names() {
        assert_eq!(
            split_iri("http://example.com/ns#pince_\u{e0}_biopsie"),
            ("http://example.com/ns#", "pince_\u{e0}_biopsie")
        );
    }

    #[test]
    fn iri_equality_is_full_string() {
        let a = NamedNodeRef::new_unchecked("http://example.com/a#x");
        let b = NamedNodeRef::new_unchecked("http://example.com/b#x");
        assert!(iri_eq(&a, &a.into_owned()));
        assert!(!iri_eq(&a, &b));
    }
}
