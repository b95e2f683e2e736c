//! Annotations and annotation assertions.

use crate::entity::AnnotationProperty;
use crate::iri::HasIri;
use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef, TermRef};
use std::fmt;

/// The value of an annotation: a literal, an IRI or an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Literal(Literal),
    Iri(NamedNode),
    Anonymous(BlankNode),
}

impl AnnotationValue {
    /// Builds a value from an RDF term, if the term can be an annotation value.
    pub fn from_term(term: TermRef<'_>) -> Option<Self> {
        match term {
            TermRef::Literal(l) => Some(Self::Literal(l.into_owned())),
            TermRef::NamedNode(n) => Some(Self::Iri(n.into_owned())),
            TermRef::BlankNode(b) => Some(Self::Anonymous(b.into_owned())),
            #[cfg(feature = "rdf-12")]
            TermRef::Triple(_) => None,
        }
    }

    #[inline]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(l) => Some(l),
            Self::Iri(_) | Self::Anonymous(_) => None,
        }
    }

    #[inline]
    pub fn as_iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Iri(n) => Some(n),
            Self::Literal(_) | Self::Anonymous(_) => None,
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(l) => write!(f, "{l}"),
            Self::Iri(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

/// An annotation property paired with its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
}

/// `AnnotationAssertion(property subject value)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationAssertion {
    pub subject: NamedNode,
    pub annotation: Annotation,
}

impl AnnotationAssertion {
    pub fn new(subject: NamedNode, property: AnnotationProperty, value: AnnotationValue) -> Self {
        Self {
            subject,
            annotation: Annotation { property, value },
        }
    }

    #[inline]
    pub fn property(&self) -> &AnnotationProperty {
        &self.annotation.property
    }

    #[inline]
    pub fn value(&self) -> &AnnotationValue {
        &self.annotation.value
    }
}

impl HasIri for AnnotationAssertion {
    /// The IRI of the annotated subject.
    #[inline]
    fn iri(&self) -> NamedNodeRef<'_> {
        self.subject.as_ref()
    }
}

impl fmt::Display for AnnotationAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnnotationAssertion({} {} {})",
            self.annotation.property, self.subject, self.annotation.value
        )
    }
}
