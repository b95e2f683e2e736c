//! OWL 2 entity types (classes, properties, individuals).

use crate::iri::{self, HasIri};
use oxrdf::{BlankNode, NamedNode, NamedNodeRef, Term};
use std::fmt;

macro_rules! named_entity {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NamedNode);

        impl $name {
            #[inline]
            pub fn new(iri: NamedNode) -> Self {
                Self(iri)
            }

            #[inline]
            pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
                Ok(Self(NamedNode::new(iri)?))
            }

            #[inline]
            pub fn as_named_node(&self) -> &NamedNode {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> NamedNode {
                self.0
            }
        }

        impl HasIri for $name {
            #[inline]
            fn iri(&self) -> NamedNodeRef<'_> {
                self.0.as_ref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<NamedNode> for $name {
            fn from(node: NamedNode) -> Self {
                Self(node)
            }
        }

        impl From<NamedNodeRef<'_>> for $name {
            fn from(node: NamedNodeRef<'_>) -> Self {
                Self(node.into_owned())
            }
        }

        impl From<$name> for NamedNode {
            fn from(entity: $name) -> Self {
                entity.0
            }
        }

        impl From<$name> for Term {
            fn from(entity: $name) -> Self {
                entity.0.into()
            }
        }
    };
}

named_entity!(
    /// An OWL class (owl:Class).
    ///
    /// Classes are sets of individuals, identified by their IRI.
    OwlClass
);

named_entity!(
    /// An OWL object property (owl:ObjectProperty).
    ObjectProperty
);

named_entity!(
    /// An OWL data property (owl:DatatypeProperty).
    DataProperty
);

named_entity!(
    /// An OWL annotation property (owl:AnnotationProperty).
    ///
    /// Annotation properties carry non-logical information such as labels and definitions.
    AnnotationProperty
);

impl OwlClass {
    /// Returns the namespace part of the class IRI.
    ///
    /// ```
    /// use ontospm_owl::OwlClass;
    ///
    /// let class = OwlClass::new_from_iri("http://example.com/ns#scalpel")?;
    /// assert_eq!(class.namespace(), "http://example.com/ns#");
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    #[inline]
    pub fn namespace(&self) -> &str {
        iri::namespace(self.0.as_str())
    }

    /// Returns the local name of the class IRI, or the full IRI if it has no local name.
    ///
    /// ```
    /// use ontospm_owl::OwlClass;
    ///
    /// let class = OwlClass::new_from_iri("http://example.com/ns#scalpel")?;
    /// assert_eq!(class.short_form(), "scalpel");
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    #[inline]
    pub fn short_form(&self) -> &str {
        iri::short_form(self.0.as_str())
    }
}

/// An OWL individual, either named or anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual identified by an IRI.
    Named(NamedNode),
    /// An anonymous individual identified by a blank node.
    Anonymous(BlankNode),
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}
