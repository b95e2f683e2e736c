//! Vocabulary IRIs used by the loader and the query façade.

use crate::iri::HasIri;
use oxrdf::NamedNodeRef;
use oxrdf::vocab::rdfs;

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-rdf-based-semantics/) vocabulary.
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    pub const ANNOTATION_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AnnotationProperty");
    pub const NAMED_INDIVIDUAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#NamedIndividual");
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");

    pub const IMPORTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#imports");
    pub const VERSION_IRI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionIRI");
    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");

    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
    pub const ALL_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#allValuesFrom");
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#hasValue");
    pub const MIN_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minCardinality");
    pub const MAX_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxCardinality");
    pub const CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#cardinality");
    pub const MIN_QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minQualifiedCardinality");
    pub const MAX_QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxQualifiedCardinality");
    pub const QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#qualifiedCardinality");
    pub const ON_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onClass");

    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");

    pub const DEPRECATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#deprecated");
    pub const VERSION_INFO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionInfo");
    pub const PRIOR_VERSION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#priorVersion");
    pub const BACKWARD_COMPATIBLE_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#backwardCompatibleWith");
    pub const INCOMPATIBLE_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#incompatibleWith");
}

pub mod skos {
    //! [SKOS](https://www.w3.org/TR/skos-reference/) labelling and documentation properties.
    use oxrdf::NamedNodeRef;

    pub const PREF_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");
    pub const ALT_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#altLabel");
    pub const HIDDEN_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#hiddenLabel");
    pub const DEFINITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#definition");
    pub const NOTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#note");
}

pub mod obo {
    //! Information Artifact Ontology annotation properties.
    use oxrdf::NamedNodeRef;

    /// `IAO_0000115`, the textual definition of an entity.
    pub const DEFINITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/IAO_0000115");
}

/// Annotation properties of the SKOS vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkosVocabulary {
    PrefLabel,
    AltLabel,
    HiddenLabel,
    Definition,
    Note,
}

impl HasIri for SkosVocabulary {
    fn iri(&self) -> NamedNodeRef<'_> {
        match self {
            Self::PrefLabel => skos::PREF_LABEL,
            Self::AltLabel => skos::ALT_LABEL,
            Self::HiddenLabel => skos::HIDDEN_LABEL,
            Self::Definition => skos::DEFINITION,
            Self::Note => skos::NOTE,
        }
    }
}

/// The annotation properties built into RDFS and OWL 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwlRdfVocabulary {
    RdfsLabel,
    RdfsComment,
    RdfsSeeAlso,
    RdfsIsDefinedBy,
    OwlDeprecated,
    OwlVersionInfo,
    OwlPriorVersion,
    OwlBackwardCompatibleWith,
    OwlIncompatibleWith,
}

impl OwlRdfVocabulary {
    pub const ALL: [Self; 9] = [
        Self::RdfsLabel,
        Self::RdfsComment,
        Self::RdfsSeeAlso,
        Self::RdfsIsDefinedBy,
        Self::OwlDeprecated,
        Self::OwlVersionInfo,
        Self::OwlPriorVersion,
        Self::OwlBackwardCompatibleWith,
        Self::OwlIncompatibleWith,
    ];

    /// Is `iri` one of the built-in annotation properties?
    pub fn is_built_in(iri: NamedNodeRef<'_>) -> bool {
        Self::ALL.iter().any(|p| p.iri() == iri)
    }
}

impl HasIri for OwlRdfVocabulary {
    fn iri(&self) -> NamedNodeRef<'_> {
        match self {
            Self::RdfsLabel => rdfs::LABEL,
            Self::RdfsComment => rdfs::COMMENT,
            Self::RdfsSeeAlso => rdfs::SEE_ALSO,
            Self::RdfsIsDefinedBy => rdfs::IS_DEFINED_BY,
            Self::OwlDeprecated => owl::DEPRECATED,
            Self::OwlVersionInfo => owl::VERSION_INFO,
            Self::OwlPriorVersion => owl::PRIOR_VERSION,
            Self::OwlBackwardCompatibleWith => owl::BACKWARD_COMPATIBLE_WITH,
            Self::OwlIncompatibleWith => owl::INCOMPATIBLE_WITH,
        }
    }
}

/// Information Artifact Ontology annotation properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IaoVocabulary {
    Definition,
}

impl HasIri for IaoVocabulary {
    fn iri(&self) -> NamedNodeRef<'_> {
        match self {
            Self::Definition => obo::DEFINITION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_iris() {
        assert_eq!(
            SkosVocabulary::PrefLabel.iri().as_str(),
            "http://www.w3.org/2004/02/skos/core#prefLabel"
        );
        assert_eq!(
            OwlRdfVocabulary::RdfsLabel.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#label"
        );
        assert_eq!(
            IaoVocabulary::Definition.iri().as_str(),
            "http://purl.obolibrary.org/obo/IAO_0000115"
        );
    }

    #[test]
    fn built_in_annotation_properties() {
        assert!(OwlRdfVocabulary::is_built_in(owl::DEPRECATED));
        assert!(OwlRdfVocabulary::is_built_in(rdfs::SEE_ALSO));
        assert!(!OwlRdfVocabulary::is_built_in(skos::PREF_LABEL));
    }
}
