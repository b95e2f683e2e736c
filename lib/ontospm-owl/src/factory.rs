use crate::entity::{AnnotationProperty, OwlClass};
use crate::iri::HasIri;
use oxiri::IriParseError;
use oxrdf::{LanguageTagParseError, Literal};

/// Builds entities and literals from IRIs and strings.
///
/// It holds no state: it is handed out with each loaded ontology so that callers
/// build the handles they query with the same way the loader built the ontology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataFactory;

impl DataFactory {
    /// Builds a class from an IRI string, validating the IRI.
    ///
    /// ```
    /// use ontospm_owl::DataFactory;
    ///
    /// let class = DataFactory.owl_class("http://example.com/ns#scalpel")?;
    /// assert_eq!(class.short_form(), "scalpel");
    /// assert!(DataFactory.owl_class("not an IRI").is_err());
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn owl_class(self, iri: impl Into<String>) -> Result<OwlClass, IriParseError> {
        OwlClass::new_from_iri(iri)
    }

    /// Builds the class identified by the IRI of `entity`.
    pub fn class_of(self, entity: &impl HasIri) -> OwlClass {
        OwlClass::from(entity.iri())
    }

    /// Builds the annotation property identified by the IRI of `property`.
    pub fn annotation_property(self, property: &impl HasIri) -> AnnotationProperty {
        AnnotationProperty::from(property.iri())
    }

    /// Builds a language-tagged string literal.
    pub fn language_literal(
        self,
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Literal, LanguageTagParseError> {
        Literal::new_language_tagged_literal(value, language)
    }
}
