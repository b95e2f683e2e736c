//! Read-only queries over a loaded ontology.

use crate::annotation::{AnnotationAssertion, AnnotationValue};
use crate::entity::{AnnotationProperty, OwlClass};
use crate::error::LoadError;
use crate::expression::ClassExpression;
use crate::factory::DataFactory;
use crate::iri::{HasIri, iri_eq};
use crate::loader::OntologyManager;
use crate::ontology::Ontology;
use crate::vocab::{OwlRdfVocabulary, SkosVocabulary};
use oxrdf::Literal;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::sync::Arc;

/// A query façade over an immutable [`Ontology`].
///
/// It is cheap to clone and can be shared between threads.
/// Sequences are returned as lazy iterators borrowing the façade. They are [`Clone`]
/// so that the same sequence can be traversed several times, and calling the
/// method again restarts the traversal.
///
/// Entities and properties are given as anything implementing [`HasIri`]:
/// entities, named nodes or vocabulary enumerations.
/// IRIs are compared by their full string.
///
/// ```
/// use ontospm_owl::{OntologyManager, OntologyQuery, OwlClass, SkosVocabulary};
/// use oxrdfio::RdfFormat;
///
/// let document = r#"
///     @prefix owl: <http://www.w3.org/2002/07/owl#> .
///     @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
///     <http://example.com/ns#scalpel> a owl:Class ;
///         skos:prefLabel "scalpel"@en, "scalpel"@fr, "Skalpell"@de .
/// "#;
/// let (ontology, factory) = OntologyManager::default().load_from_reader(
///     document.as_bytes(),
///     RdfFormat::Turtle,
///     None,
/// )?;
/// let query = OntologyQuery::new(ontology, factory);
/// let scalpel = OwlClass::new_from_iri("http://example.com/ns#scalpel")?;
///
/// assert_eq!(query.classes().count(), 1);
/// assert_eq!(query.preferred_labels(&scalpel).count(), 3);
/// assert_eq!(query.preferred_label(&scalpel, "de"), Some("Skalpell"));
/// assert!(query.has_annotation(&scalpel, &SkosVocabulary::PrefLabel));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct OntologyQuery {
    ontology: Arc<Ontology>,
    factory: DataFactory,
}

impl OntologyQuery {
    pub fn new(ontology: Arc<Ontology>, factory: DataFactory) -> Self {
        Self { ontology, factory }
    }

    /// Loads the document at `path` with `manager` and wraps the result.
    pub fn load(manager: &OntologyManager, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let (ontology, factory) = manager.load(path)?;
        Ok(Self::new(ontology, factory))
    }

    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    pub fn factory(&self) -> DataFactory {
        self.factory
    }

    /// Every class of the ontology signature, in no particular order.
    pub fn classes(&self) -> impl Iterator<Item = &OwlClass> + Clone {
        self.ontology.classes()
    }

    /// Resolves an IRI to the class handle of the ontology.
    pub fn class(&self, iri: &impl HasIri) -> Option<&OwlClass> {
        self.ontology.class(iri.iri())
    }

    /// Every annotation assertion about `entity`.
    pub(crate) fn annotation_assertions<'a>(
        &'a self,
        entity: &impl HasIri,
    ) -> impl Iterator<Item = &'a AnnotationAssertion> + Clone {
        self.ontology.annotation_assertion_axioms(entity.iri())
    }

    /// The annotation assertions about `entity` whose property is `property`.
    pub fn filtered_annotation_assertions<'a>(
        &'a self,
        entity: &impl HasIri,
        property: &impl HasIri,
    ) -> impl Iterator<Item = &'a AnnotationAssertion> + Clone {
        let property = property.iri();
        self.annotation_assertions(entity)
            .filter(move |a| iri_eq(a.property(), &property))
    }

    /// The properties of the assertions yielded by
    /// [`filtered_annotation_assertions`](Self::filtered_annotation_assertions).
    pub fn annotation_properties<'a>(
        &'a self,
        entity: &impl HasIri,
        property: &impl HasIri,
    ) -> impl Iterator<Item = &'a AnnotationProperty> + Clone {
        self.filtered_annotation_assertions(entity, property)
            .map(AnnotationAssertion::property)
    }

    /// The values of the assertions yielded by
    /// [`filtered_annotation_assertions`](Self::filtered_annotation_assertions).
    pub fn annotation_values<'a>(
        &'a self,
        entity: &impl HasIri,
        property: &impl HasIri,
    ) -> impl Iterator<Item = &'a AnnotationValue> + Clone {
        self.filtered_annotation_assertions(entity, property)
            .map(AnnotationAssertion::value)
    }

    pub fn has_annotation(&self, entity: &impl HasIri, property: &impl HasIri) -> bool {
        self.filtered_annotation_assertions(entity, property)
            .next()
            .is_some()
    }

    /// The `skos:prefLabel` literals of `entity`. Non literal values are skipped.
    pub fn preferred_labels<'a>(
        &'a self,
        entity: &impl HasIri,
    ) -> impl Iterator<Item = &'a Literal> + Clone {
        self.annotation_values(entity, &SkosVocabulary::PrefLabel)
            .filter_map(AnnotationValue::as_literal)
    }

    /// The lexical form of a `skos:prefLabel` of `entity` tagged with `language`.
    ///
    /// Language tags are compared case-insensitively.
    /// If several labels match, any of them is returned.
    pub fn preferred_label<'a>(&'a self, entity: &impl HasIri, language: &str) -> Option<&'a str> {
        self.preferred_labels(entity)
            .find(|label| {
                label
                    .language()
                    .is_some_and(|tag| tag.eq_ignore_ascii_case(language))
            })
            .map(Literal::value)
    }

    /// Does `entity` carry an `owl:deprecated` annotation, whatever its value?
    pub fn is_deprecated(&self, entity: &impl HasIri) -> bool {
        self.has_annotation(entity, &OwlRdfVocabulary::OwlDeprecated)
    }

    /// The super class expressions of the `SubClassOf` axioms about `class`.
    pub fn direct_superclasses<'a>(
        &'a self,
        class: &impl HasIri,
    ) -> impl Iterator<Item = &'a ClassExpression> + Clone {
        self.ontology.direct_superclasses_of(class.iri())
    }

    /// The sub class expressions of the `SubClassOf` axioms whose super class is `class`.
    pub fn direct_subclasses<'a>(
        &'a self,
        class: &impl HasIri,
    ) -> impl Iterator<Item = &'a ClassExpression> + Clone {
        self.ontology.direct_subclasses_of(class.iri())
    }

    pub fn equivalent_classes<'a>(
        &'a self,
        class: &impl HasIri,
    ) -> impl Iterator<Item = &'a ClassExpression> + Clone {
        self.ontology.equivalent_classes_of(class.iri())
    }

    pub fn has_subclass(&self, class: &impl HasIri) -> bool {
        self.direct_subclasses(class).next().is_some()
    }

    /// Is `ancestor` reachable from `class` through named super classes?
    ///
    /// A class is not its own sub class unless the hierarchy has a cycle going through it.
    pub fn is_subclass_of(&self, class: &impl HasIri, ancestor: &impl HasIri) -> bool {
        let mut visited = FxHashSet::default();
        let mut pending = self.named_superclasses(class).collect::<Vec<_>>();
        while let Some(current) = pending.pop() {
            if iri_eq(current, ancestor) {
                return true;
            }
            if visited.insert(current) {
                pending.extend(self.named_superclasses(current));
            }
        }
        false
    }

    fn named_superclasses<'a>(&'a self, class: &impl HasIri) -> impl Iterator<Item = &'a OwlClass> {
        self.direct_superclasses(class)
            .filter_map(ClassExpression::as_class)
    }
}
