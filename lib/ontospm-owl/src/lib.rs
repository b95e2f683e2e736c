//! OWL 2 ontology loading and annotation queries.
//!
//! This crate provides what an editorial quality check of an OWL ontology needs:
//! - an ontology data model (classes, properties, class expressions, axioms),
//! - a loader reading any RDF syntax supported by [`oxrdfio`] into this model,
//!   with local import resolution and configurable handling of missing imports,
//! - the [`OntologyQuery`] façade streaming annotation assertions filtered by
//!   property and resolving SKOS preferred labels by language tag,
//! - [`normalise_local_name`] turning labels into IRI local names.
//!
//! # Example
//! ```no_run
//! use ontospm_owl::{OntologyQuery, load, normalise_local_name};
//!
//! let (ontology, factory) = load("OntoSPM.owl")?;
//! let query = OntologyQuery::new(ontology, factory);
//! for class in query.classes() {
//!     if let Some(label) = query.preferred_label(class, "en") {
//!         println!("{} {}", class.short_form(), normalise_local_name(label));
//!     }
//! }
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod annotation;
mod axiom;
mod entity;
mod error;
mod expression;
mod factory;
mod iri;
mod loader;
mod normalise;
mod ontology;
mod parser;
mod query;
pub mod vocab;

pub use annotation::{Annotation, AnnotationAssertion, AnnotationValue};
pub use axiom::Axiom;
pub use entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
pub use error::{LoadError, OwlParseError, ParseErrorKind};
pub use expression::{ClassExpression, ObjectPropertyExpression};
pub use factory::DataFactory;
pub use iri::{HasIri, iri_eq, namespace, short_form, split_iri};
pub use loader::{LoaderConfig, MissingImportHandling, OntologyManager, load};
pub use normalise::normalise_local_name;
pub use ontology::Ontology;
pub use oxrdfio::RdfFormat;
pub use parser::{OntologyParser, ParserConfig, parse_ontology, parse_ontology_with_config};
pub use query::OntologyQuery;
pub use vocab::{IaoVocabulary, OwlRdfVocabulary, SkosVocabulary};
