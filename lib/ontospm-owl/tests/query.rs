//! Annotation and hierarchy queries over inline Turtle documents.

use ontospm_owl::{
    AnnotationValue, ClassExpression, HasIri, OntologyManager, OntologyQuery, OwlClass,
    OwlRdfVocabulary, RdfFormat, SkosVocabulary,
};
use oxrdf::NamedNodeRef;

const PREFIXES: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix : <http://example.com/onto#> .
"#;

fn parse_turtle(turtle: &str) -> OntologyQuery {
    let document = format!("{PREFIXES}{turtle}");
    let (ontology, factory) = OntologyManager::default()
        .load_from_reader(document.as_bytes(), RdfFormat::Turtle, None)
        .expect("Failed to load turtle");
    OntologyQuery::new(ontology, factory)
}

fn class(name: &str) -> OwlClass {
    OwlClass::new_from_iri(format!("http://example.com/onto#{name}")).unwrap()
}

fn sorted_labels(query: &OntologyQuery, class: &OwlClass) -> Vec<String> {
    let mut labels = query
        .preferred_labels(class)
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    labels.sort();
    labels
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_preferred_labels_are_all_literal_pref_labels() {
    let query = parse_turtle(
        r#"
        :scalpel a owl:Class ;
            skos:prefLabel "scalpel"@en, "bistouri"@fr, "scalpel" ;
            skos:prefLabel :not_a_label ;
            skos:altLabel "knife"@en ;
            rdfs:label "Scalpel"@en .
        "#,
    );
    let scalpel = class("scalpel");
    assert_eq!(
        sorted_labels(&query, &scalpel),
        ["\"bistouri\"@fr", "\"scalpel\"", "\"scalpel\"@en"]
    );
    assert_eq!(
        query
            .annotation_values(&scalpel, &SkosVocabulary::PrefLabel)
            .count(),
        4
    );
    assert!(
        query
            .annotation_values(&scalpel, &SkosVocabulary::PrefLabel)
            .any(|value| matches!(value, AnnotationValue::Iri(_)))
    );
}

#[test]
fn test_preferred_label_by_language() {
    let query = parse_turtle(
        r#"
        :trocar a owl:Class ;
            skos:prefLabel "trocar"@en, "Trokar"@de, "trocart" .
        "#,
    );
    let trocar = class("trocar");
    assert_eq!(query.preferred_label(&trocar, "en"), Some("trocar"));
    assert_eq!(query.preferred_label(&trocar, "de"), Some("Trokar"));
    assert_eq!(query.preferred_label(&trocar, "fr"), None);
    assert_eq!(query.preferred_label(&trocar, ""), None);
}

#[test]
fn test_language_tags_are_case_insensitive() {
    let query = parse_turtle(
        r#"
        :forceps a owl:Class ;
            skos:prefLabel "forceps"@en-GB .
        "#,
    );
    let forceps = class("forceps");
    assert_eq!(query.preferred_label(&forceps, "en-gb"), Some("forceps"));
    assert_eq!(query.preferred_label(&forceps, "EN-GB"), Some("forceps"));
    assert_eq!(query.preferred_label(&forceps, "en"), None);
}

#[test]
fn test_unlabelled_and_unknown_entities() {
    let query = parse_turtle(":clamp a owl:Class .");
    assert_eq!(query.preferred_labels(&class("clamp")).count(), 0);
    assert_eq!(query.preferred_label(&class("clamp"), "en"), None);
    assert_eq!(query.preferred_labels(&class("unknown")).count(), 0);
    assert!(query.class(&class("unknown")).is_none());
}

#[test]
fn test_label_sequences_can_be_traversed_again() {
    let query = parse_turtle(
        r#"
        :retractor a owl:Class ;
            skos:prefLabel "retractor"@en, "Wundhaken"@de .
        "#,
    );
    let retractor = class("retractor");
    let labels = query.preferred_labels(&retractor);
    assert_eq!(labels.clone().count(), 2);
    assert_eq!(labels.count(), 2);
    assert_eq!(query.preferred_labels(&retractor).count(), 2);
}

// ============================================================================
// Annotation assertions
// ============================================================================

#[test]
fn test_filtered_annotation_assertions() {
    let query = parse_turtle(
        r#"
        :needle a owl:Class ;
            skos:prefLabel "needle"@en ;
            skos:definition "A sharp instrument."@en ;
            skos:altLabel "suture needle"@en, "surgical needle"@en .
        "#,
    );
    let needle = class("needle");
    let alt_labels = query
        .filtered_annotation_assertions(&needle, &SkosVocabulary::AltLabel)
        .collect::<Vec<_>>();
    assert_eq!(alt_labels.len(), 2);
    for assertion in &alt_labels {
        assert_eq!(assertion.iri(), needle.iri());
        assert_eq!(
            assertion.property().iri(),
            NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#altLabel")
        );
    }
    assert!(
        query
            .annotation_properties(&needle, &SkosVocabulary::Definition)
            .all(|property| property.iri() == SkosVocabulary::Definition.iri())
    );
    assert!(query.has_annotation(&needle, &SkosVocabulary::Definition));
    assert!(!query.has_annotation(&needle, &SkosVocabulary::HiddenLabel));
    assert!(!query.has_annotation(&needle, &OwlRdfVocabulary::RdfsComment));
}

#[test]
fn test_deprecation() {
    let query = parse_turtle(
        r#"
        :old_scalpel a owl:Class ; owl:deprecated true .
        :odd_scalpel a owl:Class ; owl:deprecated "false"^^xsd:boolean .
        :scalpel a owl:Class .
        "#,
    );
    assert!(query.is_deprecated(&class("old_scalpel")));
    assert!(query.is_deprecated(&class("odd_scalpel")));
    assert!(!query.is_deprecated(&class("scalpel")));
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn test_transitive_subclasses() {
    let query = parse_turtle(
        r#"
        :uses a owl:ObjectProperty .
        :instrument a owl:Class .
        :cutting_instrument a owl:Class ; rdfs:subClassOf :instrument .
        :scalpel a owl:Class ;
            rdfs:subClassOf :cutting_instrument ,
                [ a owl:Restriction ; owl:onProperty :uses ; owl:someValuesFrom :instrument ] .
        :loop_a a owl:Class ; rdfs:subClassOf :loop_b .
        :loop_b a owl:Class ; rdfs:subClassOf :loop_a .
        "#,
    );
    assert!(query.is_subclass_of(&class("scalpel"), &class("instrument")));
    assert!(query.is_subclass_of(&class("scalpel"), &class("cutting_instrument")));
    assert!(!query.is_subclass_of(&class("instrument"), &class("scalpel")));
    assert!(!query.is_subclass_of(&class("scalpel"), &class("scalpel")));
    assert!(query.is_subclass_of(&class("loop_a"), &class("loop_a")));

    let superclasses = query
        .direct_superclasses(&class("scalpel"))
        .collect::<Vec<_>>();
    assert_eq!(superclasses.len(), 2);
    assert!(
        superclasses
            .iter()
            .any(|expression| matches!(expression, ClassExpression::ObjectSomeValuesFrom { .. }))
    );
    assert!(query.has_subclass(&class("instrument")));
    assert!(!query.has_subclass(&class("scalpel")));
}

#[test]
fn test_equivalent_classes() {
    let query = parse_turtle(
        r#"
        :blade a owl:Class ; owl:equivalentClass :cutting_edge .
        :cutting_edge a owl:Class .
        "#,
    );
    let equivalents = query
        .equivalent_classes(&class("blade"))
        .filter_map(ClassExpression::as_class)
        .collect::<Vec<_>>();
    assert_eq!(equivalents, [&class("cutting_edge")]);
    assert_eq!(
        query
            .equivalent_classes(&class("cutting_edge"))
            .filter_map(ClassExpression::as_class)
            .collect::<Vec<_>>(),
        [&class("blade")]
    );
}
