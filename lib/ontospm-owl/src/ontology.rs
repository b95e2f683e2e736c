//! OWL 2 Ontology - container for axioms and declarations.

use crate::annotation::AnnotationAssertion;
use crate::axiom::Axiom;
use crate::entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
use crate::expression::ClassExpression;
use oxrdf::{NamedNode, NamedNodeRef};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// An OWL 2 ontology.
///
/// An ontology is a collection of axioms describing classes, properties,
/// and individuals in a domain. Axioms are indexed on insertion so that
/// annotation and hierarchy look-ups do not scan the whole axiom list.
/// Adding an axiom that is already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    iri: Option<NamedNode>,
    version_iri: Option<NamedNode>,
    imports: Vec<NamedNode>,
    axioms: Vec<Axiom>,

    /// Classes of the signature, by IRI
    classes: FxHashMap<String, OwlClass>,
    declared_classes: FxHashSet<OwlClass>,
    object_properties: FxHashSet<ObjectProperty>,
    data_properties: FxHashSet<DataProperty>,
    annotation_properties: FxHashSet<AnnotationProperty>,
    individuals: FxHashSet<Individual>,

    /// Positions in `axioms` of the annotation assertions, by subject IRI
    annotations: FxHashMap<String, Vec<usize>>,
    /// Positions of the `SubClassOf` axioms, by named sub class IRI
    super_classes: FxHashMap<String, Vec<usize>>,
    /// Positions of the `SubClassOf` axioms, by named super class IRI
    sub_classes: FxHashMap<String, Vec<usize>>,
    /// Positions of the `EquivalentClasses` axioms, by named member IRI
    equivalents: FxHashMap<String, Vec<usize>>,
}

impl Ontology {
    /// Creates a new empty ontology.
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            ..Self::default()
        }
    }

    /// Creates a new ontology with the given IRI string.
    pub fn with_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::new(Some(NamedNode::new(iri)?)))
    }

    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    pub fn set_iri(&mut self, iri: Option<NamedNode>) {
        self.iri = iri;
    }

    pub fn version_iri(&self) -> Option<&NamedNode> {
        self.version_iri.as_ref()
    }

    pub fn set_version_iri(&mut self, iri: Option<NamedNode>) {
        self.version_iri = iri;
    }

    /// Returns the IRIs of the `owl:imports` declarations.
    pub fn imports(&self) -> &[NamedNode] {
        &self.imports
    }

    /// Adds an import declaration.
    pub fn add_import(&mut self, iri: NamedNode) {
        if !self.imports.contains(&iri) {
            self.imports.push(iri);
        }
    }

    /// Adds an axiom to the ontology.
    ///
    /// Returns `false` if the axiom was already there.
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        if self.contains_axiom(&axiom) {
            return false;
        }
        let position = self.axioms.len();
        match &axiom {
            Axiom::DeclareClass(c) => {
                self.declared_classes.insert(c.clone());
                self.declare_class(c);
            }
            Axiom::DeclareObjectProperty(p) => {
                self.object_properties.insert(p.clone());
            }
            Axiom::DeclareDataProperty(p) => {
                self.data_properties.insert(p.clone());
            }
            Axiom::DeclareAnnotationProperty(p) => {
                self.annotation_properties.insert(p.clone());
            }
            Axiom::DeclareNamedIndividual(i) => {
                self.individuals.insert(i.clone());
            }
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                self.declare_classes_in_expression(sub_class);
                self.declare_classes_in_expression(super_class);
                if let ClassExpression::Class(c) = sub_class {
                    index(&mut self.super_classes, c.as_named_node(), position);
                }
                if let ClassExpression::Class(c) = super_class {
                    index(&mut self.sub_classes, c.as_named_node(), position);
                }
            }
            Axiom::EquivalentClasses(classes) => {
                for c in classes {
                    self.declare_classes_in_expression(c);
                    if let ClassExpression::Class(c) = c {
                        index(&mut self.equivalents, c.as_named_node(), position);
                    }
                }
            }
            Axiom::AnnotationAssertion(a) => {
                index(&mut self.annotations, &a.subject, position);
            }
        }
        self.axioms.push(axiom);
        true
    }

    fn contains_axiom(&self, axiom: &Axiom) -> bool {
        let candidates = match axiom {
            Axiom::DeclareClass(c) => return self.declared_classes.contains(c),
            Axiom::DeclareObjectProperty(p) => return self.object_properties.contains(p),
            Axiom::DeclareDataProperty(p) => return self.data_properties.contains(p),
            Axiom::DeclareAnnotationProperty(p) => return self.annotation_properties.contains(p),
            Axiom::DeclareNamedIndividual(i) => return self.individuals.contains(i),
            Axiom::SubClassOf {
                sub_class: ClassExpression::Class(c),
                ..
            } => self.super_classes.get(c.as_named_node().as_str()),
            Axiom::SubClassOf {
                super_class: ClassExpression::Class(c),
                ..
            } => self.sub_classes.get(c.as_named_node().as_str()),
            Axiom::EquivalentClasses(classes) => classes
                .iter()
                .find_map(ClassExpression::as_class)
                .and_then(|c| self.equivalents.get(c.as_named_node().as_str())),
            Axiom::AnnotationAssertion(a) => self.annotations.get(a.subject.as_str()),
            Axiom::SubClassOf { .. } => None,
        };
        candidates.is_some_and(|positions| {
            positions
                .iter()
                .any(|&i| self.axioms.get(i).is_some_and(|a| a == axiom))
        })
    }

    fn declare_class(&mut self, class: &OwlClass) {
        if !self.classes.contains_key(class.as_named_node().as_str()) {
            self.classes
                .insert(class.as_named_node().as_str().into(), class.clone());
        }
    }

    /// Adds every named class of the expression to the signature.
    fn declare_classes_in_expression(&mut self, expr: &ClassExpression) {
        let mut found = Vec::new();
        expr.for_each_class(&mut |c| found.push(c.clone()));
        for c in &found {
            self.declare_class(c);
        }
    }

    /// Returns all axioms in the ontology.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Returns the number of axioms.
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Returns the classes of the signature, declared or only referenced by an axiom.
    pub fn classes(&self) -> impl Iterator<Item = &OwlClass> + Clone {
        self.classes.values()
    }

    /// Returns the number of classes in the signature.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Resolves an IRI to the class of the signature with this IRI.
    pub fn class(&self, iri: NamedNodeRef<'_>) -> Option<&OwlClass> {
        self.classes.get(iri.as_str())
    }

    pub fn contains_class(&self, class: &OwlClass) -> bool {
        self.classes.contains_key(class.as_named_node().as_str())
    }

    pub fn object_properties(&self) -> impl Iterator<Item = &ObjectProperty> {
        self.object_properties.iter()
    }

    pub fn data_properties(&self) -> impl Iterator<Item = &DataProperty> {
        self.data_properties.iter()
    }

    pub fn annotation_properties(&self) -> impl Iterator<Item = &AnnotationProperty> {
        self.annotation_properties.iter()
    }

    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Returns the annotation assertions whose subject is `subject`.
    pub fn annotation_assertion_axioms<'a>(
        &'a self,
        subject: NamedNodeRef<'_>,
    ) -> impl Iterator<Item = &'a AnnotationAssertion> + Clone + use<'a> {
        self.indexed(&self.annotations, subject)
            .filter_map(Axiom::as_annotation_assertion)
    }

    /// Returns the super class expressions of the `SubClassOf` axioms whose sub class is `class`.
    pub fn direct_superclasses_of<'a>(
        &'a self,
        class: NamedNodeRef<'_>,
    ) -> impl Iterator<Item = &'a ClassExpression> + Clone + use<'a> {
        self.indexed(&self.super_classes, class)
            .filter_map(|a| match a {
                Axiom::SubClassOf { super_class, .. } => Some(super_class),
                _ => None,
            })
    }

    /// Returns the sub class expressions of the `SubClassOf` axioms whose super class is `class`.
    pub fn direct_subclasses_of<'a>(
        &'a self,
        class: NamedNodeRef<'_>,
    ) -> impl Iterator<Item = &'a ClassExpression> + Clone + use<'a> {
        self.indexed(&self.sub_classes, class)
            .filter_map(|a| match a {
                Axiom::SubClassOf { sub_class, .. } => Some(sub_class),
                _ => None,
            })
    }

    /// Returns the expressions stated equivalent to `class`, `class` itself excluded.
    pub fn equivalent_classes_of<'a>(
        &'a self,
        class: NamedNodeRef<'_>,
    ) -> impl Iterator<Item = &'a ClassExpression> + Clone + use<'a> {
        let class = class.into_owned();
        self.indexed(&self.equivalents, class.as_ref())
            .filter_map(|a| match a {
                Axiom::EquivalentClasses(classes) => Some(classes),
                _ => None,
            })
            .flatten()
            .filter(move |c| c.as_class().is_none_or(|c| *c.as_named_node() != class))
    }

    fn indexed<'a>(
        &'a self,
        index: &'a FxHashMap<String, Vec<usize>>,
        iri: NamedNodeRef<'_>,
    ) -> impl Iterator<Item = &'a Axiom> + Clone + use<'a> {
        index
            .get(iri.as_str())
            .into_iter()
            .flatten()
            .filter_map(|&i| self.axioms.get(i))
    }

    /// Merges another ontology into this one.
    ///
    /// The IRIs of `self` are kept, the imports and axioms of `other` are added.
    pub fn merge(&mut self, other: Self) {
        for import in other.imports {
            self.add_import(import);
        }
        for axiom in other.axioms {
            self.add_axiom(axiom);
        }
    }
}

fn index(index: &mut FxHashMap<String, Vec<usize>>, iri: &NamedNode, position: usize) {
    index.entry(iri.as_str().into()).or_default().push(position);
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(iri) = &self.iri {
            write!(f, "Ontology({iri})")?;
        } else {
            write!(f, "Ontology(anonymous)")?;
        }
        write!(f, " [{} axioms]", self.axioms.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationValue;
    use crate::iri::HasIri;
    use oxrdf::Literal;

    fn class(name: &str) -> OwlClass {
        OwlClass::new_from_iri(format!("http://example.com/ns#{name}")).unwrap()
    }

    #[test]
    fn duplicate_axioms_are_ignored() {
        let mut ontology = Ontology::new(None);
        let scalpel = class("scalpel");
        let label = AnnotationAssertion::new(
            scalpel.clone().into(),
            AnnotationProperty::new_from_iri("http://www.w3.org/2004/02/skos/core#prefLabel")
                .unwrap(),
            AnnotationValue::Literal(Literal::new_language_tagged_literal_unchecked(
                "scalpel", "en",
            )),
        );
        assert!(ontology.add_axiom(Axiom::DeclareClass(scalpel.clone())));
        assert!(!ontology.add_axiom(Axiom::DeclareClass(scalpel.clone())));
        assert!(ontology.add_axiom(Axiom::AnnotationAssertion(label.clone())));
        assert!(!ontology.add_axiom(Axiom::AnnotationAssertion(label)));
        assert_eq!(ontology.axiom_count(), 2);
        assert_eq!(
            ontology.annotation_assertion_axioms(scalpel.iri()).count(),
            1
        );
    }

    #[test]
    fn hierarchy_indexes() {
        let mut ontology = Ontology::new(None);
        let instrument = class("surgical_instrument");
        let scissors = class("scissors");
        let cutting = class("cutting_instrument");
        ontology.add_axiom(Axiom::subclass_of(
            scissors.clone().into(),
            instrument.clone().into(),
        ));
        ontology.add_axiom(Axiom::equivalent_classes(vec![
            scissors.clone().into(),
            cutting.clone().into(),
        ]));

        assert_eq!(ontology.class_count(), 3);
        assert_eq!(
            ontology
                .direct_superclasses_of(scissors.iri())
                .collect::<Vec<_>>(),
            [&ClassExpression::Class(instrument.clone())]
        );
        assert_eq!(
            ontology
                .direct_subclasses_of(instrument.iri())
                .collect::<Vec<_>>(),
            [&ClassExpression::Class(scissors.clone())]
        );
        assert_eq!(
            ontology
                .equivalent_classes_of(scissors.iri())
                .collect::<Vec<_>>(),
            [&ClassExpression::Class(cutting)]
        );
        assert_eq!(ontology.direct_superclasses_of(instrument.iri()).count(), 0);
    }

    #[test]
    fn merge_adds_axioms_and_imports() {
        let mut root = Ontology::with_iri("http://example.com/root").unwrap();
        let mut imported = Ontology::with_iri("http://example.com/imported").unwrap();
        imported.add_import(NamedNode::new("http://example.com/other").unwrap());
        imported.add_axiom(Axiom::DeclareClass(class("forceps")));
        root.add_axiom(Axiom::DeclareClass(class("forceps")));
        root.add_axiom(Axiom::DeclareClass(class("trocar")));
        root.merge(imported);

        assert_eq!(
            root.iri().map(NamedNode::as_str),
            Some("http://example.com/root")
        );
        assert_eq!(root.imports().len(), 1);
        assert_eq!(root.class_count(), 2);
        assert_eq!(root.axiom_count(), 2);
    }
}
