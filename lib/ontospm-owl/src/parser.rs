//! OWL 2 parser from RDF graphs.
//!
//! This module maps an RDF graph, as produced by any RDF syntax parser, to the
//! OWL 2 structural model following the
//! [OWL 2 mapping to RDF graphs](https://www.w3.org/TR/owl2-mapping-to-rdf/).
//! Only the constructs needed by annotation and class hierarchy queries are
//! kept: declarations, `SubClassOf`, `EquivalentClasses` and annotation assertions.

use crate::annotation::{AnnotationAssertion, AnnotationValue};
use crate::axiom::Axiom;
use crate::entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
use crate::error::{OwlParseError, ParseErrorKind};
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use crate::ontology::Ontology;
use crate::vocab::{OwlRdfVocabulary, owl};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{BlankNodeRef, Graph, NamedNodeRef, NamedOrBlankNodeRef, TermRef};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum depth for parsing nested expressions.
    pub max_depth: usize,
    /// Maximum length for RDF lists.
    pub max_list_length: usize,
    /// Whether to skip axioms that cannot be parsed instead of failing,
    /// and to accept undeclared annotation properties.
    pub lenient: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserConfig {
    /// Creates a new parser configuration with default values.
    pub fn new() -> Self {
        Self {
            max_depth: 100,
            max_list_length: 10000,
            lenient: false,
        }
    }

    /// Sets lenient mode.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_list_length(mut self, max_list_length: usize) -> Self {
        self.max_list_length = max_list_length;
        self
    }
}

/// Parses an OWL ontology from an RDF graph.
pub struct OntologyParser<'a> {
    graph: &'a Graph,
    config: ParserConfig,
    ontology_iri: Option<NamedNodeRef<'a>>,
    object_properties: FxHashSet<NamedNodeRef<'a>>,
    data_properties: FxHashSet<NamedNodeRef<'a>>,
    annotation_properties: FxHashSet<NamedNodeRef<'a>>,
    /// Blank nodes whose expression is being parsed
    in_progress: Vec<BlankNodeRef<'a>>,
}

impl<'a> OntologyParser<'a> {
    /// Creates a new parser for the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_config(graph, ParserConfig::new())
    }

    /// Creates a new parser with custom configuration.
    pub fn with_config(graph: &'a Graph, config: ParserConfig) -> Self {
        Self {
            graph,
            config,
            ontology_iri: None,
            object_properties: FxHashSet::default(),
            data_properties: FxHashSet::default(),
            annotation_properties: FxHashSet::default(),
            in_progress: Vec::new(),
        }
    }

    /// Parses the ontology from the graph.
    pub fn parse(&mut self) -> Result<Ontology, OwlParseError> {
        let mut ontology = Ontology::new(None);
        self.parse_header(&mut ontology);
        self.parse_declarations(&mut ontology);
        self.parse_class_axioms(&mut ontology)?;
        self.parse_annotation_assertions(&mut ontology);
        Ok(ontology)
    }

    /// Finds the ontology IRI, its version IRI and its imports.
    fn parse_header(&mut self, ontology: &mut Ontology) {
        let graph = self.graph;
        for triple in graph.triples_for_predicate(rdf::TYPE) {
            let NamedOrBlankNodeRef::NamedNode(subject) = triple.subject else {
                continue;
            };
            if triple.object != TermRef::NamedNode(owl::ONTOLOGY) {
                continue;
            }
            if self.ontology_iri.is_some() {
                debug!("Ignoring additional ontology header {subject}");
                continue;
            }
            self.ontology_iri = Some(subject);
            ontology.set_iri(Some(subject.into_owned()));
            for t in graph.triples_for_subject(subject) {
                let TermRef::NamedNode(object) = t.object else {
                    continue;
                };
                if t.predicate == owl::IMPORTS {
                    ontology.add_import(object.into_owned());
                } else if t.predicate == owl::VERSION_IRI {
                    ontology.set_version_iri(Some(object.into_owned()));
                }
            }
        }
    }

    /// Parses entity declarations.
    fn parse_declarations(&mut self, ontology: &mut Ontology) {
        for triple in self.graph.triples_for_predicate(rdf::TYPE) {
            let (NamedOrBlankNodeRef::NamedNode(subject), TermRef::NamedNode(object)) =
                (triple.subject, triple.object)
            else {
                continue;
            };
            let node = subject.into_owned();
            if object == owl::CLASS {
                ontology.add_axiom(Axiom::DeclareClass(OwlClass::new(node)));
            } else if object == owl::OBJECT_PROPERTY {
                self.object_properties.insert(subject);
                ontology.add_axiom(Axiom::DeclareObjectProperty(ObjectProperty::new(node)));
            } else if object == owl::DATATYPE_PROPERTY {
                self.data_properties.insert(subject);
                ontology.add_axiom(Axiom::DeclareDataProperty(DataProperty::new(node)));
            } else if object == owl::ANNOTATION_PROPERTY {
                self.annotation_properties.insert(subject);
                ontology.add_axiom(Axiom::DeclareAnnotationProperty(AnnotationProperty::new(
                    node,
                )));
            } else if object == owl::NAMED_INDIVIDUAL {
                ontology.add_axiom(Axiom::DeclareNamedIndividual(Individual::Named(node)));
            }
        }
    }

    /// Parses `rdfs:subClassOf` and `owl:equivalentClass` triples.
    fn parse_class_axioms(&mut self, ontology: &mut Ontology) -> Result<(), OwlParseError> {
        let graph = self.graph;
        for triple in graph.triples_for_predicate(rdfs::SUB_CLASS_OF) {
            let axiom = self.parse_class_pair(triple.subject.into(), triple.object).map(
                |(sub_class, super_class)| Axiom::SubClassOf {
                    sub_class,
                    super_class,
                },
            );
            if let Some(axiom) = self.recover(axiom, "rdfs:subClassOf", triple.subject)? {
                ontology.add_axiom(axiom);
            }
        }
        for triple in graph.triples_for_predicate(owl::EQUIVALENT_CLASS) {
            let axiom = self
                .parse_class_pair(triple.subject.into(), triple.object)
                .map(|(a, b)| Axiom::EquivalentClasses(vec![a, b]));
            if let Some(axiom) = self.recover(axiom, "owl:equivalentClass", triple.subject)? {
                ontology.add_axiom(axiom);
            }
        }
        Ok(())
    }

    fn parse_class_pair(
        &mut self,
        left: TermRef<'a>,
        right: TermRef<'a>,
    ) -> Result<(ClassExpression, ClassExpression), OwlParseError> {
        Ok((
            self.parse_class_expression(left)?,
            self.parse_class_expression(right)?,
        ))
    }

    /// In lenient mode, turns an error into a skipped axiom.
    fn recover<T>(
        &self,
        result: Result<T, OwlParseError>,
        construct: &str,
        subject: NamedOrBlankNodeRef<'_>,
    ) -> Result<Option<T>, OwlParseError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if self.config.lenient => {
                debug!("Skipping the {construct} axiom of {subject}: {error}");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Parses the annotation assertions on named subjects.
    fn parse_annotation_assertions(&self, ontology: &mut Ontology) {
        for triple in self.graph.iter() {
            let NamedOrBlankNodeRef::NamedNode(subject) = triple.subject else {
                continue;
            };
            if Some(subject) == self.ontology_iri || !self.is_annotation_property(triple.predicate)
            {
                continue;
            }
            let Some(value) = AnnotationValue::from_term(triple.object) else {
                continue;
            };
            ontology.add_axiom(Axiom::AnnotationAssertion(AnnotationAssertion::new(
                subject.into_owned(),
                AnnotationProperty::new(triple.predicate.into_owned()),
                value,
            )));
        }
    }

    fn is_annotation_property(&self, predicate: NamedNodeRef<'a>) -> bool {
        if self.annotation_properties.contains(&predicate)
            || OwlRdfVocabulary::is_built_in(predicate)
        {
            return true;
        }
        self.config.lenient
            && !self.object_properties.contains(&predicate)
            && !self.data_properties.contains(&predicate)
            && !is_reserved(predicate)
    }

    /// Parses a class expression from a term.
    fn parse_class_expression(
        &mut self,
        term: TermRef<'a>,
    ) -> Result<ClassExpression, OwlParseError> {
        match term {
            TermRef::NamedNode(n) => Ok(ClassExpression::Class(OwlClass::new(n.into_owned()))),
            TermRef::BlankNode(b) => {
                if self.in_progress.contains(&b) {
                    return Err(OwlParseError::circular_reference(format!(
                        "{b} is defined in terms of itself"
                    )));
                }
                if self.in_progress.len() >= self.config.max_depth {
                    return Err(OwlParseError::new(
                        ParseErrorKind::TooDeep,
                        format!(
                            "Class expressions are nested more than {} times",
                            self.config.max_depth
                        ),
                    ));
                }
                self.in_progress.push(b);
                let result = self.parse_anonymous_class(b);
                self.in_progress.pop();
                result
            }
            TermRef::Literal(_) => Err(OwlParseError::invalid_value(
                "Literal cannot be a class expression",
            )),
            #[cfg(feature = "rdf-12")]
            TermRef::Triple(_) => Err(OwlParseError::invalid_value(
                "Quoted triple cannot be a class expression",
            )),
        }
    }

    /// Parses an anonymous class expression (restriction or boolean).
    fn parse_anonymous_class(
        &mut self,
        bnode: BlankNodeRef<'a>,
    ) -> Result<ClassExpression, OwlParseError> {
        let graph = self.graph;
        if graph
            .object_for_subject_predicate(bnode, owl::ON_PROPERTY)
            .is_some()
        {
            return self.parse_restriction(bnode);
        }

        for triple in graph.triples_for_subject(bnode) {
            if triple.predicate == owl::INTERSECTION_OF {
                let classes = self.parse_class_list(triple.object)?;
                return Ok(ClassExpression::ObjectIntersectionOf(classes));
            } else if triple.predicate == owl::UNION_OF {
                let classes = self.parse_class_list(triple.object)?;
                return Ok(ClassExpression::ObjectUnionOf(classes));
            } else if triple.predicate == owl::COMPLEMENT_OF {
                let class = self.parse_class_expression(triple.object)?;
                return Ok(ClassExpression::ObjectComplementOf(Box::new(class)));
            } else if triple.predicate == owl::ONE_OF {
                let individuals = self
                    .list_items(triple.object)?
                    .into_iter()
                    .map(term_to_individual)
                    .collect::<Result<_, _>>()?;
                return Ok(ClassExpression::ObjectOneOf(individuals));
            }
        }

        Err(OwlParseError::new(
            ParseErrorKind::UnknownConstruct,
            format!("Cannot parse anonymous class: {bnode}"),
        ))
    }

    /// Parses an OWL restriction.
    fn parse_restriction(
        &mut self,
        bnode: BlankNodeRef<'a>,
    ) -> Result<ClassExpression, OwlParseError> {
        let graph = self.graph;
        let property = graph
            .object_for_subject_predicate(bnode, owl::ON_PROPERTY)
            .ok_or_else(|| OwlParseError::missing_property("owl:onProperty"))?;
        let value =
            |predicate: NamedNodeRef<'_>| graph.object_for_subject_predicate(bnode, predicate);

        if let TermRef::NamedNode(p) = property {
            if self.data_properties.contains(&p) {
                return parse_data_restriction(DataProperty::new(p.into_owned()), value);
            }
        }
        let property = self.parse_object_property_expression(property)?;

        if let Some(filler) = value(owl::SOME_VALUES_FROM) {
            return Ok(ClassExpression::ObjectSomeValuesFrom {
                property,
                filler: Box::new(self.parse_class_expression(filler)?),
            });
        }
        if let Some(filler) = value(owl::ALL_VALUES_FROM) {
            return Ok(ClassExpression::ObjectAllValuesFrom {
                property,
                filler: Box::new(self.parse_class_expression(filler)?),
            });
        }
        if let Some(individual) = value(owl::HAS_VALUE) {
            return Ok(ClassExpression::ObjectHasValue {
                property,
                individual: term_to_individual(individual)?,
            });
        }

        let filler = match value(owl::ON_CLASS) {
            Some(class) => Some(Box::new(self.parse_class_expression(class)?)),
            None => None,
        };
        let qualified = filler.is_some();
        let cardinality = |plain, qualified_form| {
            value(if qualified { qualified_form } else { plain })
                .map(parse_cardinality)
                .transpose()
        };
        if let Some(cardinality) =
            cardinality(owl::MIN_CARDINALITY, owl::MIN_QUALIFIED_CARDINALITY)?
        {
            return Ok(ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            });
        }
        if let Some(cardinality) =
            cardinality(owl::MAX_CARDINALITY, owl::MAX_QUALIFIED_CARDINALITY)?
        {
            return Ok(ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            });
        }
        if let Some(cardinality) = cardinality(owl::CARDINALITY, owl::QUALIFIED_CARDINALITY)? {
            return Ok(ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            });
        }

        Err(OwlParseError::new(
            ParseErrorKind::UnknownConstruct,
            format!("Unknown restriction type: {bnode}"),
        ))
    }

    fn parse_object_property_expression(
        &self,
        term: TermRef<'a>,
    ) -> Result<ObjectPropertyExpression, OwlParseError> {
        match term {
            TermRef::NamedNode(p) => Ok(ObjectPropertyExpression::ObjectProperty(
                ObjectProperty::new(p.into_owned()),
            )),
            TermRef::BlankNode(b) => {
                match self.graph.object_for_subject_predicate(b, owl::INVERSE_OF) {
                    Some(TermRef::NamedNode(p)) => {
                        Ok(ObjectPropertyExpression::InverseObjectProperty(
                            ObjectProperty::new(p.into_owned()),
                        ))
                    }
                    _ => Err(OwlParseError::invalid_value(format!(
                        "{b} is not an inverse object property"
                    ))),
                }
            }
            _ => Err(OwlParseError::invalid_value(
                "owl:onProperty must point to a property",
            )),
        }
    }

    /// Parses an RDF list of class expressions.
    fn parse_class_list(
        &mut self,
        head: TermRef<'a>,
    ) -> Result<Vec<ClassExpression>, OwlParseError> {
        self.list_items(head)?
            .into_iter()
            .map(|item| self.parse_class_expression(item))
            .collect()
    }

    /// Returns the elements of an RDF list.
    fn list_items(&self, head: TermRef<'a>) -> Result<Vec<TermRef<'a>>, OwlParseError> {
        let mut items = Vec::new();
        let mut current = head;
        loop {
            let node = match current {
                TermRef::NamedNode(n) if n == rdf::NIL => return Ok(items),
                TermRef::BlankNode(b) => b,
                _ => {
                    return Err(OwlParseError::malformed_list(format!(
                        "{current} is not a list node"
                    )));
                }
            };
            if items.len() >= self.config.max_list_length {
                return Err(OwlParseError::malformed_list("List too long"));
            }
            items.push(
                self.graph
                    .object_for_subject_predicate(node, rdf::FIRST)
                    .ok_or_else(|| OwlParseError::malformed_list("Missing rdf:first"))?,
            );
            current = self
                .graph
                .object_for_subject_predicate(node, rdf::REST)
                .ok_or_else(|| OwlParseError::malformed_list("Missing rdf:rest"))?;
        }
    }
}

fn parse_data_restriction<'a>(
    property: DataProperty,
    value: impl Fn(NamedNodeRef<'static>) -> Option<TermRef<'a>>,
) -> Result<ClassExpression, OwlParseError> {
    let datatype = |term: TermRef<'_>| match term {
        TermRef::NamedNode(d) => Ok(d.into_owned()),
        _ => Err(OwlParseError::new(
            ParseErrorKind::UnknownConstruct,
            "Only named datatypes are supported as data ranges",
        )),
    };
    if let Some(filler) = value(owl::SOME_VALUES_FROM) {
        return Ok(ClassExpression::DataSomeValuesFrom {
            property,
            filler: datatype(filler)?,
        });
    }
    if let Some(filler) = value(owl::ALL_VALUES_FROM) {
        return Ok(ClassExpression::DataAllValuesFrom {
            property,
            filler: datatype(filler)?,
        });
    }
    Err(OwlParseError::new(
        ParseErrorKind::UnknownConstruct,
        format!("Unsupported data restriction on {property}"),
    ))
}

fn parse_cardinality(term: TermRef<'_>) -> Result<u32, OwlParseError> {
    match term {
        TermRef::Literal(literal) => literal.value().parse().map_err(|_| {
            OwlParseError::new(
                ParseErrorKind::InvalidCardinality,
                format!("{literal} is not a valid cardinality"),
            )
        }),
        _ => Err(OwlParseError::new(
            ParseErrorKind::InvalidCardinality,
            format!("{term} is not a literal"),
        )),
    }
}

/// Converts a term to an individual.
fn term_to_individual(term: TermRef<'_>) -> Result<Individual, OwlParseError> {
    match term {
        TermRef::NamedNode(n) => Ok(Individual::Named(n.into_owned())),
        TermRef::BlankNode(b) => Ok(Individual::Anonymous(b.into_owned())),
        _ => Err(OwlParseError::invalid_value("Expected individual")),
    }
}

/// IRIs of the RDF, RDFS, OWL and XSD vocabularies cannot be annotation properties
/// unless they are built-in ones.
fn is_reserved(predicate: NamedNodeRef<'_>) -> bool {
    const RESERVED: [&str; 4] = [
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        "http://www.w3.org/2000/01/rdf-schema#",
        owl::NAMESPACE,
        "http://www.w3.org/2001/XMLSchema#",
    ];
    RESERVED
        .iter()
        .any(|namespace| predicate.as_str().starts_with(namespace))
}

/// Parses an ontology from an RDF graph.
pub fn parse_ontology(graph: &Graph) -> Result<Ontology, OwlParseError> {
    OntologyParser::new(graph).parse()
}

/// Parses an ontology with custom configuration.
pub fn parse_ontology_with_config(
    graph: &Graph,
    config: ParserConfig,
) -> Result<Ontology, OwlParseError> {
    OntologyParser::with_config(graph, config).parse()
}
