//! OWL 2 axiom types.
//!
//! Only the axioms needed to answer annotation and class hierarchy queries are kept.

use crate::annotation::AnnotationAssertion;
use crate::entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
use crate::expression::ClassExpression;
use std::fmt;

/// An OWL 2 axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    /// Declaration(Class(C))
    DeclareClass(OwlClass),
    /// Declaration(ObjectProperty(P))
    DeclareObjectProperty(ObjectProperty),
    /// Declaration(DataProperty(P))
    DeclareDataProperty(DataProperty),
    /// Declaration(AnnotationProperty(P))
    DeclareAnnotationProperty(AnnotationProperty),
    /// Declaration(NamedIndividual(a))
    DeclareNamedIndividual(Individual),

    /// SubClassOf(sub, super) - sub is a subclass of super
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },

    /// EquivalentClasses(C1, C2, ...) - all classes are equivalent
    EquivalentClasses(Vec<ClassExpression>),

    /// AnnotationAssertion(P s v)
    AnnotationAssertion(AnnotationAssertion),
}

impl Axiom {
    /// Creates a SubClassOf axiom.
    pub fn subclass_of(sub_class: ClassExpression, super_class: ClassExpression) -> Self {
        Self::SubClassOf {
            sub_class,
            super_class,
        }
    }

    /// Creates an EquivalentClasses axiom.
    pub fn equivalent_classes(classes: Vec<ClassExpression>) -> Self {
        Self::EquivalentClasses(classes)
    }

    /// Returns true if this is a declaration axiom.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Self::DeclareClass(_)
                | Self::DeclareObjectProperty(_)
                | Self::DeclareDataProperty(_)
                | Self::DeclareAnnotationProperty(_)
                | Self::DeclareNamedIndividual(_)
        )
    }

    /// Returns the annotation assertion if this axiom is one.
    pub fn as_annotation_assertion(&self) -> Option<&AnnotationAssertion> {
        match self {
            Self::AnnotationAssertion(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeclareClass(c) => write!(f, "Declaration(Class({c}))"),
            Self::DeclareObjectProperty(p) => write!(f, "Declaration(ObjectProperty({p}))"),
            Self::DeclareDataProperty(p) => write!(f, "Declaration(DataProperty({p}))"),
            Self::DeclareAnnotationProperty(p) => {
                write!(f, "Declaration(AnnotationProperty({p}))")
            }
            Self::DeclareNamedIndividual(i) => write!(f, "Declaration(NamedIndividual({i}))"),
            Self::SubClassOf {
                sub_class,
                super_class,
            } => write!(f, "SubClassOf({sub_class} {super_class})"),
            Self::EquivalentClasses(classes) => {
                write!(f, "EquivalentClasses(")?;
                for (i, c) in classes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
            Self::AnnotationAssertion(a) => write!(f, "{a}"),
        }
    }
}
