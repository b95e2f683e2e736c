//! OWL 2 class expressions and object property expressions.

use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
use oxrdf::NamedNode;
use std::fmt;

/// An OWL 2 class expression.
///
/// Class expressions describe sets of individuals through various constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(OwlClass),

    /// ObjectIntersectionOf(C1, ..., Cn)
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectUnionOf(C1, ..., Cn)
    ObjectUnionOf(Vec<ClassExpression>),

    /// ObjectComplementOf(C)
    ObjectComplementOf(Box<ClassExpression>),

    /// ObjectOneOf(a1, ..., an)
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P, C) - existential restriction
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C) - universal restriction
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectHasValue(P, a)
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },

    /// ObjectMinCardinality(n, P) or ObjectMinCardinality(n, P, C)
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectMaxCardinality(n, P) or ObjectMaxCardinality(n, P, C)
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectExactCardinality(n, P) or ObjectExactCardinality(n, P, C)
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// DataSomeValuesFrom(P, D), the data range being a named datatype
    DataSomeValuesFrom {
        property: DataProperty,
        filler: NamedNode,
    },

    /// DataAllValuesFrom(P, D), the data range being a named datatype
    DataAllValuesFrom {
        property: DataProperty,
        filler: NamedNode,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    /// Returns the class if this expression is a named class.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns true if the expression is a named class.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns true if the expression is a property restriction.
    pub fn is_restriction(&self) -> bool {
        matches!(
            self,
            Self::ObjectSomeValuesFrom { .. }
                | Self::ObjectAllValuesFrom { .. }
                | Self::ObjectHasValue { .. }
                | Self::ObjectMinCardinality { .. }
                | Self::ObjectMaxCardinality { .. }
                | Self::ObjectExactCardinality { .. }
                | Self::DataSomeValuesFrom { .. }
                | Self::DataAllValuesFrom { .. }
        )
    }

    /// Returns the filler of an existential or universal object restriction.
    ///
    /// Any other expression, including the data restrictions, yields `None`.
    pub fn quantified_filler(&self) -> Option<&ClassExpression> {
        match self {
            Self::ObjectSomeValuesFrom { filler, .. }
            | Self::ObjectAllValuesFrom { filler, .. } => Some(filler),
            _ => None,
        }
    }

    /// Calls `f` on every named class occurring in this expression.
    pub fn for_each_class(&self, f: &mut impl FnMut(&OwlClass)) {
        match self {
            Self::Class(c) => f(c),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                for operand in operands {
                    operand.for_each_class(f);
                }
            }
            Self::ObjectComplementOf(operand) => operand.for_each_class(f),
            Self::ObjectSomeValuesFrom { filler, .. }
            | Self::ObjectAllValuesFrom { filler, .. } => {
                filler.for_each_class(f);
            }
            Self::ObjectMinCardinality { filler, .. }
            | Self::ObjectMaxCardinality { filler, .. }
            | Self::ObjectExactCardinality { filler, .. } => {
                if let Some(filler) = filler {
                    filler.for_each_class(f);
                }
            }
            Self::ObjectOneOf(_)
            | Self::ObjectHasValue { .. }
            | Self::DataSomeValuesFrom { .. }
            | Self::DataAllValuesFrom { .. } => (),
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(class: OwlClass) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => write!(f, "{c}"),
            Self::ObjectIntersectionOf(operands) => {
                write_list(f, "ObjectIntersectionOf", operands)
            }
            Self::ObjectUnionOf(operands) => write_list(f, "ObjectUnionOf", operands),
            Self::ObjectComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            Self::ObjectOneOf(individuals) => write_list(f, "ObjectOneOf", individuals),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectMinCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectMaxCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(
                f,
                "ObjectExactCardinality",
                *cardinality,
                property,
                filler.as_deref(),
            ),
            Self::DataSomeValuesFrom { property, filler } => {
                write!(f, "DataSomeValuesFrom({property} {filler})")
            }
            Self::DataAllValuesFrom { property, filler } => {
                write!(f, "DataAllValuesFrom({property} {filler})")
            }
        }
    }
}

fn write_list(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    items: &[impl fmt::Display],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

fn write_cardinality(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    cardinality: u32,
    property: &ObjectPropertyExpression,
    filler: Option<&ClassExpression>,
) -> fmt::Result {
    write!(f, "{name}({cardinality} {property}")?;
    if let Some(filler) = filler {
        write!(f, " {filler}")?;
    }
    write!(f, ")")
}

/// An object property expression: a named property or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),
    InverseObjectProperty(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Returns the named property, ignoring inversion.
    pub fn named_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::InverseObjectProperty(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        Self::ObjectProperty(property)
    }
}

impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectProperty(p) => write!(f, "{p}"),
            Self::InverseObjectProperty(p) => write!(f, "ObjectInverseOf({p})"),
        }
    }
}
