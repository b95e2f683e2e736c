use std::fmt;

/// An editorial rule checked on each class of its [`Scope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    ClassWithAllLabels,
    UnderscoresInPreferredLabel,
    RdfsLabel,
    ClassDefinition,
    IriMatchesEnglishLabel,
    EnglishLabel,
    FrenchLabel,
    GermanLabel,
    InstrumentHasFunction,
    InstrumentWithDeprecatedFunctions,
    OntologyNamespace,
}

/// The classes a [`Check`] is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Non deprecated classes of the target namespace.
    InScope,
    /// Classes of the target namespace below one of the surgical continuant categories,
    /// deprecated ones included.
    SurgicalContinuant,
    /// Every class with a namespace.
    Namespaced,
}

impl Check {
    pub const ALL: [Self; 11] = [
        Self::ClassWithAllLabels,
        Self::UnderscoresInPreferredLabel,
        Self::RdfsLabel,
        Self::ClassDefinition,
        Self::IriMatchesEnglishLabel,
        Self::EnglishLabel,
        Self::FrenchLabel,
        Self::GermanLabel,
        Self::InstrumentHasFunction,
        Self::InstrumentWithDeprecatedFunctions,
        Self::OntologyNamespace,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::ClassWithAllLabels => "class-with-all-labels",
            Self::UnderscoresInPreferredLabel => "underscores-in-preferred-label",
            Self::RdfsLabel => "rdfs-label",
            Self::ClassDefinition => "class-definition",
            Self::IriMatchesEnglishLabel => "iri-matches-english-label",
            Self::EnglishLabel => "english-label",
            Self::FrenchLabel => "french-label",
            Self::GermanLabel => "german-label",
            Self::InstrumentHasFunction => "instrument-has-function",
            Self::InstrumentWithDeprecatedFunctions => "instrument-with-deprecated-functions",
            Self::OntologyNamespace => "ontology-namespace",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.id() == id)
    }

    pub fn scope(self) -> Scope {
        match self {
            Self::InstrumentHasFunction | Self::InstrumentWithDeprecatedFunctions => {
                Scope::SurgicalContinuant
            }
            Self::OntologyNamespace => Scope::Namespaced,
            _ => Scope::InScope,
        }
    }

    /// Only [`Check::OntologyNamespace`] is disabled by default.
    pub fn is_enabled_by_default(self) -> bool {
        self != Self::OntologyNamespace
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for check in Check::ALL {
            assert_eq!(Check::from_id(check.id()), Some(check));
            assert_eq!(check.to_string(), check.id());
        }
        assert_eq!(Check::from_id("unknown"), None);
    }

    #[test]
    fn scopes() {
        assert_eq!(Check::RdfsLabel.scope(), Scope::InScope);
        assert_eq!(
            Check::InstrumentHasFunction.scope(),
            Scope::SurgicalContinuant
        );
        assert_eq!(Check::OntologyNamespace.scope(), Scope::Namespaced);
        assert!(!Check::OntologyNamespace.is_enabled_by_default());
        assert!(Check::GermanLabel.is_enabled_by_default());
    }
}
