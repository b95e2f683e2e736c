use oxiri::IriParseError;
use oxrdfio::RdfParseError;
use std::io;
use std::path::PathBuf;

/// An error raised while reading OWL constructs out of an RDF graph.
#[derive(Debug, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct OwlParseError {
    kind: ParseErrorKind,
    message: String,
}

/// The reason an [`OwlParseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A restriction without `owl:onProperty`, or a similar mandatory triple is absent.
    MissingProperty,
    /// A term of the wrong kind, like a literal in class position.
    InvalidValue,
    /// A blank node that is neither a restriction nor a boolean class expression.
    UnknownConstruct,
    /// An `rdf:List` that is cyclic, too long or not terminated by `rdf:nil`.
    MalformedList,
    /// An anonymous class expression containing itself.
    CircularReference,
    /// A cardinality that is not a non negative integer.
    InvalidCardinality,
    /// Anonymous class expressions nested deeper than the configured maximum depth.
    TooDeep,
}

impl OwlParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_property(property: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingProperty,
            format!("Missing required property: {property}"),
        )
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, message)
    }

    pub fn malformed_list(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedList, message)
    }

    pub fn circular_reference(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::CircularReference, message)
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An error raised while loading an ontology document and its imports.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The document could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not valid RDF.
    #[error(transparent)]
    Parsing(#[from] RdfParseError),
    /// The document path cannot be turned into a base IRI.
    #[error("Invalid base IRI '{iri}': {source}")]
    InvalidBaseIri {
        iri: String,
        #[source]
        source: IriParseError,
    },
    /// The document path cannot be turned into a `file:` URL.
    #[error("'{}' cannot be converted to a file URL", path.display())]
    InvalidPath { path: PathBuf },
    /// The RDF graph does not encode a valid OWL ontology.
    #[error(transparent)]
    Owl(#[from] OwlParseError),
    /// An import has no local document.
    #[error("The import <{iri}> does not map to any local document")]
    UnresolvableImport { iri: String },
    /// An import could not be loaded.
    #[error("Failed to load the import <{iri}>: {source}")]
    MissingImport {
        iri: String,
        #[source]
        source: Box<LoadError>,
    },
}
