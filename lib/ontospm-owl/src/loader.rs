//! Loads ontology documents and their imports from the local filesystem.

use crate::error::LoadError;
use crate::factory::DataFactory;
use crate::ontology::Ontology;
use crate::parser::{ParserConfig, parse_ontology_with_config};
use oxrdf::{Graph, NamedNode};
use oxrdfio::{RdfFormat, RdfParser};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// What to do when an `owl:imports` target cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingImportHandling {
    /// Skip the import and go on loading.
    #[default]
    Silent,
    /// Fail the whole load.
    Throw,
}

/// Options of an [`OntologyManager`].
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    missing_imports: MissingImportHandling,
    format: Option<RdfFormat>,
    lenient: bool,
    import_mappings: FxHashMap<String, PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            missing_imports: MissingImportHandling::Silent,
            format: None,
            lenient: true,
            import_mappings: FxHashMap::default(),
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn with_missing_imports(mut self, handling: MissingImportHandling) -> Self {
        self.missing_imports = handling;
        self
    }

    /// Forces the RDF format instead of guessing it from the file extension.
    #[must_use]
    pub fn with_format(mut self, format: RdfFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Fails on the first OWL construct that cannot be parsed and only accepts
    /// declared or built-in annotation properties.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.lenient = false;
        self
    }

    /// Loads the import `iri` from the local file `path`.
    #[must_use]
    pub fn with_import_mapping(mut self, iri: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.import_mappings.insert(iri.into(), path.into());
        self
    }

    pub fn missing_imports(&self) -> MissingImportHandling {
        self.missing_imports
    }

    pub fn format(&self) -> Option<RdfFormat> {
        self.format
    }

    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    fn parser_config(&self) -> ParserConfig {
        if self.lenient {
            ParserConfig::new().lenient()
        } else {
            ParserConfig::new()
        }
    }
}

/// Loads ontologies and resolves their imports.
///
/// Imports are only looked up locally: through the mappings of the [`LoaderConfig`]
/// or when the import IRI is a `file:` URL. The network is never accessed.
/// The manager holds no mutable state and may be shared between threads.
///
/// ```
/// use ontospm_owl::{LoaderConfig, MissingImportHandling, OntologyManager};
/// use oxrdfio::RdfFormat;
///
/// let document = r#"
///     @prefix owl: <http://www.w3.org/2002/07/owl#> .
///     <http://example.com/ns> a owl:Ontology ;
///         owl:imports <http://example.com/missing> .
///     <http://example.com/ns#scalpel> a owl:Class .
/// "#;
/// let manager = OntologyManager::new(
///     LoaderConfig::default().with_missing_imports(MissingImportHandling::Silent),
/// );
/// let (ontology, _) =
///     manager.load_from_reader(document.as_bytes(), RdfFormat::Turtle, None)?;
/// assert_eq!(ontology.class_count(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OntologyManager {
    config: LoaderConfig,
}

impl OntologyManager {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the ontology document at `path` and the closure of its imports.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Arc<Ontology>, DataFactory), LoadError> {
        let mut ontology = self.parse_file(path.as_ref())?;
        self.load_imports(&mut ontology)?;
        Ok(loaded(ontology))
    }

    /// Loads an ontology document from a reader.
    ///
    /// Relative IRIs are resolved against `base_iri`.
    pub fn load_from_reader(
        &self,
        reader: impl Read,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> Result<(Arc<Ontology>, DataFactory), LoadError> {
        let mut ontology = self.parse_reader(reader, format, base_iri)?;
        self.load_imports(&mut ontology)?;
        Ok(loaded(ontology))
    }

    fn parse_file(&self, path: &Path) -> Result<Ontology, LoadError> {
        let path = std::path::absolute(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let base_iri =
            Url::from_file_path(&path).map_err(|()| LoadError::InvalidPath { path: path.clone() })?;
        let format = self
            .config
            .format
            .unwrap_or_else(|| guess_rdf_format(&path));
        let file = File::open(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), ?format, "Parsing ontology document");
        self.parse_reader(BufReader::new(file), format, Some(base_iri.as_str()))
    }

    fn parse_reader(
        &self,
        reader: impl Read,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> Result<Ontology, LoadError> {
        let mut parser = RdfParser::from_format(format);
        if let Some(base_iri) = base_iri {
            parser = parser
                .with_base_iri(base_iri)
                .map_err(|source| LoadError::InvalidBaseIri {
                    iri: base_iri.into(),
                    source,
                })?;
        }
        let mut graph = Graph::new();
        for quad in parser.for_reader(reader) {
            let quad = quad?;
            graph.insert(quad.as_ref());
        }
        Ok(parse_ontology_with_config(
            &graph,
            self.config.parser_config(),
        )?)
    }

    /// Loads the import closure of `ontology` into it.
    ///
    /// Each ontology is loaded at most once, so cyclic imports terminate.
    fn load_imports(&self, ontology: &mut Ontology) -> Result<(), LoadError> {
        let mut visited = ontology
            .iri()
            .map(|iri| iri.as_str().to_owned())
            .into_iter()
            .collect::<FxHashSet<_>>();
        let mut pending = ontology.imports().to_vec();
        while let Some(import) = pending.pop() {
            if !visited.insert(import.as_str().to_owned()) {
                continue;
            }
            match self.load_import(&import) {
                Ok(imported) => {
                    if let Some(iri) = imported.iri() {
                        if iri != &import && !visited.insert(iri.as_str().to_owned()) {
                            debug!("Import {import} is {iri}, which is already loaded");
                            continue;
                        }
                    }
                    pending.extend(imported.imports().iter().cloned());
                    debug!(axioms = imported.axiom_count(), "Merging import {import}");
                    ontology.merge(imported);
                }
                Err(error) => match self.config.missing_imports {
                    MissingImportHandling::Silent => {
                        debug!("Skipping import {import}: {error}");
                    }
                    MissingImportHandling::Throw => {
                        return Err(LoadError::MissingImport {
                            iri: import.into_string(),
                            source: Box::new(error),
                        });
                    }
                },
            }
        }
        Ok(())
    }

    fn load_import(&self, iri: &NamedNode) -> Result<Ontology, LoadError> {
        let path = self.resolve_import(iri)?;
        self.parse_file(&path)
    }

    fn resolve_import(&self, iri: &NamedNode) -> Result<PathBuf, LoadError> {
        if let Some(path) = self.config.import_mappings.get(iri.as_str()) {
            return Ok(path.clone());
        }
        Url::parse(iri.as_str())
            .ok()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| LoadError::UnresolvableImport {
                iri: iri.as_str().into(),
            })
    }
}

/// Loads the ontology document at `path` with the default configuration:
/// missing imports are skipped and unparseable axioms are ignored.
pub fn load(path: impl AsRef<Path>) -> Result<(Arc<Ontology>, DataFactory), LoadError> {
    OntologyManager::default().load(path)
}

fn loaded(ontology: Ontology) -> (Arc<Ontology>, DataFactory) {
    info!(
        classes = ontology.class_count(),
        axioms = ontology.axiom_count(),
        "Loaded {ontology}"
    );
    (Arc::new(ontology), DataFactory)
}

/// Guesses the RDF format from the file extension, defaulting to RDF/XML.
fn guess_rdf_format(path: &Path) -> RdfFormat {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return RdfFormat::RdfXml;
    };
    let extension = extension.to_ascii_lowercase();
    match extension.as_str() {
        "owl" | "rdf" | "xml" => RdfFormat::RdfXml,
        other => RdfFormat::from_extension(other).unwrap_or(RdfFormat::RdfXml),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_guessing() {
        assert_eq!(guess_rdf_format(Path::new("OntoSPM.owl")), RdfFormat::RdfXml);
        assert_eq!(guess_rdf_format(Path::new("OntoSPM.OWL")), RdfFormat::RdfXml);
        assert_eq!(guess_rdf_format(Path::new("onto.ttl")), RdfFormat::Turtle);
        assert_eq!(guess_rdf_format(Path::new("onto.nt")), RdfFormat::NTriples);
        assert_eq!(guess_rdf_format(Path::new("onto")), RdfFormat::RdfXml);
        assert_eq!(guess_rdf_format(Path::new("onto.unknown")), RdfFormat::RdfXml);
    }

    #[test]
    fn only_file_imports_resolve() {
        let manager = OntologyManager::new(
            LoaderConfig::default().with_import_mapping("http://example.com/a", "/tmp/a.ttl"),
        );
        let mapped = NamedNode::new("http://example.com/a").unwrap();
        assert_eq!(
            manager.resolve_import(&mapped).unwrap(),
            PathBuf::from("/tmp/a.ttl")
        );
        let remote = NamedNode::new("http://example.com/b").unwrap();
        assert!(matches!(
            manager.resolve_import(&remote),
            Err(LoadError::UnresolvableImport { .. })
        ));
    }
}
