//! Loading ontology documents and their imports from disk.

use ontospm_owl::{
    HasIri, LoadError, LoaderConfig, MissingImportHandling, OntologyManager, OntologyQuery,
    OwlClass, load,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

const NS: &str = "http://example.com/onto#";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn file_iri(path: &Path) -> String {
    Url::from_file_path(path).unwrap().to_string()
}

fn class(name: &str) -> OwlClass {
    OwlClass::new_from_iri(format!("{NS}{name}")).unwrap()
}

fn class_names(query: &OntologyQuery) -> Vec<String> {
    let mut names = query
        .classes()
        .map(|c| c.short_form().to_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}

fn document(imports: &[&str], classes: &[&str]) -> String {
    let mut document = format!(
        "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
         @prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n\
         @prefix : <{NS}> .\n\
         <http://example.com/onto/{}> a owl:Ontology .\n",
        classes.join("-")
    );
    for import in imports {
        document.push_str(&format!(
            "<http://example.com/onto/{}> owl:imports <{import}> .\n",
            classes.join("-")
        ));
    }
    for class in classes {
        document.push_str(&format!(
            ":{class} a owl:Class ; skos:prefLabel \"{}\"@en .\n",
            class.replace('_', " ")
        ));
    }
    document
}

#[test]
fn missing_imports_are_skipped() {
    let dir = TempDir::new().unwrap();
    let missing_file = dir.path().join("missing.owl");
    let path = write(
        &dir,
        "root.ttl",
        &document(
            &["http://nonexistent.example.com/onto.owl", &file_iri(&missing_file)],
            &["scalpel", "trocar"],
        ),
    );

    let (ontology, factory) = load(&path).unwrap();
    let query = OntologyQuery::new(ontology, factory);
    assert_eq!(class_names(&query), ["scalpel", "trocar"]);
    assert_eq!(query.ontology().imports().len(), 2);
}

#[test]
fn missing_imports_can_fail_the_load() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "root.ttl",
        &document(&["http://nonexistent.example.com/onto.owl"], &["scalpel"]),
    );

    let manager = OntologyManager::new(
        LoaderConfig::default().with_missing_imports(MissingImportHandling::Throw),
    );
    let error = manager.load(&path).unwrap_err();
    match error {
        LoadError::MissingImport { iri, source } => {
            assert_eq!(iri, "http://nonexistent.example.com/onto.owl");
            assert!(matches!(*source, LoadError::UnresolvableImport { .. }));
        }
        error => panic!("Unexpected error: {error}"),
    }
}

#[test]
fn mapped_imports_are_merged() {
    let dir = TempDir::new().unwrap();
    let imported = write(&dir, "imported.ttl", &document(&[], &["forceps"]));
    let root = write(
        &dir,
        "root.ttl",
        &document(&["http://example.com/imported"], &["scalpel"]),
    );

    let manager = OntologyManager::new(
        LoaderConfig::default().with_import_mapping("http://example.com/imported", imported),
    );
    let query = OntologyQuery::load(&manager, &root).unwrap();
    assert_eq!(class_names(&query), ["forceps", "scalpel"]);
    assert_eq!(query.preferred_label(&class("forceps"), "en"), Some("forceps"));
    assert_eq!(
        query.ontology().iri().map(|iri| iri.as_str()),
        Some("http://example.com/onto/scalpel")
    );
}

#[test]
fn file_imports_are_followed() {
    let dir = TempDir::new().unwrap();
    let imported = write(&dir, "imported.ttl", &document(&[], &["needle_holder"]));
    let root = write(
        &dir,
        "root.ttl",
        &document(&[&file_iri(&imported)], &["scalpel"]),
    );

    let (ontology, _) = load(&root).unwrap();
    assert!(ontology.class(class("needle_holder").iri()).is_some());
}

#[test]
fn cyclic_imports_are_loaded_once() {
    let dir = TempDir::new().unwrap();
    let a_path = dir.path().join("a.ttl");
    let b_path = dir.path().join("b.ttl");
    fs::write(&a_path, document(&[&file_iri(&b_path)], &["a"])).unwrap();
    fs::write(&b_path, document(&[&file_iri(&a_path)], &["b"])).unwrap();

    let (ontology, factory) = load(&a_path).unwrap();
    let query = OntologyQuery::new(ontology, factory);
    assert_eq!(class_names(&query), ["a", "b"]);
    assert_eq!(query.preferred_labels(&class("a")).count(), 1);
}

#[test]
fn rdf_xml_is_the_default_format() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "OntoSPM.owl",
        r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:owl="http://www.w3.org/2002/07/owl#"
         xmlns:skos="http://www.w3.org/2004/02/skos/core#"
         xml:base="http://example.com/onto">
    <owl:Ontology rdf:about="http://example.com/onto"/>
    <owl:Class rdf:about="http://example.com/onto#scalpel">
        <skos:prefLabel xml:lang="en">scalpel</skos:prefLabel>
        <skos:prefLabel xml:lang="de">Skalpell</skos:prefLabel>
    </owl:Class>
</rdf:RDF>
"#,
    );

    let (ontology, factory) = load(&path).unwrap();
    let query = OntologyQuery::new(ontology, factory);
    assert_eq!(class_names(&query), ["scalpel"]);
    assert_eq!(query.preferred_label(&class("scalpel"), "de"), Some("Skalpell"));
}

#[test]
fn malformed_documents_fail() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.ttl", "<http://example.com/a> <http://example.com/b> .");
    assert!(matches!(load(&path), Err(LoadError::Parsing(_))));
}

#[test]
fn unreadable_documents_fail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nothing.ttl");
    match load(&path) {
        Err(LoadError::Io { path: error_path, .. }) => assert_eq!(error_path, path),
        Err(error) => panic!("Unexpected error: {error}"),
        Ok(_) => panic!("{} does not exist", path.display()),
    }
}

#[test]
fn strict_loading_only_keeps_declared_annotation_properties() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "root.ttl",
        &format!(
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
             @prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n\
             <{NS}scalpel> a owl:Class ;\n\
                 rdfs:label \"scalpel\" ;\n\
                 skos:prefLabel \"scalpel\"@en .\n"
        ),
    );

    let (lenient, _) = load(&path).unwrap();
    assert_eq!(
        lenient
            .annotation_assertion_axioms(class("scalpel").iri())
            .count(),
        2
    );

    let manager = OntologyManager::new(LoaderConfig::default().strict());
    let (strict, _) = manager.load(&path).unwrap();
    assert_eq!(
        strict
            .annotation_assertion_axioms(class("scalpel").iri())
            .count(),
        1
    );
}
