//! Editorial conformance checks of the [OntoSPM] ontology.
//!
//! [OntoSPM]: http://medicis.univ-rennes1.fr/ontologies/ontospm/OntoSPM.owl

pub mod annotation_checks;
pub mod check;
pub mod config;
pub mod context;
pub mod evaluator;
pub mod function_checks;
pub mod report;
pub mod vocab;

use crate::annotation_checks::register_annotation_checks;
use crate::check::Scope;
use crate::config::SuiteConfig;
use crate::context::SuiteContext;
use crate::evaluator::CheckEvaluator;
use crate::function_checks::register_function_checks;
use crate::report::CheckResult;
use anyhow::{Context, Result};
use ontospm_owl::{OntologyManager, OntologyQuery};
use tracing::info;

/// An evaluator with every check registered.
pub fn default_evaluator() -> CheckEvaluator {
    let mut evaluator = CheckEvaluator::default();
    register_annotation_checks(&mut evaluator);
    register_function_checks(&mut evaluator);
    evaluator
}

/// Evaluates the enabled checks of `config` on an already loaded ontology.
pub fn evaluate_query(query: OntologyQuery, config: &SuiteConfig) -> Result<Vec<CheckResult>> {
    let context = SuiteContext::new(query, config.namespace.as_str())?;
    info!(
        in_scope = context.classes(Scope::InScope).len(),
        surgical_continuants = context.classes(Scope::SurgicalContinuant).len(),
        checks = config.checks().count(),
        "Checking {}",
        config.namespace
    );
    Ok(default_evaluator().evaluate(&context, config.checks()))
}

/// Loads the ontology of `config` and evaluates its enabled checks.
pub fn evaluate_ontology(config: &SuiteConfig) -> Result<Vec<CheckResult>> {
    let query = OntologyQuery::load(
        &OntologyManager::new(config.loader.clone()),
        &config.ontology_path,
    )
    .with_context(|| format!("Failed to load {}", config.ontology_path.display()))?;
    evaluate_query(query, config)
}

/// Loads the ontology of `config` and panics with every failing check.
pub fn check_ontology(config: &SuiteConfig) -> Result<()> {
    assert_passing(&evaluate_ontology(config)?);
    Ok(())
}

/// Panics with the messages of all failed results.
pub fn assert_passing(results: &[CheckResult]) {
    let errors = results
        .iter()
        .filter_map(CheckResult::failure)
        .collect::<Vec<_>>();
    assert!(
        errors.is_empty(),
        "{} failing checks:\n{}\n",
        errors.len(),
        errors.join("\n")
    );
}
