//! Label, definition and naming conventions.

use crate::check::Check;
use crate::context::SuiteContext;
use crate::evaluator::CheckEvaluator;
use anyhow::{Context, Result, bail, ensure};
use ontospm_owl::{
    IaoVocabulary, OwlClass, OwlRdfVocabulary, SkosVocabulary, normalise_local_name,
};

/// Each class has one preferred label in each of these languages.
const LABEL_LANGUAGES: [&str; 3] = ["en", "fr", "de"];

pub fn register_annotation_checks(evaluator: &mut CheckEvaluator) {
    evaluator.register(Check::ClassWithAllLabels, evaluate_all_labels);
    evaluator.register(
        Check::UnderscoresInPreferredLabel,
        evaluate_underscores_in_labels,
    );
    evaluator.register(Check::RdfsLabel, evaluate_rdfs_label);
    evaluator.register(Check::ClassDefinition, evaluate_definition);
    evaluator.register(Check::IriMatchesEnglishLabel, evaluate_iri);
    evaluator.register(Check::EnglishLabel, |context, class| {
        evaluate_language_label(context, class, "en", "an English")
    });
    evaluator.register(Check::FrenchLabel, |context, class| {
        evaluate_language_label(context, class, "fr", "a French")
    });
    evaluator.register(Check::GermanLabel, |context, class| {
        evaluate_language_label(context, class, "de", "a German")
    });
    evaluator.register(Check::OntologyNamespace, evaluate_namespace);
}

fn evaluate_all_labels(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    let count = context
        .query()
        .annotation_properties(class, &SkosVocabulary::PrefLabel)
        .count();
    ensure!(
        count == LABEL_LANGUAGES.len(),
        "'{}' has {count} preferred labels instead of {}.",
        class.short_form(),
        LABEL_LANGUAGES.len()
    );
    Ok(())
}

fn evaluate_underscores_in_labels(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    if let Some(label) = context
        .query()
        .preferred_labels(class)
        .find(|label| label.value().contains('_'))
    {
        bail!(
            "A preferred label of '{}' contains underscores: {label}",
            class.short_form()
        );
    }
    Ok(())
}

fn evaluate_rdfs_label(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    ensure!(
        !context
            .query()
            .has_annotation(class, &OwlRdfVocabulary::RdfsLabel),
        "Label is set using 'rdfs:label' in '{}'.",
        class.short_form()
    );
    Ok(())
}

fn evaluate_definition(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    ensure!(
        context
            .query()
            .has_annotation(class, &IaoVocabulary::Definition),
        "'{}' has no definition.",
        class.short_form()
    );
    Ok(())
}

fn evaluate_iri(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    let label = context
        .query()
        .preferred_label(class, "en")
        .with_context(|| format!("'{}' has no English label.", class.short_form()))?;
    let expected = normalise_local_name(label);
    ensure!(
        class.short_form() == expected,
        "IRI local name '{}' does not match the English label '{label}': expected '{expected}'.",
        class.short_form()
    );
    Ok(())
}

fn evaluate_language_label(
    context: &SuiteContext,
    class: &OwlClass,
    language: &str,
    description: &str,
) -> Result<()> {
    ensure!(
        context.query().preferred_label(class, language).is_some(),
        "'{}' has not {description} label.",
        class.short_form()
    );
    Ok(())
}

fn evaluate_namespace(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    ensure!(
        class.namespace() == context.namespace(),
        "{class} is not defined in the namespace {}.",
        context.namespace()
    );
    Ok(())
}
