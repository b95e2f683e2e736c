//! Links between surgical continuants and instrument functions.

use crate::check::Check;
use crate::context::SuiteContext;
use crate::evaluator::CheckEvaluator;
use anyhow::{Result, ensure};
use ontospm_owl::OwlClass;
use tracing::debug;

pub fn register_function_checks(evaluator: &mut CheckEvaluator) {
    evaluator.register(Check::InstrumentHasFunction, evaluate_has_function);
    evaluator.register(
        Check::InstrumentWithDeprecatedFunctions,
        evaluate_deprecated_functions,
    );
}

fn evaluate_has_function(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    let query = context.query();
    let mut counter =
        if query.equivalent_classes(class).next().is_some() && query.has_subclass(class) {
            debug!(%class, "Defined class with sub classes, its restrictions are not counted");
            0
        } else {
            context.count_functions(class, context.functions())
        };
    if context.is_exempt(class) {
        counter += 1;
    }
    ensure!(counter > 0, "'{}' has no function.", class.short_form());
    Ok(())
}

fn evaluate_deprecated_functions(context: &SuiteContext, class: &OwlClass) -> Result<()> {
    let counter = context.count_functions(class, context.deprecated_functions());
    ensure!(
        counter == 0,
        "'{}' has deprecated function(s).",
        class.short_form()
    );
    Ok(())
}
