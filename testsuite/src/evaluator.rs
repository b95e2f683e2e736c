use crate::check::Check;
use crate::context::SuiteContext;
use crate::report::CheckResult;
use anyhow::{Result, anyhow};
use ontospm_owl::OwlClass;
use rayon::prelude::*;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use tracing::{debug, info};

type Handler = dyn Fn(&SuiteContext, &OwlClass) -> Result<()> + Send + Sync;

#[derive(Default)]
pub struct CheckEvaluator {
    handlers: BTreeMap<Check, Box<Handler>>,
}

impl CheckEvaluator {
    pub fn register(
        &mut self,
        check: Check,
        handler: impl Fn(&SuiteContext, &OwlClass) -> Result<()> + Send + Sync + 'static,
    ) {
        self.handlers.insert(check, Box::new(handler));
    }

    /// The checks with a registered handler.
    pub fn checks(&self) -> impl Iterator<Item = Check> + '_ {
        self.handlers.keys().copied()
    }

    /// Evaluates each of `checks` on every class of its scope.
    ///
    /// Results are grouped by check, in the order of `checks`, then sorted by class IRI.
    pub fn evaluate(
        &self,
        context: &SuiteContext,
        checks: impl IntoIterator<Item = Check>,
    ) -> Vec<CheckResult> {
        let cases = checks
            .into_iter()
            .flat_map(|check| {
                context
                    .classes(check.scope())
                    .iter()
                    .map(move |class| (check, class))
            })
            .collect::<Vec<_>>();
        info!(cases = cases.len(), "Evaluating checks");
        cases
            .into_par_iter()
            .map(|(check, class)| {
                let outcome = if let Some(handler) = self.handlers.get(&check) {
                    handler(context, class)
                } else {
                    Err(anyhow!("The check {check} is not supported"))
                };
                if let Err(error) = &outcome {
                    debug!(%check, %class, "{error}");
                }
                CheckResult {
                    check,
                    class: class.clone(),
                    outcome,
                    date: OffsetDateTime::now_utc(),
                }
            })
            .collect()
    }
}
