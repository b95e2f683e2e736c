use crate::check::Check;
use anyhow::Result;
use ontospm_owl::OwlClass;
use std::fmt::Write;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug)]
pub struct CheckResult {
    pub check: Check,
    pub class: OwlClass,
    pub outcome: Result<()>,
    pub date: OffsetDateTime,
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// `class: check failed with error message`, if the check failed.
    pub fn failure(&self) -> Option<String> {
        let error = self.outcome.as_ref().err()?;
        Some(format!(
            "{}: {} failed with error {error}",
            self.class, self.check
        ))
    }
}

/// Renders one line per result followed by a summary line.
pub fn build_report(results: &[CheckResult]) -> Result<String> {
    let mut buffer = String::new();
    let mut failures = 0;
    for result in results {
        let date = result.date.format(&Rfc3339)?;
        match &result.outcome {
            Ok(()) => writeln!(buffer, "{date}\t{}\t{}\tpassed", result.check, result.class)?,
            Err(error) => {
                failures += 1;
                writeln!(
                    buffer,
                    "{date}\t{}\t{}\tfailed\t{error}",
                    result.check, result.class
                )?;
            }
        }
    }
    writeln!(
        buffer,
        "{} checks, {} passed, {failures} failed",
        results.len(),
        results.len() - failures
    )?;
    Ok(buffer)
}
