use crate::check::Check;
use crate::vocab::ONTOSPM_NAMESPACE;
use anyhow::{Result, bail};
use ontospm_owl::LoaderConfig;
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the ontology document path.
pub const ONTOLOGY_PATH_VAR: &str = "ONTOSPM_ONTOLOGY";
/// Environment variable overriding the target namespace.
pub const NAMESPACE_VAR: &str = "ONTOSPM_NAMESPACE";
/// Environment variable holding a comma separated list of check identifiers to run.
pub const CHECKS_VAR: &str = "ONTOSPM_CHECKS";

/// What a suite run loads and which checks it evaluates.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub ontology_path: PathBuf,
    pub namespace: String,
    pub loader: LoaderConfig,
    checks: BTreeSet<Check>,
}

impl SuiteConfig {
    /// The default configuration for the ontology document at `ontology_path`:
    /// OntoSPM namespace, missing imports skipped, namespace check disabled.
    pub fn new(ontology_path: impl Into<PathBuf>) -> Self {
        Self {
            ontology_path: ontology_path.into(),
            namespace: ONTOSPM_NAMESPACE.into(),
            loader: LoaderConfig::default(),
            checks: Check::ALL
                .into_iter()
                .filter(|check| check.is_enabled_by_default())
                .collect(),
        }
    }

    /// Reads the configuration from the `ONTOSPM_*` environment variables.
    ///
    /// The ontology path defaults to `OntoSPM.owl` in the working directory.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            env::var_os(ONTOLOGY_PATH_VAR).map_or_else(|| "OntoSPM.owl".into(), PathBuf::from),
        );
        if let Ok(namespace) = env::var(NAMESPACE_VAR) {
            config.namespace = namespace;
        }
        if let Ok(checks) = env::var(CHECKS_VAR) {
            config.checks = parse_checks(&checks)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    #[must_use]
    pub fn enable(mut self, check: Check) -> Self {
        self.checks.insert(check);
        self
    }

    #[must_use]
    pub fn disable(mut self, check: Check) -> Self {
        self.checks.remove(&check);
        self
    }

    /// Only evaluates `checks`.
    #[must_use]
    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.checks = checks.into_iter().collect();
        self
    }

    pub fn is_enabled(&self, check: Check) -> bool {
        self.checks.contains(&check)
    }

    /// The enabled checks, in a stable order.
    pub fn checks(&self) -> impl Iterator<Item = Check> + '_ {
        self.checks.iter().copied()
    }
}

fn parse_checks(list: &str) -> Result<BTreeSet<Check>> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            let Some(check) = Check::from_id(id) else {
                bail!("Unknown check {id}");
            };
            Ok(check)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SuiteConfig::new("OntoSPM.owl");
        assert_eq!(config.namespace, ONTOSPM_NAMESPACE);
        assert!(!config.is_enabled(Check::OntologyNamespace));
        assert_eq!(config.checks().count(), Check::ALL.len() - 1);
        assert!(
            config
                .enable(Check::OntologyNamespace)
                .is_enabled(Check::OntologyNamespace)
        );
    }

    #[test]
    fn check_lists() {
        let checks = parse_checks("rdfs-label, german-label,").unwrap();
        assert_eq!(
            checks.into_iter().collect::<Vec<_>>(),
            [Check::RdfsLabel, Check::GermanLabel]
        );
        parse_checks("rdfs-label,unknown").unwrap_err();
    }
}
