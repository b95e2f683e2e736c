use anyhow::Result;
use ontospm_testsuite::check_ontology;
use ontospm_testsuite::config::SuiteConfig;
use tracing_subscriber::EnvFilter;

/// Checks the real ontology, located with `ONTOSPM_ONTOLOGY` (default `OntoSPM.owl`).
#[test]
#[ignore = "requires a local copy of OntoSPM.owl"]
fn ontospm_editorial_conventions() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
    check_ontology(&SuiteConfig::from_env()?)
}
