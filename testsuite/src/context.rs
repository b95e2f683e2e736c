use crate::check::Scope;
use crate::vocab::{CATEGORIES, FUNCTION_EXEMPTIONS, FUNCTION_ROOT};
use anyhow::{Context, Result};
use ontospm_owl::{ClassExpression, OntologyQuery, OwlClass};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Everything the checks read: the ontology and the class sets computed once per run.
#[derive(Debug)]
pub struct SuiteContext {
    query: OntologyQuery,
    namespace: String,
    in_scope: Vec<OwlClass>,
    surgical_continuants: Vec<OwlClass>,
    namespaced: Vec<OwlClass>,
    categories: FxHashSet<OwlClass>,
    functions: FxHashSet<OwlClass>,
    deprecated_functions: FxHashSet<OwlClass>,
}

impl SuiteContext {
    pub fn new(query: OntologyQuery, namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let factory = query.factory();
        let local_class = |name: &str| {
            factory
                .owl_class(format!("{namespace}{name}"))
                .with_context(|| format!("Invalid class IRI {namespace}{name}"))
        };

        let categories = CATEGORIES
            .into_iter()
            .map(local_class)
            .collect::<Result<FxHashSet<_>>>()?;
        let function_root = local_class(FUNCTION_ROOT)?;

        let mut namespaced = query
            .classes()
            .filter(|class| !class.namespace().is_empty())
            .cloned()
            .collect::<Vec<_>>();
        namespaced.sort();
        let in_scope = namespaced
            .iter()
            .filter(|class| class.namespace() == namespace && !query.is_deprecated(*class))
            .cloned()
            .collect::<Vec<_>>();
        let surgical_continuants = namespaced
            .iter()
            .filter(|class| {
                class.namespace() == namespace
                    && categories
                        .iter()
                        .any(|category| query.is_subclass_of(*class, category))
            })
            .cloned()
            .collect::<Vec<_>>();

        let (deprecated_functions, functions) = query
            .direct_subclasses(&function_root)
            .filter_map(ClassExpression::as_class)
            .cloned()
            .partition::<FxHashSet<_>, _>(|function| query.is_deprecated(function));
        if functions.is_empty() && deprecated_functions.is_empty() {
            debug!("No function is defined below {function_root}");
        }

        Ok(Self {
            query,
            namespace,
            in_scope,
            surgical_continuants,
            namespaced,
            categories,
            functions,
            deprecated_functions,
        })
    }

    pub fn query(&self) -> &OntologyQuery {
        &self.query
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The classes of `scope`, sorted by IRI.
    pub fn classes(&self, scope: Scope) -> &[OwlClass] {
        match scope {
            Scope::InScope => &self.in_scope,
            Scope::SurgicalContinuant => &self.surgical_continuants,
            Scope::Namespaced => &self.namespaced,
        }
    }

    pub fn categories(&self) -> &FxHashSet<OwlClass> {
        &self.categories
    }

    /// Non deprecated direct sub classes of the function root.
    pub fn functions(&self) -> &FxHashSet<OwlClass> {
        &self.functions
    }

    pub fn deprecated_functions(&self) -> &FxHashSet<OwlClass> {
        &self.deprecated_functions
    }

    /// Counts the direct existential and universal restrictions of `class`
    /// whose named filler is in `targets`.
    pub fn count_functions(&self, class: &OwlClass, targets: &FxHashSet<OwlClass>) -> usize {
        self.query
            .direct_superclasses(class)
            .filter_map(ClassExpression::quantified_filler)
            .filter_map(ClassExpression::as_class)
            .filter_map(|filler| self.query.class(filler))
            .filter(|filler| targets.contains(*filler))
            .count()
    }

    /// Categories and a few generic continuants are not required to have a function.
    pub fn is_exempt(&self, class: &OwlClass) -> bool {
        self.categories.contains(class) || FUNCTION_EXEMPTIONS.contains(&class.short_form())
    }
}
