//! Registry and package dependencies derived from import statements

use super::import_set::ImportSet;
use crate::config::{PreferredFramework, SettingsSource};
use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Prefix of modules that live in the component registry
pub const COMPONENT_PREFIX: &str = "@/components/";
/// Registry module that is published per framework rather than by name
pub const FORM_HOOK_MODULE: &str = "tanstack-form";
pub const REGISTRY_BASE_URL: &str = "https://tancn.dev/r/";

static FROM_CLAUSE: OnceLock<Regex> = OnceLock::new();

fn from_clause() -> &'static Regex {
    FROM_CLAUSE.get_or_init(|| {
        Regex::new(r#"from\s+["']([^"']+)["']"#).expect("from-clause pattern is valid")
    })
}

/// Module path of a statement, if it has a `from "..."` clause
pub fn module_path(statement: &str) -> Option<&str> {
    from_clause()
        .captures(statement)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Registry URL of the form hook for a framework
pub fn form_hook_url(framework: PreferredFramework) -> String {
    format!("{REGISTRY_BASE_URL}{framework}{FORM_HOOK_MODULE}.json")
}

/// Components to pull from the registry and packages to install
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyLists {
    pub registry_dependencies: Vec<String>,
    pub dependencies: Vec<String>,
}

/// Split statements into registry components and external packages
///
/// Statements without a module path are skipped, as are relative imports.
/// Comments and inlined helper functions never count as packages.
pub fn extract_import_dependencies<S>(imports: &ImportSet, settings: &S) -> DependencyLists
where
    S: SettingsSource + ?Sized,
{
    let framework = settings.preferred_framework().unwrap_or_default();
    let mut registry: IndexSet<String> = IndexSet::new();
    let mut packages: IndexSet<String> = IndexSet::new();

    for statement in imports {
        let Some(path) = module_path(statement) else {
            tracing::trace!("No module path in statement, skipping");
            continue;
        };

        if path.starts_with(COMPONENT_PREFIX) {
            match path.rsplit('/').next() {
                Some(FORM_HOOK_MODULE) => {
                    registry.insert(form_hook_url(framework));
                }
                Some(component) if !component.is_empty() => {
                    registry.insert(component.to_string());
                }
                _ => {}
            }
        } else if !path.starts_with("./") {
            let trimmed = statement.trim();
            if !trimmed.starts_with("//") && !trimmed.starts_with("function") {
                packages.insert(path.to_string());
            }
        }
    }

    tracing::debug!(
        "Extracted {} registry and {} package dependencies",
        registry.len(),
        packages.len()
    );
    DependencyLists {
        registry_dependencies: registry.into_iter().collect(),
        dependencies: packages.into_iter().collect(),
    }
}
