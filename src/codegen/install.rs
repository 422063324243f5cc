//! Shell commands that install a generated form's dependencies

use super::dependencies::DependencyLists;
use crate::config::PackageManager;

impl PackageManager {
    /// Subcommand that adds packages
    fn add_command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm add",
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn add",
            PackageManager::Bun => "bun add",
        }
    }

    /// Runner for one-off package binaries
    fn exec_command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm dlx",
            PackageManager::Npm => "npx",
            PackageManager::Yarn => "yarn dlx",
            PackageManager::Bun => "bunx --bun",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    /// Adds registry components, `None` when there are none
    pub registry: Option<String>,
    /// Installs external packages, `None` when there are none
    pub packages: Option<String>,
}

impl InstallPlan {
    /// Build commands for a dependency split
    ///
    /// `@/` path aliases resolve inside the user's project and are never
    /// installable, so they are left out.
    pub fn new(deps: &DependencyLists, manager: PackageManager) -> Self {
        let registry = (!deps.registry_dependencies.is_empty()).then(|| {
            format!(
                "{} shadcn@latest add {}",
                manager.exec_command(),
                deps.registry_dependencies.join(" ")
            )
        });

        let installable: Vec<&str> = deps
            .dependencies
            .iter()
            .map(String::as_str)
            .filter(|path| !path.starts_with("@/"))
            .collect();
        let packages = (!installable.is_empty())
            .then(|| format!("{} {}", manager.add_command(), installable.join(" ")));

        Self { registry, packages }
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.registry.iter().chain(self.packages.iter()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deps(registry: &[&str], packages: &[&str]) -> DependencyLists {
        DependencyLists {
            registry_dependencies: registry.iter().map(|s| s.to_string()).collect(),
            dependencies: packages.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_pnpm_plan() {
        let plan = InstallPlan::new(
            &deps(&["field", "button"], &["sonner", "@/lib/schema", "zod"]),
            PackageManager::Pnpm,
        );
        assert_eq!(
            plan.registry.as_deref(),
            Some("pnpm dlx shadcn@latest add field button")
        );
        assert_eq!(plan.packages.as_deref(), Some("pnpm add sonner zod"));
        assert_eq!(plan.commands().count(), 2);
    }

    #[test]
    fn test_runner_per_manager() {
        let lists = deps(&["input"], &["zod"]);
        let cases = [
            (PackageManager::Npm, "npx shadcn@latest add input", "npm install zod"),
            (PackageManager::Yarn, "yarn dlx shadcn@latest add input", "yarn add zod"),
            (PackageManager::Bun, "bunx --bun shadcn@latest add input", "bun add zod"),
        ];
        for (manager, registry, packages) in cases {
            let plan = InstallPlan::new(&lists, manager);
            assert_eq!(plan.registry.as_deref(), Some(registry));
            assert_eq!(plan.packages.as_deref(), Some(packages));
        }
    }

    #[test]
    fn test_only_aliases_means_no_package_command() {
        let plan = InstallPlan::new(&deps(&[], &["@/lib/schema", "@/utils/utils"]), PackageManager::Npm);
        assert_eq!(plan, InstallPlan::default());
        assert_eq!(plan.commands().count(), 0);
    }
}
