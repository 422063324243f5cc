//! Code generation support for exported forms
//!
//! Turns a form element tree into the import header of the generated file
//! and derives the registry components and packages that header relies on.

mod dependencies;
mod import_set;
mod imports;
mod install;
mod table;

pub use dependencies::{extract_import_dependencies, DependencyLists};
pub use import_set::ImportSet;
pub use imports::generate_imports;
pub use install::InstallPlan;
pub use table::ImportTable;

use crate::config::PreferredFramework;
use clap::ValueEnum;
use std::fmt;

/// Framework the generated code is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Framework {
    #[default]
    React,
    Solid,
}

impl Framework {
    /// Generation target for a preference, `None` when no table exists for it
    pub fn from_preferred(preferred: PreferredFramework) -> Option<Self> {
        match preferred {
            PreferredFramework::React => Some(Framework::React),
            PreferredFramework::Solid => Some(Framework::Solid),
            PreferredFramework::Vue | PreferredFramework::Angular => None,
        }
    }

    pub fn as_preferred(&self) -> PreferredFramework {
        match self {
            Framework::React => PreferredFramework::React,
            Framework::Solid => PreferredFramework::Solid,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_preferred(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preferred() {
        assert_eq!(
            Framework::from_preferred(PreferredFramework::Solid),
            Some(Framework::Solid)
        );
        assert_eq!(Framework::from_preferred(PreferredFramework::Angular), None);
        assert_eq!(Framework::from_preferred(PreferredFramework::Vue), None);
    }

    #[test]
    fn test_preferred_round_trip() {
        for framework in [Framework::React, Framework::Solid] {
            assert_eq!(
                Framework::from_preferred(framework.as_preferred()),
                Some(framework)
            );
        }
    }

    #[test]
    fn test_display_matches_cli_value() {
        assert_eq!(Framework::Solid.to_string(), "solid");
    }
}
