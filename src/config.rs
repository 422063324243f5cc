//! Builder settings and user configuration

use anyhow::Result;
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Framework the user prefers for registry URLs and generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PreferredFramework {
    #[default]
    React,
    Vue,
    Angular,
    Solid,
}

impl PreferredFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Solid => "solid",
        }
    }
}

impl fmt::Display for PreferredFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation library the generated schema is written against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLibrary {
    #[default]
    Zod,
    Valibot,
    Arktype,
}

impl ValidationLibrary {
    /// Parse a library name, `None` for anything unsupported
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "zod" => Some(Self::Zod),
            "valibot" => Some(Self::Valibot),
            "arktype" => Some(Self::Arktype),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMethod {
    #[serde(rename = "onChange")]
    OnChange,
    #[serde(rename = "onBlur")]
    OnBlur,
    #[default]
    #[serde(rename = "onDynamic")]
    OnDynamic,
}

/// Builder tab that was open when the record was saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Builder,
    Template,
    Settings,
    Generate,
}

/// Upper bound for the async validation debounce
pub const MAX_ASYNC_VALIDATION_MS: u32 = 10_000;

/// Settings stored alongside every form-builder record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormBuilderSettings {
    pub default_required_validation: bool,
    pub numeric_input: bool,
    pub focus_on_error: bool,
    pub validation_method: ValidationMethod,
    /// Debounce for async validators in milliseconds, at most [`MAX_ASYNC_VALIDATION_MS`]
    pub async_validation: u32,
    pub active_tab: ActiveTab,
    pub preferred_schema: ValidationLibrary,
    pub preferred_framework: PreferredFramework,
    pub preferred_package_manager: PackageManager,
    pub is_code_sidebar_open: bool,
}

impl Default for FormBuilderSettings {
    fn default() -> Self {
        Self {
            default_required_validation: true,
            numeric_input: false,
            focus_on_error: true,
            validation_method: ValidationMethod::OnDynamic,
            async_validation: 500,
            active_tab: ActiveTab::Builder,
            preferred_schema: ValidationLibrary::Zod,
            preferred_framework: PreferredFramework::React,
            preferred_package_manager: PackageManager::Pnpm,
            is_code_sidebar_open: false,
        }
    }
}

/// Read-only access to the user's framework preference
#[cfg_attr(test, mockall::automock)]
pub trait SettingsSource {
    /// Preferred framework, `None` when nothing has been chosen
    fn preferred_framework(&self) -> Option<PreferredFramework>;
}

impl SettingsSource for FormBuilderSettings {
    fn preferred_framework(&self) -> Option<PreferredFramework> {
        Some(self.preferred_framework)
    }
}

impl SettingsSource for Option<PreferredFramework> {
    fn preferred_framework(&self) -> Option<PreferredFramework> {
        *self
    }
}

/// User configuration for the CLI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Framework used when a record does not say otherwise
    pub preferred_framework: Option<PreferredFramework>,
    /// Validation library override
    pub preferred_schema: Option<ValidationLibrary>,
    /// Package manager used for install commands
    pub preferred_package_manager: Option<PackageManager>,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tancn", "tancn-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file, defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded user configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Overlay the user's preferences on top of a record's settings
    pub fn apply_to(&self, settings: &mut FormBuilderSettings) {
        if let Some(framework) = self.preferred_framework {
            settings.preferred_framework = framework;
        }
        if let Some(schema) = self.preferred_schema {
            settings.preferred_schema = schema;
        }
        if let Some(manager) = self.preferred_package_manager {
            settings.preferred_package_manager = manager;
        }
    }
}
