//! tancn-forms - import and dependency resolution for generated form code
//!
//! Reads a saved form-builder record and prints the import header of the
//! generated form, the registry components and packages it needs, and the
//! commands that install them.

mod cli;
mod codegen;
mod config;
mod model;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Args, Command, ConfigArgs, FormArgs};
use codegen::{
    extract_import_dependencies, generate_imports, DependencyLists, Framework, ImportSet,
    ImportTable, InstallPlan,
};
use config::{AppConfig, FormBuilderSettings, ValidationLibrary};
use model::{FieldKind, FormBuilder};
use serde::Serialize;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so generated output can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tancn_forms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match args.command {
        Command::Imports { form, copy } => run_imports(&form, copy),
        Command::Deps {
            form,
            package_manager,
            json,
        } => {
            let mut export = Export::load(&form)?;
            if let Some(manager) = package_manager {
                export.settings.preferred_package_manager = manager;
            }
            run_deps(&export, json)
        }
        Command::Kinds { framework } => {
            run_kinds(framework);
            Ok(())
        }
        Command::Config(config) => run_config(&config),
    }
}

/// A loaded record with every override applied
struct Export {
    form: FormBuilder,
    settings: FormBuilderSettings,
    framework: Framework,
    validation: Option<ValidationLibrary>,
    schema_name: String,
}

impl Export {
    /// Load a record using the platform user configuration
    fn load(args: &FormArgs) -> Result<Self> {
        let config = AppConfig::load().context("Failed to read user configuration")?;
        Self::resolve(args, &config)
    }

    /// Resolve options in order: CLI flag, user config, record settings
    fn resolve(args: &FormArgs, config: &AppConfig) -> Result<Self> {
        let form = FormBuilder::load(&args.record)
            .with_context(|| format!("Failed to load form from {}", args.record.display()))?;
        tracing::info!("Loaded form {} \"{}\"", form.id, form.form_name);

        let mut settings = form.settings.clone();
        config.apply_to(&mut settings);

        let framework = match args.framework {
            Some(framework) => {
                settings.preferred_framework = framework.as_preferred();
                framework
            }
            None => Framework::from_preferred(settings.preferred_framework).unwrap_or_else(|| {
                tracing::warn!(
                    "No code generation for {}, generating for react",
                    settings.preferred_framework
                );
                Framework::React
            }),
        };

        let validation = match args.schema.as_deref() {
            Some(name) => {
                let library = ValidationLibrary::from_name(name);
                if library.is_none() {
                    tracing::warn!("Unsupported validation library `{name}`, no schema import");
                }
                library
            }
            None => Some(settings.preferred_schema),
        };

        let schema_name = args
            .schema_name
            .clone()
            .unwrap_or_else(|| form.schema_name.clone());

        Ok(Self {
            form,
            settings,
            framework,
            validation,
            schema_name,
        })
    }

    fn imports(&self) -> ImportSet {
        generate_imports(
            self.framework,
            self.form.form_elements.items(),
            self.validation,
            self.form.is_multi_step,
            &self.schema_name,
        )
    }
}

fn run_imports(args: &FormArgs, copy: bool) -> Result<()> {
    let export = Export::load(args)?;
    let header = export.imports().render();
    print!("{header}");

    if copy {
        copy_to_clipboard(&header).context("Failed to copy imports to the clipboard")?;
        tracing::info!("Copied {} chars to the clipboard", header.len());
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DepsReport<'a> {
    #[serde(flatten)]
    lists: &'a DependencyLists,
    install: Vec<&'a str>,
}

fn run_deps(export: &Export, json: bool) -> Result<()> {
    let lists = extract_import_dependencies(&export.imports(), &export.settings);
    let plan = InstallPlan::new(&lists, export.settings.preferred_package_manager);

    if json {
        let report = DepsReport {
            lists: &lists,
            install: plan.commands().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Registry dependencies:");
    for name in &lists.registry_dependencies {
        println!("  {name}");
    }
    println!("Dependencies:");
    for path in &lists.dependencies {
        println!("  {path}");
    }
    println!("Install:");
    for command in plan.commands() {
        println!("  {command}");
    }
    Ok(())
}

fn run_kinds(framework: Framework) {
    let table = ImportTable::for_framework(framework);
    for kind in FieldKind::ALL {
        let marker = if kind.is_static() { " (static)" } else { "" };
        println!("{kind}{marker}");
        for statement in table.statements_for(kind) {
            for line in statement.trim().lines() {
                println!("  {line}");
            }
        }
    }
}

fn run_config(args: &ConfigArgs) -> Result<()> {
    if args.path {
        match AppConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("No configuration directory on this platform"),
        }
        return Ok(());
    }

    let mut config = AppConfig::load().context("Failed to read user configuration")?;
    if args.has_changes() {
        if let Some(framework) = args.set_framework {
            config.preferred_framework = Some(framework);
        }
        if let Some(name) = args.set_schema.as_deref() {
            match ValidationLibrary::from_name(name) {
                Some(library) => config.preferred_schema = Some(library),
                None => bail!("Unsupported validation library `{name}`"),
            }
        }
        if let Some(manager) = args.set_package_manager {
            config.preferred_package_manager = Some(manager);
        }
        config.save().context("Failed to save user configuration")?;
        tracing::info!("Configuration saved");
    }

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PackageManager, PreferredFramework};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    const RECORD: &str = r#"{
        "id": 4,
        "schemaName": "signupSchema",
        "formElements": [{"fieldType": "Password", "id": "pw", "name": "pw"}],
        "settings": {
            "preferredFramework": "solid",
            "preferredSchema": "arktype",
            "preferredPackageManager": "yarn"
        }
    }"#;

    fn write_record(dir: &Path, json: &str) -> FormArgs {
        let record = dir.join("form.json");
        fs::write(&record, json).unwrap();
        FormArgs {
            record,
            framework: None,
            schema: None,
            schema_name: None,
        }
    }

    #[test]
    fn test_record_settings_apply_without_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_record(dir.path(), RECORD);

        let export = Export::resolve(&args, &AppConfig::default()).unwrap();

        assert_eq!(export.framework, Framework::Solid);
        assert_eq!(export.validation, Some(ValidationLibrary::Arktype));
        assert_eq!(export.settings.preferred_package_manager, PackageManager::Yarn);
        assert_eq!(export.schema_name, "signupSchema");
    }

    #[test]
    fn test_user_config_beats_record() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_record(dir.path(), RECORD);
        let config = AppConfig {
            preferred_framework: Some(PreferredFramework::React),
            preferred_schema: Some(ValidationLibrary::Zod),
            preferred_package_manager: None,
        };

        let export = Export::resolve(&args, &config).unwrap();

        assert_eq!(export.framework, Framework::React);
        assert_eq!(export.validation, Some(ValidationLibrary::Zod));
        assert_eq!(export.settings.preferred_package_manager, PackageManager::Yarn);
    }

    #[test]
    fn test_cli_flags_beat_user_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = write_record(dir.path(), RECORD);
        args.framework = Some(Framework::Solid);
        args.schema = Some("valibot".to_string());
        args.schema_name = Some("otherSchema".to_string());
        let config = AppConfig {
            preferred_framework: Some(PreferredFramework::React),
            preferred_schema: Some(ValidationLibrary::Zod),
            preferred_package_manager: Some(PackageManager::Npm),
        };

        let export = Export::resolve(&args, &config).unwrap();

        assert_eq!(export.framework, Framework::Solid);
        assert_eq!(export.settings.preferred_framework, PreferredFramework::Solid);
        assert_eq!(export.validation, Some(ValidationLibrary::Valibot));
        assert_eq!(export.schema_name, "otherSchema");
        assert!(export
            .imports()
            .contains("import { otherSchema } from '@/lib/otherSchema'"));
    }

    #[test]
    fn test_unsupported_schema_flag_drops_validation() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = write_record(dir.path(), RECORD);
        args.schema = Some("yup".to_string());

        let export = Export::resolve(&args, &AppConfig::default()).unwrap();

        assert_eq!(export.validation, None);
        assert!(export.imports().iter().all(|s| !s.contains("arktype")));
    }

    #[test]
    fn test_vue_preference_generates_react_but_keeps_vue_url() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_record(dir.path(), RECORD);
        let config = AppConfig {
            preferred_framework: Some(PreferredFramework::Vue),
            ..Default::default()
        };

        let export = Export::resolve(&args, &config).unwrap();
        assert_eq!(export.framework, Framework::React);
        assert_eq!(export.settings.preferred_framework, PreferredFramework::Vue);

        let imports = export.imports();
        assert!(imports.contains("import { revalidateLogic } from \"@tanstack/react-form\""));
        let lists = extract_import_dependencies(&imports, &export.settings);
        assert!(lists
            .registry_dependencies
            .contains(&"https://tancn.dev/r/vuetanstack-form.json".to_string()));
        assert!(lists.dependencies.contains(&"lucide-react".to_string()));
    }

    #[test]
    fn test_invalid_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_record(dir.path(), r#"{"id": 1, "settings": {"asyncValidation": 20000}}"#);
        let err = Export::resolve(&args, &AppConfig::default()).err().unwrap();
        assert!(format!("{err:#}").contains("asyncValidation"));
    }
}
