//! Command-line argument definitions (clap)

use crate::codegen::Framework;
use crate::config::{PackageManager, PreferredFramework};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tancn-forms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve imports and dependencies for generated TanStack form code", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the import header for a saved form
    Imports {
        #[command(flatten)]
        form: FormArgs,

        /// Copy the header to the clipboard as well
        #[arg(short, long)]
        copy: bool,
    },

    /// List registry components and packages a saved form depends on
    Deps {
        #[command(flatten)]
        form: FormArgs,

        /// Package manager used for the install commands
        #[arg(short = 'p', long = "package-manager", value_enum)]
        package_manager: Option<PackageManager>,

        /// Print the lists as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the statements each field kind contributes
    Kinds {
        #[arg(short, long, value_enum, default_value_t = Framework::React)]
        framework: Framework,
    },

    /// Show or change the user configuration
    Config(ConfigArgs),
}

/// Options shared by commands that read a saved form
#[derive(ClapArgs, Debug)]
pub struct FormArgs {
    /// Saved form-builder record (JSON)
    pub record: PathBuf,

    /// Framework to generate for, defaults to the record's preference
    #[arg(short, long, value_enum, env = "TANCN_FRAMEWORK")]
    pub framework: Option<Framework>,

    /// Validation library (zod, valibot, arktype)
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Name the generated validation schema is exported under
    #[arg(long = "schema-name")]
    pub schema_name: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Print the config file location instead of its contents
    #[arg(long)]
    pub path: bool,

    /// Set the preferred framework
    #[arg(long = "set-framework", value_enum)]
    pub set_framework: Option<PreferredFramework>,

    /// Set the validation library (zod, valibot, arktype)
    #[arg(long = "set-schema")]
    pub set_schema: Option<String>,

    /// Set the package manager used for install commands
    #[arg(long = "set-package-manager", value_enum)]
    pub set_package_manager: Option<PackageManager>,
}

impl ConfigArgs {
    pub fn has_changes(&self) -> bool {
        self.set_framework.is_some()
            || self.set_schema.is_some()
            || self.set_package_manager.is_some()
    }
}
