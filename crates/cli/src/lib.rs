mod build;
mod find;
mod parse;
mod schema;

use clap::{Parser, Subcommand};
use dotnetdomain_api::ConstructKind;
use dotnetdomain_core::{BuildConfig, NestingRule};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "dotnetdomain",
    version,
    about = "Parse .NET API declarations and resolve documentation cross-references",
    long_about = "dotnetdomain reads `.. dn:<kind>:: <signature>` directives from documentation \
                  sources, validates each declaration, composes fully-qualified names from \
                  directive nesting, and builds a registry of cross-reference targets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Documents or directories to build
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Configuration file. Defaults to ./dotnetdomain.json when present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Which container kinds qualify nested names (legacy or symmetric)
    #[arg(long)]
    pub nesting: Option<NestingRule>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a single declaration
    Parse {
        /// Construct kind, e.g. class, method, operator
        #[arg(value_name = "KIND")]
        kind: ConstructKind,
        /// Raw declaration text
        #[arg(value_name = "SIGNATURE", allow_hyphen_values = true)]
        signature: String,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Build documents and list the registered reference targets
    Build {
        #[command(flatten)]
        args: BuildArgs,
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
        /// Exit with an error when any warning was produced
        #[arg(long)]
        fail_on_warning: bool,
    },
    /// Build documents and resolve one cross-reference
    Find {
        #[command(flatten)]
        args: BuildArgs,
        /// Fully-qualified name to resolve
        #[arg(long)]
        name: String,
        /// Accepted kinds in preference order. Any kind when omitted.
        #[arg(long = "kind")]
        kinds: Vec<ConstructKind>,
    },
    /// Print JSON Schemas for the configuration file and registry entries
    Schema,
}

impl BuildArgs {
    /// File configuration with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<BuildConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::load(path)?,
            None => BuildConfig::discover(Path::new("."))?,
        };
        if let Some(nesting) = self.nesting {
            config.nesting = nesting;
        }
        Ok(config)
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = dotnetdomain_core::logging::init_logging("cli", false);

    match cli.command {
        Commands::Parse {
            kind,
            signature,
            json,
        } => parse::run(kind, &signature, json),
        Commands::Build {
            args,
            json,
            fail_on_warning,
        } => build::run(&args, json, fail_on_warning),
        Commands::Find { args, name, kinds } => find::run(&args, &name, &kinds),
        Commands::Schema => schema::run(),
    }
}
