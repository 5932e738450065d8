//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::api::{self, GenerateOptions, InspectFormat, InspectOptions, InspectTarget};
use crate::domain::AppError;
use crate::domain::configuration::load_config;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TILE_CONFIG_LOG";

#[derive(Parser)]
#[command(name = "tile-config")]
#[command(version)]
#[command(
    about = "Generate configuration templates and ops-files from tile metadata",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write product.yml, variable files, and ops-files for a product
    #[clap(visible_alias = "g")]
    Generate {
        /// Path to the product metadata (YAML or JSON)
        #[arg(short, long)]
        metadata: PathBuf,
        /// Existing directory to write the template into
        #[arg(short, long)]
        output_directory: PathBuf,
        /// Write directly under <output>/<product-name>
        #[arg(long)]
        exclude_version: bool,
        /// Leave out errand-config and errand variables
        #[arg(long)]
        no_errands: bool,
        /// Largest collection size offered as an optional ops-file
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        size_of_collections: Option<u32>,
        /// Configuration file (defaults to ./tile-config.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print a derived table without writing files
    Inspect {
        /// Table to print
        #[arg(value_enum)]
        target: InspectTargetArg,
        /// Path to the product metadata (YAML or JSON)
        #[arg(short, long)]
        metadata: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Yaml)]
        format: FormatArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InspectTargetArg {
    RequiredVars,
    Features,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate {
            metadata,
            output_directory,
            exclude_version,
            no_errands,
            size_of_collections,
            config,
        } => run_generate(
            metadata,
            output_directory,
            exclude_version,
            no_errands,
            size_of_collections,
            config,
        ),
        Commands::Inspect { target, metadata, format } => run_inspect(target, metadata, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn run_generate(
    metadata: PathBuf,
    output_directory: PathBuf,
    exclude_version: bool,
    no_errands: bool,
    size_of_collections: Option<u32>,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut settings = load_config(config.as_deref(), &std::env::current_dir()?)?.generate;
    if exclude_version {
        settings.exclude_version = true;
    }
    if no_errands {
        settings.include_errands = false;
    }
    if let Some(size) = size_of_collections {
        settings.size_of_collections = size as usize;
    }
    settings.validate()?;

    let options = GenerateOptions {
        output_directory,
        exclude_version: settings.exclude_version,
        template: settings.template_options(),
    };
    let outcome = api::generate(&metadata, &options)?;
    println!(
        "✅ Wrote {} file(s) to {}/",
        outcome.files_written.len(),
        outcome.product_directory.display()
    );
    Ok(())
}

fn run_inspect(target: InspectTargetArg, metadata: PathBuf, format: FormatArg) -> Result<(), AppError> {
    let options = InspectOptions {
        target: match target {
            InspectTargetArg::RequiredVars => InspectTarget::RequiredVars,
            InspectTargetArg::Features => InspectTarget::Features,
        },
        format: match format {
            FormatArg::Yaml => InspectFormat::Yaml,
            FormatArg::Json => InspectFormat::Json,
        },
    };
    let output = api::inspect(&metadata, options)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
