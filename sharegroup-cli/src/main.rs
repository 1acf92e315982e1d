//! Share group configuration command line interface

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sharegroup_cli::*;
use sharegroup_core::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharegroup")]
#[command(about = "Check and document share group configuration")]
#[command(version, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, validate and print the effective configuration
    Validate {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prefix for environment overrides
        #[arg(long, default_value = sharegroup_config::DEFAULT_ENV_PREFIX)]
        env_prefix: String,

        /// Ignore environment overrides
        #[arg(long)]
        no_env: bool,
    },

    /// Print documentation for every public key
    Describe {
        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: DocFormat,
    },

    /// Print default values as TOML
    Defaults,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let result = match cli.command {
        Commands::Validate { config, env_prefix, no_env } => {
            handle_validate(config, (!no_env).then_some(env_prefix))
        }
        Commands::Describe { format } => {
            print!("{}", describe(format));
            Ok(())
        }
        Commands::Defaults => defaults().map(|rendered| print!("{}", rendered)),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        process::exit(1);
    }
}

fn handle_validate(config: Option<PathBuf>, env_prefix: Option<String>) -> Result<()> {
    let loader = source_loader(config.as_deref(), env_prefix.as_deref());
    let resolved = resolve(&loader)?;

    print_success("Share group configuration is valid");
    println!();
    print!("{}", render_config(&resolved)?);
    Ok(())
}
