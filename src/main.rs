//! backend-config
//!
//! Inspects the configuration the backend would start with, resolved from
//! the current process environment.
//!
//! ```text
//!   environment ──▶ config::loader ──▶ ServiceConfig ──▶ show / env / check
//!                        │
//!                        └──▶ fallbacks ──▶ observability (warn logs)
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use backend_config::config::keys::VARIABLES;
use backend_config::config::{EnvSource, ProcessEnv};
use backend_config::lifecycle;
use backend_config::observability::{logging, LogFormat};

#[derive(Parser)]
#[command(name = "backend-config")]
#[command(about = "Inspect the backend's environment-driven configuration", long_about = None)]
struct Cli {
    /// Log output format (pretty or json).
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List recognized environment variables and their defaults
    Env,
    /// Load the configuration and report discarded values
    Check {
        /// Exit non-zero if any value was discarded
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_format)?;

    match cli.command {
        Commands::Show { format } => {
            let config = lifecycle::init();
            let rendered = match format {
                OutputFormat::Json => serde_json::to_string_pretty(config.as_ref())?,
                OutputFormat::Toml => toml::to_string_pretty(config.as_ref())?,
            };
            println!("{}", rendered);
        }
        Commands::Env => {
            println!(
                "{:<24} {:<9} {:<12} {:<4} {}",
                "VARIABLE", "KIND", "DEFAULT", "SET", "DESCRIPTION"
            );
            for spec in VARIABLES {
                let set = ProcessEnv.get(spec.name).is_some_and(|v| !v.is_empty());
                println!(
                    "{:<24} {:<9} {:<12} {:<4} {}",
                    spec.name,
                    spec.kind.as_str(),
                    spec.default,
                    if set { "yes" } else { "-" },
                    spec.description
                );
            }
        }
        Commands::Check { strict } => {
            let report = lifecycle::load_and_log(&ProcessEnv);
            if report.is_clean() {
                tracing::info!("All environment values accepted");
            } else {
                tracing::warn!(
                    discarded = report.fallbacks.len(),
                    "Some environment values were replaced by defaults"
                );
                if strict {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
