use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use console_router::config::load_config;
use console_router::observability::init_logging;
use console_router::profiles::Profile;
use console_router::routing::{Fallback, Resolution, RouteAction, Router, TableError};
use console_router::Url;

#[derive(Parser)]
#[command(name = "console-routes")]
#[command(about = "Inspect and resolve console route tables", long_about = None)]
struct Cli {
    /// TOML config file selecting profile and fallback.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Profile to build when no config file is given.
    #[arg(short, long, default_value = "full")]
    profile: Profile,

    /// Fallback redirect target when no config file is given. There is no
    /// default: unmatched-path behavior is always an explicit decision.
    #[arg(long)]
    fallback_redirect: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Resolve paths or full URLs against the table
    Resolve { inputs: Vec<String> },
    /// Load and validate a config file (requires --config)
    Check,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    resolution: Resolution,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (profile, router, log_level) = build_router(&cli)?;
    init_logging(&log_level);

    match &cli.command {
        Commands::Routes => {
            for entry in router.entries() {
                let action = match entry.action() {
                    RouteAction::Render {
                        page,
                        expose_params,
                    } => format!(
                        "page={page}{}",
                        if *expose_params { " +params" } else { "" }
                    ),
                    RouteAction::Redirect { to } => format!("-> {to}"),
                };
                let mut flags = String::new();
                if entry.meta().hide_navigation {
                    flags.push_str(" [hidden]");
                }
                if let Some(domain) = entry.meta().domain {
                    flags.push_str(&format!(" [{domain}]"));
                }
                let title = entry.meta().title.as_deref().unwrap_or("-");
                println!(
                    "{:<22} {:<34} {:<22}{}",
                    entry.pattern().as_str(),
                    action,
                    title,
                    flags
                );
            }
        }
        Commands::Resolve { inputs } => {
            for input in inputs {
                let resolution = if input.contains("://") {
                    let url = Url::parse(input)?;
                    router.resolve_url(&url)?
                } else {
                    router.resolve(input)?
                };
                let report = ResolveReport { input, resolution };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Check => {
            if cli.config.is_none() {
                return Err("check requires --config".into());
            }
            println!(
                "configuration OK: profile={profile}, {} routes",
                router.entries().len()
            );
        }
    }

    Ok(())
}

fn build_router(cli: &Cli) -> Result<(Profile, Router, String), Box<dyn std::error::Error>> {
    if let Some(path) = &cli.config {
        let config = load_config(path)?;
        let router = config.build_router().map_err(format_table_errors)?;
        Ok((config.profile, router, config.observability.log_level))
    } else {
        let to = cli
            .fallback_redirect
            .clone()
            .ok_or("either --config or --fallback-redirect is required")?;
        let router = cli
            .profile
            .builder()
            .fallback(Fallback::RedirectTo(to))
            .build()
            .map_err(format_table_errors)?;
        Ok((cli.profile, router, "info".to_string()))
    }
}

fn format_table_errors(errors: Vec<TableError>) -> String {
    errors
        .iter()
        .map(|e| format!("invalid route table: {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
