//! Murano - application catalog client
//!
//! A command line client for the OpenStack Murano application catalog: imports
//! packages and bundles with their dependencies, and lists, shows, deletes and
//! builds application packages.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bundle;
mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod fetch;
mod importer;
mod package;
mod progress;
mod resolver;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::ClientConfig;

/// Install the stderr log subscriber; `RUST_LOG` overrides `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "murano=debug" } else { "murano=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Commands that talk to the catalog service
fn needs_service(command: &Commands) -> bool {
    matches!(
        command,
        Commands::PackageImport(_)
            | Commands::BundleImport(_)
            | Commands::PackageList(_)
            | Commands::PackageShow(_)
            | Commands::PackageDelete(_)
    )
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match ClientConfig::load(cli.config_layer(), cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Missing endpoint or token fails before any network access
    if needs_service(&cli.command) {
        if let Err(e) = config.service() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::PackageImport(args) => commands::package_import::run(&config, args),
        Commands::BundleImport(args) => commands::bundle_import::run(&config, args),
        Commands::PackageList(args) => commands::package_list::run(&config, args),
        Commands::PackageShow(args) => commands::package_show::run(&config, args),
        Commands::PackageDelete(args) => commands::package_delete::run(&config, args),
        Commands::PackageCreate(args) => commands::package_create::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
