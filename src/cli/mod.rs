//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - package_import: package-import arguments
//! - bundle_import: bundle-import arguments
//! - package_list: package-list arguments
//! - package_show: package-show arguments
//! - package_delete: package-delete arguments
//! - package_create: package-create arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle_import;
pub mod completions;
pub mod package_create;
pub mod package_delete;
pub mod package_import;
pub mod package_list;
pub mod package_show;

pub use bundle_import::BundleImportArgs;
pub use completions::CompletionsArgs;
pub use package_create::PackageCreateArgs;
pub use package_delete::PackageDeleteArgs;
pub use package_import::PackageImportArgs;
pub use package_list::PackageListArgs;
pub use package_show::PackageShowArgs;

use crate::config::ConfigLayer;

/// Murano - application catalog client
///
/// Import, list and manage application packages in an OpenStack Murano catalog.
#[derive(Parser, Debug)]
#[command(
    name = "murano",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Command-line client for the Murano application catalog",
    long_about = "Murano imports application packages and bundles into an application catalog, \
                  resolving package dependencies from local files, URLs or a package repository.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  murano package-import io.murano.apps.apache.Tomcat   \x1b[90m# Import from the repository\x1b[0m\n   \
                  murano package-import ./app.zip --exists-action u   \x1b[90m# Import a local package, replacing it\x1b[0m\n   \
                  murano bundle-import app-servers                    \x1b[90m# Import every package of a bundle\x1b[0m\n   \
                  murano package-list --owned                         \x1b[90m# List your packages\x1b[0m\n   \
                  murano package-create -t template.yaml              \x1b[90m# Build a package from a Heat template\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Murano API endpoint
    #[arg(long, global = true, env = "MURANO_URL", value_name = "URL")]
    pub murano_url: Option<String>,

    /// Authentication token for the catalog service
    #[arg(
        long,
        global = true,
        env = "OS_AUTH_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub os_auth_token: Option<String>,

    /// Package repository used to look up packages and bundles by name
    #[arg(long, global = true, env = "MURANO_REPO_URL", value_name = "URL")]
    pub murano_repo_url: Option<String>,

    /// Configuration file (defaults to <config dir>/murano/config.yaml)
    #[arg(long, global = true, env = "MURANO_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// HTTP request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line or through the environment
    pub fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            murano_url: self.murano_url.clone(),
            auth_token: self.os_auth_token.clone(),
            repo_url: self.murano_repo_url.clone(),
            timeout_secs: self.timeout,
            exists_action: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import packages by name, local path or URL, with their dependencies
    PackageImport(PackageImportArgs),

    /// Import bundles of packages by name, local path or URL
    BundleImport(BundleImportArgs),

    /// List packages in the catalog
    PackageList(PackageListArgs),

    /// Show package details
    PackageShow(PackageShowArgs),

    /// Delete packages from the catalog
    PackageDelete(PackageDeleteArgs),

    /// Build a package archive locally
    PackageCreate(PackageCreateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
