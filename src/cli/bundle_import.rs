use clap::Parser;

use crate::importer::ExistsAction;

/// Arguments for the bundle-import command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Import a bundle from the package repository:\n    murano bundle-import app-servers\n\n\
                  Import a local bundle with packages stored next to it:\n    murano bundle-import ./bundles/app-servers.bundle\n\n\
                  Import without touching existing packages:\n    murano bundle-import app-servers --exists-action skip")]
pub struct BundleImportArgs {
    /// Bundle names, local paths or URLs to import
    #[arg(required = true, value_name = "FILE")]
    pub filenames: Vec<String>,

    /// Make the imported packages public
    #[arg(long)]
    pub is_public: bool,

    /// Action when a package already exists (skip, abort, update); asks if unset
    #[arg(long, value_enum, value_name = "ACTION")]
    pub exists_action: Option<ExistsAction>,
}
