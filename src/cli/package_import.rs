use clap::Parser;

use crate::importer::ExistsAction;

/// Arguments for the package-import command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Import from the package repository:\n    murano package-import io.murano.apps.apache.Tomcat\n\n\
                  Import a specific version:\n    murano package-import io.murano.apps.apache.Tomcat --package-version 1.0\n\n\
                  Import a local archive into categories:\n    murano package-import ./tomcat.zip --categories Web Servers\n\n\
                  Import from a URL, replacing existing packages:\n    murano package-import https://example.com/app.zip --exists-action update")]
pub struct PackageImportArgs {
    /// Package names, local paths or URLs to import
    #[arg(required = true, value_name = "FILE")]
    pub filenames: Vec<String>,

    /// Categories to put the imported packages in
    #[arg(long, short = 'c', value_name = "CATEGORY", num_args = 1..)]
    pub categories: Vec<String>,

    /// Make the imported packages public
    #[arg(long)]
    pub is_public: bool,

    /// Version of the packages to fetch from the repository
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Action when a package already exists (skip, abort, update); asks if unset
    #[arg(long, value_enum, value_name = "ACTION")]
    pub exists_action: Option<ExistsAction>,
}
