use clap::Parser;

/// Arguments for the package-delete command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete one package:\n    murano package-delete 4f2b\n\n\
                  Delete several packages:\n    murano package-delete 4f2b 9c1d")]
pub struct PackageDeleteArgs {
    /// Ids of the packages to delete
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,
}
