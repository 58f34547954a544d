use clap::Parser;

/// Arguments for the package-show command
#[derive(Parser, Debug)]
pub struct PackageShowArgs {
    /// Package id
    pub id: String,
}
