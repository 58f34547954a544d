use clap::Parser;

/// Arguments for the package-list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all packages:\n    murano package-list\n\n\
                  List the first ten packages including disabled ones:\n    murano package-list --limit 10 --include-disabled\n\n\
                  Find a package by fully qualified name:\n    murano package-list --fqn io.murano.apps.apache.Tomcat")]
pub struct PackageListArgs {
    /// Show at most this many packages (0 means all)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub limit: i64,

    /// Start after the package with this id
    #[arg(long)]
    pub marker: Option<String>,

    /// Include disabled packages
    #[arg(long)]
    pub include_disabled: bool,

    /// Only packages owned by the current tenant
    #[arg(long)]
    pub owned: bool,

    /// Packages matching search keys fuzzily
    #[arg(long, value_name = "SEARCH_KEYS")]
    pub search: Option<String>,

    /// Packages whose name matches exactly
    #[arg(long, value_name = "PACKAGE_NAME")]
    pub name: Option<String>,

    /// Packages whose fully qualified name matches exactly
    #[arg(long, value_name = "FULLY_QUALIFIED_NAME")]
    pub fqn: Option<String>,

    /// Packages whose type matches exactly (Application, Library)
    #[arg(long = "type", value_name = "TYPE")]
    pub package_type: Option<String>,

    /// Packages whose categories include this one
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Packages defining this class
    #[arg(long, alias = "class_name", value_name = "CLASS_NAME")]
    pub class_name: Option<String>,

    /// Packages whose tags include this one
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,
}
