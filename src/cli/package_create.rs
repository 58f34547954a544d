use clap::Parser;
use std::path::PathBuf;

/// Arguments for the package-create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Package a Heat template:\n    murano package-create --template wordpress.yaml --name WordPress\n\n\
                  Package MuranoPL classes with resources and UI:\n    murano package-create -c Classes -r Resources -u ui.yaml -o app.zip")]
pub struct PackageCreateArgs {
    /// Heat template to package as an application
    #[arg(long, short = 't', value_name = "HEAT_TEMPLATE", conflicts_with = "classes_dir")]
    pub template: Option<PathBuf>,

    /// Directory with MuranoPL class definitions
    #[arg(long, short = 'c', value_name = "CLASSES_DIRECTORY")]
    pub classes_dir: Option<PathBuf>,

    /// Directory with application resources
    #[arg(long, short = 'r', value_name = "RESOURCES_DIRECTORY")]
    pub resources_dir: Option<PathBuf>,

    /// Display name of the application
    #[arg(long, short = 'n', value_name = "DISPLAY_NAME")]
    pub name: Option<String>,

    /// Fully qualified name of the application
    #[arg(long, short = 'f', value_name = "FULL_NAME")]
    pub full_name: Option<String>,

    /// Name of the publisher
    #[arg(long, short = 'a', env = "OS_USERNAME", value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Keywords describing the application
    #[arg(long, value_name = "TAG", num_args = 1..)]
    pub tags: Vec<String>,

    /// Detailed description of the application
    #[arg(long, short = 'd', value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Output archive (defaults to a name derived from the package)
    #[arg(long, short = 'o', value_name = "PACKAGE_NAME")]
    pub output: Option<PathBuf>,

    /// Dynamic UI form definition
    #[arg(long, short = 'u', value_name = "UI_DEFINITION")]
    pub ui: Option<PathBuf>,

    /// Package type (Application or Library)
    #[arg(long = "type", value_name = "TYPE", default_value = "Application")]
    pub package_type: String,

    /// Package logo
    #[arg(long, short = 'l', value_name = "LOGO")]
    pub logo: Option<PathBuf>,
}
