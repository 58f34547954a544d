//! package-create command implementation

use std::path::absolute;

use crate::cli::PackageCreateArgs;
use crate::error::Result;
use crate::package::create::{CreateOptions, create_package};

/// Run package-create command
pub fn run(args: PackageCreateArgs) -> Result<()> {
    let output = create_package(&options_from_args(args))?;
    let shown = absolute(&output).unwrap_or(output);
    println!("Application package is available at {}", shown.display());
    Ok(())
}

fn options_from_args(args: PackageCreateArgs) -> CreateOptions {
    CreateOptions {
        template: args.template,
        classes_dir: args.classes_dir,
        resources_dir: args.resources_dir,
        name: args.name,
        full_name: args.full_name,
        author: args.author,
        tags: args.tags,
        description: args.description,
        output: args.output,
        ui: args.ui,
        package_type: args.package_type,
        logo: args.logo,
    }
}
