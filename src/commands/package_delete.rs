//! package-delete command implementation

use console::Style;

use crate::catalog::PackageCatalog;
use crate::cli::PackageDeleteArgs;
use crate::config::ClientConfig;
use crate::error::{Result, config, package};
use crate::fetch::map_not_found;

use super::helpers;

/// Run package-delete command
pub fn run(config: &ClientConfig, args: PackageDeleteArgs) -> Result<()> {
    let catalog = helpers::catalog_client(config)?;
    delete_packages(&catalog, &args.ids)
}

/// Delete each id, reporting failures; fails only if nothing was deleted
fn delete_packages(catalog: &dyn PackageCatalog, ids: &[String]) -> Result<()> {
    let mut deleted = 0;
    for id in ids {
        match catalog.delete(id) {
            Ok(()) => {
                deleted += 1;
                println!("{} {}", Style::new().green().bold().apply_to("Deleted"), id);
            }
            Err(err) => {
                let err = map_not_found(err, || package::not_found(id));
                eprintln!("{} {}: {}", Style::new().red().bold().apply_to("Failed"), id, err);
            }
        }
    }

    if deleted == 0 {
        return Err(config::command(
            "Unable to find and delete any of the specified packages.",
        ));
    }
    Ok(())
}
