//! package-show command implementation

use crate::catalog::PackageCatalog;
use crate::cli::PackageShowArgs;
use crate::config::ClientConfig;
use crate::error::{Result, package};
use crate::fetch::map_not_found;
use crate::ui::display_package;

use super::helpers;

pub fn run(config: &ClientConfig, args: PackageShowArgs) -> Result<()> {
    let catalog = helpers::catalog_client(config)?;
    let found = catalog
        .get(&args.id)
        .map_err(|e| map_not_found(e, || package::not_found(&args.id)))?;
    display_package(&found);
    Ok(())
}
