//! package-list command implementation

use crate::catalog::{PackageCatalog, PackageFilter};
use crate::cli::PackageListArgs;
use crate::config::ClientConfig;
use crate::error::{Result, config};
use crate::ui::display_package_table;

use super::helpers;

/// Run package-list command
pub fn run(config: &ClientConfig, args: PackageListArgs) -> Result<()> {
    let filter = build_filter(args)?;
    let catalog = helpers::catalog_client(config)?;
    let packages = catalog.filter(&filter)?;
    display_package_table(&packages);
    Ok(())
}

fn build_filter(args: PackageListArgs) -> Result<PackageFilter> {
    let limit = usize::try_from(args.limit)
        .map_err(|_| config::command("--limit parameter must be non-negative"))?;

    Ok(PackageFilter {
        limit: (limit > 0).then_some(limit),
        marker: args.marker.filter(|m| !m.is_empty()),
        include_disabled: args.include_disabled,
        owned: args.owned,
        search: args.search,
        name: args.name,
        fqn: args.fqn,
        package_type: args.package_type,
        category: args.category,
        class_name: args.class_name,
        tag: args.tag,
    })
}
