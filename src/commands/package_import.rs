//! package-import command implementation

use crate::catalog::ImportMetadata;
use crate::cli::PackageImportArgs;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::ui::display_import_report;

use super::helpers;

/// Run package-import command
pub fn run(config: &ClientConfig, args: PackageImportArgs) -> Result<()> {
    let metadata = ImportMetadata {
        categories: args.categories,
        is_public: args.is_public,
    };
    let report = helpers::with_importer(config, args.exists_action, metadata, |importer| {
        importer.import_packages(&args.filenames, args.package_version.as_deref())
    })?;

    display_import_report(&report);
    report.aborted.map_or(Ok(()), Err)
}
