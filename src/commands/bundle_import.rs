//! bundle-import command implementation

use crate::catalog::ImportMetadata;
use crate::cli::BundleImportArgs;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::ui::display_import_report;

use super::helpers;

/// Run bundle-import command
///
/// Bundles are imported in order and share one run: a package pulled in by
/// an earlier bundle is not imported again.
pub fn run(config: &ClientConfig, args: BundleImportArgs) -> Result<()> {
    let metadata = ImportMetadata {
        categories: Vec::new(),
        is_public: args.is_public,
    };
    let report = helpers::with_importer(config, args.exists_action, metadata, |importer| {
        importer.import_bundles(&args.filenames)
    })?;

    display_import_report(&report);
    report.aborted.map_or(Ok(()), Err)
}
