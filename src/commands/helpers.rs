//! Command helper utilities

use crate::catalog::{CatalogClient, ImportMetadata};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::importer::{ConflictPolicy, ExistsAction, ImportOptions, Importer};
use crate::importer::policy::TerminalPrompter;

/// Catalog client for the configured endpoint
pub fn catalog_client(config: &ClientConfig) -> Result<CatalogClient> {
    let service = config.service()?;
    CatalogClient::new(&service.url, service.token, config.timeout)
}

/// Run `f` with an importer wired to the catalog and package repository
///
/// `exists_action` from the command line wins over the config file; with
/// neither, conflicts are asked about on the terminal.
pub fn with_importer<T>(
    config: &ClientConfig,
    exists_action: Option<ExistsAction>,
    metadata: ImportMetadata,
    f: impl FnOnce(&mut Importer<'_>) -> Result<T>,
) -> Result<T> {
    let catalog = catalog_client(config)?;
    let fetcher = HttpFetcher::new(config.timeout)?;
    let policy = ConflictPolicy::new(
        exists_action.or(config.exists_action),
        Box::new(TerminalPrompter),
    );
    let options = ImportOptions {
        repo_url: config.repo_url.clone(),
        metadata,
    };

    let mut importer = Importer::new(&catalog, &fetcher, policy, options)
        .with_progress(console::user_attended_stderr());
    f(&mut importer)
}
