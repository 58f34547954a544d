//! Blocking HTTP client for the catalog API (`<murano_url>/v1/catalog`)

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CatalogPackage, ImportMetadata, PackageCatalog, PackageFilter};
use crate::error::{Result, http, package};
use crate::fetch::join_url;
use crate::package::PackageArchive;

const AUTH_HEADER: &str = "X-Auth-Token";
const METADATA_PART: &str = "__metadata__";

/// One page of `GET /packages`
#[derive(Debug, Deserialize)]
struct PackagePage {
    #[serde(default)]
    packages: Vec<CatalogPackage>,
    next_marker: Option<String>,
}

/// Catalog API client authenticated with a pre-issued token
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    token: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(
        murano_url: &str,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("murano/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: join_url(murano_url, "v1/catalog"),
            token: token.into(),
            client,
        })
    }

    fn packages_url(&self) -> String {
        join_url(&self.base_url, "packages")
    }

    fn package_url(&self, id: &str) -> String {
        join_url(&self.base_url, &format!("packages/{id}"))
    }

    fn send(&self, url: &str, request: RequestBuilder) -> Result<Response> {
        request
            .header(AUTH_HEADER, &self.token)
            .send()
            .map_err(|e| http::transport(url, e.to_string()))
    }

    fn send_json<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> Result<T> {
        let response = check_status(url, self.send(url, request)?)?;
        response
            .json()
            .map_err(|e| http::transport(url, format!("invalid response body: {e}")))
    }
}

/// Turn an unsuccessful response into an error carrying the service's message
fn check_status(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(http::not_found(url));
    }

    let fallback = status.canonical_reason().unwrap_or("unexpected status");
    let reason = response
        .text()
        .ok()
        .map(|body| body.trim().to_string())
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Err(http::status(url, status.as_u16(), reason))
}

impl PackageCatalog for CatalogClient {
    fn create(
        &self,
        metadata: &ImportMetadata,
        archive: &PackageArchive,
    ) -> Result<CatalogPackage> {
        let url = self.packages_url();
        let full_name = archive.full_name().to_string();
        debug!(url = %url, package = %full_name, "POST package archive");

        let file = Part::bytes(archive.bytes().to_vec())
            .file_name(full_name.clone())
            .mime_str("application/octet-stream")?;
        let form = Form::new()
            .text(METADATA_PART, serde_json::to_string(metadata)?)
            .part(full_name.clone(), file);

        let response = self.send(&url, self.client.post(&url).multipart(form))?;
        if response.status() == StatusCode::CONFLICT {
            return Err(package::conflict(full_name));
        }

        check_status(&url, response)?
            .json()
            .map_err(|e| http::transport(&url, format!("invalid response body: {e}")))
    }

    fn delete(&self, id: &str) -> Result<()> {
        let url = self.package_url(id);
        debug!(id, "deleting package");
        check_status(&url, self.send(&url, self.client.delete(&url))?)?;
        Ok(())
    }

    fn filter(&self, filter: &PackageFilter) -> Result<Vec<CatalogPackage>> {
        let url = self.packages_url();
        let mut packages = Vec::new();
        let mut marker = filter.marker.clone();

        loop {
            let mut query = filter.query_pairs();
            if let Some(limit) = filter.limit {
                query.push(("limit", limit.saturating_sub(packages.len()).to_string()));
            }
            if let Some(marker) = &marker {
                query.push(("marker", marker.clone()));
            }

            debug!(url = %url, ?query, "listing packages");
            let page: PackagePage = self.send_json(&url, self.client.get(&url).query(&query))?;
            let fetched = page.packages.len();
            packages.extend(page.packages);

            if let Some(limit) = filter.limit {
                if packages.len() >= limit {
                    packages.truncate(limit);
                    break;
                }
            }

            match page.next_marker {
                Some(next) if fetched > 0 && marker.as_ref() != Some(&next) => marker = Some(next),
                _ => break,
            }
        }

        Ok(packages)
    }

    fn get(&self, id: &str) -> Result<CatalogPackage> {
        let url = self.package_url(id);
        self.send_json(&url, self.client.get(&url))
    }
}
