//! Application catalog service operations
//!
//! The importer and the listing commands only see [`PackageCatalog`]; the
//! HTTP implementation lives in [`client`].

pub mod client;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::package::PackageArchive;

pub use client::CatalogClient;

/// Remote package operations of the catalog service
pub trait PackageCatalog {
    /// Upload a package; fails with `PackageConflict` when the name is taken
    fn create(&self, metadata: &ImportMetadata, archive: &PackageArchive)
    -> Result<CatalogPackage>;

    fn delete(&self, id: &str) -> Result<()>;

    fn filter(&self, filter: &PackageFilter) -> Result<Vec<CatalogPackage>>;

    fn get(&self, id: &str) -> Result<CatalogPackage>;
}

/// A package as the catalog service reports it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPackage {
    pub id: String,
    pub name: String,
    pub fully_qualified_name: String,
    pub author: Option<String>,
    pub enabled: bool,
    pub is_public: bool,
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub owner_id: Option<String>,
}

/// Metadata sent with every package upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportMetadata {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub is_public: bool,
}

/// Query for `GET /packages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    /// Stop after this many packages
    pub limit: Option<usize>,
    pub marker: Option<String>,
    pub include_disabled: bool,
    pub owned: bool,
    pub search: Option<String>,
    pub name: Option<String>,
    pub fqn: Option<String>,
    pub package_type: Option<String>,
    pub category: Option<String>,
    pub class_name: Option<String>,
    pub tag: Option<String>,
}

impl PackageFilter {
    /// Every package, enabled or not, with the given fully-qualified name
    pub fn by_fqn(fqn: impl Into<String>) -> Self {
        Self {
            fqn: Some(fqn.into()),
            include_disabled: true,
            ..Self::default()
        }
    }

    /// Query string pairs, without paging parameters
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.include_disabled {
            pairs.push(("include_disabled", "true".to_string()));
        }
        if self.owned {
            pairs.push(("owned", "true".to_string()));
        }
        let optional = [
            ("search", &self.search),
            ("name", &self.name),
            ("fqn", &self.fqn),
            ("type", &self.package_type),
            ("category", &self.category),
            ("class_name", &self.class_name),
            ("tag", &self.tag),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}
