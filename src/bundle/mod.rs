//! Bundles: named lists of packages imported together
//!
//! A bundle document is JSON:
//!
//! ```json
//! {"Packages": [{"Name": "io.murano.apps.Foo", "Version": "1.0"}, {"Name": "io.murano.apps.Bar"}]}
//! ```

pub mod locator;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, bundle};
use crate::package::PackageReference;

pub use locator::{BundleLocator, LocatedBundle};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BundleData {
    packages: Vec<BundleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BundleEntry {
    name: String,
    #[serde(default)]
    version: Option<Value>,
}

/// Ordered package references read from a bundle document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub packages: Vec<PackageReference>,
}

impl Bundle {
    /// Parse the bundle document read for `name`
    pub fn from_json(name: &str, bytes: &[u8]) -> Result<Self> {
        let data: BundleData =
            serde_json::from_slice(bytes).map_err(|e| bundle::invalid(name, e.to_string()))?;

        let packages = data
            .packages
            .into_iter()
            .map(|entry| {
                let version = match entry.version {
                    Some(Value::String(s)) => Some(s),
                    Some(Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                };
                PackageReference::with_version(entry.name, version)
            })
            .collect();

        Ok(Self { packages })
    }
}
