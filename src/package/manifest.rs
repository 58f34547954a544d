//! Package manifest (manifest.yaml) parsing

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::PackageReference;
use crate::error::{Result, package};

/// Name of the manifest entry at the archive root
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// Manifest of a package archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    /// Fully-qualified name, unique within a catalog
    pub full_name: String,

    /// Display name
    pub name: Option<String>,

    /// Package version (unset means latest)
    pub version: Option<String>,

    /// Application or Library
    pub package_type: Option<String>,

    /// Package format, e.g. MuranoPL/1.0 or Heat.HOT/1.0
    pub format: Option<String>,

    pub description: Option<String>,

    pub author: Option<String>,

    pub tags: Vec<String>,

    /// Dependencies in manifest order
    pub requires: Vec<PackageReference>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ManifestData {
    full_name: Option<String>,
    name: Option<String>,
    version: Option<Value>,
    #[serde(rename = "Type")]
    package_type: Option<String>,
    format: Option<Value>,
    description: Option<String>,
    author: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    require: Option<Mapping>,
}

impl PackageManifest {
    /// Parse a manifest read from the archive identified by `origin`
    pub fn from_yaml(origin: &str, yaml: &str) -> Result<Self> {
        let data: ManifestData = serde_yaml::from_str(yaml)
            .map_err(|e| package::invalid(origin, format!("malformed {MANIFEST_FILE}: {e}")))?;

        let full_name = data
            .full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| package::invalid(origin, format!("{MANIFEST_FILE} has no FullName")))?;

        let requires = match data.require {
            Some(mapping) => parse_requires(origin, &mapping)?,
            None => Vec::new(),
        };

        Ok(Self {
            full_name,
            name: data.name,
            version: data.version.as_ref().and_then(scalar_to_string),
            package_type: data.package_type,
            format: data.format.as_ref().and_then(scalar_to_string),
            description: data.description,
            author: data.author,
            tags: data.tags.unwrap_or_default(),
            requires,
        })
    }
}

fn parse_requires(origin: &str, mapping: &Mapping) -> Result<Vec<PackageReference>> {
    mapping
        .iter()
        .map(|(key, value)| {
            let name = key
                .as_str()
                .ok_or_else(|| package::invalid(origin, "Require keys must be package names"))?;
            Ok(PackageReference {
                name: name.to_string(),
                version: scalar_to_string(value),
            })
        })
        .collect()
}

/// Render a YAML scalar as text; null and collections have no text form
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = PackageManifest::from_yaml("test", "FullName: io.murano.apps.Foo\n").unwrap();
        assert_eq!(manifest.full_name, "io.murano.apps.Foo");
        assert!(manifest.requires.is_empty());
        assert!(manifest.version.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r"
Format: 1.3
Type: Application
FullName: io.murano.apps.WordPress
Name: WordPress
Version: 2.0.1
Description: Blog engine
Author: Mirantis
Tags: [blog, php]
Require:
  io.murano.databases.MySql: 1.0
  io.murano.apps.Apache: '>=2.4'
  io.murano.apps.Php:
";
        let manifest = PackageManifest::from_yaml("wordpress.zip", yaml).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("WordPress"));
        assert_eq!(manifest.package_type.as_deref(), Some("Application"));
        assert_eq!(manifest.format.as_deref(), Some("1.3"));
        assert_eq!(manifest.version.as_deref(), Some("2.0.1"));
        assert_eq!(manifest.tags, vec!["blog", "php"]);

        let names: Vec<&str> = manifest.requires.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "io.murano.databases.MySql",
                "io.murano.apps.Apache",
                "io.murano.apps.Php"
            ]
        );
        assert_eq!(manifest.requires[0].version.as_deref(), Some("1.0"));
        assert_eq!(manifest.requires[1].version.as_deref(), Some(">=2.4"));
        assert_eq!(manifest.requires[2].version, None);
    }

    #[test]
    fn test_missing_full_name() {
        let err = PackageManifest::from_yaml("broken.zip", "Name: Foo\n").unwrap_err();
        assert!(err.to_string().contains("FullName"));
    }

    #[test]
    fn test_blank_full_name() {
        assert!(PackageManifest::from_yaml("broken.zip", "FullName: '  '\n").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PackageManifest::from_yaml("broken.zip", "FullName: [unclosed").unwrap_err();
        assert!(matches!(
            err,
            crate::error::MuranoError::InvalidPackage { .. }
        ));
    }

    #[test]
    fn test_null_require() {
        let manifest =
            PackageManifest::from_yaml("test", "FullName: first_app\nRequire:\n").unwrap();
        assert!(manifest.requires.is_empty());
    }
}
