//! Client configuration
//!
//! Settings come from three layers, first match wins:
//! 1. Command-line flags
//! 2. Environment variables (`MURANO_URL`, `OS_AUTH_TOKEN`, `MURANO_REPO_URL`)
//! 3. `config.yaml` (`--config`, or `<config dir>/murano/config.yaml`)
//!
//! ```yaml
//! murano_url: http://murano.example.com:8082
//! auth_token: 3f9a...
//! repo_url: http://storage.apps.openstack.org
//! timeout_secs: 60    # 0 disables the timeout
//! exists_action: skip
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, config};
use crate::importer::ExistsAction;

/// Repository used to find packages and bundles by name
pub const DEFAULT_REPO_URL: &str = "http://storage.apps.openstack.org";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// One layer of optional settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub murano_url: Option<String>,
    pub auth_token: Option<String>,
    pub repo_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub exists_action: Option<ExistsAction>,
}

impl ConfigLayer {
    /// Parse a config file's content
    pub fn from_yaml(path: &str, yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(path, e.to_string()))
    }

    /// Read a config file; an explicitly requested file must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&path.display().to_string(), &content)
    }

    /// Fill unset fields from `lower`
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            murano_url: self.murano_url.or(lower.murano_url),
            auth_token: self.auth_token.or(lower.auth_token),
            repo_url: self.repo_url.or(lower.repo_url),
            timeout_secs: self.timeout_secs.or(lower.timeout_secs),
            exists_action: self.exists_action.or(lower.exists_action),
        }
    }
}

/// Location of the default config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("murano").join("config.yaml"))
}

/// Where and how to reach the catalog service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub url: String,
    pub token: String,
}

/// Resolved client settings, passed explicitly to every component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub murano_url: Option<String>,
    pub auth_token: Option<String>,
    pub repo_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Conflict action used when a command does not set one
    pub exists_action: Option<ExistsAction>,
}

impl ClientConfig {
    pub fn from_layer(layer: ConfigLayer) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            murano_url: non_empty(layer.murano_url),
            auth_token: non_empty(layer.auth_token),
            repo_url: non_empty(layer.repo_url).unwrap_or_else(|| DEFAULT_REPO_URL.to_string()),
            timeout: match layer.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            exists_action: layer.exists_action,
        }
    }

    /// Merge command-line settings over the config file
    ///
    /// `config_path` names an explicit file, which must then exist; otherwise
    /// the default location is read if present.
    pub fn load(cli_layer: ConfigLayer, config_path: Option<&Path>) -> Result<Self> {
        let file_layer = match config_path {
            Some(path) => ConfigLayer::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => ConfigLayer::from_file(&path)?,
                _ => ConfigLayer::default(),
            },
        };
        tracing::debug!(?file_layer.repo_url, ?file_layer.exists_action, "loaded config file");
        Ok(Self::from_layer(cli_layer.or(file_layer)))
    }

    /// Endpoint and token for commands that talk to the catalog service
    pub fn service(&self) -> Result<ServiceEndpoint> {
        let url = self.murano_url.clone().ok_or_else(|| {
            config::command("You must provide a Murano endpoint via either --murano-url or env[MURANO_URL]")
        })?;
        let token = self.auth_token.clone().ok_or_else(|| {
            config::command(
                "You must provide an auth token via either --os-auth-token or env[OS_AUTH_TOKEN]",
            )
        })?;
        Ok(ServiceEndpoint { url, token })
    }
}
