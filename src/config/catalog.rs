//! Module catalog: module id → snippet file name and module id → template text.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Catalog compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("catalog.toml");

/// Module id whose file entry names the master include file.
pub const MASTER_KEY: &str = "domains";

/// Module id whose template is the default per-domain skeleton.
pub const VHOST_KEY: &str = "vhost";

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    files: BTreeMap<String, String>,
    #[serde(default)]
    templates: BTreeMap<String, String>,
}

/// Immutable module catalog.
///
/// Lookups return `None` for unknown module ids; callers decide whether that
/// is worth mentioning.
#[derive(Debug, Clone)]
pub struct Catalog {
    files: BTreeMap<String, String>,
    templates: BTreeMap<String, String>,
    master_file: String,
    vhost_template: String,
}

impl Catalog {
    /// Load the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data is malformed.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(EMBEDDED_CATALOG, Path::new("<embedded>"))
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or lacks
    /// the `domains` file entry or the `vhost` template.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load from `path` when given, otherwise fall back to the embedded catalog.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Catalog::load`] and [`Catalog::embedded`].
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(Self::embedded, Self::load)
    }

    fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: RawCatalog = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(origin),
            source,
        })?;

        let master_file = raw
            .files
            .get(MASTER_KEY)
            .cloned()
            .ok_or(ConfigError::MissingCatalogKey {
                table: "files",
                key: MASTER_KEY,
            })?;
        let vhost_template = raw
            .templates
            .get(VHOST_KEY)
            .cloned()
            .ok_or(ConfigError::MissingCatalogKey {
                table: "templates",
                key: VHOST_KEY,
            })?;

        Ok(Self {
            files: raw.files,
            templates: raw.templates,
            master_file,
            vhost_template,
        })
    }

    /// File name of the master include file.
    #[must_use]
    pub fn master_file(&self) -> &str {
        &self.master_file
    }

    /// Built-in per-domain skeleton.
    #[must_use]
    pub fn vhost_template(&self) -> &str {
        &self.vhost_template
    }

    /// Snippet file name for `module`, if the catalog knows one.
    #[must_use]
    pub fn file(&self, module: &str) -> Option<&str> {
        self.files.get(module).map(String::as_str)
    }

    /// Template text for `module`, if the catalog has one.
    #[must_use]
    pub fn template(&self, module: &str) -> Option<&str> {
        self.templates.get(module).map(String::as_str)
    }

    /// All `(module, file name)` entries in module-id order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
