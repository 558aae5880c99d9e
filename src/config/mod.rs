//! Run configuration: base directory, enabled modules and module catalog.
pub mod catalog;

use std::path::{Path, PathBuf};

pub use catalog::Catalog;

use crate::error::ConfigError;
use crate::registrar::DomainName;

/// Default lighttpd configuration directory.
pub const DEFAULT_CONF_DIR: &str = "/etc/lighttpd";

/// Name of the per-domain directory below the base directory.
pub const DOMAINS_DIR: &str = "domains";

/// Module that every generated vhost includes.
pub const BASE_MODULE: &str = "doc-root";

/// File name of the optional user skeleton inside the domains directory.
pub const SKELETON_FILE: &str = "vhost.skel";

/// Resolved settings for one run, built once in `main` and shared by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base lighttpd configuration directory.
    pub conf_dir: PathBuf,
    /// Enabled modules: [`BASE_MODULE`] first, then user modules in order.
    pub modules: Vec<String>,
    /// Module catalog.
    pub catalog: Catalog,
}

impl Config {
    /// Build the run configuration.
    ///
    /// `extra_modules` are appended after [`BASE_MODULE`]; entries are trimmed,
    /// and blanks and repeats are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DirMissing`] if `conf_dir` is not an existing
    /// directory.
    pub fn new(
        conf_dir: &Path,
        extra_modules: &[String],
        catalog: Catalog,
    ) -> Result<Self, ConfigError> {
        if !conf_dir.is_dir() {
            return Err(ConfigError::DirMissing(conf_dir.to_path_buf()));
        }

        let mut modules = vec![BASE_MODULE.to_string()];
        for module in extra_modules.iter().map(String::as_str).map(str::trim) {
            if !module.is_empty() && !modules.iter().any(|m| m == module) {
                modules.push(module.to_string());
            }
        }

        Ok(Self {
            conf_dir: conf_dir.to_path_buf(),
            modules,
            catalog,
        })
    }

    /// `<conf_dir>/domains`.
    #[must_use]
    pub fn domains_dir(&self) -> PathBuf {
        self.conf_dir.join(DOMAINS_DIR)
    }

    /// Path of the master include file.
    #[must_use]
    pub fn master_path(&self) -> PathBuf {
        self.conf_dir.join(self.catalog.master_file())
    }

    /// Path of the optional user skeleton.
    #[must_use]
    pub fn skeleton_path(&self) -> PathBuf {
        self.domains_dir().join(SKELETON_FILE)
    }

    /// Snippet file names of the enabled modules, skipping modules the
    /// catalog does not know.
    #[must_use]
    pub fn module_files(&self) -> Vec<&str> {
        self.modules
            .iter()
            .filter_map(|m| self.catalog.file(m))
            .collect()
    }

    /// Reject domains whose config file would be a module snippet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] for the first colliding domain.
    pub fn check_domains(&self, domains: &[DomainName]) -> Result<(), ConfigError> {
        for domain in domains {
            let file = domain.conf_file_name();
            if self
                .catalog
                .files()
                .any(|(module, name)| module != catalog::MASTER_KEY && name == file)
            {
                return Err(ConfigError::InvalidDomain {
                    name: domain.to_string(),
                    reason: "collides with a module snippet file",
                });
            }
        }
        Ok(())
    }

    /// Enabled modules with no catalog file entry.
    #[must_use]
    pub fn unknown_modules(&self) -> Vec<&str> {
        self.modules
            .iter()
            .map(String::as_str)
            .filter(|m| self.catalog.file(m).is_none())
            .collect()
    }
}
