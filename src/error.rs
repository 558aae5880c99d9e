//! Domain-specific error types for the domain registrar.
//!
//! Internal modules return [`ConfigError`] for problems detected before any
//! file is touched; command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.  I/O failures while
//! rewriting configuration files are reported through `anyhow` context
//! directly.
//!
//! # Usage errors
//!
//! [`ConfigError::DirMissing`] and [`ConfigError::InvalidDomain`] are usage
//! errors: `main` reports them through clap so they share the exit status and
//! formatting of argument parsing failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from resolving the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base configuration directory does not exist.
    #[error("The config dir '{}' does not exist", .0.display())]
    DirMissing(PathBuf),

    /// A domain argument cannot be used as a file name or include target.
    #[error("Invalid domain name '{name}': {reason}")]
    InvalidDomain {
        /// The rejected argument.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// The module catalog lacks an entry the registrar cannot work without.
    #[error("Module catalog is missing required key '{key}' in [{table}]")]
    MissingCatalogKey {
        /// Catalog table (`files` or `templates`).
        table: &'static str,
        /// Missing key within the table.
        key: &'static str,
    },

    /// A catalog file could not be read.
    #[error("IO error reading catalog file {}: {source}", .path.display())]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A catalog file is not valid TOML or has the wrong shape.
    #[error("Invalid catalog {}: {source}", .path.display())]
    Parse {
        /// Path to the offending file (`<embedded>` for the built-in catalog).
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Return `true` for errors that stem from the command line rather than
    /// from the filesystem or catalog content.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::DirMissing(_) | Self::InvalidDomain { .. })
    }
}
