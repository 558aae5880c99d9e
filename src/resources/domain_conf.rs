//! Per-domain config file resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::helpers::fs::{ensure_parent_dir, read_optional, remove_if_present};
use super::{Resource, ResourceChange};
use crate::registrar::DomainName;
use crate::registrar::template::render_vhost;

/// The generated `domains/<domain>.conf` file.
///
/// Once the file exists it belongs to the user: `apply` never rewrites it.
#[derive(Debug, Clone)]
pub struct DomainConfigResource<'a> {
    /// Domain the file configures.
    pub domain: &'a DomainName,
    /// Destination file.
    pub path: PathBuf,
    /// Optional user skeleton that takes precedence over `fallback`.
    pub skeleton: PathBuf,
    /// Built-in skeleton.
    pub fallback: &'a str,
    /// Snippet file names substituted for the includes placeholder.
    pub module_files: Vec<&'a str>,
}

impl DomainConfigResource<'_> {
    /// Render the file content from the user skeleton if present, else the
    /// built-in skeleton.
    ///
    /// # Errors
    ///
    /// Returns an error if the user skeleton exists but cannot be read.
    pub fn render(&self) -> Result<String> {
        let skeleton = read_optional(&self.skeleton)?;
        let template = skeleton.as_deref().unwrap_or(self.fallback);
        Ok(render_vhost(template, self.domain.as_str(), &self.module_files))
    }

    /// Whether the file is present.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be deleted.
    pub fn remove(&self) -> Result<ResourceChange> {
        Ok(if remove_if_present(&self.path)? {
            ResourceChange::Applied
        } else {
            ResourceChange::AlreadyCorrect
        })
    }
}

impl Resource for DomainConfigResource<'_> {
    fn description(&self) -> String {
        format!("{} -> {}", self.domain, self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.exists() {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        let content = self.render()?;
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("write domain config {}", self.description()))?;
        Ok(ResourceChange::Applied)
    }
}
