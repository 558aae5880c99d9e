//! Module snippet resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::helpers::fs::ensure_parent_dir;
use super::{Resource, ResourceChange};

/// A module snippet written verbatim from the catalog.
///
/// Snippets belong to the tool, not the user: `apply` always rewrites them so
/// catalog updates reach existing installations.
#[derive(Debug, Clone)]
pub struct SnippetResource<'a> {
    /// Module id the snippet belongs to.
    pub module: &'a str,
    /// Destination file.
    pub path: PathBuf,
    /// Template text.
    pub contents: &'a str,
}

impl<'a> SnippetResource<'a> {
    /// Create a new snippet resource.
    #[must_use]
    pub const fn new(module: &'a str, path: PathBuf, contents: &'a str) -> Self {
        Self {
            module,
            path,
            contents,
        }
    }
}

impl Resource for SnippetResource<'_> {
    fn description(&self) -> String {
        format!("module '{}' -> {}", self.module, self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, self.contents)
            .with_context(|| format!("write snippet {}", self.description()))?;
        Ok(ResourceChange::Applied)
    }
}
