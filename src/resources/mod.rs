//! File resources written by the registrar.
pub mod domain_conf;
pub mod helpers;
pub mod snippet;

use anyhow::Result;

pub use domain_conf::DomainConfigResource;
pub use snippet::SnippetResource;

/// Result of applying or removing a resource.
///
/// # Examples
///
/// ```
/// use lighty_domains::resources::ResourceChange;
///
/// assert_ne!(ResourceChange::Applied, ResourceChange::AlreadyCorrect);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceChange {
    /// The file was written or deleted.
    Applied,
    /// Nothing needed to change.
    AlreadyCorrect,
}

/// A file the registrar brings into its desired state.
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Bring the resource into its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    fn apply(&self) -> Result<ResourceChange>;
}
