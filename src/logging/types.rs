//! Per-domain outcome records for the run summary.

/// Outcome of one domain for summary reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    /// Domain name.
    pub domain: String,
    /// What happened to it.
    pub status: DomainStatus,
}

/// What a run did to a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStatus {
    /// Include line appended to the master file.
    Added,
    /// Include line and per-domain file removed.
    Removed,
    /// Include line removed, per-domain file kept.
    Excluded,
    /// Already in the requested state.
    Unchanged,
}

impl DomainStatus {
    /// Summary label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Excluded => "excluded",
            Self::Unchanged => "unchanged",
        }
    }
}
