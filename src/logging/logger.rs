//! Structured logger with per-domain summary collection.
use std::sync::Mutex;

use super::STAGE_TARGET;
use super::types::{DomainEntry, DomainStatus};

/// Structured logger.
///
/// Messages are emitted as `tracing` events and rendered by the subscriber
/// installed with [`init_subscriber`](super::init_subscriber); without a
/// subscriber they are dropped, which keeps library use and tests silent.
#[derive(Debug, Default)]
pub struct Logger {
    domains: Mutex<Vec<DomainEntry>>,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record a domain outcome for the summary.
    pub fn record(&self, domain: &str, status: DomainStatus) {
        if let Ok(mut guard) = self.domains.lock() {
            guard.push(DomainEntry {
                domain: domain.to_string(),
                status,
            });
        }
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<DomainEntry> {
        self.domains.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Number of recorded domains with `status`.
    #[must_use]
    pub fn count(&self, status: DomainStatus) -> usize {
        self.domains
            .lock()
            .map_or(0, |g| g.iter().filter(|e| e.status == status).count())
    }

    /// One-line summary of recorded outcomes, or `None` if nothing was recorded.
    #[must_use]
    pub fn summary_line(&self) -> Option<String> {
        let total = self.domains.lock().map_or(0, |g| g.len());
        if total == 0 {
            return None;
        }
        let parts: Vec<String> = [
            DomainStatus::Added,
            DomainStatus::Removed,
            DomainStatus::Excluded,
            DomainStatus::Unchanged,
        ]
        .into_iter()
        .map(|s| (s, self.count(s)))
        .filter(|&(_, n)| n > 0)
        .map(|(s, n)| format!("{n} {}", s.label()))
        .collect();
        let noun = if total == 1 { "domain" } else { "domains" };
        Some(format!("{total} {noun}: {}", parts.join(", ")))
    }

    /// Log the summary of all recorded domains, with one debug line per
    /// domain.
    pub fn print_summary(&self) {
        let Some(line) = self.summary_line() else {
            return;
        };
        self.stage("Summary");
        for entry in self.entries() {
            self.debug(&format!("{}: {}", entry.domain, entry.status.label()));
        }
        self.info(&line);
    }
}
