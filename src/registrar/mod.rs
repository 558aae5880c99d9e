//! Domain registrar: keeps the master include file and the per-domain config
//! directory in step.
//!
//! The master file (`incl-domains.conf` by default) holds one
//! `include "domains/<domain>.conf"` line per active domain. Adding a domain
//! appends its line and generates `domains/<domain>.conf` from a skeleton;
//! excluding drops the line but keeps the file; removing drops both. Every
//! operation is idempotent: a domain already in the requested state is left
//! alone.
pub mod domain;
pub mod include_list;
pub mod template;

use anyhow::{Context as _, Result};

pub use domain::DomainName;
pub use include_list::IncludeList;

use crate::config::Config;
use crate::logging::{DomainStatus, Logger};
use crate::resources::{DomainConfigResource, Resource, ResourceChange, SnippetResource};

/// What `update_config` does with each domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Include the domain, generating its config file if missing.
    Add,
    /// Drop the include line and delete the config file.
    Remove,
    /// Drop the include line, keep the config file.
    Exclude,
}

/// Applies domain changes against one configuration directory.
#[derive(Debug)]
pub struct Registrar<'a> {
    config: &'a Config,
    log: &'a Logger,
}

impl<'a> Registrar<'a> {
    /// Create a registrar for `config`.
    #[must_use]
    pub const fn new(config: &'a Config, log: &'a Logger) -> Self {
        Self { config, log }
    }

    /// Create the domains directory and write every catalog module that has
    /// both a file name and a template, overwriting existing snippets.
    ///
    /// Returns the number of snippets written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a snippet cannot be written.
    pub fn init_domain_dir(&self) -> Result<usize> {
        let dir = self.config.domains_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create domains dir: {}", dir.display()))?;

        let mut written = 0;
        for (module, file) in self.config.catalog.files() {
            let Some(template) = self.config.catalog.template(module) else {
                self.log
                    .debug(&format!("module '{module}' has no template, skipping"));
                continue;
            };
            SnippetResource::new(module, dir.join(file), template).apply()?;
            self.log
                .info(&format!("Writing template for module '{module}'"));
            written += 1;
        }
        Ok(written)
    }

    /// Add, remove, or exclude `domains` in the master include file.
    ///
    /// The master file is rewritten once at the end, and only if a line was
    /// added or removed. Returns whether it was rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the master file or a per-domain file cannot be
    /// read, written, or deleted.
    pub fn update_config(&self, domains: &[DomainName], mode: Mode) -> Result<bool> {
        let master_name = self.config.catalog.master_file();
        self.log.stage(&format!(
            "Lighttpd conf-dir = '{}'",
            self.config.conf_dir.display()
        ));

        if mode == Mode::Add {
            for module in self.config.unknown_modules() {
                self.log
                    .warn(&format!("Unknown module '{module}', skipping"));
            }
        }

        let mut includes = IncludeList::load(&self.config.master_path())?;

        for domain in domains {
            let line = domain.include_line();
            let status = match mode {
                Mode::Remove | Mode::Exclude => {
                    let excluded = includes.remove(&line);
                    if excluded {
                        self.log.info(&format!(
                            "Excluding domain '{domain}' from '{master_name}'"
                        ));
                    }
                    let removed = mode == Mode::Remove
                        && self.domain_config(domain).remove()? == ResourceChange::Applied;
                    if removed {
                        self.log
                            .info(&format!("Removing '{}'", domain.conf_relative_path()));
                    }
                    if removed || (excluded && mode == Mode::Remove) {
                        DomainStatus::Removed
                    } else if excluded {
                        DomainStatus::Excluded
                    } else {
                        DomainStatus::Unchanged
                    }
                }
                Mode::Add => {
                    let added = includes.insert(line);
                    if added {
                        self.log
                            .info(&format!("Adding domain '{domain}' to '{master_name}'"));
                    }
                    let created =
                        self.create_config_prototype(domain)? == ResourceChange::Applied;
                    if added || created {
                        DomainStatus::Added
                    } else {
                        DomainStatus::Unchanged
                    }
                }
            };
            self.log.record(domain.as_str(), status);
        }

        includes.save()
    }

    /// Generate `domains/<domain>.conf` unless it already exists.
    ///
    /// The user skeleton `domains/vhost.skel` takes precedence over the
    /// catalog's `vhost` template.
    ///
    /// # Errors
    ///
    /// Returns an error if the skeleton cannot be read or the file cannot be
    /// written.
    pub fn create_config_prototype(&self, domain: &DomainName) -> Result<ResourceChange> {
        let resource = self.domain_config(domain);
        let change = resource.apply()?;
        match change {
            ResourceChange::Applied => self
                .log
                .info(&format!("Creating '{}'", domain.conf_relative_path())),
            ResourceChange::AlreadyCorrect => self.log.info(&format!(
                "Config-file '{}' already exists",
                domain.conf_file_name()
            )),
        }
        Ok(change)
    }

    fn domain_config<'d>(&'d self, domain: &'d DomainName) -> DomainConfigResource<'d> {
        DomainConfigResource {
            domain,
            path: self.config.domains_dir().join(domain.conf_file_name()),
            skeleton: self.config.skeleton_path(),
            fallback: self.config.catalog.vhost_template(),
            module_files: self.config.module_files(),
        }
    }
}
