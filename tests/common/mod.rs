// Shared helpers for integration tests.
//
// Provides a temporary lighttpd configuration directory and a fluent builder
// so each integration test can set up an isolated environment without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lighty_domains::config::{Catalog, Config};
use lighty_domains::logging::Logger;
use lighty_domains::registrar::{DomainName, Mode, Registrar};

/// An isolated lighttpd configuration directory backed by a
/// [`tempfile::TempDir`].
pub struct IntegrationTestContext {
    /// Temporary base directory (stands in for `/etc/lighttpd`).
    pub root: tempfile::TempDir,
    /// Extra modules passed as `--modules`.
    pub modules: Vec<String>,
    /// Logger shared by every registrar call.
    pub log: Logger,
}

impl IntegrationTestContext {
    /// Create a context with an empty base directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            modules: Vec::new(),
            log: Logger::new(),
        }
    }

    /// Path to the base directory.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Build the run configuration with the embedded catalog.
    pub fn config(&self) -> Config {
        Config::new(
            self.root.path(),
            &self.modules,
            Catalog::embedded().expect("embedded catalog"),
        )
        .expect("build config")
    }

    /// Path of the master include file.
    pub fn master_path(&self) -> PathBuf {
        self.root.path().join("incl-domains.conf")
    }

    /// Contents of the master include file.
    pub fn master(&self) -> String {
        std::fs::read_to_string(self.master_path()).expect("read master file")
    }

    /// Path of `domains/<domain>.conf`.
    pub fn vhost_path(&self, domain: &str) -> PathBuf {
        self.root.path().join("domains").join(format!("{domain}.conf"))
    }

    /// Contents of `domains/<domain>.conf`.
    pub fn vhost(&self, domain: &str) -> String {
        std::fs::read_to_string(self.vhost_path(domain)).expect("read vhost file")
    }

    /// Run `update_config` for `domains`, returning whether the master file
    /// was rewritten.
    pub fn update(&self, domains: &[&str], mode: Mode) -> bool {
        let config = self.config();
        let domains: Vec<DomainName> = domains
            .iter()
            .map(|d| d.parse().expect("valid domain"))
            .collect();
        Registrar::new(&config, &self.log)
            .update_config(&domains, mode)
            .expect("update config")
    }

    /// Run `init_domain_dir`, returning the number of snippets written.
    pub fn init(&self) -> usize {
        let config = self.config();
        Registrar::new(&config, &self.log)
            .init_domain_dir()
            .expect("init domain dir")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context backed by an empty directory.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Pre-populate the master include file.
    pub fn with_master(self, content: &str) -> Self {
        std::fs::write(self.ctx.master_path(), content).expect("write master file");
        self
    }

    /// Pre-populate `domains/<relative>`.
    pub fn with_domain_file(self, relative: &str, content: &str) -> Self {
        let path = self.ctx.root.path().join("domains").join(relative);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create domains dir");
        std::fs::write(path, content).expect("write domain file");
        self
    }

    /// Enable extra modules.
    pub fn with_modules(mut self, modules: &[&str]) -> Self {
        self.ctx.modules = modules.iter().map(ToString::to_string).collect();
        self
    }

    /// Finalise and return the context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
