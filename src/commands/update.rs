//! `--add` / `--remove` / `--exclude` implementation.
use anyhow::Result;

use crate::config::Config;
use crate::logging::Logger;
use crate::registrar::{DomainName, Mode, Registrar};

/// Apply `mode` to every domain and print the run summary.
///
/// # Errors
///
/// Returns an error if the master include file or a per-domain file cannot be
/// read or written.
pub fn run(config: &Config, domains: &[DomainName], mode: Mode, log: &Logger) -> Result<()> {
    let rewritten = Registrar::new(config, log).update_config(domains, mode)?;
    if rewritten {
        log.debug(&format!("rewrote {}", config.master_path().display()));
    } else {
        log.debug(&format!(
            "{} already up to date",
            config.catalog.master_file()
        ));
    }
    log.print_summary();
    Ok(())
}
