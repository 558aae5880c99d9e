//! `--init` implementation.
use anyhow::Result;

use crate::config::Config;
use crate::logging::Logger;
use crate::registrar::Registrar;

/// Create the domains directory and write the module snippets.
///
/// # Errors
///
/// Returns an error if the directory or a snippet cannot be written.
pub fn run(config: &Config, log: &Logger) -> Result<()> {
    log.stage(&format!(
        "Initialising '{}'",
        config.domains_dir().display()
    ));
    let written = Registrar::new(config, log).init_domain_dir()?;
    log.debug(&format!("{written} module snippet(s) written"));
    Ok(())
}
