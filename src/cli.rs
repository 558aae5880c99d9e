//! Command-line surface.
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{Catalog, Config, DEFAULT_CONF_DIR};
use crate::error::ConfigError;
use crate::logging::Verbosity;
use crate::registrar::{DomainName, Mode};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "lighty-domains",
    about = "Add, remove or exclude lighttpd virtual hosts",
    override_usage = "lighty-domains [-d confdir] (--add|--remove|--exclude) <DOMAINS>...\n       lighty-domains [-d confdir] --init",
    version
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Lighttpd configuration directory
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONF_DIR)]
    pub dir: PathBuf,

    /// Add the domains to the configuration
    #[arg(short, long)]
    pub add: bool,

    /// Remove the domains and delete their config files
    #[arg(short, long)]
    pub remove: bool,

    /// Exclude the domains (temporarily), keeping their config files
    #[arg(short, long)]
    pub exclude: bool,

    /// Suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also print debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Initialize the domains directory and module snippets
    #[arg(short, long)]
    pub init: bool,

    /// Extra modules to include in new vhosts (e.g. django,wordpress)
    #[arg(short, long, value_delimiter = ',', value_name = "MODULES")]
    pub modules: Vec<String>,

    /// Load the module catalog from a TOML file instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Domain names
    #[arg(required_unless_present = "init")]
    pub domains: Vec<DomainName>,
}

/// What a validated command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Initialize the domains directory.
    Init,
    /// Update the master include file.
    Update(Mode),
}

impl Cli {
    /// Resolve the requested action.
    ///
    /// `--init` wins over the mode flags, which are only checked without it.
    ///
    /// # Errors
    ///
    /// Returns a usage error if no mode flag is given, or more than one.
    pub fn action(&self) -> Result<Action, clap::Error> {
        if self.init {
            return Ok(Action::Init);
        }
        let mode = match (self.add, self.remove, self.exclude) {
            (true, false, false) => Mode::Add,
            (false, true, false) => Mode::Remove,
            (false, false, true) => Mode::Exclude,
            (false, false, false) => {
                return Err(Self::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "Please specify an action with the --add/--remove/--exclude options",
                ));
            }
            _ => {
                return Err(Self::command().error(
                    ErrorKind::ArgumentConflict,
                    "The options --add, --remove and --exclude are mutually exclusive",
                ));
            }
        };
        Ok(Action::Update(mode))
    }

    /// Console verbosity from `--quiet` / `--verbose`.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Build the run configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, the configuration
    /// directory does not exist, or a domain collides with a module snippet.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let catalog = Catalog::resolve(self.catalog.as_deref())?;
        let config = Config::new(&self.dir, &self.modules, catalog)?;
        if !self.init {
            config.check_domains(&self.domains)?;
        }
        Ok(config)
    }

    /// Turn a usage-class [`ConfigError`] into a clap error so it is reported
    /// like any other argument problem.
    #[must_use]
    pub fn usage_error(err: &ConfigError) -> clap::Error {
        Self::command().error(ErrorKind::ValueValidation, err)
    }
}
