//! Lighttpd virtual-host registrar.
//!
//! Keeps a master include file (`incl-domains.conf`) and a directory of
//! per-domain config files (`domains/<domain>.conf`) consistent: domains can
//! be added, excluded (include line dropped, file kept) or removed.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: run configuration and the module catalog
//! - **[`resources`]**: module snippet and per-domain file writers
//! - **[`registrar`]**: the add/remove/exclude reconciliation
//! - **[`commands`]**: entry points used by the binary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod registrar;
pub mod resources;
