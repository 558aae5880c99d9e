//! Logging infrastructure: a [`Logger`] facade over `tracing` and the console
//! subscriber that renders its events.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::{Verbosity, init_subscriber};
pub use types::{DomainEntry, DomainStatus};

/// `tracing` target for stage headers.
pub(crate) const STAGE_TARGET: &str = "lighty::stage";
