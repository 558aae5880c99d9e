//! Command entry points invoked by `main` once arguments are validated.
pub mod init;
pub mod update;
