//! Command handlers dispatched from the CLI layer.

pub mod extract;
pub mod init;
