//! Shared helpers for the lock test suites.

pub mod oracle;
pub mod puzzle;
