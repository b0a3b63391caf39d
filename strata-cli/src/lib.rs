//! Support library for the strata CLI binary.
//!
//! Exposes the CLI and logging modules so doctests and integration tests can
//! exercise the generation pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
