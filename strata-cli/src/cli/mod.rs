//! Command-line interface orchestration for the strata graph generator.
//!
//! Counts may be passed as flags or answered at interactive prompts. Each
//! generated graph is printed to stdout as one JSON line and written to its
//! own file in the output directory.

mod commands;
mod prompt;

pub use commands::{
    Cli, CliError, ExecutionSummary, GenerationRequest, GraphReport, resolve_request,
    run_cli, run_generation,
};

#[cfg(test)]
mod test_helpers;
