//! Command-line interface for building minimum spanning trees.
//!
//! The `run` command reads a delimited adjacency file, feeds it through the
//! Kruskal builder, and renders the accepted edges with the total distance.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OnMalformed, PATH_PROMPT, RunCommand,
    prompt_for_path, render_report, run_cli,
};

#[cfg(test)]
mod test_helpers;
