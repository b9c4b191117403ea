//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod get;
pub mod init;
pub mod insights;
pub mod publications;
pub mod search;
pub mod shell;
pub mod stats;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Publications(cmd) => publications::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Stats(cmd) => stats::run(ctx, &cmd),
        Commands::Insights(cmd) => insights::run(ctx, &cmd),
        Commands::Shell(cmd) => shell::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
    }
}
