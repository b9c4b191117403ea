//! Command-line interface for spacebio.

use std::process::ExitCode;

use spacebio::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands, logging,
};

/// Parses arguments, loads configuration and runs the selected command.
fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(cli.data_source),
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
