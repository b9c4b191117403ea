//! Implementation of `spacebio stats`.

use std::process::ExitCode;

use spacebio_index::StatsResponse;

use crate::cli::{
    args::StatsCommand,
    context::CommandContext,
    output::{dim, print_json, print_stats},
};

/// Shows one statistics view.
pub fn run(ctx: &mut CommandContext, cmd: &StatsCommand) -> ExitCode {
    let engine = ctx.engine();
    let report = engine.stats_view(cmd.view);

    if cmd.output.json {
        return print_json(&StatsResponse::new(report));
    }
    print_stats(&report);
    println!();
    println!("{}", dim(&format!("source: {}", engine.origin())));
    ExitCode::SUCCESS
}
