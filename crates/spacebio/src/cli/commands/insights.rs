//! Implementation of `spacebio insights`.

use std::process::ExitCode;

use spacebio_index::InsightsResponse;

use crate::cli::{
    args::InsightsCommand,
    context::CommandContext,
    output::{print_insights, print_json},
};

/// Shows generated insights of the requested kind.
pub fn run(ctx: &mut CommandContext, cmd: &InsightsCommand) -> ExitCode {
    let limit = cmd.limit.unwrap_or(ctx.config.search.insights_limit);
    let insights = ctx.engine().insights(cmd.kind, limit);

    if cmd.output.json {
        return print_json(&InsightsResponse::new(insights));
    }
    print_insights(&insights);
    ExitCode::SUCCESS
}
