//! Implementation of `spacebio publications`.

use std::process::ExitCode;

use spacebio_index::PublicationsResponse;

use crate::cli::{
    args::PublicationsCommand,
    context::CommandContext,
    output::{print_json, print_publications},
};

/// Ranks enriched publications, or lists them when no query is given.
pub fn run(ctx: &mut CommandContext, cmd: &PublicationsCommand) -> ExitCode {
    let query = cmd.queries.join(" ");
    let limit = cmd.limit.unwrap_or(ctx.config.search.publications_limit);
    let publications = ctx.engine().search_publications(&query, limit);

    if cmd.output.json {
        return print_json(&PublicationsResponse::new(publications));
    }
    print_publications(&publications);
    ExitCode::SUCCESS
}
