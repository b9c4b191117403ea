//! Implementation of `spacebio search`.

use std::process::ExitCode;

use spacebio_index::ArticlesResponse;
use tracing::debug;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{print_articles, print_json},
};

/// Ranks articles against the joined query terms.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.queries.join(" ");
    let limit = cmd.limit.unwrap_or(ctx.config.search.limit);
    debug!(%query, limit, category = ?cmd.category, "search");

    let articles = ctx
        .engine()
        .search_articles(&query, limit, cmd.category.as_deref());

    if cmd.output.json {
        return print_json(&ArticlesResponse::new(articles, &query));
    }
    print_articles(&articles, &query);
    ExitCode::SUCCESS
}
