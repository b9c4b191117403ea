//! Implementation of `spacebio get`.

use std::process::ExitCode;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{fail, print_article, print_json},
};

/// Shows one article by id.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let Some(article) = ctx.engine().article(cmd.id) else {
        return fail(&format!("article not found: {}", cmd.id), cmd.output.json);
    };

    if cmd.output.json {
        return print_json(&article);
    }
    print_article(&article);
    ExitCode::SUCCESS
}
