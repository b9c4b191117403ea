//! Implementation of `spacebio config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::Highlighter};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    match ctx.config.settings_to_toml() {
        Ok(toml) => {
            print!("{}", Highlighter::new().highlight_toml(&toml));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to render configuration: {e}");
            ExitCode::FAILURE
        }
    }
}
