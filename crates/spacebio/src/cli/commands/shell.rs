//! Implementation of `spacebio shell`.
//!
//! Each input line is a query against the same engine, so the corpus is loaded once and served
//! from cache for the rest of the session.

use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use spacebio_index::ArticlesResponse;
use tracing::debug;

use crate::cli::{
    args::ShellCommand,
    context::CommandContext,
    output::{dim, print_articles, print_json},
};

/// Prompt shown when stdin is a terminal.
const PROMPT: &str = "spacebio> ";

/// What to do with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Nothing to run.
    Skip,
    /// End the session.
    Quit,
    /// Drop cached data and reload on the next query.
    Refresh,
    /// Run a search.
    Query(&'a str),
}

/// Classifies an input line.
fn classify(line: &str) -> Line<'_> {
    match line.trim() {
        "" => Line::Skip,
        "exit" | "quit" | ":q" => Line::Quit,
        ":refresh" => Line::Refresh,
        query => Line::Query(query),
    }
}

/// Reads queries from stdin until EOF or `exit`.
pub fn run(ctx: &mut CommandContext, cmd: &ShellCommand) -> ExitCode {
    let limit = cmd.limit.unwrap_or(ctx.config.search.limit);
    let interactive = io::stdin().is_terminal();
    let engine = ctx.engine();

    if interactive {
        eprintln!("{}", dim(&format!("{} (exit to quit)", engine.describe_loader())));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            eprint!("{PROMPT}");
            if let Err(e) = io::stderr().flush() {
                debug!(error = %e, "prompt flush failed");
            }
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: failed to read input: {e}");
                return ExitCode::FAILURE;
            }
            None => break,
        };

        match classify(&line) {
            Line::Skip => {}
            Line::Quit => break,
            Line::Refresh => {
                engine.refresh();
                eprintln!("{}", dim("caches cleared"));
            }
            Line::Query(query) => {
                let articles = engine.search_articles(query, limit, None);
                if cmd.output.json {
                    let code = print_json(&ArticlesResponse::new(articles, query));
                    if code != ExitCode::SUCCESS {
                        return code;
                    }
                } else {
                    print_articles(&articles, query);
                }
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("   "), Line::Skip);
        assert_eq!(classify(" quit "), Line::Quit);
        assert_eq!(classify("exit"), Line::Quit);
        assert_eq!(classify(":refresh"), Line::Refresh);
        assert_eq!(classify(" bone loss "), Line::Query("bone loss"));
    }
}
