//! Implementation of `spacebio check`.

use std::process::ExitCode;

use spacebio_config::{ConfigWarning, DataSource};
use spacebio_index::verify_data_availability;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Validates configuration and the on-disk corpus. Fails on any warning.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let mut problems = 0;

    let warnings = config.validate();
    if !warnings.is_empty() {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
        print_hints(&warnings);
        problems += warnings.len();
    }

    let availability = verify_data_availability(&config.data);
    println!("{}", subheader("Data:"));
    println!(
        "   {} {}",
        availability.source,
        dim(&format!("({})", availability.note))
    );
    if availability.source == DataSource::Filesystem && !availability.is_available() {
        println!("   {}", warning("filesystem corpus is not usable; fallback articles will be served"));
        problems += 1;
    }
    println!();

    if problems == 0 {
        println!("{}", success("No issues found."));
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::DataRootMissing { .. } | ConfigWarning::ManifestMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: set [data] root in .spacebio.toml, or use --data-source embedded")
                );
            }
            ConfigWarning::ZeroTtl { .. } => {
                println!("{}", dim("Hint: TTLs under [cache] are in seconds"));
            }
            ConfigWarning::EmptyVocabulary => {
                println!("{}", dim("Hint: add terms to [taxonomy] keywords"));
            }
            _ => {}
        }
    }
}
