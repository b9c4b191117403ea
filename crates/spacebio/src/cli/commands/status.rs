//! Implementation of `spacebio status`.

use std::process::ExitCode;

use spacebio_config::{discover_config_files, is_global_config};
use spacebio_index::{resolve_source, verify_data_availability};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, the data source and cache lifetimes.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    let config_files = discover_config_files(&ctx.cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
        println!(
            "   Run {} to create a configuration file.",
            subheader("spacebio init")
        );
    } else {
        for path in &config_files {
            let scope = if is_global_config(path) { "global" } else { "local" };
            println!("   {} {}", path.display(), dim(&format!("({scope})")));
        }
    }
    println!();

    let resolved = resolve_source(&config.data, config.data.source);
    println!("{}", subheader("Data:"));
    println!("   root:    {}", config.data.root.display());
    if resolved == config.data.source {
        println!("   source:  {resolved}");
    } else {
        println!("   source:  {} {}", config.data.source, dim(&format!("-> {resolved}")));
    }
    let availability = verify_data_availability(&config.data);
    let note = if availability.is_available() {
        dim(&availability.note)
    } else {
        warning(&availability.note)
    };
    println!("   disk:    {note}");
    println!();

    println!("{}", subheader("Cache TTLs:"));
    for (name, secs) in [
        ("articles", config.cache.articles_ttl_secs),
        ("publications", config.cache.publications_ttl_secs),
        ("stats", config.cache.stats_ttl_secs),
        ("insights", config.cache.insights_ttl_secs),
    ] {
        println!("   {name:13} {secs}s");
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
    } else {
        println!(
            "{} {}",
            warning(&format!("{} warnings", warnings.len())),
            dim("(run spacebio check for details)")
        );
    }
    ExitCode::SUCCESS
}
