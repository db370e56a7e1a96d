mod cli;

use mkvtool::commands::{self, Context, TrackChoice};
use mkvtool::config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mkvtool=debug,mkvtool_av=debug,mkvtool_parser=debug,mkvtool_core=debug".to_string()
        } else {
            // Normal mode: keep command output clean
            "warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    if cli.dry_run {
        println!("Dry-run mode: Will not modify any files.");
    }
    let ctx = Context::new(config, cli.dry_run);

    match cli.command {
        Commands::Merge {
            output,
            subs,
            files,
        } => commands::merge(&ctx, &files, &output, subs),
        Commands::Only {
            track,
            lang,
            track_type,
            ignore,
            input,
            output,
        } => {
            let choice = match track {
                Some(index) => TrackChoice::Index(index),
                None => TrackChoice::Language {
                    languages: lang,
                    track_type,
                    ignore,
                },
            };
            commands::only(&ctx, &input, &output, &choice)
        }
        Commands::Print { format, files } => commands::print(&ctx, &files, format.as_deref()),
        Commands::Remux { input, output } => commands::remux(&ctx, &input, &output),
        Commands::Rename { format, files } => commands::rename(&ctx, &files, format.as_deref()),
        Commands::SetDefault { track, files } => commands::set_default(&ctx, &files, track),
        Commands::SetDefaultByLang {
            lang,
            ignore,
            files,
        } => commands::set_default_by_lang(&ctx, &files, &lang, &ignore),
        Commands::Show { uid, json, files } => commands::show(&ctx, &files, uid, json),
        Commands::CheckTools => commands::check_tools(&ctx),
    }
}
