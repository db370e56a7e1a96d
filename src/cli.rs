use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mkvtool")]
#[command(author, version, about = "Matroska housekeeping with mkvtoolnix")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dry-run mode (only show commands)
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge input tracks and files (A/V/S) into an output file
    Merge {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Copy subtitles from the input files
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        subs: bool,

        /// Files to merge
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Remove all subtitle tracks, except one
    #[command(group(ArgGroup::new("selector").required(true).args(["track", "lang"])))]
    Only {
        /// Track number to keep
        #[arg(short, long)]
        track: Option<usize>,

        /// Language to keep, in priority order (repeatable)
        #[arg(short, long)]
        lang: Vec<String>,

        /// Track type when selecting by language (a, v or s)
        #[arg(long = "type", default_value = "s")]
        track_type: String,

        /// Skip tracks whose name contains this (repeatable)
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Parse file names and print scene information using a printf style mask
    Print {
        /// Formatting mask (defaults to the configured print mask)
        #[arg(short, long)]
        format: Option<String>,

        /// Files to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Remux input file into an output file
    Remux {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Rename files based on scene information in their names
    Rename {
        /// Formatting mask (defaults to the configured rename mask)
        #[arg(short, long)]
        format: Option<String>,

        /// Files to rename
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Set the default subtitle flag on a track
    #[command(name = "setdefault")]
    SetDefault {
        /// Track number
        #[arg(short, long)]
        track: usize,

        /// Files to modify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Set the default subtitle track by language
    #[command(name = "setdefaultbylang")]
    SetDefaultByLang {
        /// Language, in priority order (repeatable, `default` means no language)
        #[arg(short, long)]
        lang: Vec<String>,

        /// Skip tracks whose name contains this (repeatable)
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Files to modify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the tracks of Matroska files
    Show {
        /// Include track UIDs
        #[arg(short, long)]
        uid: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Files to show
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check that required external tools are available
    CheckTools,
}
