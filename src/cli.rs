//! CLI argument definitions for bomcheck.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

#[derive(Parser)]
#[command(name = "bomcheck")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Parts database validation tool", long_about = None)]
#[command(
    after_help = "By default all databases in the dbs directory are validated.\n\nEXAMPLES:\n    bomcheck                 Validate every database under ./dbs\n    bomcheck -v synth        Validate ./dbs/synth with a verbose trace\n    bomcheck --dbs ../data   Validate every database under ../data"
)]
pub struct Cli {
    /// Database to validate (a subdirectory of the dbs directory)
    #[arg(value_name = "DATABASE")]
    pub database: Option<String>,

    /// Print every checked supplier, component and section
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit one JSON event per line
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Directory holding one subdirectory per database
    #[arg(long, value_name = "DIR", default_value = bomcheck::DEFAULT_DBS_DIR)]
    pub dbs: PathBuf,

    /// Settings file (defaults to <DIR>/bomcheck.yaml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Continue with the next database after a failing one
    #[arg(long)]
    pub keep_going: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
