//! CLI entry point for bomcheck.

mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;

use bomcheck::config::Settings;
use bomcheck::report::{is_quiet, Output, OutputMode, Reporter};
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "bomcheck", &mut io::stdout());
        return;
    }

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet || is_quiet() {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };
    let output = Output::new(mode).verbose(cli.verbose);

    let settings = match Settings::resolve(cli.config.as_deref(), &cli.dbs) {
        Ok(settings) => settings,
        Err(err) => {
            output.error(&format!("{:#}", err));
            std::process::exit(1);
        }
    };

    let summary = match cli.database.as_deref() {
        Some(name) => cmd::check::cmd_check_one(&cli.dbs, name, &settings, &output),
        None => match cmd::check::cmd_check_all(&cli.dbs, &settings, &output, cli.keep_going) {
            Ok(summary) => summary,
            Err(err) => {
                output.error(&format!("{:#}", err));
                std::process::exit(1);
            }
        },
    };

    if cli.database.is_none() && summary.passed.is_empty() && summary.failed.is_empty() {
        output.warn(&format!("No databases found in {}", cli.dbs.display()));
    }

    if !summary.is_success() {
        std::process::exit(1);
    }
}
