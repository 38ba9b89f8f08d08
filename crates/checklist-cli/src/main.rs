//! Checklist Studio CLI.

use checklist_cli::logging::{LogConfig, LogFormat, init_logging};
use checklist_cli::settings::load_store_config;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod render;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_edit, run_export, run_new, run_show, run_validate};
use crate::render::{print_checklist, print_edit_summary, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match load_store_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match &cli.command {
        Command::New(args) => match run_new(args, &config) {
            Ok(path) => {
                println!("Created {}", path.display());
                0
            }
            Err(error) => report(&error),
        },
        Command::Show(args) => match run_show(args) {
            Ok(checklist) => {
                print_checklist(&checklist);
                0
            }
            Err(error) => report(&error),
        },
        Command::Validate(args) => match run_validate(args) {
            Ok(result) => {
                print_validation(&result);
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => report(&error),
        },
        Command::Edit(args) => match run_edit(args, &config) {
            Ok(summary) => {
                print_edit_summary(&summary);
                if args.fail_on_rejected && summary.report.failed_count() > 0 {
                    1
                } else {
                    0
                }
            }
            Err(error) => report(&error),
        },
        Command::Export(args) => match run_export(args) {
            Ok(path) => {
                println!("Exported {}", path.display());
                0
            }
            Err(error) => report(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error}");
    tracing::debug!("{error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
