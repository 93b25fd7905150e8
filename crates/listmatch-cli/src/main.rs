//! listmatch CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use listmatch_cli::commands::{MatchRequest, run_match};
use listmatch_cli::logging::{LogConfig, LogFormat, init_logging};
use listmatch_cli::summary::print_summary;
use listmatch_core::MatchOptions;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, MatchArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Match(args) => match run_match(&match_request(&args)) {
            Ok(report) => {
                if args.summary {
                    print_summary(&report.outcome.stats);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn match_request(args: &MatchArgs) -> MatchRequest {
    let mut options = MatchOptions::default()
        .with_progress_permille(args.progress_permille)
        .with_chunk_size(args.chunk_size);
    if args.parallel || args.jobs.is_some() {
        options = options.with_parallel(args.jobs);
    }
    MatchRequest {
        products: args.products.clone(),
        listings: args.listings.clone(),
        output: args.output.clone(),
        options,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn logging_flags_reach_the_config() {
        let cli = parse(&[
            "listmatch",
            "--log-timestamps",
            "--log-format",
            "compact",
            "--log-file",
            "run.log",
            "match",
            "products.txt",
            "listings.txt",
        ]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
        assert!(config.use_env_filter);
    }

    #[test]
    fn explicit_level_overrides_verbosity() {
        let cli = parse(&[
            "listmatch",
            "-v",
            "--log-level",
            "error",
            "match",
            "products.txt",
            "listings.txt",
        ]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
        assert!(!config.with_timestamps);
    }

    #[test]
    fn jobs_imply_parallel() {
        let cli = parse(&["listmatch", "match", "p.txt", "l.txt", "--jobs", "3"]);
        let Command::Match(args) = cli.command;
        let request = match_request(&args);
        assert!(request.options.parallel);
        assert_eq!(request.options.jobs, Some(3));
        assert_eq!(request.output, None);
    }
}
