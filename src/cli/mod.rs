//! CLI module for m3ugen

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "m3ugen",
    about = "Generates m3u files based on json input file."
)]
#[command(version)]
pub struct Cli {
    /// The json file which will be used
    #[arg(
        short,
        long,
        value_name = "JSON",
        required_unless_present = "completions"
    )]
    pub json: Option<PathBuf>,

    /// Log level for level of verbosity
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        default_value = "INFO",
        env = "M3UGEN_LOGLEVEL"
    )]
    pub loglevel: LogLevel,

    /// Scan and render playlists without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Continue with the next playlist when a folder cannot be scanned
    #[arg(long)]
    pub keep_going: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Log verbosity accepted by `--loglevel`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `EnvFilter` directive for this level
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "m3ugen=debug",
            LogLevel::Info => "m3ugen=info",
            LogLevel::Warning => "m3ugen=warn",
            // tracing has no level above error
            LogLevel::Error | LogLevel::Critical => "m3ugen=error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["m3ugen", "-j", "jobs.json", "-l", "DEBUG"]).unwrap();
        assert_eq!(cli.json, Some(PathBuf::from("jobs.json")));
        assert_eq!(cli.loglevel, LogLevel::Debug);
        assert!(!cli.dry_run);
        assert!(!cli.keep_going);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "m3ugen",
            "--json",
            "jobs.json",
            "--loglevel",
            "WARNING",
            "--dry-run",
            "--keep-going",
        ])
        .unwrap();
        assert_eq!(cli.loglevel, LogLevel::Warning);
        assert!(cli.dry_run);
        assert!(cli.keep_going);
    }

    #[test]
    fn test_loglevel_case_insensitive() {
        let cli = Cli::try_parse_from(["m3ugen", "-j", "x.json", "-l", "critical"]).unwrap();
        assert_eq!(cli.loglevel, LogLevel::Critical);
        assert_eq!(cli.loglevel.filter(), "m3ugen=error");
    }

    #[test]
    fn test_json_required() {
        assert!(Cli::try_parse_from(["m3ugen"]).is_err());
        assert!(Cli::try_parse_from(["m3ugen", "--completions", "bash"]).is_ok());
    }

    #[test]
    fn test_unknown_loglevel_rejected() {
        assert!(Cli::try_parse_from(["m3ugen", "-j", "x.json", "-l", "TRACE"]).is_err());
    }
}
