//! CLI argument parsing and validation module
//!
//! Handles command-line interface using clap, including:
//! - Access gate actions (--code, --logout, --no-gate, --session-file)
//! - Run tuning (--seed, --fast, delay bounds, pass probability)
//! - Output format selection (human/JSON) and quiet mode
//! - Optional TOML config file

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Parsed command-line configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Print suites and cases without running
    pub list: bool,
    /// Access code to submit before acting
    pub code: Option<String>,
    /// Clear the persisted session and exit
    pub logout: bool,
    /// Skip the access gate entirely (local demo convenience)
    pub no_gate: bool,
    /// Emit the run report as JSON
    pub json: bool,
    /// Suppress per-case progress output
    pub quiet: bool,
    /// Seed for a reproducible simulation
    pub seed: Option<u64>,
    /// Zero simulated delays
    pub fast: bool,
    /// Override for the lower delay bound
    pub delay_min_ms: Option<u64>,
    /// Override for the upper delay bound
    pub delay_max_ms: Option<u64>,
    /// Override for the pass probability
    pub pass_probability: Option<f64>,
    /// Session marker file location
    pub session_file: Option<PathBuf>,
    /// Optional TOML config file
    pub config_path: Option<PathBuf>,
}

fn command() -> Command {
    Command::new("testlab")
        .version(concat!(env!("TESTLAB_VERSION"), " (", env!("GIT_HASH"), ")"))
        .about("Simulated test runner for the TestLab learning playground")
        .long_about(
            "Runs the built-in demonstration suites sequentially, giving each case \
             a simulated execution delay and a random pass/fail outcome, behind an \
             optional passcode gate.",
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List suites and cases without running them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("code")
                .short('c')
                .long("code")
                .value_name("CODE")
                .help("Access code to unlock the playground"),
        )
        .arg(
            Arg::new("logout")
                .long("logout")
                .help("Clear the persisted session and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-gate")
                .long("no-gate")
                .help("Skip the access gate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Output the run report in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress per-case progress output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed the simulation for a reproducible run")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("fast")
                .long("fast")
                .help("Run without simulated delays")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("delay-min-ms")
                .long("delay-min-ms")
                .value_name("MS")
                .help("Lower bound for the simulated per-case delay")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("delay-max-ms")
                .long("delay-max-ms")
                .value_name("MS")
                .help("Upper bound for the simulated per-case delay")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("pass-probability")
                .long("pass-probability")
                .value_name("P")
                .help("Probability in [0,1] that a case passes")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("session-file")
                .long("session-file")
                .value_name("PATH")
                .help("Where to keep the session marker")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("TOML config file with tuning values")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn config_from_matches(matches: &clap::ArgMatches) -> Result<CliConfig> {
    let config_path = matches.get_one::<PathBuf>("config").cloned();
    if let Some(path) = &config_path {
        if !path.exists() {
            return Err(anyhow!("Config file does not exist: {}", path.display()));
        }
    }

    Ok(CliConfig {
        list: matches.get_flag("list"),
        code: matches.get_one::<String>("code").cloned(),
        logout: matches.get_flag("logout"),
        no_gate: matches.get_flag("no-gate"),
        json: matches.get_flag("json"),
        quiet: matches.get_flag("quiet"),
        seed: matches.get_one::<u64>("seed").copied(),
        fast: matches.get_flag("fast"),
        delay_min_ms: matches.get_one::<u64>("delay-min-ms").copied(),
        delay_max_ms: matches.get_one::<u64>("delay-max-ms").copied(),
        pass_probability: matches.get_one::<f64>("pass-probability").copied(),
        session_file: matches.get_one::<PathBuf>("session-file").cloned(),
        config_path,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_matches(&command().get_matches())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig> {
        let matches = command()
            .try_get_matches_from(std::iter::once("testlab").chain(args.iter().copied()))
            .map_err(|e| anyhow!(e))?;
        config_from_matches(&matches)
    }

    #[test]
    fn defaults_run_with_gate_and_human_output() {
        let config = parse(&[]).unwrap();
        assert!(!config.list);
        assert!(!config.json);
        assert!(!config.no_gate);
        assert!(config.code.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn run_tuning_flags_parse() {
        let config = parse(&[
            "--seed",
            "42",
            "--fast",
            "--delay-min-ms",
            "5",
            "--delay-max-ms",
            "10",
            "--pass-probability",
            "0.5",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.fast);
        assert_eq!(config.delay_min_ms, Some(5));
        assert_eq!(config.delay_max_ms, Some(10));
        assert_eq!(config.pass_probability, Some(0.5));
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        assert!(parse(&["--seed", "abc"]).is_err());
    }

    #[test]
    fn missing_config_file_is_rejected() {
        assert!(parse(&["--config", "/nonexistent/testlab.toml"]).is_err());
    }

    #[test]
    fn gate_flags_parse() {
        let config = parse(&[
            "--code",
            "open-sesame",
            "--session-file",
            "/tmp/testlab-session",
        ])
        .unwrap();
        assert_eq!(config.code.as_deref(), Some("open-sesame"));
        assert_eq!(
            config.session_file.as_deref(),
            Some(std::path::Path::new("/tmp/testlab-session"))
        );
    }
}
