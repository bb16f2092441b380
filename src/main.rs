#![forbid(unsafe_code)]

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use testlab::auth::{AccessGate, FileSessionStore};
use testlab::cli::{self, CliConfig};
use testlab::config::FileConfig;
use testlab::constants::DEFAULT_SESSION_FILE_NAME;
use testlab::content;
use testlab::models::{SimulationSettings, TestCase, TestResult, TestStatus};
use testlab::output;
use testlab::runner::{RandomSimulation, RunObserver, SuiteRunner};

/// Exit code for a gate rejection, distinct from usage/runtime errors
const EXIT_GATE_REJECTED: i32 = 2;

/// Prints per-case progress lines while a run is in flight
struct ProgressObserver {
    total: usize,
    completed: usize,
    enabled: bool,
}

impl RunObserver for ProgressObserver {
    fn case_started(&mut self, case: &TestCase) {
        if self.enabled {
            println!("running {} ...", case.name);
        }
    }

    fn case_resolved(&mut self, case: &TestCase) {
        self.completed += 1;
        if self.enabled {
            let verdict = match case.status {
                TestStatus::Passed => "passed",
                TestStatus::Failed => "failed",
                _ => "resolved",
            };
            println!("[{}/{}] {} {}", self.completed, self.total, verdict, case.name);
        }
    }

    fn run_finished(&mut self, result: &TestResult) {
        if self.enabled {
            println!(
                "\n{} / {} cases completed\n",
                result.passed + result.failed + result.skipped,
                result.total
            );
        }
    }
}

fn default_session_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("testlab").join(DEFAULT_SESSION_FILE_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join("testlab_session"))
}

fn resolve_settings(cli: &CliConfig, file: &FileConfig) -> Result<SimulationSettings> {
    let mut settings = file.simulation_settings();
    if let Some(min) = cli.delay_min_ms {
        settings.delay_min_ms = min;
    }
    if let Some(max) = cli.delay_max_ms {
        settings.delay_max_ms = max;
    }
    if let Some(p) = cli.pass_probability {
        settings.pass_probability = p;
    }
    if cli.fast {
        settings.delay_min_ms = 0;
        settings.delay_max_ms = 0;
    }
    settings.validate().map_err(|e| anyhow!(e))?;
    Ok(settings)
}

async fn run_suites(cli: &CliConfig, settings: SimulationSettings) -> Result<()> {
    let mut runner = SuiteRunner::new(content::test_suites());
    let mut sim = match cli.seed {
        Some(seed) => RandomSimulation::seeded(seed, settings),
        None => RandomSimulation::new(settings),
    };
    let mut observer = ProgressObserver {
        total: runner.total_cases(),
        completed: 0,
        enabled: !cli.quiet && !cli.json,
    };

    let started_at = Utc::now();
    runner.run_all(&mut sim, &mut observer).await?;

    let report = runner
        .report(started_at)
        .context("run completed without producing a report")?;
    if cli.json {
        output::format_json(&report)?;
    } else {
        output::format_human(&report)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::parse_args()?;

    let file_config = match &cli.config_path {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = resolve_settings(&cli, &file_config)?;

    let session_path = cli
        .session_file
        .clone()
        .or(file_config.gate.session_file.clone())
        .unwrap_or_else(default_session_path);
    let mut gate = AccessGate::new(FileSessionStore::new(session_path));
    gate.initialize().await;

    if cli.logout {
        gate.logout();
        println!("Session cleared.");
        return Ok(());
    }

    if let Some(code) = &cli.code {
        // Empty and invalid codes get the same generic rejection
        match gate.login(code) {
            Ok(true) => {
                if !cli.quiet {
                    println!("Access granted.");
                }
            }
            Ok(false) | Err(_) => {
                eprintln!("Invalid access code.");
                std::process::exit(EXIT_GATE_REJECTED);
            }
        }
    }

    if cli.list {
        output::print_suites(&content::test_suites());
        return Ok(());
    }

    if !cli.no_gate && !gate.is_authenticated() {
        eprintln!(
            "Access code required. Run with --code <CODE> to unlock, or --no-gate for a local demo."
        );
        std::process::exit(EXIT_GATE_REJECTED);
    }

    run_suites(&cli, settings).await
}
