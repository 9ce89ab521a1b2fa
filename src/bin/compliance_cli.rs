//! compliance-cli: submit a compliance scenario and print the verdict.
//!
//! Usage:
//!   compliance-cli "We lost patient data containing SSNs."   One-shot analysis
//!   compliance-cli                                           One scenario per stdin line
//!   compliance-cli --health                                  Probe the service

use agentic_compliance::config::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, TIMEOUT_ENV};
use agentic_compliance::report::{render_report, sanitize};
use agentic_compliance::{AnalysisClient, ClientConfig, ControllerState, InteractionController};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "compliance-cli",
    version,
    about = "Submit a compliance scenario to the analysis service and print the verdict"
)]
struct Args {
    /// Scenario text. When omitted, one scenario is read per line from stdin.
    query: Option<String>,
    /// Base URL of the analysis service.
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Request timeout in seconds.
    #[arg(long, env = TIMEOUT_ENV, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    /// Print the raw response as JSON instead of the text report.
    #[arg(long)]
    json: bool,
    /// Probe the service's health endpoint and exit.
    #[arg(long)]
    health: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Analyzed,
    Failed,
    Skipped,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = ClientConfig::new(&args.api_url)?
        .with_timeout(Duration::from_secs(args.timeout_secs.max(1)));
    let client = AnalysisClient::new(config).context("failed to build analysis client")?;

    if args.health {
        let status = client.health().await.context("health probe failed")?;
        println!(
            "{} {}",
            sanitize(&status.status),
            sanitize(status.service.as_deref().unwrap_or(""))
        );
        return Ok(if status.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let controller = InteractionController::new(client);
    match args.query {
        Some(query) => Ok(match analyze(&controller, query, args.json).await? {
            Outcome::Analyzed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
            Outcome::Skipped => ExitCode::from(2),
        }),
        None => {
            interactive(&controller, args.json).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn interactive(controller: &InteractionController<AnalysisClient>, json: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("scenario> ");
        std::io::stderr().flush().ok();
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        analyze(controller, line, json).await?;
        println!();
    }
    Ok(())
}

async fn analyze(
    controller: &InteractionController<AnalysisClient>,
    query: String,
    json: bool,
) -> Result<Outcome> {
    if controller.submit_query(query).is_none() {
        eprintln!("Nothing to analyze: the scenario is empty.");
        return Ok(Outcome::Skipped);
    }

    let mut updates = controller.subscribe();
    let snapshot = updates
        .wait_for(|s| !s.busy)
        .await
        .context("controller stopped publishing updates")?
        .clone();

    match snapshot.state {
        ControllerState::Success(resp) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                print!("{}", render_report(&resp));
            }
            Ok(Outcome::Analyzed)
        }
        ControllerState::Failed { message } => {
            eprintln!("Analysis failed: {}", sanitize(&message));
            Ok(Outcome::Failed)
        }
        ControllerState::Idle | ControllerState::Pending { .. } => Ok(Outcome::Skipped),
    }
}
