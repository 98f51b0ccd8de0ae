use clap::Parser;
use intent_bridge::application::coordinator::LaunchCoordinator;
use intent_bridge::config::BridgeConfig;
use intent_bridge::domain::outcome::Outcome;
use intent_bridge::infrastructure::in_memory::{
    InMemoryHost, InMemoryIntentFetcher, ScriptedConfirmation,
};
use intent_bridge::interfaces::json::outcome_writer::OutcomeWriter;
use intent_bridge::interfaces::json::scenario_reader::{Scenario, ScenarioReader};
use intent_bridge::logging::init_logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input scenarios, one JSON object per line
    input: PathBuf,

    /// Publishable key the launcher runs under
    #[arg(long, env = "INTENT_BRIDGE_PUBLISHABLE_KEY", default_value = "pk_test_replay")]
    publishable_key: String,

    /// Connected account id forwarded to confirmations and intent fetches
    #[arg(long, env = "INTENT_BRIDGE_STRIPE_ACCOUNT")]
    stripe_account: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

async fn replay(config: &BridgeConfig, scenario: Scenario) -> Outcome {
    let fetcher = InMemoryIntentFetcher::new();
    if let Some(script) = scenario.fetch {
        fetcher
            .insert(
                scenario.request.intent_kind(),
                scenario.request.client_secret(),
                script,
            )
            .await;
    }

    let coordinator = LaunchCoordinator::new(
        Box::new(InMemoryHost::new(scenario.host)),
        Box::new(ScriptedConfirmation::new(scenario.confirmation)),
        Box::new(fetcher),
        config.account_context(),
    );
    coordinator.launch(scenario.request).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json).into_diagnostic()?;

    let config = BridgeConfig::new(cli.publishable_key, cli.stripe_account).into_diagnostic()?;

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ScenarioReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    for scenario in reader.scenarios() {
        match scenario {
            Ok(scenario) => {
                let outcome = replay(&config, scenario).await;
                writer.write_outcome(&outcome).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading scenario: {}", e);
            }
        }
    }

    Ok(())
}
