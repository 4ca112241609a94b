use clap::Parser;
use poll_demo::{scenario::{self, DemoOptions}, telemetry};
use polls::{PollConfig, PollManager, VoterPolicy};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = DemoOptions::parse();

    if let Err(e) = telemetry::init_tracing() {
        eprintln!("{e}");
    }

    let config = PollConfig::from_env()?;
    if config.voter_policy != VoterPolicy::default() {
        warn!(voter_policy = %config.voter_policy, "Non-default voter policy in effect");
    }

    info!("🗳️ Starting poll demo");
    let mut manager = PollManager::with_config(config);
    for line in scenario::run(&mut manager, options.format)? {
        println!("{line}");
    }
    Ok(())
}
